//! Syllabus ledger: ordered placement of topics within a course.
//!
//! For every course the sequences of its syllabus rows are exactly `1..=N`. Every
//! mutation takes the course's async mutex from `SyllabusLocks` and runs its reads and
//! writes inside one database transaction, so concurrent requests against the same course
//! cannot interleave their shift and set steps. Placing a topic and deleting it also take
//! the topic's mutex, so a topic cannot gain a placement while its deletion compacts the
//! syllabi it leaves. Dropping the transaction on an error path rolls it back.

use std::{
    collections::{BTreeSet, HashMap},
    sync::{Arc, Mutex, PoisonError},
};

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tokio::sync::OwnedMutexGuard;
use uuid::Uuid;

use crate::server::{
    data::{syllabus::SyllabusRepository, topic::TopicRepository},
    error::AppError,
    model::syllabus::{clamp_position, SyllabusEntry, SyllabusTopic},
};

type LockMap = Arc<Mutex<HashMap<Uuid, Arc<tokio::sync::Mutex<()>>>>>;

/// Async mutexes keyed by id; an entry lives only while someone holds or waits on it.
#[derive(Clone, Default)]
struct KeyedLocks {
    inner: LockMap,
}

impl KeyedLocks {
    async fn acquire(&self, key: Uuid) -> SyllabusGuard {
        let lock = {
            let mut locks = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            locks.entry(key).or_default().clone()
        };

        SyllabusGuard {
            guard: Some(lock.lock_owned().await),
            key,
            locks: self.inner.clone(),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// Held lock on one course or topic. Dropping it releases the lock and prunes the
/// registry entry once no other task references it.
pub struct SyllabusGuard {
    guard: Option<OwnedMutexGuard<()>>,
    key: Uuid,
    locks: LockMap,
}

impl Drop for SyllabusGuard {
    fn drop(&mut self) {
        drop(self.guard.take());

        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        if locks
            .get(&self.key)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&self.key);
        }
    }
}

/// Registry of per-course and per-topic async mutexes, shared through `AppState`.
///
/// A task needing both takes the topic lock first, and several course locks are taken
/// in ascending id order.
#[derive(Clone, Default)]
pub struct SyllabusLocks {
    courses: KeyedLocks,
    topics: KeyedLocks,
}

impl SyllabusLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to the syllabus of `course_id`.
    pub async fn acquire_course(&self, course_id: Uuid) -> SyllabusGuard {
        self.courses.acquire(course_id).await
    }

    /// Waits for exclusive access to the syllabus placements of `topic_id`.
    pub async fn acquire_topic(&self, topic_id: Uuid) -> SyllabusGuard {
        self.topics.acquire(topic_id).await
    }

    /// Number of live registry entries.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.courses.len() + self.topics.len()
    }
}

pub struct SyllabusLedger<'a> {
    db: &'a DatabaseConnection,
    locks: &'a SyllabusLocks,
}

impl<'a> SyllabusLedger<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a SyllabusLocks) -> Self {
        Self { db, locks }
    }

    /// Appends a topic at the end of the course syllabus.
    ///
    /// # Returns
    /// - `Ok(SyllabusEntry)` - The new entry at sequence `count + 1`
    /// - `Err(AppError::NotFound)` - The topic does not exist
    /// - `Err(AppError::Conflict)` - The topic is already in the syllabus
    pub async fn append(&self, course_id: Uuid, topic_id: Uuid) -> Result<SyllabusEntry, AppError> {
        let _topic = self.locks.acquire_topic(topic_id).await;
        let _course = self.locks.acquire_course(course_id).await;
        let txn = self.db.begin().await?;

        if TopicRepository::new(&txn).find_by_id(topic_id).await?.is_none() {
            return Err(AppError::NotFound("Topic not found".to_string()));
        }

        let repo = SyllabusRepository::new(&txn);
        if repo.find(course_id, topic_id).await?.is_some() {
            return Err(AppError::Conflict(
                "Topic is already part of the course syllabus".to_string(),
            ));
        }

        let count = repo.count(course_id).await?;
        let sequence = i32::try_from(count + 1).map_err(|_| {
            AppError::BadRequest("Course syllabus cannot hold more topics".to_string())
        })?;

        let entry = repo.insert(course_id, topic_id, sequence).await?;
        txn.commit().await?;

        tracing::debug!(
            "Appended topic {} to course {} at position {}",
            topic_id,
            course_id,
            sequence
        );

        Ok(entry)
    }

    /// Moves a topic to `position`, clamped to `[1, count]`.
    ///
    /// Moving to the current position writes nothing.
    ///
    /// # Returns
    /// - `Ok(SyllabusEntry)` - The entry at its new position
    /// - `Err(AppError::NotFound)` - The topic is not in the syllabus
    pub async fn move_to(
        &self,
        course_id: Uuid,
        topic_id: Uuid,
        position: i64,
    ) -> Result<SyllabusEntry, AppError> {
        let _guard = self.locks.acquire_course(course_id).await;
        let txn = self.db.begin().await?;
        let repo = SyllabusRepository::new(&txn);

        let entry = repo
            .find(course_id, topic_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Topic is not part of the course syllabus".to_string()))?;
        let count = repo.count(course_id).await?;
        let target = clamp_position(position, count);

        if target == entry.sequence {
            return Ok(entry);
        }

        reposition(&repo, &entry, target).await?;
        txn.commit().await?;

        Ok(SyllabusEntry {
            sequence: target,
            ..entry
        })
    }

    /// Removes a topic from the syllabus, closing the gap it leaves.
    ///
    /// The entry is first moved to the last position and then deleted, so the remaining
    /// sequences stay `1..=N-1`.
    ///
    /// # Returns
    /// - `Ok(())` - Entry removed
    /// - `Err(AppError::NotFound)` - The topic is not in the syllabus
    pub async fn remove(&self, course_id: Uuid, topic_id: Uuid) -> Result<(), AppError> {
        let _guard = self.locks.acquire_course(course_id).await;
        let txn = self.db.begin().await?;
        let repo = SyllabusRepository::new(&txn);

        let entry = repo
            .find(course_id, topic_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Topic is not part of the course syllabus".to_string()))?;
        detach(&repo, &entry).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Deletes a topic, first removing it from every syllabus that contains it.
    ///
    /// The topic lock keeps new placements out while the affected courses are locked,
    /// and the compaction of every syllabus and the topic row deletion commit together.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of syllabi the topic was removed from
    /// - `Err(AppError::NotFound)` - The topic does not exist
    pub async fn delete_topic(&self, topic_id: Uuid) -> Result<usize, AppError> {
        let _topic = self.locks.acquire_topic(topic_id).await;

        let course_ids: BTreeSet<Uuid> = SyllabusRepository::new(self.db)
            .course_ids_for_topic(topic_id)
            .await?
            .into_iter()
            .collect();

        let mut course_guards = Vec::with_capacity(course_ids.len());
        for course_id in &course_ids {
            course_guards.push(self.locks.acquire_course(*course_id).await);
        }

        let txn = self.db.begin().await?;
        let repo = SyllabusRepository::new(&txn);

        let mut removed = 0;
        for course_id in course_ids {
            // Removed or its course deleted before the lock was taken.
            let Some(entry) = repo.find(course_id, topic_id).await? else {
                continue;
            };
            detach(&repo, &entry).await?;
            removed += 1;
        }

        if TopicRepository::new(&txn).delete(topic_id).await? == 0 {
            return Err(AppError::NotFound("Topic not found".to_string()));
        }
        txn.commit().await?;

        Ok(removed)
    }

    pub async fn count(&self, course_id: Uuid) -> Result<u64, AppError> {
        Ok(SyllabusRepository::new(self.db).count(course_id).await?)
    }

    pub async fn list(&self, course_id: Uuid) -> Result<Vec<SyllabusTopic>, AppError> {
        Ok(SyllabusRepository::new(self.db)
            .list_topics(course_id)
            .await?)
    }
}

/// Shifts the entries between the current and target positions and sets the target.
///
/// Forward moves decrement `(current, target]`; backward moves increment `[target, current)`.
async fn reposition<C: ConnectionTrait>(
    repo: &SyllabusRepository<'_, C>,
    entry: &SyllabusEntry,
    target: i32,
) -> Result<(), AppError> {
    let current = entry.sequence;

    if target > current {
        repo.shift(entry.course_id, current + 1, target, -1).await?;
    } else {
        repo.shift(entry.course_id, target, current - 1, 1).await?;
    }
    repo.set_sequence(entry.course_id, entry.topic_id, target)
        .await?;

    Ok(())
}

/// Moves an entry to the last position and deletes it, keeping the rest `1..=N-1`.
async fn detach<C: ConnectionTrait>(
    repo: &SyllabusRepository<'_, C>,
    entry: &SyllabusEntry,
) -> Result<(), AppError> {
    let count = repo.count(entry.course_id).await?;
    let last = clamp_position(i64::MAX, count);

    if entry.sequence != last {
        reposition(repo, entry, last).await?;
    }
    repo.delete(entry.course_id, entry.topic_id).await?;

    Ok(())
}
