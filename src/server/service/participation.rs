//! Participation registry: enrollment rules shared by courses and trainings.

use sea_orm::{DatabaseConnection, SqlErr};
use uuid::Uuid;

use crate::server::{
    data::participation::ParticipationRepository,
    error::AppError,
    model::participation::{ParticipationKind, ParticipationTarget},
};

pub struct ParticipationRegistry<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipationRegistry<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a student.
    ///
    /// # Returns
    /// - `Ok(())` - Student enrolled
    /// - `Err(AppError::Conflict)` - Student is the creator, or already enrolled
    pub async fn join(&self, target: ParticipationTarget, student_id: Uuid) -> Result<(), AppError> {
        if target.creator_id == student_id {
            return Err(AppError::Conflict(format!(
                "You cannot join your own {}",
                target.kind
            )));
        }

        let repo = ParticipationRepository::new(self.db, target.kind);
        if repo.exists(target.id, student_id).await? {
            return Err(already_joined(target.kind));
        }

        match repo.insert(target.id, student_id).await {
            Ok(()) => Ok(()),
            // A concurrent join won the race for the primary key.
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(already_joined(target.kind))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes an enrollment.
    ///
    /// # Returns
    /// - `Ok(())` - Enrollment removed
    /// - `Err(AppError::NotFound)` - Student was not enrolled
    pub async fn leave(
        &self,
        kind: ParticipationKind,
        entity_id: Uuid,
        student_id: Uuid,
    ) -> Result<(), AppError> {
        let deleted = ParticipationRepository::new(self.db, kind)
            .delete(entity_id, student_id)
            .await?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!("You have not joined this {}", kind)));
        }

        Ok(())
    }

    /// Student ids of a course or training. Callers check ownership first.
    pub async fn list_students(
        &self,
        kind: ParticipationKind,
        entity_id: Uuid,
    ) -> Result<Vec<Uuid>, AppError> {
        Ok(ParticipationRepository::new(self.db, kind)
            .student_ids(entity_id)
            .await?)
    }

    /// Ids of the courses or trainings the student joined.
    pub async fn list_joined(
        &self,
        kind: ParticipationKind,
        student_id: Uuid,
    ) -> Result<Vec<Uuid>, AppError> {
        Ok(ParticipationRepository::new(self.db, kind)
            .entity_ids_for_student(student_id)
            .await?)
    }
}

fn already_joined(kind: ParticipationKind) -> AppError {
    AppError::Conflict(format!("You have already joined this {}", kind))
}
