use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::topic::TopicRepository,
    error::AppError,
    model::topic::{CreateTopicParams, Topic, TopicPatch},
    service::syllabus::{SyllabusLedger, SyllabusLocks},
};

pub struct TopicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTopicParams) -> Result<Topic, AppError> {
        Ok(TopicRepository::new(self.db).create(params).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Topic, AppError> {
        TopicRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(topic_not_found)
    }

    pub async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Topic>, AppError> {
        Ok(TopicRepository::new(self.db).list(offset, limit).await?)
    }

    pub async fn update(&self, id: Uuid, user_id: Uuid, patch: TopicPatch) -> Result<Topic, AppError> {
        let repo = TopicRepository::new(self.db);
        repo.find_owned(id, user_id)
            .await?
            .ok_or_else(topic_not_found)?;

        repo.update(id, patch).await?.ok_or_else(topic_not_found)
    }

    /// Deletes a topic owned by `user_id` and closes the gaps it leaves in every syllabus.
    pub async fn delete(
        &self,
        id: Uuid,
        user_id: Uuid,
        locks: &SyllabusLocks,
    ) -> Result<(), AppError> {
        TopicRepository::new(self.db)
            .find_owned(id, user_id)
            .await?
            .ok_or_else(topic_not_found)?;

        let removed = SyllabusLedger::new(self.db, locks).delete_topic(id).await?;

        tracing::info!("Deleted topic {} from {} syllabi", id, removed);

        Ok(())
    }
}

fn topic_not_found() -> AppError {
    AppError::NotFound("Topic not found".to_string())
}
