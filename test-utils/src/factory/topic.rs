//! Topic factory for creating test topic entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test topics with customizable fields.
pub struct TopicFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: Uuid,
    title: String,
    content: String,
}

impl<'a> TopicFactory<'a> {
    /// Creates a new TopicFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Topic {n}"`
    /// - content: `"Content of topic {n}"`
    pub fn new(db: &'a DatabaseConnection, creator_id: Uuid) -> Self {
        let n = next_id();
        Self {
            db,
            creator_id,
            title: format!("Topic {}", n),
            content: format!("Content of topic {}", n),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the topic entity into the database.
    pub async fn build(self) -> Result<entity::topic::Model, DbErr> {
        let now = Utc::now();
        entity::topic::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            creator_id: ActiveValue::Set(self.creator_id),
            created_at: ActiveValue::Set(now),
            last_updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a topic with default values owned by `creator_id`.
pub async fn create_topic(
    db: &DatabaseConnection,
    creator_id: Uuid,
) -> Result<entity::topic::Model, DbErr> {
    TopicFactory::new(db, creator_id).build().await
}
