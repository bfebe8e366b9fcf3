//! Training factory for creating test training entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test trainings with customizable fields.
pub struct TrainingFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: Uuid,
    name: String,
    price: i64,
    description: String,
}

impl<'a> TrainingFactory<'a> {
    /// Creates a new TrainingFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Training {n}"`
    /// - price: `50`
    /// - description: `"Description of training {n}"`
    pub fn new(db: &'a DatabaseConnection, creator_id: Uuid) -> Self {
        let n = next_id();
        Self {
            db,
            creator_id,
            name: format!("Training {}", n),
            price: 50,
            description: format!("Description of training {}", n),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the training entity into the database.
    pub async fn build(self) -> Result<entity::training::Model, DbErr> {
        let now = Utc::now();
        entity::training::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            creator_id: ActiveValue::Set(self.creator_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a training with default values owned by `creator_id`.
pub async fn create_training(
    db: &DatabaseConnection,
    creator_id: Uuid,
) -> Result<entity::training::Model, DbErr> {
    TrainingFactory::new(db, creator_id).build().await
}
