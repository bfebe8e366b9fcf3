//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test courses with customizable fields.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: Uuid,
    name: String,
    price: i64,
    description: String,
    tg_group_id: Option<String>,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Course {n}"`
    /// - price: `100`
    /// - description: `"Description of course {n}"`
    /// - tg_group_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `creator_id` - Id of an existing user owning the course
    pub fn new(db: &'a DatabaseConnection, creator_id: Uuid) -> Self {
        let n = next_id();
        Self {
            db,
            creator_id,
            name: format!("Course {}", n),
            price: 100,
            description: format!("Description of course {}", n),
            tg_group_id: None,
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

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn tg_group_id(mut self, tg_group_id: Option<String>) -> Self {
        self.tg_group_id = tg_group_id;
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown creator)
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        let now = Utc::now();
        entity::course::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            creator_id: ActiveValue::Set(self.creator_id),
            tg_group_id: ActiveValue::Set(self.tg_group_id),
            created_at: ActiveValue::Set(now),
            last_updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values owned by `creator_id`.
pub async fn create_course(
    db: &DatabaseConnection,
    creator_id: Uuid,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, creator_id).build().await
}
