//! Course repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::course::{Course, CoursePatch, CreateCourseParams};

pub struct CourseRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, DbErr> {
        let now = Utc::now();
        let entity = entity::course::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            description: ActiveValue::Set(params.description),
            creator_id: ActiveValue::Set(params.creator_id),
            tg_group_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            last_updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Finds a course only when it is owned by `creator_id`.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Course exists and belongs to the creator
    /// - `Ok(None)` - Course does not exist or belongs to someone else
    pub async fn find_owned(&self, id: Uuid, creator_id: Uuid) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id)
            .filter(entity::course::Column::CreatorId.eq(creator_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Lists courses oldest first.
    pub async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Course>, DbErr> {
        let entities = entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::CreatedAt)
            .order_by_asc(entity::course::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    pub async fn list_by_creator(&self, creator_id: Uuid) -> Result<Vec<Course>, DbErr> {
        let entities = entity::prelude::Course::find()
            .filter(entity::course::Column::CreatorId.eq(creator_id))
            .order_by_asc(entity::course::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    pub async fn list_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<Course>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(ids))
            .order_by_asc(entity::course::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    /// Applies a patch to an existing course.
    ///
    /// An empty patch returns the course unchanged without touching `last_updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Updated course
    /// - `Ok(None)` - No course with that id
    pub async fn update(&self, id: Uuid, patch: CoursePatch) -> Result<Option<Course>, DbErr> {
        let Some(entity) = entity::prelude::Course::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(Course::from_entity(entity)));
        }

        let mut active: entity::course::ActiveModel = entity.into();
        patch.apply(&mut active);
        active.last_updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Course::from_entity(updated)))
    }

    /// Stores the discussion thread id of a course.
    pub async fn set_tg_group_id(&self, id: Uuid, tg_group_id: String) -> Result<(), DbErr> {
        entity::prelude::Course::update_many()
            .col_expr(
                entity::course::Column::TgGroupId,
                sea_orm::sea_query::Expr::value(tg_group_id),
            )
            .filter(entity::course::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
