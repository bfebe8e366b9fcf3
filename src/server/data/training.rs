//! Training repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::training::{CreateTrainingParams, Training, TrainingPatch};

pub struct TrainingRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTrainingParams) -> Result<Training, DbErr> {
        let now = Utc::now();
        let entity = entity::training::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            description: ActiveValue::Set(params.description),
            creator_id: ActiveValue::Set(params.creator_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Training::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Training>, DbErr> {
        let entity = entity::prelude::Training::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Training::from_entity))
    }

    pub async fn find_owned(&self, id: Uuid, creator_id: Uuid) -> Result<Option<Training>, DbErr> {
        let entity = entity::prelude::Training::find_by_id(id)
            .filter(entity::training::Column::CreatorId.eq(creator_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Training::from_entity))
    }

    /// Gets one page of trainings, `page` starting at 0.
    pub async fn list_paginated(&self, page: u64, page_size: u64) -> Result<Vec<Training>, DbErr> {
        let entities = entity::prelude::Training::find()
            .order_by_asc(entity::training::Column::CreatedAt)
            .order_by_asc(entity::training::Column::Id)
            .offset(page.saturating_mul(page_size))
            .limit(page_size)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Training::from_entity).collect())
    }

    pub async fn list_by_creator(&self, creator_id: Uuid) -> Result<Vec<Training>, DbErr> {
        let entities = entity::prelude::Training::find()
            .filter(entity::training::Column::CreatorId.eq(creator_id))
            .order_by_asc(entity::training::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Training::from_entity).collect())
    }

    pub async fn list_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<Training>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Training::find()
            .filter(entity::training::Column::Id.is_in(ids))
            .order_by_asc(entity::training::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Training::from_entity).collect())
    }

    pub async fn update(&self, id: Uuid, patch: TrainingPatch) -> Result<Option<Training>, DbErr> {
        let Some(entity) = entity::prelude::Training::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(Training::from_entity(entity)));
        }

        let mut active: entity::training::ActiveModel = entity.into();
        patch.apply(&mut active);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Training::from_entity(updated)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Training::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
