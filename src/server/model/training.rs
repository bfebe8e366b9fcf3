//! Training domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue;
use uuid::Uuid;

use crate::{
    model::training::{CreateTrainingDto, TrainingDto, TrainingListItemDto, UpdateTrainingDto},
    server::model::scheduler::Schedule,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Training {
    pub fn from_entity(entity: entity::training::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            description: entity.description,
            creator_id: entity.creator_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_list_item_dto(self) -> TrainingListItemDto {
        TrainingListItemDto {
            id: self.id,
            name: self.name,
            price: self.price,
            description: self.description,
            creator_id: self.creator_id,
        }
    }
}

/// A training with its optional weekly schedule, as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingWithSchedule {
    pub training: Training,
    pub schedule: Option<Schedule>,
}

impl TrainingWithSchedule {
    pub fn into_dto(self) -> TrainingDto {
        let training = self.training;
        TrainingDto {
            id: training.id,
            name: training.name,
            price: training.price,
            description: training.description,
            creator_id: training.creator_id,
            scheduler: self.schedule.map(Schedule::into_dto),
            created_at: training.created_at,
            updated_at: training.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTrainingParams {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub creator_id: Uuid,
}

impl CreateTrainingParams {
    pub fn from_dto(dto: CreateTrainingDto, creator_id: Uuid) -> Self {
        Self {
            name: dto.name,
            price: i64::from(dto.price),
            description: dto.description,
            creator_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingPatch {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub description: Option<String>,
}

impl TrainingPatch {
    pub fn from_dto(dto: UpdateTrainingDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price.map(i64::from),
            description: dto.description,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.description.is_none()
    }

    pub fn apply(self, active: &mut entity::training::ActiveModel) {
        if let Some(name) = self.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(price) = self.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(description) = self.description {
            active.description = ActiveValue::Set(description);
        }
    }
}
