//! Course domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue;
use uuid::Uuid;

use crate::model::course::{CourseDto, CourseListItemDto, CreateCourseDto, UpdateCourseDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub creator_id: Uuid,
    pub tg_group_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}

impl Course {
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            description: entity.description,
            creator_id: entity.creator_id,
            tg_group_id: entity.tg_group_id,
            created_at: entity.created_at,
            last_updated_at: entity.last_updated_at,
        }
    }

    /// Free courses get a discussion thread in the free-students group.
    pub fn is_free(&self) -> bool {
        self.price == 0
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            name: self.name,
            price: self.price,
            description: self.description,
            creator_id: self.creator_id,
            tg_group_id: self.tg_group_id,
            created_at: self.created_at,
            last_updated_at: self.last_updated_at,
        }
    }

    pub fn into_list_item_dto(self) -> CourseListItemDto {
        CourseListItemDto {
            id: self.id,
            name: self.name,
            price: self.price,
            description: self.description,
            creator_id: self.creator_id,
        }
    }
}

/// Parameters for creating a course.
#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub creator_id: Uuid,
}

impl CreateCourseParams {
    pub fn from_dto(dto: CreateCourseDto, creator_id: Uuid) -> Self {
        Self {
            name: dto.name,
            price: i64::from(dto.price),
            description: dto.description,
            creator_id,
        }
    }
}

/// Partial update of a course. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub description: Option<String>,
    pub tg_group_id: Option<String>,
}

impl CoursePatch {
    pub fn from_dto(dto: UpdateCourseDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price.map(i64::from),
            description: dto.description,
            tg_group_id: dto.tg_group_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.tg_group_id.is_none()
    }

    /// Merges present fields into the active model, leaving the rest untouched.
    pub fn apply(self, active: &mut entity::course::ActiveModel) {
        if let Some(name) = self.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(price) = self.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(description) = self.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(tg_group_id) = self.tg_group_id {
            active.tg_group_id = ActiveValue::Set(Some(tg_group_id));
        }
    }
}
