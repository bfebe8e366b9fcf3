//! Topic domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue;
use uuid::Uuid;

use crate::model::topic::{CreateTopicDto, TopicDto, UpdateTopicDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}

impl Topic {
    pub fn from_entity(entity: entity::topic::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            creator_id: entity.creator_id,
            created_at: entity.created_at,
            last_updated_at: entity.last_updated_at,
        }
    }

    pub fn into_dto(self) -> TopicDto {
        TopicDto {
            id: self.id,
            title: self.title,
            content: self.content,
            creator_id: self.creator_id,
            created_at: self.created_at,
            last_updated_at: self.last_updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTopicParams {
    pub title: String,
    pub content: String,
    pub creator_id: Uuid,
}

impl CreateTopicParams {
    pub fn from_dto(dto: CreateTopicDto, creator_id: Uuid) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
            creator_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl TopicPatch {
    pub fn from_dto(dto: UpdateTopicDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub fn apply(self, active: &mut entity::topic::ActiveModel) {
        if let Some(title) = self.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(content) = self.content {
            active.content = ActiveValue::Set(content);
        }
    }
}
