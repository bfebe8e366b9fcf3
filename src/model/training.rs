use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::scheduler::SchedulerDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTrainingDto {
    pub name: String,
    pub price: u32,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTrainingDto {
    pub name: Option<String>,
    pub price: Option<u32>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TrainingListItemDto {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub creator_id: Uuid,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TrainingDto {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub creator_id: Uuid,
    pub scheduler: Option<SchedulerDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
