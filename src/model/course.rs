use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCourseDto {
    pub name: String,
    pub price: u32,
    pub description: String,
}

/// Partial course update; absent fields keep their stored value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCourseDto {
    pub name: Option<String>,
    pub price: Option<u32>,
    pub description: Option<String>,
    pub tg_group_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CourseListItemDto {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub creator_id: Uuid,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CourseDto {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub creator_id: Uuid,
    pub tg_group_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}
