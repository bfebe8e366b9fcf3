use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTopicDto {
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTopicDto {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TopicDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}
