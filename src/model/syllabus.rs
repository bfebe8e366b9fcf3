use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One row of a course syllabus as returned by `GET /api/courses/{id}/topics`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SyllabusTopicDto {
    pub sequence: i32,
    pub topic_id: Uuid,
    pub title: String,
    pub content: String,
    pub creator_id: Uuid,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SyllabusEntryDto {
    pub course_id: Uuid,
    pub topic_id: Uuid,
    pub sequence: i32,
}

/// Requested 1-based position; out-of-range values are clamped to the syllabus bounds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct MoveTopicDto {
    pub position: i64,
}
