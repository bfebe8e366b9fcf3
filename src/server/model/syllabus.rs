//! Syllabus entries: the ordered placement of topics within a course.

use uuid::Uuid;

use crate::{
    model::syllabus::{SyllabusEntryDto, SyllabusTopicDto},
    server::model::topic::Topic,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllabusEntry {
    pub course_id: Uuid,
    pub topic_id: Uuid,
    /// 1-based position; the positions of one course are always exactly `1..=N`.
    pub sequence: i32,
}

impl SyllabusEntry {
    pub fn from_entity(entity: entity::syllabus::Model) -> Self {
        Self {
            course_id: entity.course_id,
            topic_id: entity.topic_id,
            sequence: entity.sequence,
        }
    }

    pub fn into_dto(self) -> SyllabusEntryDto {
        SyllabusEntryDto {
            course_id: self.course_id,
            topic_id: self.topic_id,
            sequence: self.sequence,
        }
    }
}

/// A topic together with its position in one course.
#[derive(Debug, Clone, PartialEq)]
pub struct SyllabusTopic {
    pub sequence: i32,
    pub topic: Topic,
}

impl SyllabusTopic {
    pub fn into_dto(self) -> SyllabusTopicDto {
        SyllabusTopicDto {
            sequence: self.sequence,
            topic_id: self.topic.id,
            title: self.topic.title,
            content: self.topic.content,
            creator_id: self.topic.creator_id,
        }
    }
}

/// Clamps a requested 1-based position into `[1, count]`.
///
/// An empty syllabus clamps to 1 so the result is always a valid sequence value.
pub fn clamp_position(requested: i64, count: u64) -> i32 {
    let upper = i64::try_from(count.max(1)).unwrap_or(i64::MAX).min(i64::from(i32::MAX));
    requested.clamp(1, upper) as i32
}
