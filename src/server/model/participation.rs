//! Enrollment of students in courses and trainings.

use std::fmt;

use uuid::Uuid;

/// What a participation row points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipationKind {
    Course,
    Training,
}

impl fmt::Display for ParticipationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Course => f.write_str("course"),
            Self::Training => f.write_str("training"),
        }
    }
}

/// The course or training a student joins, with its creator for the self-join check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipationTarget {
    pub kind: ParticipationKind,
    pub id: Uuid,
    pub creator_id: Uuid,
}

impl ParticipationTarget {
    pub fn course(course: &crate::server::model::course::Course) -> Self {
        Self {
            kind: ParticipationKind::Course,
            id: course.id,
            creator_id: course.creator_id,
        }
    }

    pub fn training(training: &crate::server::model::training::Training) -> Self {
        Self {
            kind: ParticipationKind::Training,
            id: training.id,
            creator_id: training.creator_id,
        }
    }
}
