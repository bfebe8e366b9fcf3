//! Course and training participation repository.
//!
//! Both participation tables share the same shape, so one repository dispatches on
//! `ParticipationKind` instead of duplicating every query.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::participation::ParticipationKind;

pub struct ParticipationRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
    kind: ParticipationKind,
}

impl<'a, C: ConnectionTrait> ParticipationRepository<'a, C> {
    pub fn new(db: &'a C, kind: ParticipationKind) -> Self {
        Self { db, kind }
    }

    pub async fn exists(&self, entity_id: Uuid, student_id: Uuid) -> Result<bool, DbErr> {
        let found = match self.kind {
            ParticipationKind::Course => {
                entity::prelude::CourseParticipation::find_by_id((entity_id, student_id))
                    .one(self.db)
                    .await?
                    .is_some()
            }
            ParticipationKind::Training => {
                entity::prelude::TrainingParticipation::find_by_id((entity_id, student_id))
                    .one(self.db)
                    .await?
                    .is_some()
            }
        };

        Ok(found)
    }

    pub async fn insert(&self, entity_id: Uuid, student_id: Uuid) -> Result<(), DbErr> {
        match self.kind {
            ParticipationKind::Course => {
                entity::course_participation::ActiveModel {
                    course_id: ActiveValue::Set(entity_id),
                    student_id: ActiveValue::Set(student_id),
                }
                .insert(self.db)
                .await?;
            }
            ParticipationKind::Training => {
                entity::training_participation::ActiveModel {
                    training_id: ActiveValue::Set(entity_id),
                    student_id: ActiveValue::Set(student_id),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows, 0 when the student was not enrolled
    pub async fn delete(&self, entity_id: Uuid, student_id: Uuid) -> Result<u64, DbErr> {
        let result = match self.kind {
            ParticipationKind::Course => {
                entity::prelude::CourseParticipation::delete_by_id((entity_id, student_id))
                    .exec(self.db)
                    .await?
            }
            ParticipationKind::Training => {
                entity::prelude::TrainingParticipation::delete_by_id((entity_id, student_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }

    /// Removes every participation row of a course or training.
    pub async fn delete_by_entity(&self, entity_id: Uuid) -> Result<u64, DbErr> {
        let result = match self.kind {
            ParticipationKind::Course => {
                entity::prelude::CourseParticipation::delete_many()
                    .filter(entity::course_participation::Column::CourseId.eq(entity_id))
                    .exec(self.db)
                    .await?
            }
            ParticipationKind::Training => {
                entity::prelude::TrainingParticipation::delete_many()
                    .filter(entity::training_participation::Column::TrainingId.eq(entity_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }

    pub async fn student_ids(&self, entity_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        match self.kind {
            ParticipationKind::Course => {
                entity::prelude::CourseParticipation::find()
                    .select_only()
                    .column(entity::course_participation::Column::StudentId)
                    .filter(entity::course_participation::Column::CourseId.eq(entity_id))
                    .into_tuple()
                    .all(self.db)
                    .await
            }
            ParticipationKind::Training => {
                entity::prelude::TrainingParticipation::find()
                    .select_only()
                    .column(entity::training_participation::Column::StudentId)
                    .filter(entity::training_participation::Column::TrainingId.eq(entity_id))
                    .into_tuple()
                    .all(self.db)
                    .await
            }
        }
    }

    /// Ids of the courses or trainings the student participates in.
    pub async fn entity_ids_for_student(&self, student_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        match self.kind {
            ParticipationKind::Course => {
                entity::prelude::CourseParticipation::find()
                    .select_only()
                    .column(entity::course_participation::Column::CourseId)
                    .filter(entity::course_participation::Column::StudentId.eq(student_id))
                    .into_tuple()
                    .all(self.db)
                    .await
            }
            ParticipationKind::Training => {
                entity::prelude::TrainingParticipation::find()
                    .select_only()
                    .column(entity::training_participation::Column::TrainingId)
                    .filter(entity::training_participation::Column::StudentId.eq(student_id))
                    .into_tuple()
                    .all(self.db)
                    .await
            }
        }
    }
}
