//! Training scheduler repository. A training has at most one scheduler row.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::scheduler::Schedule;

pub struct SchedulerRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SchedulerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_training(&self, training_id: Uuid) -> Result<Option<Schedule>, DbErr> {
        let entity = entity::prelude::Scheduler::find()
            .filter(entity::scheduler::Column::TrainingId.eq(training_id))
            .one(self.db)
            .await?;

        entity.map(Schedule::from_entity).transpose()
    }

    /// Replaces the scheduler of a training with `schedule`.
    ///
    /// Run inside a transaction so a failed insert does not leave the training unscheduled.
    pub async fn replace(&self, training_id: Uuid, schedule: Schedule) -> Result<Schedule, DbErr> {
        self.delete_by_training(training_id).await?;

        let entity = schedule.into_active_model(training_id).insert(self.db).await?;

        Schedule::from_entity(entity)
    }

    pub async fn delete_by_training(&self, training_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Scheduler::delete_many()
            .filter(entity::scheduler::Column::TrainingId.eq(training_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
