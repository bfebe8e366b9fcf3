use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        participation::ParticipationRepository, scheduler::SchedulerRepository,
        training::TrainingRepository,
    },
    error::AppError,
    model::{
        participation::{ParticipationKind, ParticipationTarget},
        scheduler::Schedule,
        training::{CreateTrainingParams, Training, TrainingPatch, TrainingWithSchedule},
    },
    service::{participation::ParticipationRegistry, user::UserService},
};

pub struct TrainingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTrainingParams) -> Result<Training, AppError> {
        UserService::new(self.db).get(params.creator_id).await?;

        let training = TrainingRepository::new(self.db).create(params).await?;

        tracing::info!("Created training {} ({})", training.id, training.name);

        Ok(training)
    }

    pub async fn get(&self, id: Uuid) -> Result<Training, AppError> {
        TrainingRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(training_not_found)
    }

    pub async fn get_owned(&self, id: Uuid, user_id: Uuid) -> Result<Training, AppError> {
        TrainingRepository::new(self.db)
            .find_owned(id, user_id)
            .await?
            .ok_or_else(training_not_found)
    }

    /// Gets a training together with its schedule.
    pub async fn get_with_schedule(&self, id: Uuid) -> Result<TrainingWithSchedule, AppError> {
        let training = self.get(id).await?;
        let schedule = SchedulerRepository::new(self.db)
            .find_by_training(id)
            .await?;

        Ok(TrainingWithSchedule { training, schedule })
    }

    pub async fn list(&self, page: u64, page_size: u64) -> Result<Vec<Training>, AppError> {
        Ok(TrainingRepository::new(self.db)
            .list_paginated(page, page_size)
            .await?)
    }

    pub async fn list_by_creator(&self, creator_id: Uuid) -> Result<Vec<Training>, AppError> {
        Ok(TrainingRepository::new(self.db)
            .list_by_creator(creator_id)
            .await?)
    }

    pub async fn list_joined(&self, student_id: Uuid) -> Result<Vec<Training>, AppError> {
        let ids = ParticipationRegistry::new(self.db)
            .list_joined(ParticipationKind::Training, student_id)
            .await?;

        Ok(TrainingRepository::new(self.db).list_by_ids(ids).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        patch: TrainingPatch,
    ) -> Result<Training, AppError> {
        self.get_owned(id, user_id).await?;

        TrainingRepository::new(self.db)
            .update(id, patch)
            .await?
            .ok_or_else(training_not_found)
    }

    /// Deletes a training with its scheduler and participation rows.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.get_owned(id, user_id).await?;

        let txn = self.db.begin().await?;
        SchedulerRepository::new(&txn).delete_by_training(id).await?;
        ParticipationRepository::new(&txn, ParticipationKind::Training)
            .delete_by_entity(id)
            .await?;
        TrainingRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        tracing::info!("Deleted training {}", id);

        Ok(())
    }

    /// Replaces the weekly schedule of a training owned by `user_id`.
    pub async fn schedule(
        &self,
        id: Uuid,
        user_id: Uuid,
        schedule: Schedule,
    ) -> Result<TrainingWithSchedule, AppError> {
        let training = self.get_owned(id, user_id).await?;

        let txn = self.db.begin().await?;
        let schedule = SchedulerRepository::new(&txn).replace(id, schedule).await?;
        txn.commit().await?;

        Ok(TrainingWithSchedule {
            training,
            schedule: Some(schedule),
        })
    }

    pub async fn join(&self, id: Uuid, student_id: Uuid) -> Result<(), AppError> {
        let training = self.get(id).await?;

        ParticipationRegistry::new(self.db)
            .join(ParticipationTarget::training(&training), student_id)
            .await
    }

    pub async fn leave(&self, id: Uuid, student_id: Uuid) -> Result<(), AppError> {
        self.get(id).await?;

        ParticipationRegistry::new(self.db)
            .leave(ParticipationKind::Training, id, student_id)
            .await
    }

    pub async fn students(&self, id: Uuid, user_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        self.get_owned(id, user_id).await?;

        ParticipationRegistry::new(self.db)
            .list_students(ParticipationKind::Training, id)
            .await
    }
}

fn training_not_found() -> AppError {
    AppError::NotFound("Training not found".to_string())
}
