use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        course::CourseRepository, participation::ParticipationRepository,
        syllabus::SyllabusRepository,
    },
    error::AppError,
    model::{
        course::{Course, CoursePatch, CreateCourseParams},
        participation::{ParticipationKind, ParticipationTarget},
    },
    service::{participation::ParticipationRegistry, syllabus::SyllabusLocks, user::UserService},
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, AppError> {
        UserService::new(self.db).get(params.creator_id).await?;

        let course = CourseRepository::new(self.db).create(params).await?;

        tracing::info!("Created course {} ({})", course.id, course.name);

        Ok(course)
    }

    pub async fn get(&self, id: Uuid) -> Result<Course, AppError> {
        CourseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(course_not_found)
    }

    /// Gets a course owned by `user_id`; courses of other users are reported as missing.
    pub async fn get_owned(&self, id: Uuid, user_id: Uuid) -> Result<Course, AppError> {
        CourseRepository::new(self.db)
            .find_owned(id, user_id)
            .await?
            .ok_or_else(course_not_found)
    }

    pub async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db).list(offset, limit).await?)
    }

    pub async fn list_by_creator(&self, creator_id: Uuid) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db)
            .list_by_creator(creator_id)
            .await?)
    }

    pub async fn list_joined(&self, student_id: Uuid) -> Result<Vec<Course>, AppError> {
        let ids = ParticipationRegistry::new(self.db)
            .list_joined(ParticipationKind::Course, student_id)
            .await?;

        Ok(CourseRepository::new(self.db).list_by_ids(ids).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        patch: CoursePatch,
    ) -> Result<Course, AppError> {
        self.get_owned(id, user_id).await?;

        CourseRepository::new(self.db)
            .update(id, patch)
            .await?
            .ok_or_else(course_not_found)
    }

    /// Deletes a course with its syllabus and participation rows.
    pub async fn delete(
        &self,
        id: Uuid,
        user_id: Uuid,
        locks: &SyllabusLocks,
    ) -> Result<(), AppError> {
        self.get_owned(id, user_id).await?;

        let _guard = locks.acquire_course(id).await;
        let txn = self.db.begin().await?;

        SyllabusRepository::new(&txn).delete_by_course(id).await?;
        ParticipationRepository::new(&txn, ParticipationKind::Course)
            .delete_by_entity(id)
            .await?;
        CourseRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted course {}", id);

        Ok(())
    }

    pub async fn join(&self, id: Uuid, student_id: Uuid) -> Result<(), AppError> {
        let course = self.get(id).await?;

        ParticipationRegistry::new(self.db)
            .join(ParticipationTarget::course(&course), student_id)
            .await
    }

    pub async fn leave(&self, id: Uuid, student_id: Uuid) -> Result<(), AppError> {
        self.get(id).await?;

        ParticipationRegistry::new(self.db)
            .leave(ParticipationKind::Course, id, student_id)
            .await
    }

    /// Student ids of a course, visible to its creator only.
    pub async fn students(&self, id: Uuid, user_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        self.get_owned(id, user_id).await?;

        ParticipationRegistry::new(self.db)
            .list_students(ParticipationKind::Course, id)
            .await
    }
}

fn course_not_found() -> AppError {
    AppError::NotFound("Course not found".to_string())
}
