use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{User, UserIdentity},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Refreshes the local projection of a validated identity.
    pub async fn sync(&self, identity: UserIdentity) -> Result<User, AppError> {
        Ok(UserRepository::new(self.db).upsert(identity).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn list(&self, offset: u64, limit: u64) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).list(offset, limit).await?)
    }
}
