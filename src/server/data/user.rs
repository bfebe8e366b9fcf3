//! User projection repository.
//!
//! Rows mirror identities validated by the identity service; every authenticated request
//! refreshes the caller's name and email.

use migration::OnConflict;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};
use uuid::Uuid;

use crate::server::model::user::{User, UserIdentity};

pub struct UserRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the identity or refreshes name and email of an existing row.
    ///
    /// # Returns
    /// - `Ok(User)` - The projected user after the write
    /// - `Err(DbErr)` - Database error during insert
    pub async fn upsert(&self, identity: UserIdentity) -> Result<User, DbErr> {
        use sea_orm::ActiveValue::Set;

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            id: Set(identity.id),
            name: Set(identity.name),
            email: Set(identity.email),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Id)
                .update_columns([entity::user::Column::Name, entity::user::Column::Email])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Lists users ordered by name.
    pub async fn list(&self, offset: u64, limit: u64) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
