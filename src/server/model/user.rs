//! User projection and identity models.
//!
//! The identity service owns user records; this service keeps a local projection so
//! that course, topic and training rows can reference their creators.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::user::UserDto;

/// Identity record cached by the identity service under `access_token:{token}` or
/// `tg_token:{telegram_user_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Locally projected user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

impl From<UserIdentity> for User {
    fn from(identity: UserIdentity) -> Self {
        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
        }
    }
}
