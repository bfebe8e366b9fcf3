use crate::server::{data::user::UserRepository, model::user::UserIdentity};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod list;
