use crate::server::{
    data::participation::ParticipationRepository, model::participation::ParticipationKind,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod entity_ids_for_student;
mod insert;
