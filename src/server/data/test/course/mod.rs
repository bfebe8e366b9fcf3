use crate::server::{
    data::course::CourseRepository,
    model::course::{CoursePatch, CreateCourseParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod find_owned;
mod list_by_ids;
mod set_tg_group_id;
mod update;
