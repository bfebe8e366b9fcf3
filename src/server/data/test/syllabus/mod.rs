use crate::server::data::syllabus::SyllabusRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod course_ids_for_topic;
mod list_topics;
mod shift;
