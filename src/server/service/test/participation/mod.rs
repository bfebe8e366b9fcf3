use super::*;
use crate::server::service::{course::CourseService, training::TrainingService};
use test_utils::{builder::TestBuilder, factory};

mod join;
