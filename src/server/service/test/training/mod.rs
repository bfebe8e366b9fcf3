use super::*;
use crate::server::{
    model::scheduler::{Schedule, TimeRange},
    service::training::TrainingService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;

fn range(start: &str, end: &str) -> TimeRange {
    TimeRange::parse(start, end).unwrap()
}
