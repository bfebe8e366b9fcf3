use crate::{
    model::scheduler::{SchedulerDto, TimeRangeDto},
    server::{data::scheduler::SchedulerRepository, model::scheduler::Schedule},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod replace;

fn window(start: &str, end: &str) -> Option<TimeRangeDto> {
    Some(TimeRangeDto {
        start_time: start.to_string(),
        end_time: end.to_string(),
    })
}
