//! Weekly training schedules.
//!
//! A schedule holds at most one time window per weekday. Windows are validated when
//! they enter the system and stored as `{"start_time":"HH:MM","end_time":"HH:MM"}`
//! JSON objects, one column per weekday.

use chrono::{NaiveTime, Timelike};
use sea_orm::{prelude::Json, DbErr};
use uuid::Uuid;

use crate::{
    model::scheduler::{SchedulerDto, TimeRangeDto},
    server::error::AppError,
};

const STORED_FORMAT: &str = "%H:%M";
const MINUTE_STEP: u32 = 5;

/// Validated daily time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// Parses and validates a window.
    ///
    /// Both ends must be `HH:MM` or `HH:MM:SS` on a 5-minute boundary, and the start must
    /// be strictly earlier than the end. Seconds are dropped.
    pub fn parse(start: &str, end: &str) -> Result<Self, String> {
        let start = parse_time(start)?;
        let end = parse_time(end)?;

        if start >= end {
            return Err("'start_time' must be earlier than 'end_time'".to_string());
        }

        Ok(Self { start, end })
    }

    fn from_json(value: &Json) -> Result<Self, DbErr> {
        let dto: TimeRangeDto = serde_json::from_value(value.clone())
            .map_err(|e| DbErr::Custom(format!("Failed to parse stored time range: {}", e)))?;
        Self::parse(&dto.start_time, &dto.end_time)
            .map_err(|e| DbErr::Custom(format!("Invalid stored time range: {}", e)))
    }

    fn to_json(self) -> Json {
        serde_json::json!({
            "start_time": self.start.format(STORED_FORMAT).to_string(),
            "end_time": self.end.format(STORED_FORMAT).to_string(),
        })
    }

    pub fn into_dto(self) -> TimeRangeDto {
        TimeRangeDto {
            start_time: self.start.format(STORED_FORMAT).to_string(),
            end_time: self.end.format(STORED_FORMAT).to_string(),
        }
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    let value = value.trim();
    let time = NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| format!("Invalid time format '{}'. Use HH:MM", value))?;

    if time.minute() % MINUTE_STEP != 0 {
        return Err(format!(
            "Time '{}' must be in {}-minute intervals",
            value, MINUTE_STEP
        ));
    }

    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)
        .ok_or_else(|| format!("Invalid time format '{}'. Use HH:MM", value))
}

/// One optional window per weekday, Monday first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub monday: Option<TimeRange>,
    pub tuesday: Option<TimeRange>,
    pub wednesday: Option<TimeRange>,
    pub thursday: Option<TimeRange>,
    pub friday: Option<TimeRange>,
    pub saturday: Option<TimeRange>,
    pub sunday: Option<TimeRange>,
}

impl Schedule {
    /// Validates every provided day, reporting the first invalid one by name.
    pub fn from_dto(dto: SchedulerDto) -> Result<Self, AppError> {
        fn day(name: &str, range: Option<TimeRangeDto>) -> Result<Option<TimeRange>, AppError> {
            range
                .map(|r| TimeRange::parse(&r.start_time, &r.end_time))
                .transpose()
                .map_err(|e| AppError::BadRequest(format!("{}: {}", name, e)))
        }

        Ok(Self {
            monday: day("monday", dto.monday)?,
            tuesday: day("tuesday", dto.tuesday)?,
            wednesday: day("wednesday", dto.wednesday)?,
            thursday: day("thursday", dto.thursday)?,
            friday: day("friday", dto.friday)?,
            saturday: day("saturday", dto.saturday)?,
            sunday: day("sunday", dto.sunday)?,
        })
    }

    pub fn from_entity(entity: entity::scheduler::Model) -> Result<Self, DbErr> {
        fn day(value: Option<Json>) -> Result<Option<TimeRange>, DbErr> {
            value.as_ref().map(TimeRange::from_json).transpose()
        }

        Ok(Self {
            monday: day(entity.monday)?,
            tuesday: day(entity.tuesday)?,
            wednesday: day(entity.wednesday)?,
            thursday: day(entity.thursday)?,
            friday: day(entity.friday)?,
            saturday: day(entity.saturday)?,
            sunday: day(entity.sunday)?,
        })
    }

    /// Builds a fresh row for `training_id`.
    pub fn into_active_model(self, training_id: Uuid) -> entity::scheduler::ActiveModel {
        use sea_orm::ActiveValue::Set;

        let json = |range: Option<TimeRange>| range.map(TimeRange::to_json);

        entity::scheduler::ActiveModel {
            id: Set(Uuid::new_v4()),
            training_id: Set(training_id),
            monday: Set(json(self.monday)),
            tuesday: Set(json(self.tuesday)),
            wednesday: Set(json(self.wednesday)),
            thursday: Set(json(self.thursday)),
            friday: Set(json(self.friday)),
            saturday: Set(json(self.saturday)),
            sunday: Set(json(self.sunday)),
        }
    }

    pub fn into_dto(self) -> SchedulerDto {
        SchedulerDto {
            monday: self.monday.map(TimeRange::into_dto),
            tuesday: self.tuesday.map(TimeRange::into_dto),
            wednesday: self.wednesday.map(TimeRange::into_dto),
            thursday: self.thursday.map(TimeRange::into_dto),
            friday: self.friday.map(TimeRange::into_dto),
            saturday: self.saturday.map(TimeRange::into_dto),
            sunday: self.sunday.map(TimeRange::into_dto),
        }
    }
}
