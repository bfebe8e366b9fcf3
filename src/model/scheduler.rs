use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Daily time window, `HH:MM` (input also accepts `HH:MM:SS`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TimeRangeDto {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SchedulerDto {
    pub monday: Option<TimeRangeDto>,
    pub tuesday: Option<TimeRangeDto>,
    pub wednesday: Option<TimeRangeDto>,
    pub thursday: Option<TimeRangeDto>,
    pub friday: Option<TimeRangeDto>,
    pub saturday: Option<TimeRangeDto>,
    pub sunday: Option<TimeRangeDto>,
}
