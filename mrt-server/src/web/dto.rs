//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{LineId, Schedule, StationId, format_time_of_day};
use crate::repository::{LaneRow, ScheduleRow};

/// Query parameters for a station's schedules.
#[derive(Debug, Deserialize)]
pub struct StationSchedulesQuery {
    /// End station of the line to list
    pub direction: StationId,

    /// Holiday timetable instead of weekday (defaults to weekday)
    #[serde(default)]
    pub holiday: bool,
}

/// Request to add a timetable entry.
#[derive(Debug, Deserialize)]
pub struct InsertScheduleRequest {
    pub line_id: LineId,

    /// Time in HH:MM or HH:MM:SS format
    pub time: String,

    #[serde(default)]
    pub is_holiday: bool,
}

/// A schedule joined with its line and stations.
#[derive(Debug, Serialize)]
pub struct ScheduleResult {
    pub station_id: StationId,
    pub station_name: String,
    pub line_id: LineId,
    pub start_station_id: StationId,
    pub start_station_name: String,
    pub end_station_id: StationId,
    pub end_station_name: String,

    /// Departure time (HH:MM)
    pub time: String,

    pub is_holiday: bool,
}

/// Response for schedule listings.
#[derive(Debug, Serialize)]
pub struct SchedulesResponse {
    pub schedules: Vec<ScheduleResult>,
}

/// A created timetable entry.
#[derive(Debug, Serialize)]
pub struct ScheduleCreated {
    pub line_id: LineId,
    pub time: String,
    pub is_holiday: bool,
}

/// Response for a per-line delete.
#[derive(Debug, Serialize)]
pub struct DeleteSchedulesResponse {
    pub line_id: LineId,

    /// Number of schedules removed
    pub deleted: u64,
}

/// A station and one line it starts.
#[derive(Debug, Serialize)]
pub struct LaneResult {
    pub station_id: StationId,
    pub station_name: String,
    pub lane_id: Option<LineId>,
    pub start_station_id: Option<StationId>,
    pub end_station_id: Option<StationId>,
}

/// Response for the lane listing.
#[derive(Debug, Serialize)]
pub struct LanesResponse {
    pub lanes: Vec<LaneResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<&ScheduleRow> for ScheduleResult {
    fn from(row: &ScheduleRow) -> Self {
        Self {
            station_id: row.station_id,
            station_name: row.station_name.clone(),
            line_id: row.line_id,
            start_station_id: row.start_station_id,
            start_station_name: row.start_station_name.clone(),
            end_station_id: row.end_station_id,
            end_station_name: row.end_station_name.clone(),
            time: format_time_of_day(row.time),
            is_holiday: row.is_holiday,
        }
    }
}

impl From<&[ScheduleRow]> for SchedulesResponse {
    fn from(rows: &[ScheduleRow]) -> Self {
        Self {
            schedules: rows.iter().map(ScheduleResult::from).collect(),
        }
    }
}

impl From<&Schedule> for ScheduleCreated {
    fn from(schedule: &Schedule) -> Self {
        Self {
            line_id: schedule.line_id,
            time: format_time_of_day(schedule.time),
            is_holiday: schedule.is_holiday,
        }
    }
}

impl From<&LaneRow> for LaneResult {
    fn from(row: &LaneRow) -> Self {
        Self {
            station_id: row.station_id,
            station_name: row.station_name.clone(),
            lane_id: row.lane_id,
            start_station_id: row.start_station_id,
            end_station_id: row.end_station_id,
        }
    }
}
