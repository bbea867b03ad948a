//! Result rows returned by the repository.

use chrono::NaiveTime;

use crate::domain::{Line, LineId, Schedule, Station, StationId};

/// A schedule joined with its line and both endpoint stations.
///
/// `station_*` describe the departure station the row was selected
/// through, which is always the line's start station.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ScheduleRow {
    pub station_id: StationId,
    pub station_name: String,
    pub line_id: LineId,
    pub start_station_id: StationId,
    pub end_station_id: StationId,
    pub end_station_name: String,
    pub start_station_name: String,
    pub time: NaiveTime,
    pub is_holiday: bool,
}

impl ScheduleRow {
    /// The departure station.
    pub fn station(&self) -> Station {
        Station::new(self.station_id, self.station_name.clone())
    }

    pub fn line(&self) -> Line {
        Line::new(self.line_id, self.start_station_id, self.end_station_id)
    }

    pub fn schedule(&self) -> Schedule {
        Schedule::new(self.line_id, self.time, self.is_holiday)
    }

    /// Key the repository orders rows by: station, then line, then time.
    pub fn sort_key(&self) -> (StationId, LineId, NaiveTime) {
        (self.station_id, self.line_id, self.time)
    }
}

/// A station paired with one line it starts, if any.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct LaneRow {
    pub station_id: StationId,
    pub station_name: String,
    pub lane_id: Option<LineId>,
    pub start_station_id: Option<StationId>,
    pub end_station_id: Option<StationId>,
}

impl LaneRow {
    pub fn station(&self) -> Station {
        Station::new(self.station_id, self.station_name.clone())
    }

    /// The outgoing line, or `None` for a station nothing departs from.
    pub fn line(&self) -> Option<Line> {
        Some(Line::new(
            self.lane_id?,
            self.start_station_id?,
            self.end_station_id?,
        ))
    }
}
