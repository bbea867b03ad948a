//! Timetable entries.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::LineId;

/// One departure of a line at a time of day.
///
/// `is_holiday` selects the timetable partition: `false` is the weekday
/// timetable, `true` the holiday one. A line can have the same time in
/// both partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    pub line_id: LineId,
    pub time: NaiveTime,
    pub is_holiday: bool,
}

impl Schedule {
    pub fn new(line_id: LineId, time: NaiveTime, is_holiday: bool) -> Self {
        Self {
            line_id,
            time,
            is_holiday,
        }
    }

    /// Weekday timetable entry.
    pub fn weekday(line_id: LineId, time: NaiveTime) -> Self {
        Self::new(line_id, time, false)
    }

    /// Holiday timetable entry.
    pub fn holiday(line_id: LineId, time: NaiveTime) -> Self {
        Self::new(line_id, time, true)
    }
}
