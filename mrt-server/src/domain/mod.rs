//! Domain types for the MRT schedule server.
//!
//! Stations and lines form a small directed graph; schedules hang off
//! lines and are split into weekday and holiday timetables.

mod line;
mod schedule;
mod station;
mod time;

pub use line::{Line, LineId};
pub use schedule::Schedule;
pub use station::{Station, StationId};
pub use time::{TimeError, format_time_of_day, parse_time_of_day};
