//! Schedule and station repository.
//!
//! Five operations over the `stations`, `lines` and `schedules` tables:
//! two schedule listings, a schedule insert, a per-line bulk delete, and
//! the station/line topology. Each one is a single parameterized statement;
//! nothing is cached, retried or reinterpreted.
//!
//! Listings are always ordered by station id, then line id, then time.
//! Cancellation is dropping the returned future; the statement cursor is
//! released with it.

mod error;
mod queries;
mod rows;


use sqlx::SqlitePool;
use tracing::debug;

use crate::domain::{LineId, Schedule, StationId};

pub use error::RepositoryError;
pub use rows::{LaneRow, ScheduleRow};

/// Data access for stations, lines and schedules.
///
/// Holds nothing but the pool it was given.
#[derive(Debug, Clone)]
pub struct ScheduleRepository {
    pool: SqlitePool,
}

impl ScheduleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Schedules of the line departing `station` towards `direction`, in
    /// the holiday or weekday timetable.
    ///
    /// A station can start several lines; `direction` (the end station)
    /// picks the one meant. Returns an empty list when nothing matches.
    pub async fn schedules_by_station_and_direction(
        &self,
        station: StationId,
        is_holiday: bool,
        direction: StationId,
    ) -> Result<Vec<ScheduleRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, ScheduleRow>(queries::SCHEDULES_BY_STATION_AND_DIRECTION)
            .bind(station)
            .bind(is_holiday)
            .bind(direction)
            .fetch_all(&self.pool)
            .await?;

        debug!(
            station = %station,
            direction = %direction,
            is_holiday,
            rows = rows.len(),
            "fetched station schedules"
        );
        Ok(rows)
    }

    /// Every schedule of every line.
    pub async fn all_schedules(&self) -> Result<Vec<ScheduleRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, ScheduleRow>(queries::ALL_SCHEDULES)
            .fetch_all(&self.pool)
            .await?;

        debug!(rows = rows.len(), "fetched all schedules");
        Ok(rows)
    }

    /// Add one timetable entry.
    ///
    /// Duplicates are accepted; only the store's constraints (the line
    /// must exist) can reject the row.
    pub async fn insert_schedule(&self, schedule: &Schedule) -> Result<(), RepositoryError> {
        sqlx::query(queries::INSERT_SCHEDULE)
            .bind(schedule.line_id)
            .bind(schedule.time)
            .bind(schedule.is_holiday)
            .execute(&self.pool)
            .await?;

        debug!(
            line = %schedule.line_id,
            time = %schedule.time,
            is_holiday = schedule.is_holiday,
            "inserted schedule"
        );
        Ok(())
    }

    /// Delete every schedule of `line`, in both timetables.
    ///
    /// Returns how many rows were removed; zero is not an error.
    pub async fn delete_schedules_for_line(&self, line: LineId) -> Result<u64, RepositoryError> {
        let result = sqlx::query(queries::DELETE_SCHEDULES_FOR_LINE)
            .bind(line)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected();
        debug!(line = %line, deleted, "deleted line schedules");
        Ok(deleted)
    }

    /// Every station with each line it starts.
    ///
    /// A station with no outgoing line appears once with empty lane
    /// fields; a station starting several lines appears once per line.
    pub async fn lanes(&self) -> Result<Vec<LaneRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, LaneRow>(queries::LANES)
            .fetch_all(&self.pool)
            .await?;

        debug!(rows = rows.len(), "fetched lanes");
        Ok(rows)
    }
}
