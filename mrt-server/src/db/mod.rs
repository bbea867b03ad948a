//! SQLite connection pool and schema bootstrap.
//!
//! [`Database`] owns the pool. Everything that talks to storage receives
//! it (or a clone of its pool) explicitly; there is no global handle.

mod error;
mod schema;
mod seed;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, info};

use crate::repository::ScheduleRepository;

pub use error::DbError;
pub use schema::SCHEMA;
pub use seed::SeedData;

/// Handle to the schedule database.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database at `url`,
    /// e.g. `sqlite://mrt.db`.
    pub async fn connect(url: &str) -> Result<Self, DbError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        debug!(url, "opened database");
        Ok(Self { pool })
    }

    /// Open a private in-memory database.
    ///
    /// Every SQLite in-memory connection is its own database, so the pool
    /// is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self, DbError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// A repository sharing this database's pool.
    pub fn repository(&self) -> ScheduleRepository {
        ScheduleRepository::new(self.pool.clone())
    }

    /// Create the tables if they don't exist yet.
    pub async fn init_schema(&self) -> Result<(), DbError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        debug!("schema ready");
        Ok(())
    }

    /// Insert the given stations and lines in one transaction.
    ///
    /// Stations go in first so lines can reference them. Ids already
    /// present are left as they are, so seeding on every start is safe.
    pub async fn seed(&self, data: &SeedData) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        for station in &data.stations {
            sqlx::query(
                "INSERT INTO stations (id, name) VALUES (?1, ?2) ON CONFLICT (id) DO NOTHING",
            )
            .bind(station.id)
            .bind(&station.name)
            .execute(&mut *tx)
            .await?;
        }

        for line in &data.lines {
            sqlx::query(
                "INSERT INTO lines (id, stations_id_start, stations_id_end) VALUES (?1, ?2, ?3) \
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(line.id)
            .bind(line.start)
            .bind(line.end)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(
            stations = data.stations.len(),
            lines = data.lines.len(),
            "seeded network"
        );
        Ok(())
    }

    /// Close every connection in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, LineId, Schedule, Station, StationId, parse_time_of_day};
    use tempfile::tempdir;

    const NETWORK_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/network.json");

    fn two_stations() -> SeedData {
        SeedData {
            stations: vec![
                Station::new(StationId(1), "Taipei Main"),
                Station::new(StationId(2), "Zhongshan"),
            ],
            lines: vec![Line::new(LineId(10), StationId(1), StationId(2))],
        }
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();
        db.init_schema().await.unwrap();
    }

    #[tokio::test]
    async fn seed_populates_lanes() {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();
        db.seed(&two_stations()).await.unwrap();

        let lanes = db.repository().lanes().await.unwrap();
        assert_eq!(lanes.len(), 2);
    }

    #[tokio::test]
    async fn seed_rejects_line_to_unknown_station() {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();

        let mut seed = two_stations();
        seed.lines
            .push(Line::new(LineId(11), StationId(2), StationId(99)));

        assert!(db.seed(&seed).await.is_err());

        // The transaction rolled back as a whole
        let lanes = db.repository().lanes().await.unwrap();
        assert!(lanes.is_empty());
    }

    #[tokio::test]
    async fn file_database_persists_across_connections() {
        let dir = tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("mrt.db").display());

        {
            let db = Database::connect(&url).await.unwrap();
            db.init_schema().await.unwrap();
            db.seed(&two_stations()).await.unwrap();
            db.close().await;
        }

        let db = Database::connect(&url).await.unwrap();
        db.init_schema().await.unwrap();
        let lanes = db.repository().lanes().await.unwrap();
        assert_eq!(lanes.len(), 2);
        assert_eq!(lanes[0].station_name, "Taipei Main");
    }

    #[tokio::test]
    async fn reseeding_on_restart_keeps_existing_data() {
        let dir = tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("mrt.db").display());
        let seed = SeedData::from_path(NETWORK_FIXTURE).unwrap();

        {
            let db = Database::connect(&url).await.unwrap();
            db.init_schema().await.unwrap();
            db.seed(&seed).await.unwrap();
            db.repository()
                .insert_schedule(&Schedule::weekday(
                    LineId(1),
                    parse_time_of_day("08:00").unwrap(),
                ))
                .await
                .unwrap();
            db.close().await;
        }

        let db = Database::connect(&url).await.unwrap();
        db.init_schema().await.unwrap();
        db.seed(&seed).await.unwrap();

        let repo = db.repository();
        let lanes = repo.lanes().await.unwrap();
        assert_eq!(lanes.len(), seed.lines.len());
        assert_eq!(lanes[0].station_name, "Taipei Main");

        let schedules = repo.all_schedules().await.unwrap();
        assert_eq!(schedules.len(), 1);
        assert_eq!(schedules[0].line_id, LineId(1));
    }

    #[tokio::test]
    async fn seed_keeps_existing_station_names() {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();
        db.seed(&two_stations()).await.unwrap();

        let renamed = SeedData {
            stations: vec![Station::new(StationId(1), "Main Station")],
            lines: vec![],
        };
        db.seed(&renamed).await.unwrap();

        let lanes = db.repository().lanes().await.unwrap();
        assert_eq!(lanes[0].station_name, "Taipei Main");
    }
}
