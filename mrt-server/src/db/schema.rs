//! Table definitions for the schedule store.

/// Idempotent bootstrap for the three schedule tables.
///
/// Safe to run on every start; existing tables are left untouched.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS stations (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS lines (
    id INTEGER PRIMARY KEY,
    stations_id_start INTEGER NOT NULL REFERENCES stations (id),
    stations_id_end INTEGER NOT NULL REFERENCES stations (id)
);

CREATE TABLE IF NOT EXISTS schedules (
    line_id INTEGER NOT NULL REFERENCES lines (id),
    time TEXT NOT NULL,
    is_holiday BOOLEAN NOT NULL DEFAULT FALSE
);

CREATE INDEX IF NOT EXISTS schedules_line_id ON schedules (line_id);
"#;
