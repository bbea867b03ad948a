//! SQL text for the repository operations.
//!
//! Column aliases match the field names of the row structs in
//! [`super::rows`], which decode by name.

/// Schedules of the line leaving `?1` towards `?3`, in the `?2` timetable.
pub(super) const SCHEDULES_BY_STATION_AND_DIRECTION: &str = r#"
SELECT
    stations.id AS station_id,
    stations.name AS station_name,
    lines.id AS line_id,
    lines.stations_id_start AS start_station_id,
    lines.stations_id_end AS end_station_id,
    end_stations.name AS end_station_name,
    start_stations.name AS start_station_name,
    schedules.time AS time,
    schedules.is_holiday AS is_holiday
FROM stations
JOIN lines ON stations.id = lines.stations_id_start
JOIN stations AS end_stations ON lines.stations_id_end = end_stations.id
JOIN stations AS start_stations ON lines.stations_id_start = start_stations.id
JOIN schedules ON lines.id = schedules.line_id
WHERE stations.id = ?1 AND schedules.is_holiday = ?2 AND lines.stations_id_end = ?3
ORDER BY stations.id ASC, lines.id ASC, schedules.time ASC
"#;

/// Every schedule, joined the same way as above.
pub(super) const ALL_SCHEDULES: &str = r#"
SELECT
    stations.id AS station_id,
    stations.name AS station_name,
    lines.id AS line_id,
    lines.stations_id_start AS start_station_id,
    lines.stations_id_end AS end_station_id,
    end_stations.name AS end_station_name,
    start_stations.name AS start_station_name,
    schedules.time AS time,
    schedules.is_holiday AS is_holiday
FROM stations
JOIN lines ON stations.id = lines.stations_id_start
JOIN stations AS end_stations ON lines.stations_id_end = end_stations.id
JOIN stations AS start_stations ON lines.stations_id_start = start_stations.id
JOIN schedules ON lines.id = schedules.line_id
ORDER BY stations.id ASC, lines.id ASC, schedules.time ASC
"#;

pub(super) const INSERT_SCHEDULE: &str = r#"
INSERT INTO schedules (line_id, time, is_holiday)
VALUES (?1, ?2, ?3)
"#;

pub(super) const DELETE_SCHEDULES_FOR_LINE: &str = r#"
DELETE FROM schedules
WHERE line_id = ?1
"#;

/// Each station with the lines it starts; `NULL` lane columns when none.
pub(super) const LANES: &str = r#"
SELECT
    stations.id AS station_id,
    stations.name AS station_name,
    lines.id AS lane_id,
    lines.stations_id_start AS start_station_id,
    lines.stations_id_end AS end_station_id
FROM stations
LEFT JOIN lines ON stations.id = lines.stations_id_start
ORDER BY stations.id ASC, lines.id ASC
"#;
