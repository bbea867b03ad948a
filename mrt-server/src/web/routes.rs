//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use tracing::{error, warn};

use crate::domain::{LineId, Schedule, StationId, parse_time_of_day};
use crate::repository::RepositoryError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/schedules", get(all_schedules).post(insert_schedule))
        .route("/api/stations/:id/schedules", get(station_schedules))
        .route("/api/lines/:id/schedules", delete(delete_line_schedules))
        .route("/api/lanes", get(lanes))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every schedule.
async fn all_schedules(State(state): State<AppState>) -> Result<Json<SchedulesResponse>, AppError> {
    let rows = state.repository.all_schedules().await?;
    Ok(Json(SchedulesResponse::from(rows.as_slice())))
}

/// List the schedules leaving a station in one direction.
async fn station_schedules(
    State(state): State<AppState>,
    station: Result<Path<StationId>, PathRejection>,
    query: Result<Query<StationSchedulesQuery>, QueryRejection>,
) -> Result<Json<SchedulesResponse>, AppError> {
    let Path(station) = station?;
    let Query(query) = query?;

    let rows = state
        .repository
        .schedules_by_station_and_direction(station, query.holiday, query.direction)
        .await?;
    Ok(Json(SchedulesResponse::from(rows.as_slice())))
}

/// Add a timetable entry.
async fn insert_schedule(
    State(state): State<AppState>,
    req: Result<Json<InsertScheduleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ScheduleCreated>), AppError> {
    let Json(req) = req?;

    let time = parse_time_of_day(&req.time).map_err(|e| AppError::BadRequest {
        message: format!("{}: {}", e, req.time),
    })?;

    let schedule = Schedule::new(req.line_id, time, req.is_holiday);
    state
        .repository
        .insert_schedule(&schedule)
        .await
        .map_err(|e| {
            if e.is_constraint_violation() {
                AppError::Conflict {
                    message: format!("cannot add schedule to line {}: {}", req.line_id, e),
                }
            } else {
                AppError::from(e)
            }
        })?;

    Ok((StatusCode::CREATED, Json(ScheduleCreated::from(&schedule))))
}

/// Remove every schedule of a line.
async fn delete_line_schedules(
    State(state): State<AppState>,
    line_id: Result<Path<LineId>, PathRejection>,
) -> Result<Json<DeleteSchedulesResponse>, AppError> {
    let Path(line_id) = line_id?;
    let deleted = state.repository.delete_schedules_for_line(line_id).await?;
    Ok(Json(DeleteSchedulesResponse { line_id, deleted }))
}

/// List stations with the lines they start.
async fn lanes(State(state): State<AppState>) -> Result<Json<LanesResponse>, AppError> {
    let rows = state.repository.lanes().await?;
    Ok(Json(LanesResponse {
        lanes: rows.iter().map(LaneResult::from).collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl AppError {
    /// Map an extractor rejection onto the JSON error body.
    fn rejected(status: StatusCode, message: String) -> Self {
        if status.is_client_error() {
            AppError::BadRequest { message }
        } else {
            AppError::Internal { message }
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(e: PathRejection) -> Self {
        AppError::rejected(e.status(), e.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::rejected(e.status(), e.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::rejected(e.status(), e.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
