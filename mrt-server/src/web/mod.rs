//! Web layer for the MRT schedule server.
//!
//! A JSON API over the schedule repository.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
