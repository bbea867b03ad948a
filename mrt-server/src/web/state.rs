//! Application state for the web layer.

use std::sync::Arc;

use crate::repository::ScheduleRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Schedule and station data access
    pub repository: Arc<ScheduleRepository>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(repository: ScheduleRepository) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}
