//! Station and line fixtures.
//!
//! The repository never creates stations or lines, so a fresh database
//! gets its network from a JSON file of the form:
//!
//! ```json
//! {
//!   "stations": [{ "id": 1, "name": "Taipei Main" }],
//!   "lines": [{ "id": 10, "start": 1, "end": 2 }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Line, Station};

use super::error::DbError;

/// Stations and lines to load at startup; ids already stored are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl SeedData {
    /// Load seed data from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DbError::SeedIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| DbError::SeedJson {
            path: path.to_path_buf(),
            source,
        })
    }
}
