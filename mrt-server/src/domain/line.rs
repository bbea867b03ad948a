//! Lines ("lanes"): directed connections between two stations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StationId;

/// Database identity of a line.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct LineId(pub i64);

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge from `start` to `end`.
///
/// The same pair of stations travelled the other way is a separate line
/// with its own id and its own schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub start: StationId,
    pub end: StationId,
}

impl Line {
    pub fn new(id: LineId, start: StationId, end: StationId) -> Self {
        Self { id, start, end }
    }
}
