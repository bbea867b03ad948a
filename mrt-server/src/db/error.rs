//! Database setup error types.

use std::path::PathBuf;

/// Errors raised while opening, bootstrapping or seeding the database.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Connection, schema or insert failure
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Seed file could not be read
    #[error("failed to read seed file {}: {source}", path.display())]
    SeedIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Seed file is not valid JSON for [`SeedData`](super::SeedData)
    #[error("invalid seed file {}: {source}", path.display())]
    SeedJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}
