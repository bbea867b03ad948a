//! Repository error types.

use sqlx::error::ErrorKind;

/// Errors returned by [`ScheduleRepository`](super::ScheduleRepository).
///
/// Query, cursor and decode failures all land in `Storage` unchanged.
/// An empty result is never an error.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

impl RepositoryError {
    /// Whether the store rejected the statement on an integrity
    /// constraint, e.g. a schedule for a line that doesn't exist.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            RepositoryError::Storage(sqlx::Error::Database(e)) => matches!(
                e.kind(),
                ErrorKind::ForeignKeyViolation
                    | ErrorKind::UniqueViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_transparent() {
        let inner = sqlx::Error::PoolClosed;
        let expected = inner.to_string();
        let err = RepositoryError::from(inner);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn non_database_errors_are_not_constraint_violations() {
        assert!(!RepositoryError::from(sqlx::Error::RowNotFound).is_constraint_violation());
        assert!(!RepositoryError::from(sqlx::Error::PoolTimedOut).is_constraint_violation());
    }
}
