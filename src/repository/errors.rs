use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors surfaced by repository implementations.
///
/// `Pool` means the backing store could not be reached at all and the
/// operation is retryable; it is kept distinct so callers never mistake an
/// unavailable store for a missing row.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No database connection could be checked out of the pool.
    #[error("database unavailable: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// A query failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored row no longer satisfies domain constraints.
    #[error("invalid stored data: {0}")]
    Validation(String),
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(value: TypeConstraintError) -> Self {
        RepositoryError::Validation(value.to_string())
    }
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
