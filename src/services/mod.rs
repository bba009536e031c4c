pub use errors::{ServiceError, ServiceResult};

use crate::repository::errors::RepositoryError;

pub mod bookmarks;
pub mod books;
pub mod errors;
pub mod readings;

/// Log a repository failure and translate it for the HTTP layer.
///
/// Pool failures stay distinct (retryable) instead of collapsing into
/// `Internal`.
pub(crate) fn storage_error(context: &str, e: RepositoryError) -> ServiceError {
    log::error!("{context}: {e}");
    ServiceError::from(e)
}
