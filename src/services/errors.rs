use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// Caller-supplied data failed validation.
    #[error("{0}")]
    Form(String),
    /// The backing store cannot be reached; the operation is retryable.
    #[error("storage unavailable")]
    Unavailable,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
