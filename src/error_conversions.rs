//! Error conversion glue between the form, repository and service layers.
//!
//! The domain layer must not depend on service error types; conversions the
//! HTTP application needs live here instead.

use crate::domain::types::TypeConstraintError;
use crate::forms::bookmarks::BookmarkFormError;
use crate::forms::books::BookFormError;
use crate::forms::readings::{StartReadingFormError, UpdateReadingFormError};
use crate::repository::errors::RepositoryError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(value: TypeConstraintError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::Pool(_) => ServiceError::Unavailable,
            _ => ServiceError::Internal,
        }
    }
}

impl From<BookmarkFormError> for ServiceError {
    fn from(value: BookmarkFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

impl From<BookFormError> for ServiceError {
    fn from(value: BookFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

impl From<StartReadingFormError> for ServiceError {
    fn from(value: StartReadingFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

impl From<UpdateReadingFormError> for ServiceError {
    fn from(value: UpdateReadingFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}
