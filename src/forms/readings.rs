use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::reading::ReadingStatus;
use crate::domain::types::{TypeConstraintError, UserId};

/// Request body for starting a reading of a book.
#[derive(Deserialize, Validate)]
pub struct StartReadingForm {
    #[validate(length(min = 1))]
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StartReadingFormPayload {
    pub user_id: UserId,
}

#[derive(Debug, Error)]
pub enum StartReadingFormError {
    #[error("Start reading form validation failed: {0}")]
    Validation(String),
    #[error("Start reading form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for StartReadingFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for StartReadingFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<StartReadingForm> for StartReadingFormPayload {
    type Error = StartReadingFormError;

    fn try_from(value: StartReadingForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            user_id: UserId::new(value.user_id)?,
        })
    }
}

/// Request body for recording reading progress.
#[derive(Deserialize, Validate)]
pub struct UpdateReadingForm {
    pub status: ReadingStatus,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub current_page: i32,
    pub notes: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReadingFormPayload {
    pub status: ReadingStatus,
    pub current_page: i32,
    pub notes: Option<String>,
    pub rating: Option<i32>,
}

#[derive(Debug, Error)]
pub enum UpdateReadingFormError {
    #[error("Update reading form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for UpdateReadingFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<UpdateReadingForm> for UpdateReadingFormPayload {
    type Error = UpdateReadingFormError;

    fn try_from(value: UpdateReadingForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            status: value.status,
            current_page: value.current_page,
            notes: value.notes,
            rating: value.rating,
        })
    }
}
