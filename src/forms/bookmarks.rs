use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::bookmark::{NewBookmark, UpdateBookmark};
use crate::domain::tag::normalize_tag_names;
use crate::domain::types::{BookmarkTitle, BookmarkUrl, TagName, TypeConstraintError};

/// Request body for creating or replacing a bookmark.
///
/// The same shape serves both operations: every call supplies the full
/// replacement state, including the complete tag-name list.
#[derive(Deserialize, Validate)]
pub struct BookmarkForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Validated form data with tag names trimmed, de-blanked and de-duplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkFormPayload {
    pub title: BookmarkTitle,
    pub url: BookmarkUrl,
    pub description: String,
    pub tags: Vec<TagName>,
}

impl BookmarkFormPayload {
    pub fn new_bookmark(&self, now: NaiveDateTime) -> NewBookmark {
        NewBookmark {
            title: self.title.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_bookmark(&self, now: NaiveDateTime) -> UpdateBookmark {
        UpdateBookmark {
            title: self.title.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum BookmarkFormError {
    #[error("Bookmark form validation failed: {0}")]
    Validation(String),
    #[error("Bookmark form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for BookmarkFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for BookmarkFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<BookmarkForm> for BookmarkFormPayload {
    type Error = BookmarkFormError;

    fn try_from(value: BookmarkForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            title: BookmarkTitle::new(value.title)?,
            url: BookmarkUrl::new(value.url)?,
            description: value.description,
            tags: normalize_tag_names(value.tags),
        })
    }
}
