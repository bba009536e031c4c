use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::book::{NewBook, UpdateBook};
use crate::domain::types::{BookAuthor, BookTitle, TypeConstraintError};

/// Request body for creating or replacing a book.
#[derive(Deserialize, Validate)]
pub struct BookForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub author: String,
    pub isbn: Option<String>,
    pub published_date: NaiveDate,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub page_count: i32,
}

/// Validated form data carrying domain newtypes.
#[derive(Debug, Clone, PartialEq)]
pub struct BookFormPayload {
    pub title: BookTitle,
    pub author: BookAuthor,
    pub isbn: Option<String>,
    pub published_date: NaiveDate,
    pub genre: String,
    pub description: String,
    pub page_count: i32,
}

impl BookFormPayload {
    pub fn new_book(&self, now: NaiveDateTime) -> NewBook {
        NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            published_date: self.published_date,
            genre: self.genre.clone(),
            description: self.description.clone(),
            page_count: self.page_count,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_book(&self, now: NaiveDateTime) -> UpdateBook {
        UpdateBook {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            published_date: self.published_date,
            genre: self.genre.clone(),
            description: self.description.clone(),
            page_count: self.page_count,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum BookFormError {
    #[error("Book form validation failed: {0}")]
    Validation(String),
    #[error("Book form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for BookFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for BookFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<BookForm> for BookFormPayload {
    type Error = BookFormError;

    fn try_from(value: BookForm) -> Result<Self, Self::Error> {
        value.validate()?;

        // An absent or blank ISBN is stored as NULL so the uniqueness
        // constraint only applies to real values.
        let isbn = value
            .isbn
            .map(|isbn| isbn.trim().to_string())
            .filter(|isbn| !isbn.is_empty());

        Ok(Self {
            title: BookTitle::new(value.title)?,
            author: BookAuthor::new(value.author)?,
            isbn,
            published_date: value.published_date,
            genre: value.genre,
            description: value.description,
            page_count: value.page_count,
        })
    }
}
