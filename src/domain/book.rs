use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{BookAuthor, BookId, BookTitle};

/// A book in the catalog.
///
/// This domain struct mirrors the `books` table. The ISBN is optional and
/// unique when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub author: BookAuthor,
    pub isbn: Option<String>,
    pub published_date: NaiveDate,
    pub genre: String,
    pub description: String,
    pub page_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Book`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBook {
    pub title: BookTitle,
    pub author: BookAuthor,
    pub isbn: Option<String>,
    pub published_date: NaiveDate,
    pub genre: String,
    pub description: String,
    pub page_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full replacement state applied by an update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateBook {
    pub title: BookTitle,
    pub author: BookAuthor,
    pub isbn: Option<String>,
    pub published_date: NaiveDate,
    pub genre: String,
    pub description: String,
    pub page_count: i32,
    pub updated_at: NaiveDateTime,
}
