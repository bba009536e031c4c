use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BookmarkId, BookmarkTitle, BookmarkUrl};

/// A saved link with a title, free-form description and tag set.
///
/// This domain struct mirrors the `bookmarks` table and is independent from
/// any persistence layer representation. Tags are attached separately via
/// the `bookmark_tags` join table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub title: BookmarkTitle,
    pub url: BookmarkUrl,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Bookmark`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBookmark {
    pub title: BookmarkTitle,
    pub url: BookmarkUrl,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full replacement state applied by an update.
///
/// `created_at` is never part of an update; `updated_at` is stamped by the
/// caller constructing this value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateBookmark {
    pub title: BookmarkTitle,
    pub url: BookmarkUrl,
    pub description: String,
    pub updated_at: NaiveDateTime,
}
