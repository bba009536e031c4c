use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::bookmark::{
    Bookmark as DomainBookmark, NewBookmark as DomainNewBookmark,
    UpdateBookmark as DomainUpdateBookmark,
};
use crate::domain::types::{BookmarkTitle, BookmarkUrl, TypeConstraintError};

/// Diesel model representing a row in the `bookmarks` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::bookmarks)]
pub struct Bookmark {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Bookmark`] used for creating new rows.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::bookmarks)]
pub struct NewBookmark<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub description: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset applied when replacing a bookmark's fields.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::bookmarks)]
pub struct UpdateBookmark<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub description: &'a str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Bookmark> for DomainBookmark {
    type Error = TypeConstraintError;

    fn try_from(bookmark: Bookmark) -> Result<Self, Self::Error> {
        Ok(Self {
            id: bookmark.id.try_into()?,
            title: BookmarkTitle::new(bookmark.title)?,
            url: BookmarkUrl::new(bookmark.url)?,
            description: bookmark.description,
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewBookmark> for NewBookmark<'a> {
    fn from(bookmark: &'a DomainNewBookmark) -> Self {
        Self {
            title: bookmark.title.as_str(),
            url: bookmark.url.as_str(),
            description: &bookmark.description,
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateBookmark> for UpdateBookmark<'a> {
    fn from(bookmark: &'a DomainUpdateBookmark) -> Self {
        Self {
            title: bookmark.title.as_str(),
            url: bookmark.url.as_str(),
            description: &bookmark.description,
            updated_at: bookmark.updated_at,
        }
    }
}
