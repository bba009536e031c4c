use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::bookmark::Bookmark;
use crate::domain::tag::Tag;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
    pub color: String,
}

impl From<Tag> for TagDto {
    fn from(value: Tag) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            color: value.color,
        }
    }
}

/// A bookmark hydrated with its current tag set.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookmarkDto {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub tags: Vec<TagDto>,
}

impl BookmarkDto {
    pub fn new(bookmark: Bookmark, tags: Vec<TagDto>) -> Self {
        Self {
            id: bookmark.id.get(),
            title: bookmark.title.into_inner(),
            url: bookmark.url.into_inner(),
            description: bookmark.description,
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
            tags,
        }
    }
}
