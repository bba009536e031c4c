use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::tag::{NewTag as DomainNewTag, Tag as DomainTag};
use crate::domain::types::{TagName, TypeConstraintError};

/// Diesel model representing a row in the `tags` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::tags)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Tag`] used for creating new rows.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::tags)]
pub struct NewTag<'a> {
    pub name: &'a str,
    pub color: &'a str,
    pub created_at: NaiveDateTime,
}

/// Row in the `bookmark_tags` join table.
#[derive(Debug, Clone, Identifiable, Queryable, Insertable)]
#[diesel(table_name = crate::schema::bookmark_tags)]
#[diesel(primary_key(bookmark_id, tag_id))]
pub struct BookmarkTag {
    pub bookmark_id: i32,
    pub tag_id: i32,
}

impl TryFrom<Tag> for DomainTag {
    type Error = TypeConstraintError;

    fn try_from(tag: Tag) -> Result<Self, Self::Error> {
        Ok(Self {
            id: tag.id.try_into()?,
            name: TagName::new(tag.name)?,
            color: tag.color,
            created_at: tag.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewTag> for NewTag<'a> {
    fn from(tag: &'a DomainNewTag) -> Self {
        Self {
            name: tag.name.as_str(),
            color: &tag.color,
            created_at: tag.created_at,
        }
    }
}
