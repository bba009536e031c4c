use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;

use crate::domain::tag::{NewTag, Tag};
use crate::domain::types::{BookmarkId, TagId, TagName};
use crate::models::tag::{BookmarkTag as DbBookmarkTag, NewTag as DbNewTag, Tag as DbTag};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TagReader, TagWriter};

/// Look up a tag by exact name, inserting it with the default color when
/// absent.
///
/// A unique violation on the insert means another writer created the tag
/// between our lookup and insert; the loser re-reads instead of failing.
fn find_or_create_tag(conn: &mut SqliteConnection, name: &TagName) -> RepositoryResult<DbTag> {
    use crate::schema::tags;

    let existing = tags::table
        .filter(tags::name.eq(name.as_str()))
        .first::<DbTag>(conn)
        .optional()?;
    if let Some(tag) = existing {
        return Ok(tag);
    }

    let new_tag = NewTag::with_default_color(name.clone(), Utc::now().naive_utc());
    let db_tag: DbNewTag = (&new_tag).into();

    match diesel::insert_into(tags::table)
        .values(db_tag)
        .get_result::<DbTag>(conn)
    {
        Ok(tag) => Ok(tag),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Ok(tags::table
                .filter(tags::name.eq(name.as_str()))
                .first::<DbTag>(conn)?)
        }
        Err(e) => Err(e.into()),
    }
}

impl TagReader for DieselRepository {
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let items = tags::table
            .order(tags::id.asc())
            .load::<DbTag>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Tag>, _>>()?;

        Ok(items)
    }

    fn get_tag_by_id(&self, id: TagId) -> RepositoryResult<Option<Tag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let tag = tags::table
            .filter(tags::id.eq(id.get()))
            .first::<DbTag>(&mut conn)
            .optional()?;

        Ok(tag.map(TryInto::try_into).transpose()?)
    }

    fn list_bookmark_tag_ids(&self, bookmark_id: BookmarkId) -> RepositoryResult<Vec<TagId>> {
        use crate::schema::bookmark_tags;

        let mut conn = self.conn()?;

        let ids = bookmark_tags::table
            .filter(bookmark_tags::bookmark_id.eq(bookmark_id.get()))
            .select(bookmark_tags::tag_id)
            .order(bookmark_tags::tag_id.asc())
            .load::<i32>(&mut conn)?
            .into_iter()
            .map(TagId::new)
            .collect::<Result<Vec<TagId>, _>>()?;

        Ok(ids)
    }
}

impl TagWriter for DieselRepository {
    fn reconcile_bookmark_tags(
        &self,
        bookmark_id: BookmarkId,
        names: &[TagName],
    ) -> RepositoryResult<Vec<Tag>> {
        use crate::schema::bookmark_tags;

        let mut conn = self.conn()?;

        // An immediate transaction takes SQLite's write lock up front, so the
        // clear-and-rebuild below is atomic and concurrent reconciliations of
        // the same bookmark run one after another.
        let tags = conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(
                bookmark_tags::table.filter(bookmark_tags::bookmark_id.eq(bookmark_id.get())),
            )
            .execute(conn)?;

            let mut attached: Vec<DbTag> = Vec::with_capacity(names.len());
            for name in names {
                let tag = find_or_create_tag(conn, name)?;
                // Callers normalize the name list, but distinct inputs may
                // still resolve to one tag; the pair is inserted only once.
                if attached.iter().any(|t| t.id == tag.id) {
                    continue;
                }
                diesel::insert_into(bookmark_tags::table)
                    .values(DbBookmarkTag {
                        bookmark_id: bookmark_id.get(),
                        tag_id: tag.id,
                    })
                    .execute(conn)?;
                attached.push(tag);
            }
            Ok(attached)
        })?;

        Ok(tags
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Tag>, _>>()?)
    }
}
