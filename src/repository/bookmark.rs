use diesel::prelude::*;

use crate::domain::bookmark::{Bookmark, NewBookmark, UpdateBookmark};
use crate::domain::types::BookmarkId;
use crate::models::bookmark::{
    Bookmark as DbBookmark, NewBookmark as DbNewBookmark, UpdateBookmark as DbUpdateBookmark,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{BookmarkReader, BookmarkWriter, DieselRepository, contains_pattern};

impl BookmarkReader for DieselRepository {
    fn list_bookmarks(&self) -> RepositoryResult<Vec<Bookmark>> {
        use crate::schema::bookmarks;

        let mut conn = self.conn()?;

        let items = bookmarks::table
            .order(bookmarks::id.asc())
            .load::<DbBookmark>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Bookmark>, _>>()?;

        Ok(items)
    }

    fn get_bookmark_by_id(&self, id: BookmarkId) -> RepositoryResult<Option<Bookmark>> {
        use crate::schema::bookmarks;

        let mut conn = self.conn()?;

        let bookmark = bookmarks::table
            .filter(bookmarks::id.eq(id.get()))
            .first::<DbBookmark>(&mut conn)
            .optional()?;

        Ok(bookmark.map(TryInto::try_into).transpose()?)
    }

    fn search_bookmarks(&self, term: &str) -> RepositoryResult<Vec<Bookmark>> {
        use crate::schema::bookmarks;

        let mut conn = self.conn()?;
        let pattern = contains_pattern(term);

        let items = bookmarks::table
            .filter(
                bookmarks::title
                    .like(&pattern)
                    .escape('\\')
                    .or(bookmarks::description.like(&pattern).escape('\\'))
                    .or(bookmarks::url.like(&pattern).escape('\\')),
            )
            .load::<DbBookmark>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Bookmark>, _>>()?;

        Ok(items)
    }
}

impl BookmarkWriter for DieselRepository {
    fn create_bookmark(&self, bookmark: &NewBookmark) -> RepositoryResult<Bookmark> {
        use crate::schema::bookmarks;

        let mut conn = self.conn()?;
        let db_bookmark: DbNewBookmark = bookmark.into();

        let created = diesel::insert_into(bookmarks::table)
            .values(db_bookmark)
            .get_result::<DbBookmark>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_bookmark(&self, id: BookmarkId, update: &UpdateBookmark) -> RepositoryResult<usize> {
        use crate::schema::bookmarks;

        let mut conn = self.conn()?;
        let changeset: DbUpdateBookmark = update.into();

        let affected = diesel::update(bookmarks::table.filter(bookmarks::id.eq(id.get())))
            .set(changeset)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_bookmark(&self, id: BookmarkId) -> RepositoryResult<usize> {
        use crate::schema::bookmarks;

        let mut conn = self.conn()?;

        let affected = diesel::delete(bookmarks::table.filter(bookmarks::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
