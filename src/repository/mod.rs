use crate::db::{DbConnection, DbPool};
use crate::domain::book::{Book, NewBook, UpdateBook};
use crate::domain::bookmark::{Bookmark, NewBookmark, UpdateBookmark};
use crate::domain::reading::{NewReading, Reading, UpdateReading};
use crate::domain::tag::Tag;
use crate::domain::types::{BookId, BookmarkId, ReadingId, TagId, TagName};

pub mod book;
pub mod bookmark;
pub mod errors;
pub mod reading;
pub mod tag;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Turn a search term into a `LIKE` pattern matching it as a substring.
///
/// `\`, `%` and `_` in the term are escaped so they match literally; the
/// caller must pair the pattern with `ESCAPE '\'`.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Read-only operations for bookmark entities.
pub trait BookmarkReader {
    /// List all bookmarks in insertion order.
    fn list_bookmarks(&self) -> RepositoryResult<Vec<Bookmark>>;
    /// Retrieve a bookmark by its identifier.
    fn get_bookmark_by_id(&self, id: BookmarkId) -> RepositoryResult<Option<Bookmark>>;
    /// Bookmarks whose title, description or url contains `term` as a
    /// case-sensitive substring.
    fn search_bookmarks(&self, term: &str) -> RepositoryResult<Vec<Bookmark>>;
}

/// Write operations for bookmark entities.
pub trait BookmarkWriter {
    /// Persist a new bookmark and return it.
    fn create_bookmark(&self, bookmark: &NewBookmark) -> RepositoryResult<Bookmark>;
    /// Replace a bookmark's fields, returning the number of affected rows.
    fn update_bookmark(&self, id: BookmarkId, update: &UpdateBookmark) -> RepositoryResult<usize>;
    /// Delete a bookmark and, via cascade, its tag associations.
    fn delete_bookmark(&self, id: BookmarkId) -> RepositoryResult<usize>;
}

/// Read-only operations for tag entities and bookmark-tag associations.
pub trait TagReader {
    /// List every tag.
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
    /// Retrieve a tag by its identifier.
    fn get_tag_by_id(&self, id: TagId) -> RepositoryResult<Option<Tag>>;
    /// Tag ids currently associated with a bookmark.
    fn list_bookmark_tag_ids(&self, bookmark_id: BookmarkId) -> RepositoryResult<Vec<TagId>>;
}

/// Write operations for tags and bookmark-tag associations.
pub trait TagWriter {
    /// Replace a bookmark's association set so it matches `names` exactly,
    /// creating missing tags with the default color. Runs as a single
    /// all-or-nothing unit; returns the tags now associated.
    fn reconcile_bookmark_tags(
        &self,
        bookmark_id: BookmarkId,
        names: &[TagName],
    ) -> RepositoryResult<Vec<Tag>>;
}

/// Read-only operations for book entities.
pub trait BookReader {
    /// List all books in insertion order.
    fn list_books(&self) -> RepositoryResult<Vec<Book>>;
    /// Retrieve a book by its identifier.
    fn get_book_by_id(&self, id: BookId) -> RepositoryResult<Option<Book>>;
    /// Books whose title, author or genre contains `term` as a
    /// case-sensitive substring.
    fn search_books(&self, term: &str) -> RepositoryResult<Vec<Book>>;
}

/// Write operations for book entities.
pub trait BookWriter {
    /// Persist a new book and return it.
    fn create_book(&self, book: &NewBook) -> RepositoryResult<Book>;
    /// Replace a book's fields, returning the number of affected rows.
    fn update_book(&self, id: BookId, update: &UpdateBook) -> RepositoryResult<usize>;
    /// Delete a book and, via cascade, its readings.
    fn delete_book(&self, id: BookId) -> RepositoryResult<usize>;
}

/// Read-only operations for reading log entries.
pub trait ReadingReader {
    /// List a book's readings in insertion order.
    fn list_readings(&self, book_id: BookId) -> RepositoryResult<Vec<Reading>>;
    /// Retrieve a reading by its identifier.
    fn get_reading_by_id(&self, id: ReadingId) -> RepositoryResult<Option<Reading>>;
}

/// Write operations for reading log entries.
pub trait ReadingWriter {
    /// Persist a new reading and return it.
    fn create_reading(&self, reading: &NewReading) -> RepositoryResult<Reading>;
    /// Update a reading's progress fields, returning the number of affected
    /// rows.
    fn update_reading(&self, id: ReadingId, update: &UpdateReading) -> RepositoryResult<usize>;
    /// Delete a reading.
    fn delete_reading(&self, id: ReadingId) -> RepositoryResult<usize>;
}
