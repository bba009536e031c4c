use std::sync::Mutex;

use chrono::Utc;

use crate::domain::book::{Book, NewBook, UpdateBook};
use crate::domain::bookmark::{Bookmark, NewBookmark, UpdateBookmark};
use crate::domain::reading::{NewReading, Reading, UpdateReading};
use crate::domain::tag::{NewTag, Tag};
use crate::domain::types::{BookId, BookmarkId, ReadingId, TagId, TagName};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BookReader, BookWriter, BookmarkReader, BookmarkWriter, ReadingReader, ReadingWriter,
    TagReader, TagWriter,
};

#[derive(Default)]
struct State {
    books: Vec<Book>,
    readings: Vec<Reading>,
    bookmarks: Vec<Bookmark>,
    tags: Vec<Tag>,
    associations: Vec<(BookmarkId, TagId)>,
}

/// Simple in-memory repository used for unit tests.
///
/// Mirrors the storage semantics the Diesel implementation provides:
/// generated ids, cascade deletes and clear-then-rebuild reconciliation.
#[derive(Default)]
pub struct TestRepository {
    state: Mutex<State>,
}

fn next_id<T>(items: &[T], id_of: impl Fn(&T) -> i32) -> i32 {
    items.iter().map(&id_of).max().unwrap_or(0) + 1
}

impl TestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(self, books: Vec<Book>) -> Self {
        self.state.lock().unwrap().books = books;
        self
    }

    pub fn with_readings(self, readings: Vec<Reading>) -> Self {
        self.state.lock().unwrap().readings = readings;
        self
    }

    pub fn with_bookmarks(self, bookmarks: Vec<Bookmark>) -> Self {
        self.state.lock().unwrap().bookmarks = bookmarks;
        self
    }

    pub fn with_tags(self, tags: Vec<Tag>) -> Self {
        self.state.lock().unwrap().tags = tags;
        self
    }

    pub fn with_associations(self, associations: Vec<(BookmarkId, TagId)>) -> Self {
        self.state.lock().unwrap().associations = associations;
        self
    }
}

impl BookmarkReader for TestRepository {
    fn list_bookmarks(&self) -> RepositoryResult<Vec<Bookmark>> {
        Ok(self.state.lock().unwrap().bookmarks.clone())
    }

    fn get_bookmark_by_id(&self, id: BookmarkId) -> RepositoryResult<Option<Bookmark>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .bookmarks
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    fn search_bookmarks(&self, term: &str) -> RepositoryResult<Vec<Bookmark>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .bookmarks
            .iter()
            .filter(|b| {
                b.title.as_str().contains(term)
                    || b.description.contains(term)
                    || b.url.as_str().contains(term)
            })
            .cloned()
            .collect())
    }
}

impl BookmarkWriter for TestRepository {
    fn create_bookmark(&self, bookmark: &NewBookmark) -> RepositoryResult<Bookmark> {
        let mut state = self.state.lock().unwrap();
        let id = BookmarkId::new(next_id(&state.bookmarks, |b| b.id.get()))?;
        let created = Bookmark {
            id,
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
            description: bookmark.description.clone(),
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
        };
        state.bookmarks.push(created.clone());
        Ok(created)
    }

    fn update_bookmark(&self, id: BookmarkId, update: &UpdateBookmark) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        match state.bookmarks.iter_mut().find(|b| b.id == id) {
            Some(bookmark) => {
                bookmark.title = update.title.clone();
                bookmark.url = update.url.clone();
                bookmark.description = update.description.clone();
                bookmark.updated_at = update.updated_at;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_bookmark(&self, id: BookmarkId) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        let before = state.bookmarks.len();
        state.bookmarks.retain(|b| b.id != id);
        state.associations.retain(|(bookmark_id, _)| *bookmark_id != id);
        Ok(before - state.bookmarks.len())
    }
}

impl TagReader for TestRepository {
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>> {
        Ok(self.state.lock().unwrap().tags.clone())
    }

    fn get_tag_by_id(&self, id: TagId) -> RepositoryResult<Option<Tag>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .tags
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    fn list_bookmark_tag_ids(&self, bookmark_id: BookmarkId) -> RepositoryResult<Vec<TagId>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .associations
            .iter()
            .filter(|(id, _)| *id == bookmark_id)
            .map(|(_, tag_id)| *tag_id)
            .collect())
    }
}

impl TagWriter for TestRepository {
    fn reconcile_bookmark_tags(
        &self,
        bookmark_id: BookmarkId,
        names: &[TagName],
    ) -> RepositoryResult<Vec<Tag>> {
        let mut state = self.state.lock().unwrap();
        state.associations.retain(|(id, _)| *id != bookmark_id);

        let mut attached: Vec<Tag> = Vec::with_capacity(names.len());
        for name in names {
            let tag = match state.tags.iter().find(|t| t.name == *name) {
                Some(tag) => tag.clone(),
                None => {
                    let id = TagId::new(next_id(&state.tags, |t| t.id.get()))?;
                    let new_tag =
                        NewTag::with_default_color(name.clone(), Utc::now().naive_utc());
                    let tag = Tag {
                        id,
                        name: new_tag.name,
                        color: new_tag.color,
                        created_at: new_tag.created_at,
                    };
                    state.tags.push(tag.clone());
                    tag
                }
            };
            if attached.iter().any(|t| t.id == tag.id) {
                continue;
            }
            state.associations.push((bookmark_id, tag.id));
            attached.push(tag);
        }
        Ok(attached)
    }
}

impl BookReader for TestRepository {
    fn list_books(&self) -> RepositoryResult<Vec<Book>> {
        Ok(self.state.lock().unwrap().books.clone())
    }

    fn get_book_by_id(&self, id: BookId) -> RepositoryResult<Option<Book>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    fn search_books(&self, term: &str) -> RepositoryResult<Vec<Book>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .books
            .iter()
            .filter(|b| {
                b.title.as_str().contains(term)
                    || b.author.as_str().contains(term)
                    || b.genre.contains(term)
            })
            .cloned()
            .collect())
    }
}

impl BookWriter for TestRepository {
    fn create_book(&self, book: &NewBook) -> RepositoryResult<Book> {
        let mut state = self.state.lock().unwrap();
        let id = BookId::new(next_id(&state.books, |b| b.id.get()))?;
        let created = Book {
            id,
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            published_date: book.published_date,
            genre: book.genre.clone(),
            description: book.description.clone(),
            page_count: book.page_count,
            created_at: book.created_at,
            updated_at: book.updated_at,
        };
        state.books.push(created.clone());
        Ok(created)
    }

    fn update_book(&self, id: BookId, update: &UpdateBook) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        match state.books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                book.title = update.title.clone();
                book.author = update.author.clone();
                book.isbn = update.isbn.clone();
                book.published_date = update.published_date;
                book.genre = update.genre.clone();
                book.description = update.description.clone();
                book.page_count = update.page_count;
                book.updated_at = update.updated_at;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_book(&self, id: BookId) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        let before = state.books.len();
        state.books.retain(|b| b.id != id);
        state.readings.retain(|r| r.book_id != id);
        Ok(before - state.books.len())
    }
}

impl ReadingReader for TestRepository {
    fn list_readings(&self, book_id: BookId) -> RepositoryResult<Vec<Reading>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .readings
            .iter()
            .filter(|r| r.book_id == book_id)
            .cloned()
            .collect())
    }

    fn get_reading_by_id(&self, id: ReadingId) -> RepositoryResult<Option<Reading>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .readings
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }
}

impl ReadingWriter for TestRepository {
    fn create_reading(&self, reading: &NewReading) -> RepositoryResult<Reading> {
        let mut state = self.state.lock().unwrap();
        let id = ReadingId::new(next_id(&state.readings, |r| r.id.get()))?;
        let created = Reading {
            id,
            book_id: reading.book_id,
            user_id: reading.user_id.clone(),
            start_date: reading.start_date,
            end_date: None,
            status: reading.status,
            current_page: reading.current_page,
            notes: None,
            rating: None,
            created_at: reading.created_at,
            updated_at: reading.updated_at,
        };
        state.readings.push(created.clone());
        Ok(created)
    }

    fn update_reading(&self, id: ReadingId, update: &UpdateReading) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        match state.readings.iter_mut().find(|r| r.id == id) {
            Some(reading) => {
                reading.status = update.status;
                reading.current_page = update.current_page;
                reading.notes = update.notes.clone();
                reading.rating = update.rating;
                reading.end_date = update.end_date;
                reading.updated_at = update.updated_at;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_reading(&self, id: ReadingId) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        let before = state.readings.len();
        state.readings.retain(|r| r.id != id);
        Ok(before - state.readings.len())
    }
}
