use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::book::{
    Book as DomainBook, NewBook as DomainNewBook, UpdateBook as DomainUpdateBook,
};
use crate::domain::types::{BookAuthor, BookTitle, TypeConstraintError};

/// Diesel model representing a row in the `books` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::books)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub published_date: NaiveDate,
    pub genre: String,
    pub description: String,
    pub page_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Book`] used for creating new rows.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::books)]
pub struct NewBook<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub isbn: Option<&'a str>,
    pub published_date: NaiveDate,
    pub genre: &'a str,
    pub description: &'a str,
    pub page_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset applied when replacing a book's fields.
///
/// Updates are full replacements, so a `None` ISBN must clear the column
/// rather than leave it untouched.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::books)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateBook<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub isbn: Option<&'a str>,
    pub published_date: NaiveDate,
    pub genre: &'a str,
    pub description: &'a str,
    pub page_count: i32,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Book> for DomainBook {
    type Error = TypeConstraintError;

    fn try_from(book: Book) -> Result<Self, Self::Error> {
        Ok(Self {
            id: book.id.try_into()?,
            title: BookTitle::new(book.title)?,
            author: BookAuthor::new(book.author)?,
            isbn: book.isbn,
            published_date: book.published_date,
            genre: book.genre,
            description: book.description,
            page_count: book.page_count,
            created_at: book.created_at,
            updated_at: book.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewBook> for NewBook<'a> {
    fn from(book: &'a DomainNewBook) -> Self {
        Self {
            title: book.title.as_str(),
            author: book.author.as_str(),
            isbn: book.isbn.as_deref(),
            published_date: book.published_date,
            genre: &book.genre,
            description: &book.description,
            page_count: book.page_count,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateBook> for UpdateBook<'a> {
    fn from(book: &'a DomainUpdateBook) -> Self {
        Self {
            title: book.title.as_str(),
            author: book.author.as_str(),
            isbn: book.isbn.as_deref(),
            published_date: book.published_date,
            genre: &book.genre,
            description: &book.description,
            page_count: book.page_count,
            updated_at: book.updated_at,
        }
    }
}
