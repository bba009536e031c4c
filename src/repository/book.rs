use diesel::prelude::*;

use crate::domain::book::{Book, NewBook, UpdateBook};
use crate::domain::types::BookId;
use crate::models::book::{Book as DbBook, NewBook as DbNewBook, UpdateBook as DbUpdateBook};
use crate::repository::errors::RepositoryResult;
use crate::repository::{BookReader, BookWriter, DieselRepository, contains_pattern};

impl BookReader for DieselRepository {
    fn list_books(&self) -> RepositoryResult<Vec<Book>> {
        use crate::schema::books;

        let mut conn = self.conn()?;

        let items = books::table
            .order(books::id.asc())
            .load::<DbBook>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Book>, _>>()?;

        Ok(items)
    }

    fn get_book_by_id(&self, id: BookId) -> RepositoryResult<Option<Book>> {
        use crate::schema::books;

        let mut conn = self.conn()?;

        let book = books::table
            .filter(books::id.eq(id.get()))
            .first::<DbBook>(&mut conn)
            .optional()?;

        Ok(book.map(TryInto::try_into).transpose()?)
    }

    fn search_books(&self, term: &str) -> RepositoryResult<Vec<Book>> {
        use crate::schema::books;

        let mut conn = self.conn()?;
        let pattern = contains_pattern(term);

        let items = books::table
            .filter(
                books::title
                    .like(&pattern)
                    .escape('\\')
                    .or(books::author.like(&pattern).escape('\\'))
                    .or(books::genre.like(&pattern).escape('\\')),
            )
            .load::<DbBook>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Book>, _>>()?;

        Ok(items)
    }
}

impl BookWriter for DieselRepository {
    fn create_book(&self, book: &NewBook) -> RepositoryResult<Book> {
        use crate::schema::books;

        let mut conn = self.conn()?;
        let db_book: DbNewBook = book.into();

        let created = diesel::insert_into(books::table)
            .values(db_book)
            .get_result::<DbBook>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_book(&self, id: BookId, update: &UpdateBook) -> RepositoryResult<usize> {
        use crate::schema::books;

        let mut conn = self.conn()?;
        let changeset: DbUpdateBook = update.into();

        let affected = diesel::update(books::table.filter(books::id.eq(id.get())))
            .set(changeset)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_book(&self, id: BookId) -> RepositoryResult<usize> {
        use crate::schema::books;

        let mut conn = self.conn()?;

        let affected = diesel::delete(books::table.filter(books::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
