use chrono::Utc;

use crate::domain::book::Book;
use crate::domain::types::BookId;
use crate::forms::books::BookFormPayload;
use crate::repository::{BookReader, BookWriter};

use super::{ServiceError, ServiceResult, storage_error};

pub fn list_books<R>(repo: &R) -> ServiceResult<Vec<Book>>
where
    R: BookReader,
{
    repo.list_books()
        .map_err(|e| storage_error("Failed to list books", e))
}

pub fn get_book<R>(id: i32, repo: &R) -> ServiceResult<Book>
where
    R: BookReader,
{
    let id = BookId::new(id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_book_by_id(id) {
        Ok(Some(book)) => Ok(book),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(storage_error("Failed to get book", e)),
    }
}

pub fn create_book<R>(payload: BookFormPayload, repo: &R) -> ServiceResult<Book>
where
    R: BookWriter,
{
    let now = Utc::now().naive_utc();

    repo.create_book(&payload.new_book(now))
        .map_err(|e| storage_error("Failed to create book", e))
}

pub fn update_book<R>(id: i32, payload: BookFormPayload, repo: &R) -> ServiceResult<()>
where
    R: BookWriter,
{
    let id = BookId::new(id).map_err(|_| ServiceError::NotFound)?;
    let now = Utc::now().naive_utc();

    let affected = repo
        .update_book(id, &payload.update_book(now))
        .map_err(|e| storage_error("Failed to update book", e))?;
    if affected == 0 {
        return Err(ServiceError::NotFound);
    }

    Ok(())
}

pub fn delete_book<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: BookWriter,
{
    // Deleting a missing book is a successful no-op.
    let Ok(id) = BookId::new(id) else {
        return Ok(());
    };

    repo.delete_book(id)
        .map_err(|e| storage_error("Failed to delete book", e))?;

    Ok(())
}

pub fn search_books<R>(term: &str, repo: &R) -> ServiceResult<Vec<Book>>
where
    R: BookReader,
{
    if term.trim().is_empty() {
        return Err(ServiceError::Form("search term is required".to_string()));
    }

    repo.search_books(term)
        .map_err(|e| storage_error("Failed to search books", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{BookAuthor, BookTitle};
    use crate::repository::test::TestRepository;
    use chrono::NaiveDate;

    fn payload(title: &str, author: &str) -> BookFormPayload {
        BookFormPayload {
            title: BookTitle::new(title).unwrap(),
            author: BookAuthor::new(author).unwrap(),
            isbn: None,
            published_date: NaiveDate::from_ymd_opt(2015, 7, 16).unwrap(),
            genre: "Programming".to_string(),
            description: String::new(),
            page_count: 552,
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let repo = TestRepository::new();

        let created = create_book(payload("The Rust Book", "Steve Klabnik"), &repo).unwrap();
        let fetched = get_book(created.id.get(), &repo).unwrap();

        assert_eq!(fetched.title.as_str(), "The Rust Book");
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[test]
    fn get_of_missing_book_is_not_found() {
        let repo = TestRepository::new();

        assert!(matches!(get_book(7, &repo), Err(ServiceError::NotFound)));
    }

    #[test]
    fn update_of_missing_book_is_not_found() {
        let repo = TestRepository::new();

        let err = update_book(7, payload("T", "A"), &repo).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn delete_of_missing_book_is_a_noop() {
        let repo = TestRepository::new();

        assert!(delete_book(7, &repo).is_ok());
    }

    #[test]
    fn search_matches_title_author_or_genre() {
        let repo = TestRepository::new();
        create_book(payload("The Rust Book", "Steve Klabnik"), &repo).unwrap();
        create_book(payload("Dune", "Frank Herbert"), &repo).unwrap();

        assert_eq!(search_books("Rust", &repo).unwrap().len(), 1);
        assert_eq!(search_books("Herbert", &repo).unwrap().len(), 1);
        assert_eq!(search_books("Programming", &repo).unwrap().len(), 2);
        assert!(search_books("rUsT", &repo).unwrap().is_empty());
    }

    #[test]
    fn search_requires_a_non_blank_term() {
        let repo = TestRepository::new();

        assert!(matches!(
            search_books("  ", &repo),
            Err(ServiceError::Form(_))
        ));
    }
}
