use chrono::Utc;

use crate::domain::reading::{NewReading, Reading, ReadingStatus, UpdateReading};
use crate::domain::types::{BookId, ReadingId};
use crate::forms::readings::{StartReadingFormPayload, UpdateReadingFormPayload};
use crate::repository::{BookReader, ReadingReader, ReadingWriter};

use super::{ServiceError, ServiceResult, storage_error};

fn require_book<R>(book_id: i32, repo: &R) -> ServiceResult<BookId>
where
    R: BookReader,
{
    let book_id = BookId::new(book_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_book_by_id(book_id) {
        Ok(Some(_)) => Ok(book_id),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(storage_error("Failed to get book", e)),
    }
}

pub fn list_readings<R>(book_id: i32, repo: &R) -> ServiceResult<Vec<Reading>>
where
    R: BookReader + ReadingReader,
{
    let book_id = require_book(book_id, repo)?;

    repo.list_readings(book_id)
        .map_err(|e| storage_error("Failed to list readings", e))
}

pub fn start_reading<R>(
    book_id: i32,
    payload: StartReadingFormPayload,
    repo: &R,
) -> ServiceResult<Reading>
where
    R: BookReader + ReadingWriter,
{
    let book_id = require_book(book_id, repo)?;
    let now = Utc::now().naive_utc();

    let reading = NewReading {
        book_id,
        user_id: payload.user_id,
        start_date: now,
        status: ReadingStatus::InProgress,
        current_page: 0,
        created_at: now,
        updated_at: now,
    };

    repo.create_reading(&reading)
        .map_err(|e| storage_error("Failed to create reading", e))
}

pub fn update_reading<R>(
    id: i32,
    payload: UpdateReadingFormPayload,
    repo: &R,
) -> ServiceResult<()>
where
    R: ReadingReader + ReadingWriter,
{
    let id = ReadingId::new(id).map_err(|_| ServiceError::NotFound)?;

    let existing = match repo.get_reading_by_id(id) {
        Ok(Some(reading)) => reading,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => return Err(storage_error("Failed to get reading", e)),
    };

    let now = Utc::now().naive_utc();
    // Reaching a terminal status stamps the end date once; reopening the
    // reading clears it.
    let end_date = if payload.status.is_terminal() {
        existing.end_date.or(Some(now))
    } else {
        None
    };

    let update = UpdateReading {
        status: payload.status,
        current_page: payload.current_page,
        notes: payload.notes,
        rating: payload.rating,
        end_date,
        updated_at: now,
    };

    repo.update_reading(id, &update)
        .map_err(|e| storage_error("Failed to update reading", e))?;

    Ok(())
}

pub fn delete_reading<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: ReadingWriter,
{
    // Deleting a missing reading is a successful no-op.
    let Ok(id) = ReadingId::new(id) else {
        return Ok(());
    };

    repo.delete_reading(id)
        .map_err(|e| storage_error("Failed to delete reading", e))?;

    Ok(())
}
