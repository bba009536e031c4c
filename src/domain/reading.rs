use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BookId, ReadingId, TypeConstraintError, UserId};

/// Progress state of a reading log entry, persisted as text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    NotStarted,
    InProgress,
    Completed,
    Abandoned,
}

impl ReadingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::NotStarted => "not_started",
            ReadingStatus::InProgress => "in_progress",
            ReadingStatus::Completed => "completed",
            ReadingStatus::Abandoned => "abandoned",
        }
    }

    /// `Completed` and `Abandoned` end a reading; reaching either stamps
    /// the entry's `end_date`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReadingStatus::Completed | ReadingStatus::Abandoned)
    }
}

impl std::str::FromStr for ReadingStatus {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "not_started" => Ok(ReadingStatus::NotStarted),
            "in_progress" => Ok(ReadingStatus::InProgress),
            "completed" => Ok(ReadingStatus::Completed),
            "abandoned" => Ok(ReadingStatus::Abandoned),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown reading status: {other}"
            ))),
        }
    }
}

/// One reader's progress through one book.
///
/// Deleted together with its book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub id: ReadingId,
    pub book_id: BookId,
    pub user_id: UserId,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub status: ReadingStatus,
    pub current_page: i32,
    pub notes: Option<String>,
    pub rating: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Reading`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReading {
    pub book_id: BookId,
    pub user_id: UserId,
    pub start_date: NaiveDateTime,
    pub status: ReadingStatus,
    pub current_page: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Progress fields applied by an update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateReading {
    pub status: ReadingStatus,
    pub current_page: i32,
    pub notes: Option<String>,
    pub rating: Option<i32>,
    pub end_date: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
}
