use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::reading::{
    NewReading as DomainNewReading, Reading as DomainReading, ReadingStatus,
    UpdateReading as DomainUpdateReading,
};
use crate::domain::types::{TypeConstraintError, UserId};

/// Diesel model representing a row in the `readings` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::readings)]
pub struct Reading {
    pub id: i32,
    pub book_id: i32,
    pub user_id: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub status: String,
    pub current_page: i32,
    pub notes: Option<String>,
    pub rating: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Reading`] used for creating new rows.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::readings)]
pub struct NewReading<'a> {
    pub book_id: i32,
    pub user_id: &'a str,
    pub start_date: NaiveDateTime,
    pub status: &'a str,
    pub current_page: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset applied when recording reading progress.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::readings)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateReading<'a> {
    pub status: &'a str,
    pub current_page: i32,
    pub notes: Option<&'a str>,
    pub rating: Option<i32>,
    pub end_date: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Reading> for DomainReading {
    type Error = TypeConstraintError;

    fn try_from(reading: Reading) -> Result<Self, Self::Error> {
        Ok(Self {
            id: reading.id.try_into()?,
            book_id: reading.book_id.try_into()?,
            user_id: UserId::new(reading.user_id)?,
            start_date: reading.start_date,
            end_date: reading.end_date,
            status: reading.status.parse::<ReadingStatus>()?,
            current_page: reading.current_page,
            notes: reading.notes,
            rating: reading.rating,
            created_at: reading.created_at,
            updated_at: reading.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewReading> for NewReading<'a> {
    fn from(reading: &'a DomainNewReading) -> Self {
        Self {
            book_id: reading.book_id.get(),
            user_id: reading.user_id.as_str(),
            start_date: reading.start_date,
            status: reading.status.as_str(),
            current_page: reading.current_page,
            created_at: reading.created_at,
            updated_at: reading.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateReading> for UpdateReading<'a> {
    fn from(reading: &'a DomainUpdateReading) -> Self {
        Self {
            status: reading.status.as_str(),
            current_page: reading.current_page,
            notes: reading.notes.as_deref(),
            rating: reading.rating,
            end_date: reading.end_date,
            updated_at: reading.updated_at,
        }
    }
}
