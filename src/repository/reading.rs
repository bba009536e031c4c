use diesel::prelude::*;

use crate::domain::reading::{NewReading, Reading, UpdateReading};
use crate::domain::types::{BookId, ReadingId};
use crate::models::reading::{
    NewReading as DbNewReading, Reading as DbReading, UpdateReading as DbUpdateReading,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ReadingReader, ReadingWriter};

impl ReadingReader for DieselRepository {
    fn list_readings(&self, book_id: BookId) -> RepositoryResult<Vec<Reading>> {
        use crate::schema::readings;

        let mut conn = self.conn()?;

        let items = readings::table
            .filter(readings::book_id.eq(book_id.get()))
            .order(readings::id.asc())
            .load::<DbReading>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Reading>, _>>()?;

        Ok(items)
    }

    fn get_reading_by_id(&self, id: ReadingId) -> RepositoryResult<Option<Reading>> {
        use crate::schema::readings;

        let mut conn = self.conn()?;

        let reading = readings::table
            .filter(readings::id.eq(id.get()))
            .first::<DbReading>(&mut conn)
            .optional()?;

        Ok(reading.map(TryInto::try_into).transpose()?)
    }
}

impl ReadingWriter for DieselRepository {
    fn create_reading(&self, reading: &NewReading) -> RepositoryResult<Reading> {
        use crate::schema::readings;

        let mut conn = self.conn()?;
        let db_reading: DbNewReading = reading.into();

        let created = diesel::insert_into(readings::table)
            .values(db_reading)
            .get_result::<DbReading>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_reading(&self, id: ReadingId, update: &UpdateReading) -> RepositoryResult<usize> {
        use crate::schema::readings;

        let mut conn = self.conn()?;
        let changeset: DbUpdateReading = update.into();

        let affected = diesel::update(readings::table.filter(readings::id.eq(id.get())))
            .set(changeset)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_reading(&self, id: ReadingId) -> RepositoryResult<usize> {
        use crate::schema::readings;

        let mut conn = self.conn()?;

        let affected = diesel::delete(readings::table.filter(readings::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
