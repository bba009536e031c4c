//! SQLite connection pooling.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

/// Shared r2d2 pool over SQLite connections.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
/// A single connection checked out of [`DbPool`].
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Applies per-connection pragmas when a connection is created.
///
/// `foreign_keys` makes the `ON DELETE CASCADE` declarations in the schema
/// effective, `busy_timeout` lets concurrent writers wait for the single
/// SQLite write lock instead of failing immediately, and
/// `case_sensitive_like` makes `LIKE` match substrings case-sensitively.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "PRAGMA foreign_keys = ON; \
             PRAGMA busy_timeout = 5000; \
             PRAGMA case_sensitive_like = ON;",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build a connection pool for the SQLite database at `database_url`.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
}
