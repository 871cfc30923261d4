//! SQLite connection wrapper.

use rusqlite::params_from_iter;
use rusqlite::types::Value;
use tokio_rusqlite::Connection;
use tracing::debug;

use crate::config::{DatabasePath, SqliteConfig};
use crate::error::{SqliteError, SqliteResult};
use crate::row::FromSqliteRow;

/// A wrapper around a single SQLite connection.
///
/// Statements and row cursors are created and dropped inside one call on the
/// connection thread, so none outlives the method that opened it.
pub struct SqliteConnection {
    conn: Connection,
}

impl SqliteConnection {
    /// Create a new connection wrapper.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open the configured database and run its initialization SQL.
    pub async fn open(config: &SqliteConfig) -> SqliteResult<Self> {
        debug!(path = %config.path.display(), "Opening SQLite connection");
        let conn = match &config.path {
            DatabasePath::Memory => Connection::open_in_memory().await?,
            DatabasePath::File(path) => Connection::open(path).await?,
        };

        let init_sql = config.init_sql();
        conn.call(move |conn| {
            conn.execute_batch(&init_sql)?;
            Ok(())
        })
        .await?;

        Ok(Self::new(conn))
    }

    /// Run a trivial query to check the connection is alive.
    pub async fn ping(&self) -> SqliteResult<()> {
        debug!("Pinging SQLite connection");
        self.conn
            .call(|conn| {
                conn.query_row(recordings_store::sql::PING, [], |row| row.get::<_, i64>(0))?;
                Ok(())
            })
            .await
            .map_err(SqliteError::from)
    }

    /// Execute a query with parameters and decode all rows.
    pub async fn query_rows<T>(&self, sql: &str, params: Vec<Value>) -> SqliteResult<Vec<T>>
    where
        T: FromSqliteRow + Send + 'static,
    {
        let sql = sql.to_string();
        debug!(sql = %sql, "Executing parameterized query");

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let mut rows = stmt.query(params_from_iter(params.iter()))?;

                let mut decoded = Vec::new();
                while let Some(row) = rows.next()? {
                    let item = T::from_row(row).map_err(|e| tokio_rusqlite::Error::Other(Box::new(e)))?;
                    decoded.push(item);
                }
                Ok(decoded)
            })
            .await
            .map_err(SqliteError::from)
    }

    /// Execute a query with parameters and decode the first row, if any.
    pub async fn query_optional<T>(&self, sql: &str, params: Vec<Value>) -> SqliteResult<Option<T>>
    where
        T: FromSqliteRow + Send + 'static,
    {
        let sql = sql.to_string();
        debug!(sql = %sql, "Executing parameterized query_optional");

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let mut rows = stmt.query(params_from_iter(params.iter()))?;

                let first = match rows.next()? {
                    Some(row) => Some(
                        T::from_row(row).map_err(|e| tokio_rusqlite::Error::Other(Box::new(e)))?,
                    ),
                    None => None,
                };
                Ok(first)
            })
            .await
            .map_err(SqliteError::from)
    }

    /// Execute an insert with parameters and return the new row id.
    ///
    /// Returns `None` when no row was inserted.
    pub async fn execute_insert(&self, sql: &str, params: Vec<Value>) -> SqliteResult<Option<i64>> {
        let sql = sql.to_string();
        debug!(sql = %sql, "Executing parameterized insert");

        self.conn
            .call(move |conn| {
                let changed = conn.execute(&sql, params_from_iter(params.iter()))?;
                if changed == 0 {
                    return Ok(None);
                }
                Ok(Some(conn.last_insert_rowid()).filter(|id| *id > 0))
            })
            .await
            .map_err(SqliteError::from)
    }

    /// Execute a statement batch, for seeding and test fixtures.
    pub async fn execute_batch(&self, sql: &str) -> SqliteResult<()> {
        let sql = sql.to_string();
        debug!(sql = %sql, "Executing batch");

        self.conn
            .call(move |conn| {
                conn.execute_batch(&sql)?;
                Ok(())
            })
            .await
            .map_err(SqliteError::from)
    }

    /// Close the connection.
    pub async fn close(self) -> SqliteResult<()> {
        debug!("Closing SQLite connection");
        self.conn.close().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordings_store::Album;

    async fn open_with_albums() -> SqliteConnection {
        let config = SqliteConfig::memory()
            .with_statement("CREATE TABLE album (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT, artist TEXT, price REAL)")
            .with_statement("INSERT INTO album (title, artist, price) VALUES ('Blue Train', 'John Coltrane', 56.99)");
        SqliteConnection::open(&config).await.unwrap()
    }

    #[tokio::test]
    async fn test_open_and_ping() {
        let conn = open_with_albums().await;
        conn.ping().await.unwrap();
        conn.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_query_rows_binds_params() {
        let conn = open_with_albums().await;

        let albums: Vec<Album> = conn
            .query_rows(
                "SELECT id, title, artist, price FROM album WHERE artist = ?",
                vec![Value::Text("John Coltrane".into())],
            )
            .await
            .unwrap();
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].title, "Blue Train");
    }

    #[tokio::test]
    async fn test_query_optional_none() {
        let conn = open_with_albums().await;

        let album: Option<Album> = conn
            .query_optional(
                "SELECT id, title, artist, price FROM album WHERE id = ?",
                vec![Value::Integer(99)],
            )
            .await
            .unwrap();
        assert!(album.is_none());
    }

    #[tokio::test]
    async fn test_decode_error_surfaces_as_deserialization() {
        let conn = open_with_albums().await;

        let result: SqliteResult<Vec<Album>> = conn
            .query_rows("SELECT id, title, price FROM album", Vec::new())
            .await;
        assert!(matches!(result, Err(SqliteError::Deserialization(_))));

        // The connection stays usable after a failed decode.
        conn.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_execute_insert_returns_rowid() {
        let conn = open_with_albums().await;

        let id = conn
            .execute_insert(
                "INSERT INTO album (title, artist, price) VALUES (?, ?, ?)",
                vec![
                    Value::Text("Giant Steps".into()),
                    Value::Text("John Coltrane".into()),
                    Value::Real(63.99),
                ],
            )
            .await
            .unwrap();
        assert_eq!(id, Some(2));
    }

    #[tokio::test]
    async fn test_open_missing_directory_fails() {
        let config = SqliteConfig::file("/nonexistent-recordings-dir/albums.db");
        assert!(SqliteConnection::open(&config).await.is_err());
    }
}
