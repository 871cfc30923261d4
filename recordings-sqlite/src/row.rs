//! Row decoding for SQLite.

use rusqlite::Row;
use rusqlite::types::FromSql;

use recordings_store::Album;

/// Trait for converting a SQLite row to a Rust type.
pub trait FromSqliteRow: Sized {
    /// Convert a SQLite row to this type.
    fn from_row(row: &Row<'_>) -> Result<Self, FromSqliteRowError>;
}

/// Error type for row deserialization.
#[derive(Debug)]
pub struct FromSqliteRowError {
    /// The error message.
    pub message: String,
    /// The column that failed to decode.
    pub column: String,
}

impl FromSqliteRowError {
    /// Create an error for the column `column`.
    pub fn with_column(message: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            column: column.into(),
        }
    }
}

impl std::fmt::Display for FromSqliteRowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column '{}': {}", self.column, self.message)
    }
}

impl std::error::Error for FromSqliteRowError {}

/// Read the column `name` from `row` as `T`.
pub fn column<T: FromSql>(row: &Row<'_>, name: &str) -> Result<T, FromSqliteRowError> {
    row.get(name)
        .map_err(|e| FromSqliteRowError::with_column(e.to_string(), name))
}

impl FromSqliteRow for Album {
    fn from_row(row: &Row<'_>) -> Result<Self, FromSqliteRowError> {
        Ok(Self {
            id: column(row, "id")?,
            title: column(row, "title")?,
            artist: column(row, "artist")?,
            price: column(row, "price")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rusqlite::Connection;

    fn decode(sql: &str) -> Result<Album, FromSqliteRowError> {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn.prepare(sql).unwrap();
        let mut rows = stmt.query([]).unwrap();
        let row = rows.next().unwrap().unwrap();
        Album::from_row(row)
    }

    #[test]
    fn test_album_from_row_by_name() {
        let album = decode("SELECT 'Jeru' AS title, 17.99 AS price, 2 AS id, 'Gerry Mulligan' AS artist")
            .unwrap();

        assert_eq!(
            album,
            Album {
                id: 2,
                title: "Jeru".to_string(),
                artist: "Gerry Mulligan".to_string(),
                price: 17.99,
            }
        );
    }

    #[test]
    fn test_album_from_row_missing_column() {
        let err = decode("SELECT 1 AS id, 'Jeru' AS title, 17.99 AS price").unwrap_err();
        assert_eq!(err.column, "artist");
    }

    #[test]
    fn test_album_from_row_wrong_type() {
        let err = decode("SELECT 1 AS id, 'Jeru' AS title, 'Gerry Mulligan' AS artist, 'cheap' AS price")
            .unwrap_err();
        assert_eq!(err.column, "price");
    }

    #[test]
    fn test_from_sqlite_row_error_display() {
        let err = FromSqliteRowError::with_column("missing value", "title");
        assert_eq!(err.to_string(), "column 'title': missing value");
    }
}
