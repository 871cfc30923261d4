//! Row decoding for MySQL.

use mysql_async::Row;
use mysql_async::prelude::FromValue;

use recordings_store::Album;

/// Trait for converting a MySQL row to a Rust type.
pub trait FromMysqlRow: Sized {
    /// Convert a MySQL row to this type.
    fn from_row(row: &Row) -> Result<Self, FromMysqlRowError>;
}

/// Error type for row deserialization.
#[derive(Debug)]
pub struct FromMysqlRowError {
    /// The error message.
    pub message: String,
    /// The column that failed to decode.
    pub column: String,
}

impl FromMysqlRowError {
    /// Create an error for the column `column`.
    pub fn with_column(message: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            column: column.into(),
        }
    }
}

impl std::fmt::Display for FromMysqlRowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column '{}': {}", self.column, self.message)
    }
}

impl std::error::Error for FromMysqlRowError {}

/// Read the column `name` from `row` as `T`.
///
/// Columns are looked up by name, never by position.
pub fn column<T: FromValue>(row: &Row, name: &str) -> Result<T, FromMysqlRowError> {
    match row.get_opt::<T, _>(name) {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(FromMysqlRowError::with_column(e.to_string(), name)),
        None => Err(FromMysqlRowError::with_column(
            "missing from result set",
            name,
        )),
    }
}

// `price` is DECIMAL in the reference schema; the driver hands it over as
// text and the f64 conversion parses it.
impl FromMysqlRow for Album {
    fn from_row(row: &Row) -> Result<Self, FromMysqlRowError> {
        Ok(Self {
            id: column(row, "id")?,
            title: column(row, "title")?,
            artist: column(row, "artist")?,
            price: column(row, "price")?,
        })
    }
}
