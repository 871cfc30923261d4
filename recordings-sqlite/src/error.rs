//! Error types for SQLite operations.

use std::fmt;

use crate::row::FromSqliteRowError;

/// Result type for SQLite operations.
pub type SqliteResult<T> = Result<T, SqliteError>;

/// Driver-level error for SQLite operations.
#[derive(Debug)]
pub enum SqliteError {
    /// SQLite driver error.
    Sqlite(tokio_rusqlite::Error),
    /// Configuration error.
    Config(String),
    /// Deserialization error.
    Deserialization(FromSqliteRowError),
}

impl SqliteError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl fmt::Display for SqliteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite(e) => write!(f, "SQLite error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Deserialization(e) => write!(f, "Deserialization error: {}", e),
        }
    }
}

impl std::error::Error for SqliteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sqlite(e) => Some(e),
            Self::Deserialization(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

// Row decoding runs inside the connection thread, so decode failures travel
// back boxed in `Error::Other` and are unpacked here.
impl From<tokio_rusqlite::Error> for SqliteError {
    fn from(err: tokio_rusqlite::Error) -> Self {
        match err {
            tokio_rusqlite::Error::Other(other) => match other.downcast::<FromSqliteRowError>() {
                Ok(row_err) => Self::Deserialization(*row_err),
                Err(other) => Self::Sqlite(tokio_rusqlite::Error::Other(other)),
            },
            err => Self::Sqlite(err),
        }
    }
}

impl From<rusqlite::Error> for SqliteError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Sqlite(tokio_rusqlite::Error::Rusqlite(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SqliteError::config("invalid path");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("invalid path"));
    }

    #[test]
    fn test_row_error_is_unboxed() {
        let boxed = tokio_rusqlite::Error::Other(Box::new(FromSqliteRowError::with_column(
            "Invalid column type Text at index: 3, name: price",
            "price",
        )));

        match SqliteError::from(boxed) {
            SqliteError::Deserialization(e) => assert_eq!(e.column, "price"),
            other => panic!("expected a deserialization error, got {other:?}"),
        }
    }

    #[test]
    fn test_other_errors_stay_driver_errors() {
        let boxed = tokio_rusqlite::Error::Other("disk on fire".into());
        assert!(matches!(SqliteError::from(boxed), SqliteError::Sqlite(_)));

        let err = SqliteError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(
            err,
            SqliteError::Sqlite(tokio_rusqlite::Error::Rusqlite(_))
        ));
    }
}
