//! Error types for MySQL operations.

use std::fmt;

use crate::row::FromMysqlRowError;

/// Result type for MySQL operations.
pub type MysqlResult<T> = Result<T, MysqlError>;

/// Driver-level error for MySQL operations.
///
/// The album store wraps these into `StoreError` together with the logical
/// operation that failed.
#[derive(Debug)]
pub enum MysqlError {
    /// MySQL driver error.
    Mysql(mysql_async::Error),
    /// Configuration error.
    Config(String),
    /// Deserialization error.
    Deserialization(FromMysqlRowError),
    /// Timeout error.
    Timeout(String),
}

impl MysqlError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a timeout error.
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }
}

impl fmt::Display for MysqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mysql(e) => write!(f, "MySQL error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Deserialization(e) => write!(f, "Deserialization error: {}", e),
            Self::Timeout(msg) => write!(f, "Timeout error: {}", msg),
        }
    }
}

impl std::error::Error for MysqlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mysql(e) => Some(e),
            Self::Deserialization(e) => Some(e),
            Self::Config(_) | Self::Timeout(_) => None,
        }
    }
}

impl From<mysql_async::Error> for MysqlError {
    fn from(err: mysql_async::Error) -> Self {
        Self::Mysql(err)
    }
}

impl From<FromMysqlRowError> for MysqlError {
    fn from(err: FromMysqlRowError) -> Self {
        Self::Deserialization(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = MysqlError::config("invalid url");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("invalid url"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(MysqlError::config("test"), MysqlError::Config(_)));
        assert!(matches!(MysqlError::timeout("test"), MysqlError::Timeout(_)));
    }

    #[test]
    fn test_timeout_has_no_source() {
        let err = MysqlError::timeout("no connection after 5000ms");
        assert_eq!(err.to_string(), "Timeout error: no connection after 5000ms");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_deserialization_keeps_column() {
        let err: MysqlError = FromMysqlRowError::with_column("unexpected NULL", "price").into();
        assert!(err.to_string().contains("column 'price'"));
        assert!(err.source().is_some());
    }
}
