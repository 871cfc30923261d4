//! Error types for album store operations.
//!
//! Every error names the logical operation that failed and the input it was
//! called with. Driver errors are kept as the `source` and appended to the
//! message, so a diagnostic never consists of a raw driver error alone.
//!
//! The variants map onto four kinds:
//!
//! - [`StoreError::Query`]: the store could not be read, or a row could not be decoded
//! - [`StoreError::NotFound`]: an id lookup matched zero rows
//! - [`StoreError::Write`]: an insert failed, or its identifier could not be retrieved
//! - [`StoreError::Connection`]: connecting or the liveness check failed
//!
//! ```rust
//! use recordings_store::{ErrorCode, Operation, StoreError};
//!
//! let err = StoreError::not_found(7);
//! assert!(err.is_not_found());
//! assert_eq!(err.code(), ErrorCode::RecordNotFound);
//! assert_eq!(err.to_string(), "album_by_id 7: no such album");
//!
//! let err = StoreError::query(Operation::AlbumsByArtist, "\"Miles Davis\"", "server has gone away");
//! assert_eq!(err.to_string(), "albums_by_artist \"Miles Davis\": server has gone away");
//! ```

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::album::NewAlbum;

/// Boxed driver error kept as the source of a [`StoreError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for album store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The logical operation an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Lookup of all albums by one artist.
    AlbumsByArtist,
    /// Lookup of a single album by identifier.
    AlbumById,
    /// Insert of a new album.
    AddAlbum,
    /// Connection setup and liveness check.
    Connect,
}

impl Operation {
    /// The name used in diagnostics and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlbumsByArtist => "albums_by_artist",
            Self::AlbumById => "album_by_id",
            Self::AddAlbum => "add_album",
            Self::Connect => "connect",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Record not found (R1001).
    RecordNotFound = 1001,
    /// Database connection failed (R3001).
    ConnectionFailed = 3001,
    /// Read query failed (R5005).
    QueryFailed = 5005,
    /// Write failed (R5006).
    WriteFailed = 5006,
}

impl ErrorCode {
    /// Get the error code string (e.g., "R1001").
    pub fn code(&self) -> String {
        format!("R{}", *self as u16)
    }

    /// Get a short description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::RecordNotFound => "Record not found",
            Self::ConnectionFailed => "Database connection failed",
            Self::QueryFailed => "Query failed",
            Self::WriteFailed => "Write failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors returned by [`crate::AlbumStore`] implementations.
#[derive(Error, Debug, Diagnostic)]
pub enum StoreError {
    /// The store could not be queried, or a returned row could not be decoded.
    #[error("{operation} {input}: {source}")]
    #[diagnostic(code(recordings::query))]
    Query {
        operation: Operation,
        input: String,
        #[source]
        source: BoxError,
    },

    /// An id lookup matched zero rows.
    #[error("{operation} {id}: no such album")]
    #[diagnostic(code(recordings::not_found))]
    NotFound { operation: Operation, id: i64 },

    /// An insert failed, or the assigned identifier could not be retrieved.
    #[error("{operation} {input}: {source}")]
    #[diagnostic(code(recordings::write))]
    Write {
        operation: Operation,
        input: String,
        #[source]
        source: BoxError,
    },

    /// The connection or its liveness check failed.
    #[error("{operation} {target}: {source}")]
    #[diagnostic(
        code(recordings::connection),
        help("check that the database server is running and DBUSER/DBPASS are set")
    )]
    Connection {
        operation: Operation,
        target: String,
        #[source]
        source: BoxError,
    },
}

impl StoreError {
    /// Create a query error for `operation` called with `input`.
    pub fn query(operation: Operation, input: impl fmt::Display, source: impl Into<BoxError>) -> Self {
        Self::Query {
            operation,
            input: input.to_string(),
            source: source.into(),
        }
    }

    /// Create a not found error for an id lookup.
    pub fn not_found(id: i64) -> Self {
        Self::NotFound {
            operation: Operation::AlbumById,
            id,
        }
    }

    /// Create a write error for an insert of `album`.
    pub fn write(album: &NewAlbum, source: impl Into<BoxError>) -> Self {
        Self::Write {
            operation: Operation::AddAlbum,
            input: format!("{:?} by {:?}", album.title, album.artist),
            source: source.into(),
        }
    }

    /// Create a connection error for `target`, usually a password-free URL.
    pub fn connection(target: impl fmt::Display, source: impl Into<BoxError>) -> Self {
        Self::Connection {
            operation: Operation::Connect,
            target: target.to_string(),
            source: source.into(),
        }
    }

    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        match self {
            Self::Query { operation, .. }
            | Self::NotFound { operation, .. }
            | Self::Write { operation, .. }
            | Self::Connection { operation, .. } => *operation,
        }
    }

    /// The error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Query { .. } => ErrorCode::QueryFailed,
            Self::NotFound { .. } => ErrorCode::RecordNotFound,
            Self::Write { .. } => ErrorCode::WriteFailed,
            Self::Connection { .. } => ErrorCode::ConnectionFailed,
        }
    }

    /// Check if this is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a connection error.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}
