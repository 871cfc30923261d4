//! SQLite backend for the recordings album catalogue.
//!
//! This crate implements [`recordings_store::AlbumStore`] with `tokio-rusqlite`.
//! It is the controllable backing store used by the test suites: an
//! in-memory database can be provisioned with the `album` table and seeded
//! before each test, with no server involved.
//!
//! # Example
//!
//! ```rust,ignore
//! use recordings_sqlite::{SqliteAlbumStore, SqliteConfig};
//! use recordings_store::{AlbumStore, NewAlbum};
//!
//! let config = SqliteConfig::memory().with_statement(
//!     "CREATE TABLE album (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT, artist TEXT, price REAL)",
//! );
//! let store = SqliteAlbumStore::connect(config).await?;
//! let id = store.add_album(&NewAlbum::new("Blue Train", "John Coltrane", 56.99)).await?;
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod row;
pub mod store;

pub use config::{DatabasePath, SqliteConfig};
pub use connection::SqliteConnection;
pub use error::{SqliteError, SqliteResult};
pub use row::{FromSqliteRow, FromSqliteRowError};
pub use store::SqliteAlbumStore;
