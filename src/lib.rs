//! # Recordings
//!
//! Data access for an album catalogue kept in a relational database.
//!
//! The catalogue supports three operations, defined by [`AlbumStore`]:
//! - look up every album by an artist
//! - look up one album by identifier
//! - insert an album and get back its store-assigned identifier
//!
//! [`MysqlAlbumStore`] talks to MySQL; [`SqliteAlbumStore`] runs the same
//! operations against SQLite and backs the test suites.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use recordings::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), StoreError> {
//!     let store = MysqlAlbumStore::connect(MysqlConfig::from_env()).await?;
//!
//!     match store.album_by_id(1).await {
//!         Ok(album) => println!("{}", album),
//!         Err(e) if e.is_not_found() => println!("no album 1"),
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod demo;

pub use recordings_store::{
    Album, AlbumStore, ErrorCode, NewAlbum, Operation, StoreError, StoreResult, logging,
};

pub use recordings_mysql::{MysqlAlbumStore, MysqlConfig};
pub use recordings_sqlite::{SqliteAlbumStore, SqliteConfig};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        Album, AlbumStore, MysqlAlbumStore, MysqlConfig, NewAlbum, SqliteAlbumStore,
        SqliteConfig, StoreError, StoreResult,
    };
}
