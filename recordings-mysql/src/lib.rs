//! MySQL backend for the recordings album catalogue.
//!
//! This crate implements [`recordings_store::AlbumStore`] on top of the
//! `mysql_async` driver. The store owns a single connection that is opened
//! and pinged once, then kept for the life of the store.
//!
//! # Example
//!
//! ```rust,ignore
//! use recordings_mysql::{MysqlAlbumStore, MysqlConfig};
//! use recordings_store::AlbumStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MysqlAlbumStore::connect(MysqlConfig::from_env()).await?;
//!     for album in store.albums_by_artist("John Coltrane").await? {
//!         println!("{}", album);
//!     }
//!     store.close().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod row;
pub mod store;

pub use config::MysqlConfig;
pub use connection::MysqlConnection;
pub use error::{MysqlError, MysqlResult};
pub use row::{FromMysqlRow, FromMysqlRowError};
pub use store::MysqlAlbumStore;
