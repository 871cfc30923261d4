//! Core types for the recordings album catalogue.
//!
//! This crate is backend-neutral. It defines the [`Album`] model, the
//! [`StoreError`] taxonomy and the [`AlbumStore`] trait that each database
//! backend implements.
//!
//! # Example
//!
//! ```rust,ignore
//! use recordings_store::{AlbumStore, NewAlbum, StoreError};
//!
//! async fn show(store: &dyn AlbumStore) -> Result<(), StoreError> {
//!     let id = store.add_album(&NewAlbum::new("Blue Train", "John Coltrane", 56.99)).await?;
//!
//!     match store.album_by_id(id).await {
//!         Ok(album) => println!("{}", album),
//!         Err(e) if e.is_not_found() => println!("gone already"),
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```

pub mod album;
pub mod error;
pub mod logging;
pub mod sql;
pub mod store;

pub use album::{Album, NewAlbum};
pub use error::{ErrorCode, Operation, StoreError, StoreResult};
pub use store::AlbumStore;
