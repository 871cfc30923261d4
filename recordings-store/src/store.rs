//! The album store abstraction.

use async_trait::async_trait;

use crate::album::{Album, NewAlbum};
use crate::error::StoreResult;

/// Data access for the `album` table.
///
/// Each method is one round trip to the backing store. Nothing is retried;
/// a retry policy, if any, belongs to the caller. Implementations own their
/// connection and release any open result cursor before returning, on the
/// error paths as well as on success.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// Get every album whose artist equals `artist` exactly.
    ///
    /// No ordering is requested from the database. An artist with no albums
    /// yields an empty vector, not an error.
    async fn albums_by_artist(&self, artist: &str) -> StoreResult<Vec<Album>>;

    /// Get the album with identifier `id`.
    ///
    /// Returns [`crate::StoreError::NotFound`] when no row matches, so callers
    /// can tell an absent album from a broken store.
    async fn album_by_id(&self, id: i64) -> StoreResult<Album>;

    /// Insert `album` and return the identifier the store assigned to it.
    ///
    /// Not idempotent: inserting the same fields twice creates two albums.
    async fn add_album(&self, album: &NewAlbum) -> StoreResult<i64>;
}

#[async_trait]
impl<S: AlbumStore + ?Sized> AlbumStore for &S {
    async fn albums_by_artist(&self, artist: &str) -> StoreResult<Vec<Album>> {
        (**self).albums_by_artist(artist).await
    }

    async fn album_by_id(&self, id: i64) -> StoreResult<Album> {
        (**self).album_by_id(id).await
    }

    async fn add_album(&self, album: &NewAlbum) -> StoreResult<i64> {
        (**self).add_album(album).await
    }
}
