//! Album store backed by SQLite.

use async_trait::async_trait;
use rusqlite::types::Value;
use tracing::{debug, info};

use recordings_store::sql;
use recordings_store::{Album, AlbumStore, NewAlbum, Operation, StoreError, StoreResult};

use crate::config::SqliteConfig;
use crate::connection::SqliteConnection;
use crate::error::SqliteResult;

/// An [`AlbumStore`] over one SQLite connection.
///
/// The database must already hold an `album` table with `id`, `title`,
/// `artist` and `price` columns. Fresh in-memory databases get one through
/// [`SqliteConfig::with_statement`].
pub struct SqliteAlbumStore {
    conn: SqliteConnection,
    config: SqliteConfig,
}

impl SqliteAlbumStore {
    /// Open the database and check the connection is alive.
    ///
    /// Both failures surface as [`StoreError::Connection`].
    pub async fn connect(config: SqliteConfig) -> StoreResult<Self> {
        let target = format!("sqlite://{}", config.path.display());
        info!(url = %target, "Opening SQLite database");

        let conn = SqliteConnection::open(&config)
            .await
            .map_err(|e| StoreError::connection(&target, e))?;
        conn.ping()
            .await
            .map_err(|e| StoreError::connection(&target, e))?;

        info!(url = %target, "Database connected");
        Ok(Self { conn, config })
    }

    /// Get the configuration the store was opened with.
    pub fn config(&self) -> &SqliteConfig {
        &self.config
    }

    /// Get the underlying connection.
    pub fn connection(&self) -> &SqliteConnection {
        &self.conn
    }

    /// Close the connection.
    pub async fn close(self) -> SqliteResult<()> {
        self.conn.close().await?;
        info!("SQLite connection closed");
        Ok(())
    }
}

#[async_trait]
impl AlbumStore for SqliteAlbumStore {
    async fn albums_by_artist(&self, artist: &str) -> StoreResult<Vec<Album>> {
        let albums: Vec<Album> = self
            .conn
            .query_rows(
                sql::SELECT_ALBUMS_BY_ARTIST,
                vec![Value::Text(artist.to_string())],
            )
            .await
            .map_err(|e| StoreError::query(Operation::AlbumsByArtist, format!("{:?}", artist), e))?;

        debug!(artist = %artist, count = albums.len(), "Fetched albums by artist");
        Ok(albums)
    }

    async fn album_by_id(&self, id: i64) -> StoreResult<Album> {
        let album: Option<Album> = self
            .conn
            .query_optional(sql::SELECT_ALBUM_BY_ID, vec![Value::Integer(id)])
            .await
            .map_err(|e| StoreError::query(Operation::AlbumById, id, e))?;

        album.ok_or_else(|| {
            debug!(id = id, "No album with this id");
            StoreError::not_found(id)
        })
    }

    async fn add_album(&self, album: &NewAlbum) -> StoreResult<i64> {
        let params = vec![
            Value::Text(album.title.clone()),
            Value::Text(album.artist.clone()),
            Value::Real(album.price),
        ];
        let id = self
            .conn
            .execute_insert(sql::INSERT_ALBUM, params)
            .await
            .map_err(|e| StoreError::write(album, e))?
            .ok_or_else(|| StoreError::write(album, "database returned no identifier for the new album"))?;

        debug!(id = id, title = %album.title, "Inserted album");
        Ok(id)
    }
}
