//! Album store backed by MySQL.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use recordings_store::sql;
use recordings_store::{Album, AlbumStore, NewAlbum, Operation, StoreError, StoreResult};

use crate::config::MysqlConfig;
use crate::connection::MysqlConnection;
use crate::error::MysqlResult;

/// An [`AlbumStore`] holding one MySQL connection for its whole lifetime.
///
/// The connection is opened and pinged in [`MysqlAlbumStore::connect`].
/// Concurrent callers share it and are served one at a time.
pub struct MysqlAlbumStore {
    conn: Mutex<MysqlConnection>,
    config: MysqlConfig,
}

impl MysqlAlbumStore {
    /// Connect to the server and check the connection is alive.
    ///
    /// Both failures surface as [`StoreError::Connection`].
    pub async fn connect(config: MysqlConfig) -> StoreResult<Self> {
        let url = config.redacted_url();
        info!(url = %url, "Connecting to MySQL");

        let mut conn = MysqlConnection::connect(&config)
            .await
            .map_err(|e| StoreError::connection(&url, e))?;
        conn.ping()
            .await
            .map_err(|e| StoreError::connection(&url, e))?;

        info!(url = %url, "Database connected");
        Ok(Self {
            conn: Mutex::new(conn),
            config,
        })
    }

    /// Get the configuration the store was opened with.
    pub fn config(&self) -> &MysqlConfig {
        &self.config
    }

    /// Close the connection.
    pub async fn close(self) -> MysqlResult<()> {
        self.conn.into_inner().disconnect().await?;
        info!("MySQL connection closed");
        Ok(())
    }
}

#[async_trait]
impl AlbumStore for MysqlAlbumStore {
    async fn albums_by_artist(&self, artist: &str) -> StoreResult<Vec<Album>> {
        let mut conn = self.conn.lock().await;
        let albums: Vec<Album> = conn
            .query_rows(sql::SELECT_ALBUMS_BY_ARTIST, (artist,))
            .await
            .map_err(|e| StoreError::query(Operation::AlbumsByArtist, format!("{:?}", artist), e))?;

        debug!(artist = %artist, count = albums.len(), "Fetched albums by artist");
        Ok(albums)
    }

    async fn album_by_id(&self, id: i64) -> StoreResult<Album> {
        let mut conn = self.conn.lock().await;
        let album: Option<Album> = conn
            .query_optional(sql::SELECT_ALBUM_BY_ID, (id,))
            .await
            .map_err(|e| StoreError::query(Operation::AlbumById, id, e))?;

        album.ok_or_else(|| {
            debug!(id = id, "No album with this id");
            StoreError::not_found(id)
        })
    }

    async fn add_album(&self, album: &NewAlbum) -> StoreResult<i64> {
        let mut conn = self.conn.lock().await;
        let params = (album.title.as_str(), album.artist.as_str(), album.price);
        let id = conn
            .execute_insert(sql::INSERT_ALBUM, params)
            .await
            .map_err(|e| StoreError::write(album, e))?
            .ok_or_else(|| StoreError::write(album, "server returned no identifier for the new album"))?;

        let id = i64::try_from(id)
            .map_err(|_| StoreError::write(album, format!("assigned identifier {} does not fit in i64", id)))?;

        debug!(id = id, title = %album.title, "Inserted album");
        Ok(id)
    }
}
