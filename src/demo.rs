//! The scripted walkthrough run by the `recordings` binary.
//!
//! It performs one artist lookup, one id lookup and one insert, in that
//! order, and stops at the first error.

use std::fmt;

use tracing::info;

use crate::{Album, AlbumStore, NewAlbum, StoreResult};

/// Artist looked up by the walkthrough.
pub const EXAMPLE_ARTIST: &str = "John Coltrane";

/// Identifier looked up by the walkthrough.
pub const EXAMPLE_ID: i64 = 1;

/// The album the walkthrough inserts.
pub fn example_album() -> NewAlbum {
    NewAlbum::new("The newly added album", "The New Artist", 45.2)
}

/// One completed step of the walkthrough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step<'a> {
    /// Result of the artist lookup.
    AlbumsFound(&'a [Album]),
    /// Result of the id lookup.
    AlbumFound(&'a Album),
    /// Identifier assigned to the inserted album.
    AlbumAdded(i64),
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlbumsFound(albums) => {
                write!(f, "Albums found: [")?;
                for (i, album) in albums.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", album)?;
                }
                write!(f, "]")
            }
            Self::AlbumFound(album) => write!(f, "Album found: {}", album),
            Self::AlbumAdded(id) => write!(f, "ID of added album: {}", id),
        }
    }
}

/// Everything the walkthrough produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    /// Albums by [`EXAMPLE_ARTIST`].
    pub albums: Vec<Album>,
    /// The album with identifier [`EXAMPLE_ID`].
    pub album: Album,
    /// Identifier assigned to [`example_album`].
    pub added_id: i64,
}

/// Run the walkthrough against `store`, reporting each step as it completes.
pub async fn run<S, F>(store: &S, mut on_step: F) -> StoreResult<DemoReport>
where
    S: AlbumStore + ?Sized,
    F: FnMut(Step<'_>),
{
    let albums = store.albums_by_artist(EXAMPLE_ARTIST).await?;
    on_step(Step::AlbumsFound(&albums));

    let album = store.album_by_id(EXAMPLE_ID).await?;
    on_step(Step::AlbumFound(&album));

    let added_id = store.add_album(&example_album()).await?;
    on_step(Step::AlbumAdded(added_id));

    info!(found = albums.len(), added_id = added_id, "Walkthrough complete");
    Ok(DemoReport {
        albums,
        album,
        added_id,
    })
}
