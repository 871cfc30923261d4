//! SQL statements shared by every backend.
//!
//! Reads name their columns explicitly so that decoding does not depend on
//! the column order of the `album` table. Placeholders use `?`, which both
//! MySQL and SQLite accept.

/// Columns selected by every read, in decode order.
pub const ALBUM_COLUMNS: [&str; 4] = ["id", "title", "artist", "price"];

/// Select all albums by one artist.
pub const SELECT_ALBUMS_BY_ARTIST: &str =
    "SELECT id, title, artist, price FROM album WHERE artist = ?";

/// Select at most one album by identifier.
pub const SELECT_ALBUM_BY_ID: &str =
    "SELECT id, title, artist, price FROM album WHERE id = ? LIMIT 1";

/// Insert a new album; the identifier is assigned by the store.
pub const INSERT_ALBUM: &str = "INSERT INTO album (title, artist, price) VALUES (?, ?, ?)";

/// Liveness check run right after connecting.
pub const PING: &str = "SELECT 1";
