//! The album record and its insert form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An album row as stored in the `album` table.
///
/// The identifier is assigned by the store on insert and never changes.
/// `price` is a binary float, so callers comparing prices should expect the
/// usual rounding artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Store-assigned identifier.
    pub id: i64,
    /// Album title.
    pub title: String,
    /// Artist name, the filter key for [`crate::AlbumStore::albums_by_artist`].
    pub artist: String,
    /// Price without currency.
    pub price: f64,
}

/// An album that has not been inserted yet and therefore has no identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlbum {
    /// Album title.
    pub title: String,
    /// Artist name.
    pub artist: String,
    /// Price without currency.
    pub price: f64,
}

impl NewAlbum {
    /// Create a new album to insert.
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Attach the identifier the store assigned.
    pub fn with_id(self, id: i64) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
        }
    }
}

impl Album {
    /// Compare every field except the identifier.
    pub fn fields_eq(&self, other: &NewAlbum) -> bool {
        self.title == other.title && self.artist == other.artist && self.price == other.price
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} by {} (${:.2})",
            self.id, self.title, self.artist, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_with_id() {
        let album = NewAlbum::new("Giant Steps", "John Coltrane", 63.99).with_id(4);

        assert_eq!(
            album,
            Album {
                id: 4,
                title: "Giant Steps".to_string(),
                artist: "John Coltrane".to_string(),
                price: 63.99,
            }
        );
    }

    #[test]
    fn test_fields_eq_ignores_id() {
        let new = NewAlbum::new("Jeru", "Gerry Mulligan", 17.99);
        let a = new.clone().with_id(1);
        let b = new.clone().with_id(2);

        assert!(a.fields_eq(&new));
        assert!(b.fields_eq(&new));
        assert!(!a.fields_eq(&NewAlbum::new("Jeru", "Gerry Mulligan", 18.0)));
    }

    #[test]
    fn test_display() {
        let album = NewAlbum::new("Blue Train", "John Coltrane", 56.99).with_id(1);
        assert_eq!(album.to_string(), "#1 Blue Train by John Coltrane ($56.99)");
    }
}
