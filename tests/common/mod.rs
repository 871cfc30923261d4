//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use recordings::{SqliteAlbumStore, SqliteConfig};

/// Definition of the `album` table the stores read and write.
pub const ALBUM_TABLE: &str = "CREATE TABLE album (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title VARCHAR(128) NOT NULL,
    artist VARCHAR(255) NOT NULL,
    price REAL NOT NULL
)";

/// The rows of the classic jazz catalogue, ids 1 to 4.
pub const JAZZ_CATALOGUE: &str = "
    INSERT INTO album (title, artist, price) VALUES
        ('Blue Train', 'John Coltrane', 56.99),
        ('Giant Steps', 'John Coltrane', 63.99),
        ('Jeru', 'Gerry Mulligan', 17.99),
        ('Sarah Vaughan', 'Sarah Vaughan', 34.98);
";

/// Same catalogue without any John Coltrane rows, ids 1 to 2.
pub const CATALOGUE_WITHOUT_COLTRANE: &str = "
    INSERT INTO album (title, artist, price) VALUES
        ('Jeru', 'Gerry Mulligan', 17.99),
        ('Sarah Vaughan', 'Sarah Vaughan', 34.98);
";

/// An in-memory store with an empty `album` table.
pub async fn empty_store() -> SqliteAlbumStore {
    SqliteAlbumStore::connect(SqliteConfig::memory().with_statement(ALBUM_TABLE))
        .await
        .expect("in-memory store should open")
}

/// An in-memory store seeded with `seed_sql`.
pub async fn seeded_store(seed_sql: &str) -> SqliteAlbumStore {
    let store = empty_store().await;
    store
        .connection()
        .execute_batch(seed_sql)
        .await
        .expect("seed rows should insert");
    store
}
