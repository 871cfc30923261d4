//! Integration tests for the walkthrough run by the binary.

mod common;

use pretty_assertions::assert_eq;
use recordings::demo::{self, EXAMPLE_ID, example_album};
use recordings::{AlbumStore, NewAlbum, Operation, StoreError};

use common::{JAZZ_CATALOGUE, empty_store, seeded_store};

#[tokio::test]
async fn test_walkthrough_on_jazz_catalogue() {
    let store = seeded_store(JAZZ_CATALOGUE).await;
    let mut lines = Vec::new();

    let report = demo::run(&store, |step| lines.push(step.to_string()))
        .await
        .unwrap();

    assert_eq!(report.albums.len(), 2);
    assert_eq!(
        report.album,
        NewAlbum::new("Blue Train", "John Coltrane", 56.99).with_id(EXAMPLE_ID)
    );
    assert_eq!(report.added_id, 5);

    assert_eq!(
        lines,
        vec![
            "Albums found: [#1 Blue Train by John Coltrane ($56.99), #2 Giant Steps by John Coltrane ($63.99)]"
                .to_string(),
            "Album found: #1 Blue Train by John Coltrane ($56.99)".to_string(),
            "ID of added album: 5".to_string(),
        ]
    );

    let added = store.album_by_id(report.added_id).await.unwrap();
    assert!(added.fields_eq(&example_album()));
}

#[tokio::test]
async fn test_walkthrough_twice_adds_two_albums() {
    let store = seeded_store(JAZZ_CATALOGUE).await;

    let first = demo::run(&store, |_| {}).await.unwrap();
    let second = demo::run(&store, |_| {}).await.unwrap();

    assert_ne!(first.added_id, second.added_id);
    assert_eq!(store.albums_by_artist("The New Artist").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_walkthrough_stops_at_missing_album() {
    let store = empty_store().await;
    let mut lines = Vec::new();

    let err = demo::run(&store, |step| lines.push(step.to_string()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::NotFound {
            operation: Operation::AlbumById,
            id: 1
        }
    ));
    assert_eq!(lines, vec!["Albums found: []".to_string()]);
    assert!(store.albums_by_artist("The New Artist").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_walkthrough_through_trait_object() {
    let store = seeded_store(JAZZ_CATALOGUE).await;
    let dyn_store: &dyn AlbumStore = &store;

    let report = demo::run(dyn_store, |_| {}).await.unwrap();
    assert_eq!(report.album.id, EXAMPLE_ID);
}
