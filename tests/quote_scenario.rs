//! End-to-end controller scenario against a stub quote service and a file store.

mod common;

use axum::http::StatusCode;
use common::spawn_quote_server;
use rquote::particles::ParticleField;
use rquote::store::FAVORITES_KEY;
use rquote::{FavoritesStore, HttpQuoteService, JsonFileStore, KeyValueStore, QuoteController};
use std::sync::Arc;
use tempfile::TempDir;

fn stored_list(store: &JsonFileStore) -> Vec<String> {
    store
        .get_item(FAVORITES_KEY)
        .unwrap()
        .map(|raw| serde_json::from_str(&raw).unwrap())
        .unwrap_or_default()
}

#[tokio::test]
async fn fetch_favorite_unfavorite_then_fail() {
    let (url, _stub) = spawn_quote_server(vec![
        (StatusCode::OK, r#"{"quote":"Test quote"}"#),
        (StatusCode::INTERNAL_SERVER_ERROR, ""),
    ])
    .await
    .expect("spawn server");

    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("storage.json")));
    let service = HttpQuoteService::new(url);
    let mut controller = QuoteController::new(
        "Scenario",
        FavoritesStore::new(store.clone()),
        ParticleField::new(100.0, 100.0),
        false,
    )
    .unwrap();

    assert!(controller.state().favorites.is_empty());

    controller.request_quote(&service).await;
    assert_eq!(controller.state().current_quote.as_str(), "Test quote");
    assert_eq!(controller.state().quote_count, 1);
    assert!(controller.state().error.is_none());

    controller.toggle_favorite();
    assert_eq!(stored_list(&store), vec!["Test quote"]);

    controller.toggle_favorite();
    assert!(stored_list(&store).is_empty());

    controller.request_quote(&service).await;
    let state = controller.state();
    assert!(state.error.as_deref().is_some_and(|e| !e.is_empty()));
    assert_eq!(state.current_quote.as_str(), "Test quote");
    assert_eq!(state.quote_count, 1);
    assert!(!state.loading);
}

#[tokio::test]
async fn favorites_survive_restart() {
    let (url, _stub) = spawn_quote_server(vec![
        (StatusCode::OK, r#"{"quote":"first"}"#),
        (StatusCode::OK, r#"{"quote":"second"}"#),
    ])
    .await
    .expect("spawn server");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("storage.json");
    let service = HttpQuoteService::new(url);

    {
        let store = Arc::new(JsonFileStore::new(&path));
        let mut controller = QuoteController::new(
            "Run 1",
            FavoritesStore::new(store),
            ParticleField::new(10.0, 10.0),
            false,
        )
        .unwrap();
        controller.request_quote(&service).await;
        controller.toggle_favorite();
        controller.request_quote(&service).await;
        controller.toggle_favorite();
    }

    let store = Arc::new(JsonFileStore::new(&path));
    let controller = QuoteController::new(
        "Run 2",
        FavoritesStore::new(store),
        ParticleField::new(10.0, 10.0),
        false,
    )
    .unwrap();
    let restored: Vec<&str> = controller
        .state()
        .favorites
        .iter()
        .map(|q| q.as_str())
        .collect();
    assert_eq!(restored, vec!["first", "second"]);
}

#[test]
fn damaged_store_file_does_not_block_startup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, r#"{"favoriteQuotes": ["cut off"#).unwrap();

    let store = Arc::new(JsonFileStore::new(&path));
    let mut controller = QuoteController::new(
        "Damaged",
        FavoritesStore::new(store.clone()),
        ParticleField::new(10.0, 10.0),
        false,
    )
    .expect("startup should survive a damaged store");
    assert!(controller.state().favorites.is_empty());

    controller.complete_fetch(Ok(rquote::Quote::new("after repair")));
    controller.toggle_favorite();
    assert_eq!(stored_list(&store), vec!["after repair"]);
}

#[test]
fn hand_edited_favorites_list_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, r#"{"favoriteQuotes":["a","b"]}"#).unwrap();

    let controller = QuoteController::new(
        "Edited",
        FavoritesStore::new(Arc::new(JsonFileStore::new(&path))),
        ParticleField::new(10.0, 10.0),
        false,
    )
    .unwrap();
    let loaded: Vec<&str> = controller
        .state()
        .favorites
        .iter()
        .map(|q| q.as_str())
        .collect();
    assert_eq!(loaded, vec!["a", "b"]);
}
