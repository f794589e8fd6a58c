//! Shared snippet store test suite
//!
//! Every check namespaces its keywords and messages so the suite can run
//! against a database that already holds other snippets.

#![allow(dead_code)]

use snippets::{Snippet, SnippetStore};

pub async fn run_all_tests(store: &mut dyn SnippetStore) {
    test_store_then_fetch(store).await;
    test_store_overwrites(store).await;
    test_fetch_missing(store).await;
    test_list_all_ordered(store).await;
    test_search_literal_substring(store).await;
    test_search_empty_matches_all(store).await;
    test_initialize_is_idempotent(store).await;
}

pub async fn test_store_then_fetch(store: &mut dyn SnippetStore) {
    let stored = store
        .store("suite-fetch", "hello world")
        .await
        .expect("store failed");
    assert_eq!(stored, Snippet::new("suite-fetch", "hello world"));

    let fetched = store.fetch("suite-fetch").await.expect("fetch failed");
    assert_eq!(fetched.as_deref(), Some("hello world"));
}

pub async fn test_store_overwrites(store: &mut dyn SnippetStore) {
    store.store("suite-overwrite", "first").await.unwrap();
    store.store("suite-overwrite", "second").await.unwrap();

    let fetched = store.fetch("suite-overwrite").await.unwrap();
    assert_eq!(fetched.as_deref(), Some("second"));

    let rows = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|s| s.keyword == "suite-overwrite")
        .count();
    assert_eq!(rows, 1, "overwrite must not duplicate the row");
}

pub async fn test_fetch_missing(store: &mut dyn SnippetStore) {
    let fetched = store.fetch("suite-never-stored").await.unwrap();
    assert_eq!(fetched, None);
}

pub async fn test_list_all_ordered(store: &mut dyn SnippetStore) {
    for (keyword, message) in [
        ("suite-list-c", "third"),
        ("suite-list-a", "first"),
        ("suite-list-b", "second"),
    ] {
        store.store(keyword, message).await.unwrap();
    }

    let listed: Vec<Snippet> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|s| s.keyword.starts_with("suite-list-"))
        .collect();
    assert_eq!(
        listed,
        vec![
            Snippet::new("suite-list-a", "first"),
            Snippet::new("suite-list-b", "second"),
            Snippet::new("suite-list-c", "third"),
        ]
    );
}

pub async fn test_search_literal_substring(store: &mut dyn SnippetStore) {
    store.store("suite-search-1", "needle 100% sure").await.unwrap();
    store.store("suite-search-2", "needle 1000 sure").await.unwrap();
    store.store("suite-search-3", "snake_case needle").await.unwrap();
    store.store("suite-search-4", "snakeXcase needle").await.unwrap();

    let keywords = |found: Vec<Snippet>| -> Vec<String> {
        found
            .into_iter()
            .map(|s| s.keyword)
            .filter(|k| k.starts_with("suite-search-"))
            .collect()
    };

    let found = store.search("needle").await.unwrap();
    assert_eq!(
        keywords(found),
        vec![
            "suite-search-1",
            "suite-search-2",
            "suite-search-3",
            "suite-search-4"
        ]
    );

    // % and _ match themselves, not any character
    let found = store.search("100%").await.unwrap();
    assert_eq!(keywords(found), vec!["suite-search-1"]);

    let found = store.search("snake_case").await.unwrap();
    assert_eq!(keywords(found), vec!["suite-search-3"]);

    let found = store.search("no such text anywhere").await.unwrap();
    assert!(keywords(found).is_empty());
}

pub async fn test_search_empty_matches_all(store: &mut dyn SnippetStore) {
    store.store("suite-empty-search", "anything").await.unwrap();

    let all = store.list_all().await.unwrap();
    let found = store.search("").await.unwrap();
    assert_eq!(found.len(), all.len());
    assert!(found.iter().any(|s| s.keyword == "suite-empty-search"));
}

pub async fn test_initialize_is_idempotent(store: &mut dyn SnippetStore) {
    store.store("suite-init", "kept").await.unwrap();
    store.initialize().await.expect("second initialize failed");

    let fetched = store.fetch("suite-init").await.unwrap();
    assert_eq!(fetched.as_deref(), Some("kept"));
}
