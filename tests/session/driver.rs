//! Async debounce driver, on a paused tokio clock.

use std::time::Duration;

use guidefind::DebouncedSearch;

use super::common::sample_engine;

const INTERVAL: Duration = Duration::from_millis(200);

#[tokio::test(start_paused = true)]
async fn test_burst_publishes_last_query_once() {
    let search = DebouncedSearch::spawn(sample_engine().into_shared(), INTERVAL);
    let mut updates = search.subscribe();

    search.update_query("ng");
    tokio::time::sleep(Duration::from_millis(50)).await;
    search.update_query("ngi");
    tokio::time::sleep(Duration::from_millis(50)).await;
    search.update_query("ngin");

    updates.changed().await.unwrap();
    let update = updates.borrow_and_update().clone().unwrap();
    assert_eq!(update.query, "ngin");
    assert_eq!(update.hits[0].entry.name, "nginx");
    assert!(update.error.is_none());

    tokio::time::sleep(INTERVAL * 5).await;
    assert!(!updates.has_changed().unwrap());

    search.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_nothing_published_before_quiet_interval() {
    let search = DebouncedSearch::spawn(sample_engine().into_shared(), INTERVAL);
    search.update_query("redis");
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(search.latest().is_none());

    tokio::time::sleep(Duration::from_millis(100)).await;
    let update = search.latest().unwrap();
    assert_eq!(update.query, "redis");
    search.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_missing_catalog_reported_in_update() {
    let engine = guidefind::SearchEngine::new(Default::default()).unwrap().into_shared();
    let search = DebouncedSearch::spawn(engine, INTERVAL);
    let mut updates = search.subscribe();
    search.update_query("nginx");
    updates.changed().await.unwrap();
    let update = updates.borrow().clone().unwrap();
    assert!(update.hits.is_empty());
    assert!(update.error.is_some());
    search.shutdown().await;
}
