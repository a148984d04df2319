//! Debounce timing through the session API (time is injected).

use std::time::{Duration, Instant};

use guidefind::{Phase, SearchSession};

use super::common::sample_engine;

const MS: Duration = Duration::from_millis(1);

#[test]
fn test_burst_scores_only_the_last_query() {
    let t0 = Instant::now();
    let mut session = SearchSession::new(sample_engine().into_shared());

    session.input("ng", t0);
    session.input("ngi", t0 + 50 * MS);
    session.input("ngin", t0 + 100 * MS);
    assert_eq!(session.phase(), Phase::Debouncing);

    // 200ms after the first keystroke, but only 100ms after the last
    assert!(!session.poll(t0 + 200 * MS));
    assert_eq!(session.phase(), Phase::Debouncing);

    assert!(session.poll(t0 + 300 * MS));
    assert_eq!(session.phase(), Phase::Presenting);
    assert_eq!(session.state().normalized_query, "ngin");
    assert_eq!(session.stats().total, 1);

    // nothing left pending
    assert!(!session.poll(t0 + 10_000 * MS));
}

#[test]
fn test_short_query_cancels_pending_run() {
    let t0 = Instant::now();
    let mut session = SearchSession::new(sample_engine().into_shared());
    session.input("redis", t0);
    session.input("r", t0 + 10 * MS);
    assert_eq!(session.phase(), Phase::Presenting);
    assert!(session.deadline().is_none());
    assert!(!session.poll(t0 + 1_000 * MS));
    // the short query presents (empty) and is recorded; "redis" never ran
    assert_eq!(session.stats().total, 1);
    assert_eq!(session.stats().with_results, 0);
}

#[test]
fn test_deadline_tracks_configured_interval() {
    let t0 = Instant::now();
    let mut session = SearchSession::new(sample_engine().into_shared());
    session.input("redis", t0);
    assert_eq!(session.deadline(), Some(t0 + 200 * MS));
}
