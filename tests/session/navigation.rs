//! Keyboard navigation through a live session.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use guidefind::{NavKey, Phase, RouteKey, SearchSession};

use super::common::sample_engine;

fn presenting(query: &str) -> SearchSession {
    let mut session = SearchSession::new(sample_engine().into_shared());
    session.input(query, Instant::now());
    assert!(session.flush());
    assert_eq!(session.phase(), Phase::Presenting);
    session
}

#[test]
fn test_selection_starts_unset_and_clamps() {
    let mut session = presenting("server");
    let count = session.state().results.len() as isize;
    assert!(count >= 2);
    assert_eq!(session.state().selected_index, -1);

    for _ in 0..(count + 3) {
        session.navigate(NavKey::Next);
    }
    assert_eq!(session.state().selected_index, count - 1);

    for _ in 0..(count + 3) {
        session.navigate(NavKey::Previous);
    }
    assert_eq!(session.state().selected_index, -1);
}

#[test]
fn test_confirm_fires_callback_with_route() {
    let seen: Arc<Mutex<Vec<RouteKey>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let mut session = SearchSession::new(sample_engine().into_shared())
        .on_select(move |route| sink.lock().unwrap().push(route.clone()));
    session.input("ngin", Instant::now());
    session.flush();

    assert_eq!(session.navigate(NavKey::Confirm), None);
    assert!(seen.lock().unwrap().is_empty());

    session.navigate(NavKey::Next);
    let route = session.navigate(NavKey::Confirm).unwrap();
    assert_eq!(route.to_string(), "/web-server/nginx");
    assert_eq!(seen.lock().unwrap().as_slice(), &[route]);
}

#[test]
fn test_dismiss_clears_everything() {
    let mut session = presenting("redis");
    session.navigate(NavKey::Next);
    session.navigate(NavKey::Dismiss);
    let state = session.state();
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.query_text.is_empty());
    assert!(state.results.is_empty());
    assert_eq!(state.selected_index, -1);
}

#[test]
fn test_new_results_reset_selection() {
    let mut session = presenting("server");
    session.navigate(NavKey::Next);
    session.input("database", Instant::now());
    session.flush();
    assert_eq!(session.state().selected_index, -1);
}

#[test]
fn test_clearing_the_query_goes_idle() {
    let mut session = presenting("redis");
    session.input("   ", Instant::now());
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.state().results.is_empty());
    assert!(!session.flush());
}
