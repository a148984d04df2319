//! Analytics collected by a session.

use std::sync::Arc;
use std::time::Instant;

use guidefind::{NavKey, NoopAnalytics, RingBufferAnalytics, SearchAnalytics, SearchSession};

use super::common::sample_engine;

fn run(session: &mut SearchSession, query: &str) {
    session.input(query, Instant::now());
    session.flush();
}

#[test]
fn test_success_and_click_rates() {
    let analytics = Arc::new(RingBufferAnalytics::new(100));
    let mut session =
        SearchSession::new(sample_engine().into_shared()).with_analytics(analytics.clone());

    run(&mut session, "nginx");
    session.navigate(NavKey::Next);
    session.navigate(NavKey::Confirm);
    run(&mut session, "zzzzqqqq");
    run(&mut session, "redis");
    run(&mut session, "x"); // short-circuit, presented empty

    let stats = session.stats();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.with_results, 2);
    assert_eq!(stats.with_selection, 1);
    assert!((stats.success_rate - 0.5).abs() < 1e-9);
    assert!((stats.click_rate - 0.25).abs() < 1e-9);

    let events = analytics.events();
    assert_eq!(events[0].query, "nginx");
    assert_eq!(events[0].selected.as_deref(), Some("nginx"));
    assert_eq!(events[1].result_count, 0);
    assert_eq!(events[3].query, "x");
    assert_eq!(events[3].result_count, 0);
}

#[test]
fn test_ring_is_bounded() {
    let analytics = Arc::new(RingBufferAnalytics::new(3));
    let mut session =
        SearchSession::new(sample_engine().into_shared()).with_analytics(analytics.clone());
    for query in ["nginx", "redis", "grafana", "caddy", "docker"] {
        run(&mut session, query);
    }
    let queries: Vec<_> = analytics.events().into_iter().map(|e| e.query).collect();
    assert_eq!(queries, vec!["grafana", "caddy", "docker"]);
}

#[test]
fn test_noop_analytics() {
    let mut session =
        SearchSession::new(sample_engine().into_shared()).with_analytics(Arc::new(NoopAnalytics));
    run(&mut session, "nginx");
    assert_eq!(session.stats().total, 0);
}
