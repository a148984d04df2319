//! End-to-end query scenarios over small hand-built catalogs.

use super::common::{engine_for, entry_with, make_entry, names, sample_engine};
use guidefind::{Field, FuzzyMatcher, GuideEntry, MatchTier};

#[test]
fn test_prefix_beats_weak_fuzzy() {
    let engine = engine_for(vec![
        make_entry("nagios", "Nagios", "monitoring"),
        make_entry("nginx", "NGINX", "web-server"),
    ]);
    let hits = engine.search("ngin").unwrap();
    assert_eq!(names(&hits)[0], "nginx");
    if let Some(nagios) = hits.iter().find(|h| h.entry.name == "nagios") {
        assert!(nagios.score < hits[0].score);
    }
}

#[test]
fn test_alias_reaches_entry_without_literal_match() {
    let engine = engine_for(vec![
        make_entry("kubernetes", "Kubernetes", "orchestration"),
        make_entry("nginx", "NGINX", "web-server"),
    ]);
    let hits = engine.search("k8s").unwrap();
    assert_eq!(names(&hits), vec!["kubernetes"]);
}

#[test]
fn test_below_min_length_is_empty() {
    let engine = sample_engine();
    assert!(engine.search("n").unwrap().is_empty());
    assert!(engine.search(" n ").unwrap().is_empty());
}

#[test]
fn test_typo_found_through_edit_distance() {
    let engine = engine_for(vec![make_entry("nginx", "NGINX", "web-server")]);
    let query = engine.prepare("nginix");
    let results = engine.rank(&query, &Default::default()).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].spans[0].tier, MatchTier::EditDistance);
}

#[test]
fn test_subsequence_needs_every_char() {
    let matcher = FuzzyMatcher::default();
    let hit = matcher.match_field("ngx", "nginx").unwrap();
    assert_eq!(hit.tier, MatchTier::FuzzyCharacter);
    assert!(matcher.match_field("ngz", "nginx").is_none());
}

#[test]
fn test_diacritics_fold_both_ways() {
    let engine = engine_for(vec![make_entry("cafe", "Café Setup", "misc")]);
    assert_eq!(names(&engine.search("cafe").unwrap()), vec!["cafe"]);
    assert_eq!(names(&engine.search("CAFÉ").unwrap()), vec!["cafe"]);
}

#[test]
fn test_exact_display_name_dominates_popularity() {
    let mut popular = entry_with("redis-cluster", "Redis Cluster", "database", 500_000);
    popular.description = "Redis redis redis".into();
    let exact = entry_with("redis", "Redis", "database", 0);
    let engine = engine_for(vec![popular, exact]);
    let hits = engine.search("redis").unwrap();
    assert_eq!(names(&hits)[0], "redis");
}

#[test]
fn test_acronym_of_description() {
    let mut entry = make_entry("haproxy", "HAProxy", "load-balancer");
    entry.description = "Reliable Proxy Balancer".into();
    let engine = engine_for(vec![entry, make_entry("redis", "Redis", "database")]);
    let hits = engine.search("rpb").unwrap();
    assert_eq!(names(&hits)[0], "haproxy");
}

#[test]
fn test_topics_and_language_are_searched() {
    let mut entry = make_entry("gitea", "Gitea", "vcs");
    entry.topics = vec!["self-hosted".into(), "forge".into()];
    entry.language = Some("Go".into());
    let engine = engine_for(vec![entry]);

    let query = engine.prepare("forge");
    let results = engine.rank(&query, &Default::default()).unwrap();
    assert_eq!(results[0].matched_field, Field::Topics);
}

#[test]
fn test_results_truncated_to_max() {
    let entries: Vec<GuideEntry> = (0..20)
        .map(|i| make_entry(&format!("server-{i}"), &format!("Server {i}"), "web-server"))
        .collect();
    let engine = engine_for(entries);
    assert_eq!(engine.search("server").unwrap().len(), 8);
}
