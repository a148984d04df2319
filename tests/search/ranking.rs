//! Ranking order and tie-breaking.

use super::common::{assert_ranked, engine_for, entry_with, names, sample_engine};

#[test]
fn test_sample_queries_are_ranked() {
    let engine = sample_engine();
    for query in ["server", "ngin", "metrics", "k8s", "database", "go", "cache", "prometeus"] {
        let hits = engine.search(query).unwrap();
        assert_ranked(&hits);
    }
}

#[test]
fn test_equal_scores_fall_back_to_stars() {
    let engine = engine_for(vec![
        entry_with("alpha-one", "Alpha Tool", "misc", 10),
        entry_with("alpha-two", "Alpha Kit", "misc", 5_000),
    ]);
    let hits = engine.search("alpha").unwrap();
    assert_eq!(names(&hits), vec!["alpha-two", "alpha-one"]);
}

#[test]
fn test_equal_scores_and_stars_fall_back_to_display_name() {
    let engine = engine_for(vec![
        entry_with("alpha-one", "Alpha Tool", "misc", 10),
        entry_with("alpha-two", "Alpha Kit", "misc", 10),
    ]);
    let hits = engine.search("alpha").unwrap();
    assert_eq!(hits[0].score, hits[1].score);
    assert_eq!(names(&hits), vec!["alpha-two", "alpha-one"]);
}

#[test]
fn test_stronger_tier_beats_popularity() {
    let engine = engine_for(vec![
        entry_with("gitlab", "GitLab Runner", "ci", 50_000),
        entry_with("runner-setup", "Runner Setup", "ci", 0),
    ]);
    // the name outweighs the display name, whatever the stars say
    let hits = engine.search("runner").unwrap();
    assert_eq!(names(&hits)[0], "runner-setup");
}

#[test]
fn test_popular_category_hit_stays_below_display_name_substring() {
    let engine = engine_for(vec![
        entry_with("pgdb", "PostgreSQL", "database", 0),
        entry_with("mytool", "My Tool", "sql", 100_000),
    ]);
    // mid-word on displayName (0.7125) vs whole word on category (0.7)
    let hits = engine.search("sql").unwrap();
    assert_eq!(names(&hits), vec!["pgdb", "mytool"]);
}
