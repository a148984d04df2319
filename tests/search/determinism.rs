//! Identical inputs give identical outputs.

use super::common::{engine_over, names, sample_catalog, sample_engine};

#[test]
fn test_repeated_search_is_identical() {
    let engine = sample_engine();
    for query in ["ngin", "server", "k8s", "dashbaords"] {
        let first = engine.search(query).unwrap();
        let second = engine.search(query).unwrap();
        assert_eq!(names(&first), names(&second));
        let scores: Vec<f64> = first.iter().map(|h| h.score).collect();
        let again: Vec<f64> = second.iter().map(|h| h.score).collect();
        assert_eq!(scores, again);
    }
}

#[test]
fn test_independent_engines_agree() {
    let a = engine_over(sample_catalog());
    let b = engine_over(sample_catalog());
    for query in ["web", "container", "monitoring"] {
        assert_eq!(names(&a.search(query).unwrap()), names(&b.search(query).unwrap()));
    }
}
