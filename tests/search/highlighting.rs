//! Highlighted names and descriptions in search hits.

use guidefind::{SearchConfig, SearchEngine};

use super::common::{engine_for, make_entry, sample_catalog};

#[test]
fn test_default_markers() {
    let engine = engine_for(vec![make_entry("nginx", "NGINX", "web-server")]);
    let hit = &engine.search("ngin").unwrap()[0];
    assert_eq!(hit.highlighted_name, "<mark>NGIN</mark>X");
    assert_eq!(hit.highlighted_description, "Install <mark>NGIN</mark>X");
}

#[test]
fn test_custom_markers() {
    let config = SearchConfig {
        highlight_open: "**".into(),
        highlight_close: "**".into(),
        ..SearchConfig::default()
    };
    let engine = SearchEngine::new(config).unwrap().with_catalog(sample_catalog());
    let hit = &engine.search("kubernetes").unwrap()[0];
    assert_eq!(hit.highlighted_name, "**Kubernetes**");
}

#[test]
fn test_alias_highlights_the_alias() {
    let engine = engine_for(vec![make_entry("kubernetes", "Kubernetes", "orchestration")]);
    let hit = &engine.search("k8s").unwrap()[0];
    assert_eq!(hit.highlighted_name, "<mark>Kubernetes</mark>");
}

#[test]
fn test_non_ascii_text_survives() {
    let engine = engine_for(vec![make_entry("cafe", "Café Setup", "misc")]);
    let hit = &engine.search("setup").unwrap()[0];
    assert_eq!(hit.highlighted_name, "Café <mark>Setup</mark>");
}

#[test]
fn test_description_prefers_contiguous_alias_highlight() {
    let mut entry = make_entry("kubernetes", "Kubernetes", "orchestration");
    entry.description = "Kick 8 stops, then install Kubernetes".into();
    let engine = engine_for(vec![entry]);
    let hit = &engine.search("k8s").unwrap()[0];
    assert_eq!(
        hit.highlighted_description,
        "Kick 8 stops, then install <mark>Kubernetes</mark>"
    );
}
