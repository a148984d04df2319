//! Failure handling: missing catalog, malformed records, bad config.

use guidefind::{Catalog, ConfigError, SearchConfig, SearchEngine, SearchError};

use super::common::{engine_over, names};

#[test]
fn test_no_catalog() {
    let engine = SearchEngine::new(SearchConfig::default()).unwrap();
    let err = engine.search("nginx").unwrap_err();
    assert!(matches!(err, SearchError::CatalogUnavailable));
    assert!(!err.user_message().is_empty());
    assert!(engine.suggest("ng", 3).is_err());
}

#[test]
fn test_malformed_entry_does_not_sink_the_catalog() {
    let json = r#"[
        {"name": "nginx", "category": "web-server", "slug": "nginx"},
        {"name": "redis", "displayName": "Redis", "description": "Cache",
         "category": "database", "slug": "redis"}
    ]"#;
    let catalog = Catalog::from_json_str(json).unwrap();
    assert_eq!(catalog.diagnostics().len(), 2);
    let engine = engine_over(catalog.into_snapshot());
    assert_eq!(names(&engine.search("nginx").unwrap()), vec!["nginx"]);
    assert_eq!(names(&engine.search("redis").unwrap()), vec!["redis"]);
}

#[test]
fn test_invalid_config_rejected() {
    let config = SearchConfig {
        score_threshold: 12.0,
        ..SearchConfig::default()
    };
    assert!(matches!(
        SearchEngine::new(config),
        Err(SearchError::Config(ConfigError::ThresholdOutOfRange(_)))
    ));
}
