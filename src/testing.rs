// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::types::{Field, GuideEntry, ScoredResult};

/// Create a guide with default fields.
///
/// This is the canonical implementation used across all tests. The slug is the
/// name, the description is `Install <display>`, no stars, topics or language.
pub fn make_entry(name: &str, display: &str, category: &str) -> GuideEntry {
    GuideEntry {
        name: name.to_string(),
        display_name: display.to_string(),
        description: format!("Install {}", display),
        category: category.to_string(),
        language: None,
        topics: vec![],
        stars: 0,
        slug: name.to_string(),
    }
}

/// Create a guide with a star count.
pub fn entry_with(name: &str, display: &str, category: &str, stars: u64) -> GuideEntry {
    GuideEntry {
        stars,
        ..make_entry(name, display, category)
    }
}

/// Create a scored result without spans, for ranking tests.
pub fn make_result(name: &str, display: &str, score: f64, stars: u64) -> ScoredResult {
    ScoredResult {
        entry: Arc::new(entry_with(name, display, "misc", stars)),
        score,
        matched_field: Field::Name,
        spans: vec![],
    }
}

/// A small catalog resembling a real one.
pub fn sample_entries() -> Vec<GuideEntry> {
    let guide = |name: &str,
                 display: &str,
                 description: &str,
                 category: &str,
                 language: Option<&str>,
                 topics: &[&str],
                 stars: u64| GuideEntry {
        name: name.to_string(),
        display_name: display.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        language: language.map(str::to_string),
        topics: topics.iter().map(|t| t.to_string()).collect(),
        stars,
        slug: name.to_string(),
    };

    vec![
        guide(
            "nginx",
            "NGINX",
            "High performance web server and reverse proxy",
            "web-server",
            Some("C"),
            &["http", "proxy", "load-balancer"],
            21_000,
        ),
        guide(
            "nagios",
            "Nagios",
            "Infrastructure monitoring and alerting",
            "monitoring",
            Some("C"),
            &["alerts", "checks"],
            1_200,
        ),
        guide(
            "kubernetes",
            "Kubernetes",
            "Production-grade container orchestration",
            "orchestration",
            Some("Go"),
            &["containers", "cluster"],
            108_000,
        ),
        guide(
            "redis",
            "Redis",
            "In-memory data store used as a cache and message broker",
            "database",
            Some("C"),
            &["cache", "key-value"],
            66_000,
        ),
        guide(
            "postgresql",
            "PostgreSQL",
            "Advanced open source relational database",
            "database",
            Some("C"),
            &["sql", "relational"],
            15_000,
        ),
        guide(
            "prometheus",
            "Prometheus",
            "Metrics collection and time series database",
            "monitoring",
            Some("Go"),
            &["metrics", "alerting"],
            54_000,
        ),
        guide(
            "grafana",
            "Grafana",
            "Dashboards for metrics and logs",
            "monitoring",
            Some("TypeScript"),
            &["dashboards", "visualization"],
            62_000,
        ),
        guide(
            "docker",
            "Docker Engine",
            "Build and run containers",
            "containers",
            Some("Go"),
            &["containers", "images"],
            68_000,
        ),
        guide(
            "caddy",
            "Caddy",
            "Web server with automatic HTTPS",
            "web-server",
            Some("Go"),
            &["http", "tls"],
            57_000,
        ),
        guide(
            "nodejs",
            "Node.js",
            "JavaScript runtime built on V8",
            "runtime",
            Some("JavaScript"),
            &["javascript", "npm"],
            106_000,
        ),
    ]
}

pub fn sample_catalog() -> Arc<Catalog> {
    Catalog::new(sample_entries()).into_snapshot()
}
