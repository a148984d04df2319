// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword aliases: "k8s" finds Kubernetes guides.
//!
//! The table is directional. `k8s → kubernetes` says nothing about
//! `kubernetes → k8s`; where both directions are wanted, both are declared.
//!
//! Expansion has two passes. An exact key hit adds that key's aliases. For
//! terms longer than 3 chars, a second pass scans every key and adds the
//! aliases of any key that contains the term or is contained in it ("partial
//! affinity", so "postgresql" picks up the aliases of "postgres"). The scan is
//! linear in the table size, which is fine: the table has a few dozen keys and
//! expansion runs once per query, not once per catalog entry.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Terms at or below this length skip the partial-affinity pass.
pub const PARTIAL_AFFINITY_MIN_LEN: usize = 4;

const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    ("k8s", &["kubernetes"]),
    ("kube", &["kubernetes"]),
    ("kubernetes", &["k8s", "container", "orchestration"]),
    ("docker", &["container", "containers"]),
    ("container", &["docker", "podman"]),
    ("js", &["javascript", "node"]),
    ("javascript", &["js", "node"]),
    ("node", &["nodejs", "javascript"]),
    ("ts", &["typescript"]),
    ("typescript", &["ts"]),
    ("py", &["python"]),
    ("python", &["py", "pip"]),
    ("rb", &["ruby"]),
    ("golang", &["go"]),
    ("pg", &["postgresql", "postgres"]),
    ("postgres", &["postgresql", "pg"]),
    ("mysql", &["mariadb", "database"]),
    ("mongo", &["mongodb"]),
    ("db", &["database"]),
    ("database", &["db", "sql"]),
    ("web", &["http", "server"]),
    ("webserver", &["nginx", "apache", "caddy"]),
    ("proxy", &["nginx", "haproxy", "traefik"]),
    ("cache", &["redis", "memcached"]),
    ("queue", &["rabbitmq", "kafka"]),
    ("ci", &["jenkins", "gitlab", "pipeline"]),
    ("cd", &["argocd", "deployment"]),
    ("monitoring", &["prometheus", "grafana", "nagios"]),
    ("metrics", &["prometheus", "monitoring"]),
    ("logs", &["logging", "elasticsearch", "loki"]),
    ("search", &["elasticsearch", "meilisearch"]),
    ("iac", &["terraform", "ansible"]),
    ("vm", &["virtualization", "virtualbox"]),
    ("ssl", &["tls", "certificate", "letsencrypt"]),
    ("tls", &["ssl", "certificate"]),
    ("git", &["version-control", "gitea"]),
    ("llm", &["ollama", "ai"]),
];

/// Directional keyword → aliases map. Keys and aliases are folded lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, BTreeSet<String>>,
}

static BUILTIN: LazyLock<AliasTable> = LazyLock::new(|| AliasTable::from_pairs(BUILTIN_ALIASES));

impl AliasTable {
    /// The process-wide built-in table.
    pub fn builtin() -> &'static AliasTable {
        &BUILTIN
    }

    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Self {
        let mut table = AliasTable::default();
        for (key, aliases) in pairs {
            table.insert(key, aliases.iter().copied());
        }
        table
    }

    /// Add aliases under `key`, merging with any already declared.
    pub fn insert<'a>(&mut self, key: &str, aliases: impl IntoIterator<Item = &'a str>) {
        let key = crate::normalize(key);
        if key.is_empty() {
            return;
        }
        let slot = self.entries.entry(key.clone()).or_default();
        slot.extend(
            aliases
                .into_iter()
                .map(crate::normalize)
                .filter(|a| !a.is_empty() && *a != key),
        );
    }

    /// Merge user-supplied aliases (e.g. from config) over this table.
    pub fn extended<'a, I, A>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, A)>,
        A: IntoIterator<Item = &'a String>,
    {
        for (key, aliases) in extra {
            self.insert(key, aliases.into_iter().map(String::as_str));
        }
        self
    }

    pub fn aliases(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expand one lowercase, trimmed term. The result always contains `term`.
    pub fn expand(&self, term: &str) -> BTreeSet<String> {
        let mut expanded = BTreeSet::new();
        expanded.insert(term.to_string());
        if term.is_empty() {
            return expanded;
        }

        if let Some(aliases) = self.entries.get(term) {
            expanded.extend(aliases.iter().cloned());
        }

        if term.chars().count() >= PARTIAL_AFFINITY_MIN_LEN {
            for (key, aliases) in &self.entries {
                if key.contains(term) || term.contains(key.as_str()) {
                    expanded.extend(aliases.iter().cloned());
                }
            }
        }

        expanded
    }
}
