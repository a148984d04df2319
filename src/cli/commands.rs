// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use guidefind::{
    Catalog, NavKey, Phase, ScoredResult, SearchConfig, SearchEngine, SearchHit, SearchOptions,
    SearchSession,
};

use super::display::{self, themed, BOLD, CYAN, DIM, GRAY, RED};

pub fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog = Catalog::from_json_file(path)
        .with_context(|| format!("loading catalog {}", path.display()))?;
    for diagnostic in catalog.diagnostics() {
        tracing::warn!("{diagnostic}");
    }
    Ok(catalog)
}

/// Engine over `catalog`, with terminal highlight markers unless `markup` is set.
fn open_engine(mut config: SearchConfig, catalog: &Path, markup: bool) -> Result<SearchEngine> {
    if !markup {
        let (open, close) = display::highlight_markers();
        config.highlight_open = open;
        config.highlight_close = close;
    }
    let catalog = load_catalog(catalog)?.into_snapshot();
    Ok(SearchEngine::new(config)?.with_catalog(catalog))
}

pub fn search(
    config: SearchConfig,
    catalog: &Path,
    query: &str,
    options: &SearchOptions,
    json: bool,
) -> Result<()> {
    let engine = open_engine(config, catalog, json)?;
    let prepared = engine.prepare(query);
    let start = Instant::now();
    let results = engine.rank(&prepared, options)?;
    let hits = engine.highlight_all(&prepared, &results);
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    display::section_top(&format!("{} results for \"{}\"", hits.len(), query));
    if hits.is_empty() {
        display::row(&themed(GRAY, &[], " no matching guides"));
    }
    for (rank, (result, hit)) in results.iter().zip(&hits).enumerate() {
        print_hit(rank + 1, result, hit);
    }
    display::row(&themed(GRAY, &[DIM], &format!(" {:.2?}", elapsed)));
    display::section_bot();
    Ok(())
}

fn print_hit(rank: usize, result: &ScoredResult, hit: &SearchHit) {
    let tier = result
        .spans
        .first()
        .map(|s| display::tier_badge(s.tier))
        .unwrap_or_default();
    display::row(&format!(
        " {:>2}. {}  {}  {} {}",
        rank,
        display::score_colored(hit.score),
        hit.highlighted_name,
        tier,
        themed(GRAY, &[], &format!("({})", result.matched_field)),
    ));
    display::row(&format!("       {}", hit.highlighted_description));
    display::row(&themed(CYAN, &[DIM], &format!("       {}", hit.entry.route())));
}

pub fn suggest(config: SearchConfig, catalog: &Path, prefix: &str, limit: usize) -> Result<()> {
    let engine = open_engine(config, catalog, true)?;
    for name in engine.suggest(prefix, limit)? {
        println!("{name}");
    }
    Ok(())
}

pub fn expand(config: SearchConfig, term: &str) -> Result<()> {
    let engine = SearchEngine::new(config)?;
    let query = engine.prepare(term);
    println!("{}", themed(CYAN, &[BOLD], &query.normalized));
    for alias in query.expanded.iter().filter(|t| **t != query.normalized) {
        println!("  → {alias}");
    }
    Ok(())
}

pub fn inspect(config: SearchConfig, catalog_path: &Path) -> Result<()> {
    let catalog = load_catalog(catalog_path)?.into_snapshot();
    let diagnostics = catalog.diagnostics().len();
    let engine = SearchEngine::new(config)?.with_catalog(catalog.clone());
    let index = engine.index();

    let mut categories: Vec<&str> = catalog.entries().iter().map(|e| e.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();

    display::section_top(&format!("{}", catalog_path.display()));
    display::row(&format!(" guides       {}", catalog.len()));
    display::row(&format!(" categories   {}", categories.len()));
    display::row(&format!(" tokens       {}", index.token_count()));
    let malformed = format!(" malformed    {}", diagnostics);
    if diagnostics > 0 {
        display::row(&themed(RED, &[BOLD], &malformed));
        for diagnostic in catalog.diagnostics() {
            display::row(&themed(GRAY, &[], &format!("   {}", diagnostic)));
        }
    } else {
        display::row(&malformed);
    }
    display::row(&themed(GRAY, &[], &format!(" {}", categories.join(", "))));
    display::section_bot();
    Ok(())
}

pub fn interactive(config: SearchConfig, catalog: &Path) -> Result<()> {
    let engine = open_engine(config, catalog, false)?.into_shared();
    let mut session =
        SearchSession::new(engine).on_select(|route| println!("→ open {route}"));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let key = match line.trim() {
            ":quit" | ":q" => break,
            ":next" | ":n" => Some(NavKey::Next),
            ":prev" | ":p" => Some(NavKey::Previous),
            ":enter" => Some(NavKey::Confirm),
            ":esc" => Some(NavKey::Dismiss),
            ":stats" => {
                println!("{}", serde_json::to_string_pretty(&session.stats())?);
                None
            }
            _ => {
                session.input(&line, Instant::now());
                session.flush();
                None
            }
        };
        if let Some(key) = key {
            session.navigate(key);
        }
        render_session(&session);
        prompt(&mut stdout)?;
    }
    Ok(())
}

fn render_session(session: &SearchSession) {
    let state = session.state();
    match state.phase {
        Phase::Idle => {}
        Phase::Error => {
            println!("{}", themed(RED, &[], state.error.unwrap_or("search failed")));
        }
        _ => {
            for (i, hit) in state.hits.iter().enumerate() {
                let marker = if i as isize == state.selected_index { ">" } else { " " };
                println!("{} {}  {}", marker, hit.highlighted_name, display::truncate(&hit.entry.description, 60));
            }
        }
    }
}

fn prompt(stdout: &mut io::Stdout) -> Result<()> {
    write!(stdout, "{} ", themed(CYAN, &[BOLD], "search>"))?;
    stdout.flush()?;
    Ok(())
}
