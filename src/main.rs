// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;
use guidefind::SearchOptions;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{commands, Cli, Commands};

/// Env var holding the log filter, e.g. `GUIDEFIND_LOG=guidefind=debug`.
const LOG_ENV: &str = "GUIDEFIND_LOG";

fn main() -> Result<()> {
    // stderr keeps stdout clean for results and JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            catalog,
            query,
            limit,
            category,
            json,
        } => {
            if let Some(limit) = limit {
                config.max_results = limit;
            }
            let options = SearchOptions { limit, category };
            commands::search(config, &catalog, &query, &options, json)
        }
        Commands::Suggest {
            catalog,
            prefix,
            limit,
        } => commands::suggest(config, &catalog, &prefix, limit),
        Commands::Expand { term } => commands::expand(config, &term),
        Commands::Inspect { catalog } => commands::inspect(config, &catalog),
        Commands::Interactive { catalog } => commands::interactive(config, &catalog),
    }
}
