// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the guidefind command-line interface.
//!
//! Five subcommands: `search` runs one query against a catalog file,
//! `suggest` completes a prefix, `expand` shows what the thesaurus does to a
//! term, `inspect` summarizes a catalog (including malformed records), and
//! `interactive` drives a full session from stdin so navigation and analytics
//! can be tried without a UI.

pub mod commands;
pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "guidefind",
    about = "Typo-tolerant search over a catalog of installation guides",
    version
)]
pub struct Cli {
    /// JSON file with search settings (see SearchConfig)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and print ranked guides
    Search {
        /// Catalog JSON (array of guides, or {"guides": [...]})
        catalog: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only return guides in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Print hits as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Complete a prefix to guide display names
    Suggest {
        /// Catalog JSON
        catalog: PathBuf,

        /// Prefix typed so far
        prefix: String,

        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Show the thesaurus expansion of a term
    Expand {
        term: String,
    },

    /// Summarize a catalog file
    Inspect {
        /// Catalog JSON
        catalog: PathBuf,
    },

    /// Line-driven search session
    ///
    /// Each line replaces the query. `:next`, `:prev`, `:enter` and `:esc`
    /// are the navigation keys; `:stats` prints analytics; `:quit` exits.
    Interactive {
        /// Catalog JSON
        catalog: PathBuf,
    },
}
