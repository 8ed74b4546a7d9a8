// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sihsearch command-line interface.
//!
//! `search` runs the full pipeline, `facets` prints the catalog, `show` and
//! `stats` inspect the corpus, and `bookmarks` manages the saved list. Every
//! command reads the corpus from `--data` (or `SIHSEARCH_DATA`); bookmark
//! commands also use `--bookmarks-dir` (or `SIHSEARCH_HOME`).

pub mod display;

use clap::{ArgAction, Args, Parser, Subcommand};
use sihsearch::SortMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sihsearch",
    about = "Search, filter and bookmark hackathon problem statements",
    version
)]
pub struct Cli {
    /// Corpus file: a JSON array of problem statements
    #[arg(
        long,
        global = true,
        env = "SIHSEARCH_DATA",
        default_value = "data/problems.json"
    )]
    pub data: PathBuf,

    /// Directory for saved bookmarks [default: $HOME/.sihsearch]
    #[arg(long, global = true, env = "SIHSEARCH_HOME")]
    pub bookmarks_dir: Option<PathBuf>,

    /// More log output (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Bookmark directory, falling back to `$HOME/.sihsearch`.
    pub fn bookmarks_dir(&self) -> PathBuf {
        if let Some(dir) = &self.bookmarks_dir {
            return dir.clone();
        }
        match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".sihsearch"),
            None => PathBuf::from(".sihsearch"),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search problem statements
    Search(SearchArgs),

    /// List every facet category and its values
    Facets {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print one problem statement in full
    Show {
        /// Problem statement id (e.g. SIH1234)
        id: String,

        /// Print JSON instead of a card
        #[arg(long)]
        json: bool,
    },

    /// Corpus summary: size, submission range, difficulty mix
    Stats {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Manage saved problem statements
    Bookmarks {
        #[command(subcommand)]
        action: BookmarkAction,
    },
}

#[derive(Args)]
pub struct SearchArgs {
    /// Free-text query; omit to list everything
    pub query: Option<String>,

    /// Keep records carrying this tag (repeatable; any tag matches)
    #[arg(short = 't', long = "tag")]
    pub tags: Vec<String>,

    /// Minimum submission count (inclusive)
    #[arg(long)]
    pub min: Option<u32>,

    /// Maximum submission count (inclusive)
    #[arg(long)]
    pub max: Option<u32>,

    /// Result order: relevance, mostSubmissions or fewestSubmissions
    #[arg(long, default_value = "relevance")]
    pub sort: SortMode,

    /// Maximum number of results to print
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Show the per-term score breakdown for each result
    #[arg(long)]
    pub explain: bool,

    /// Print JSON instead of cards
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum BookmarkAction {
    /// List saved problem statements, most recent first
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Save a problem statement
    Add {
        id: String,
    },

    /// Forget a saved problem statement
    Remove {
        id: String,
    },

    /// Save if not saved, forget otherwise
    Toggle {
        id: String,
    },
}
