// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the webrank command-line interface.
//!
//! Two subcommands over a JSON corpus file: `rank` lists pages by PageRank
//! with the convergence report, and `search` runs a query through relevance
//! weighted by rank. Both accept the PageRank parameters as flags.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use webrank::PageRankConfig;

#[derive(Parser)]
#[command(
    name = "webrank",
    about = "TF-IDF relevance and PageRank authority over a crawled corpus",
    version
)]
pub struct Cli {
    /// Log engine construction details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the highest-ranked pages of a corpus
    Rank {
        /// Corpus file: JSON array of {uri, title, links, words}
        corpus: PathBuf,

        /// Number of pages to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        #[command(flatten)]
        pagerank: PageRankArgs,
    },

    /// Search a corpus and display the best hits
    Search {
        /// Corpus file: JSON array of {uri, title, links, words}
        corpus: PathBuf,

        /// Query terms
        #[arg(required = true)]
        query: Vec<String>,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        #[command(flatten)]
        pagerank: PageRankArgs,
    },
}

/// PageRank parameters; each defaults to the library default.
#[derive(Args)]
pub struct PageRankArgs {
    /// Probability of following a link rather than jumping (0 < d < 1)
    #[arg(long, default_value_t = webrank::DEFAULT_DAMPING)]
    pub damping: f64,

    /// Stop once no rank moves by more than this
    #[arg(long, default_value_t = webrank::DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Maximum number of PageRank passes
    #[arg(long, default_value_t = webrank::DEFAULT_ITERATION_LIMIT)]
    pub iterations: usize,
}

impl From<&PageRankArgs> for PageRankConfig {
    fn from(args: &PageRankArgs) -> Self {
        PageRankConfig {
            damping: args.damping,
            epsilon: args.epsilon,
            limit: args.iterations,
        }
    }
}
