// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use webrank::{AuthorityEngine, Corpus, PageRankConfig, Searcher};

mod cli;
use cli::display::{self, themed, BOLD, CYAN};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("webrank=debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Rank {
            corpus,
            limit,
            pagerank,
        } => run_rank(corpus, *limit, pagerank.into()),
        Commands::Search {
            corpus,
            query,
            limit,
            pagerank,
        } => run_search(corpus, query, *limit, pagerank.into()),
    }
}

fn load_corpus(path: &Path) -> Result<Corpus> {
    let file =
        File::open(path).with_context(|| format!("failed to open corpus {}", path.display()))?;
    let corpus = Corpus::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to load corpus {}", path.display()))?;
    info!(pages = corpus.len(), path = %path.display(), "loaded corpus");
    Ok(corpus)
}

fn run_rank(path: &Path, limit: usize, config: PageRankConfig) -> Result<()> {
    let corpus = load_corpus(path)?;
    let engine = AuthorityEngine::new(&corpus, config).context("failed to rank corpus")?;
    let top = engine.top_pages(limit)?;
    let uniform = if corpus.is_empty() {
        0.0
    } else {
        1.0 / corpus.len() as f64
    };

    display::section_top(&format!("TOP {} OF {} PAGES", top.len(), corpus.len()));
    for (position, page) in top.iter().enumerate() {
        display::row(&format!(
            " {:>3}. {}  {}",
            position + 1,
            display::rank_value(page.rank, uniform),
            display::truncate(page.uri.as_str(), 60)
        ));
    }
    display::section_bot();

    let report = engine.report();
    display::section_top("CONVERGENCE");
    display::row(&format!(" iterations  {}", report.iterations));
    display::row(&format!(" converged   {}", display::flag(report.converged)));
    display::row(&format!(" max delta   {:.3e}", report.max_delta));
    display::section_bot();
    Ok(())
}

fn run_search(path: &Path, query: &[String], limit: usize, config: PageRankConfig) -> Result<()> {
    let corpus = load_corpus(path)?;
    let searcher = Searcher::new(&corpus, config).context("failed to build search engines")?;
    let hits = searcher.search(query, limit)?;

    display::section_top(&format!("{} HITS FOR \"{}\"", hits.len(), query.join(" ")));
    if hits.is_empty() {
        display::row(" no page matches the query");
    }
    for (position, hit) in hits.iter().enumerate() {
        let title = if hit.title.is_empty() {
            hit.uri.as_str()
        } else {
            hit.title.as_str()
        };
        display::row(&format!(
            " {:>3}. {}",
            position + 1,
            themed(CYAN, &[BOLD], &display::truncate(title, 70))
        ));
        display::row(&format!("      {}", display::truncate(hit.uri.as_str(), 72)));
        if !hit.blurb.is_empty() {
            display::row(&format!("      {}", display::truncate(&hit.blurb, 72)));
        }
        display::row(&format!(
            "      score {:.6}  relevance {:.4}  rank {:.5}",
            hit.score, hit.relevance, hit.page_rank
        ));
    }
    display::section_bot();
    Ok(())
}
