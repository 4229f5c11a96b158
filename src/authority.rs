// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! PageRank over the link graph of a corpus.
//!
//! # Webgraph
//!
//! Each page keeps only the outbound links that land on *another* page of the
//! corpus. Self-links are dropped, as are links leaving the corpus, and
//! repeated links to one target count once. The graph only lives for the
//! length of construction; the engine keeps nothing but the final ranks.
//!
//! # Iteration
//!
//! ```text
//! previous[p]    = 1 / N
//! accumulator[p] = (1 - d) / N                    (the surf term)
//!
//! each pass, for every page p with rank r = previous[p]:
//!     no outbound links  →  every page receives d * r / N
//!     otherwise          →  each link target receives d * r / out(p)
//!
//! converged when |previous[p] - accumulator[p]| <= epsilon for every p
//! ```
//!
//! On convergence the engine keeps `previous`, not the pass that triggered
//! the test: the published ranks trail the final pass by one iteration, and
//! are within `epsilon` of it by construction. When `limit` passes run
//! without converging, the last completed pass is published.
//!
//! Every pass redistributes exactly the mass it started with, so the ranks
//! always sum to 1.

use std::cmp::Ordering;
use std::mem;

use tracing::{debug, trace};
use url::Url;

use crate::containers::{top_k, BucketedMap, BucketedSet};
use crate::contracts::check_rank_distribution;
use crate::error::{Error, Result};
use crate::types::{Corpus, PageRankConfig};

/// How the PageRank iteration ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankReport {
    /// Passes actually run, including the one that detected convergence.
    pub iterations: usize,
    /// Whether the epsilon test fired before `limit` ran out.
    pub converged: bool,
    /// Largest per-page change observed on the last pass.
    pub max_delta: f64,
}

/// A page and its rank, ordered by rank, then by URI with the smaller URI
/// ranking higher.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPage {
    pub uri: Url,
    pub rank: f64,
}

impl PartialOrd for RankedPage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.rank.partial_cmp(&other.rank)? {
            Ordering::Equal => Some(other.uri.cmp(&self.uri)),
            order => Some(order),
        }
    }
}

/// Precomputed PageRank for every page of a corpus.
#[derive(Debug, Clone)]
pub struct AuthorityEngine {
    ranks: BucketedMap<Url, f64>,
    report: PageRankReport,
    config: PageRankConfig,
}

impl AuthorityEngine {
    /// Build the webgraph and iterate PageRank to convergence or `limit`.
    pub fn new(corpus: &Corpus, config: PageRankConfig) -> Result<Self> {
        config.validate()?;

        let graph = build_webgraph(corpus);
        let order: Vec<&Url> = corpus.iter().map(|page| &page.uri).collect();
        let outlinks = lower_to_indices(&graph, &order);
        drop(graph);

        let (table, report) = iterate(&outlinks, &config);
        check_rank_distribution(table.iter().copied());

        debug!(
            pages = order.len(),
            iterations = report.iterations,
            converged = report.converged,
            max_delta = report.max_delta,
            "computed page ranks"
        );

        let ranks = order
            .into_iter()
            .cloned()
            .zip(table)
            .collect::<BucketedMap<_, _>>();

        Ok(AuthorityEngine {
            ranks,
            report,
            config,
        })
    }

    /// Rank of the page at `uri`.
    pub fn compute_page_rank(&self, uri: &Url) -> Result<f64> {
        self.ranks
            .get(uri)
            .copied()
            .map_err(|_| Error::UnknownPage(uri.clone()))
    }

    pub fn report(&self) -> &PageRankReport {
        &self.report
    }

    pub fn config(&self) -> &PageRankConfig {
        &self.config
    }

    /// Number of ranked pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Every `(uri, rank)` pair, in no particular order.
    pub fn ranks(&self) -> impl Iterator<Item = (&Url, f64)> + '_ {
        self.ranks.key_values().map(|(uri, &rank)| (uri, rank))
    }

    /// The `k` highest-ranked pages, best first.
    pub fn top_pages(&self, k: usize) -> Result<Vec<RankedPage>> {
        let ranked = self.ranks().map(|(uri, rank)| RankedPage {
            uri: uri.clone(),
            rank,
        });
        let mut best = top_k(k, ranked)?;
        best.reverse();
        Ok(best)
    }
}

/// Adjacency sets restricted to corpus members, without self-links.
pub fn build_webgraph(corpus: &Corpus) -> BucketedMap<Url, BucketedSet<Url>> {
    let members: BucketedSet<&Url> = corpus.iter().map(|page| &page.uri).collect();
    let mut graph = BucketedMap::new();
    for page in corpus {
        let links: BucketedSet<Url> = page
            .links
            .iter()
            .filter(|&link| link != &page.uri && members.contains(&link))
            .cloned()
            .collect();
        graph.put(page.uri.clone(), links);
    }
    graph
}

/// Replace URIs by their position in `order` so a pass can run over plain
/// arrays.
fn lower_to_indices(graph: &BucketedMap<Url, BucketedSet<Url>>, order: &[&Url]) -> Vec<Vec<usize>> {
    let position: BucketedMap<&Url, usize> = order
        .iter()
        .enumerate()
        .map(|(index, &uri)| (uri, index))
        .collect();
    order
        .iter()
        .map(|&uri| match graph.get(uri) {
            Ok(links) => links
                .iter()
                .filter_map(|link| position.get(&link).ok().copied())
                .collect(),
            Err(_) => Vec::new(),
        })
        .collect()
}

fn iterate(outlinks: &[Vec<usize>], config: &PageRankConfig) -> (Vec<f64>, PageRankReport) {
    let n = outlinks.len();
    let mut report = PageRankReport {
        iterations: 0,
        converged: false,
        max_delta: 0.0,
    };
    if n == 0 {
        report.converged = true;
        return (Vec::new(), report);
    }

    let size = n as f64;
    let damping = config.damping;
    let surf = (1.0 - damping) / size;
    let mut previous = vec![1.0 / size; n];
    let mut accumulator = vec![surf; n];

    for pass in 1..=config.limit {
        // Dangling pages feed every page equally; pool their share first.
        let mut dangling = 0.0;
        for (page, targets) in outlinks.iter().enumerate() {
            let rank = previous[page];
            if targets.is_empty() {
                dangling += damping * rank / size;
            } else {
                let share = damping * rank / targets.len() as f64;
                for &target in targets {
                    accumulator[target] += share;
                }
            }
        }

        let mut max_delta: f64 = 0.0;
        for (next, &prev) in accumulator.iter_mut().zip(&previous) {
            *next += dangling;
            max_delta = max_delta.max((prev - *next).abs());
        }

        trace!(pass, max_delta, "page rank pass");
        report.iterations = pass;
        report.max_delta = max_delta;

        if max_delta <= config.epsilon {
            report.converged = true;
            break;
        }
        mem::swap(&mut previous, &mut accumulator);
        accumulator.fill(surf);
    }

    (previous, report)
}
