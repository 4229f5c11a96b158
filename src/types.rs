// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inputs to the ranking engines.
//!
//! | Type             | Purpose                                              |
//! |------------------|------------------------------------------------------|
//! | `Webpage`        | one crawled page: URI, outbound links, body words    |
//! | `Corpus`         | a set of pages with pairwise distinct URIs           |
//! | `PageRankConfig` | damping, convergence threshold and iteration cap     |
//!
//! # Invariants
//!
//! - **Corpus**: no two pages share a URI. Enforced by [`Corpus::new`], the
//!   only way to build one.
//! - **PageRankConfig**: `0 < damping < 1`, `epsilon` finite and `>= 0`.
//!   Checked by [`PageRankConfig::validate`], which the authority engine calls
//!   before doing any work.

use std::io::Read;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::containers::{sequence, BucketedSet, Sequence};
use crate::error::{Error, Result};

// =============================================================================
// PAGES
// =============================================================================

/// A crawled page.
///
/// Links may point anywhere, including outside the corpus and back at the
/// page itself; the authority engine filters them. Words are kept as crawled
/// and normalized by the relevance engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webpage {
    pub uri: Url,
    #[serde(default)]
    pub title: String,
    /// Short excerpt shown alongside search hits.
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub links: Vec<Url>,
    #[serde(default)]
    pub words: Vec<String>,
}

impl Webpage {
    pub fn new(uri: Url, links: Vec<Url>, words: Vec<String>) -> Self {
        Webpage {
            uri,
            title: String::new(),
            blurb: String::new(),
            links,
            words,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_blurb(mut self, blurb: impl Into<String>) -> Self {
        self.blurb = blurb.into();
        self
    }
}

// =============================================================================
// CORPUS
// =============================================================================

/// Pages with distinct URIs, in the order they were supplied.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pages: Sequence<Webpage>,
}

impl Corpus {
    /// Build a corpus, rejecting the first URI that appears twice.
    pub fn new(pages: Vec<Webpage>) -> Result<Self> {
        if let Some(uri) = first_duplicate(&pages) {
            return Err(Error::DuplicatePage(uri.clone()));
        }
        Ok(Corpus {
            pages: pages.into_iter().collect(),
        })
    }

    /// Read a JSON array of page records.
    ///
    /// ```json
    /// [{ "uri": "https://a.example/", "title": "A", "links": [], "words": ["x"] }]
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let pages: Vec<Webpage> = serde_json::from_reader(reader)?;
        Self::new(pages)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages in the order they were supplied.
    pub fn iter(&self) -> sequence::Iter<'_, Webpage> {
        self.pages.iter()
    }

    /// Linear lookup by URI.
    pub fn page(&self, uri: &Url) -> Option<&Webpage> {
        self.pages.iter().find(|page| &page.uri == uri)
    }
}

fn first_duplicate(pages: &[Webpage]) -> Option<&Url> {
    let mut seen = BucketedSet::new();
    pages
        .iter()
        .map(|page| &page.uri)
        .find(|&uri| !seen.insert(uri))
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Webpage;
    type IntoIter = sequence::Iter<'a, Webpage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// PAGERANK PARAMETERS
// =============================================================================

/// Default damping factor.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default convergence threshold.
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// Default iteration cap.
pub const DEFAULT_ITERATION_LIMIT: usize = 100;

/// Parameters of the PageRank iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Probability that the surfer follows a link instead of jumping.
    pub damping: f64,
    /// Iteration stops once no rank moves by more than this.
    pub epsilon: f64,
    /// Hard cap on the number of passes.
    pub limit: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        PageRankConfig {
            damping: DEFAULT_DAMPING,
            epsilon: DEFAULT_EPSILON,
            limit: DEFAULT_ITERATION_LIMIT,
        }
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "damping must lie strictly between 0 and 1, got {}",
                self.damping
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}
