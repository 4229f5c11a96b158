// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query answering: relevance weighted by authority.
//!
//! Each page scores `relevance × page_rank`. Pages that share no signal with
//! the query (relevance 0) are dropped, and the best `limit` of the rest are
//! picked with a bounded heap, so a search costs O(N log₄ limit) on top of
//! the per-page relevance work. The query is weighted once per search, not
//! once per page. Equal scores come out in ascending URI order.

use std::cmp::Ordering;

use url::Url;

use crate::authority::AuthorityEngine;
use crate::containers::top_k;
use crate::error::Result;
use crate::relevance::RelevanceEngine;
use crate::types::{Corpus, PageRankConfig};

/// One search result.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub uri: Url,
    pub title: String,
    pub blurb: String,
    pub relevance: f64,
    pub page_rank: f64,
    /// `relevance * page_rank`
    pub score: f64,
}

/// Hits compare by score, then by URI so that among equal scores the
/// lexicographically smaller URI ranks higher. Equality agrees with the
/// ordering: same score, same page.
impl PartialOrd for SearchHit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.score.partial_cmp(&other.score)? {
            Ordering::Equal => Some(other.uri.cmp(&self.uri)),
            order => Some(order),
        }
    }
}

impl PartialEq for SearchHit {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.uri == other.uri
    }
}

#[derive(Debug, Clone)]
struct PageSummary {
    uri: Url,
    title: String,
    blurb: String,
}

/// Both engines over one corpus.
#[derive(Debug, Clone)]
pub struct Searcher {
    pages: Vec<PageSummary>,
    relevance: RelevanceEngine,
    authority: AuthorityEngine,
}

impl Searcher {
    pub fn new(corpus: &Corpus, config: PageRankConfig) -> Result<Self> {
        let authority = AuthorityEngine::new(corpus, config)?;
        let relevance = RelevanceEngine::new(corpus);
        let pages = corpus
            .iter()
            .map(|page| PageSummary {
                uri: page.uri.clone(),
                title: page.title.clone(),
                blurb: page.blurb.clone(),
            })
            .collect();
        Ok(Searcher {
            pages,
            relevance,
            authority,
        })
    }

    /// The best `limit` pages for `query`, best first.
    pub fn search<S: AsRef<str>>(&self, query: &[S], limit: usize) -> Result<Vec<SearchHit>> {
        let query = self.relevance.query_vector(query);
        if query.is_zero() {
            return Ok(Vec::new());
        }
        let mut hits = Vec::new();
        for page in &self.pages {
            let relevance = self.relevance.score(&query, &page.uri)?;
            if relevance == 0.0 {
                continue;
            }
            let page_rank = self.authority.compute_page_rank(&page.uri)?;
            hits.push(SearchHit {
                uri: page.uri.clone(),
                title: page.title.clone(),
                blurb: page.blurb.clone(),
                relevance,
                page_rank,
                score: relevance * page_rank,
            });
        }
        let mut best = top_k(limit, hits)?;
        best.reverse();
        Ok(best)
    }

    /// Split `text` on whitespace and search for the resulting terms.
    pub fn search_text(&self, text: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let terms: Vec<&str> = text.split_whitespace().collect();
        self.search(&terms, limit)
    }

    pub fn relevance(&self) -> &RelevanceEngine {
        &self.relevance
    }

    pub fn authority(&self) -> &AuthorityEngine {
        &self.authority
    }
}
