// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF document vectors and cosine relevance.
//!
//! Every document becomes a sparse vector with one weight per distinct term:
//!
//! ```text
//! weight(t, d) = (count(t, d) / len(d)) * ln(N / df(t))
//! ```
//!
//! where `N` is the corpus size and `df(t)` the number of documents containing
//! `t` at least once. Queries are weighted with the same formula, using the
//! query's own counts and length and the corpus-wide `df`. A query term the
//! corpus never saw gets weight 0.
//!
//! Relevance is the cosine of the angle between the two vectors. Vectors and
//! document norms are computed once at construction, and the dot product only
//! visits the distinct query terms, so a query costs O(|query|) regardless of
//! vocabulary size.
//!
//! All weights are non-negative (`df <= N`), so scores land in `[0, 1]`.

use tracing::debug;
use url::Url;

use crate::containers::BucketedMap;
use crate::contracts::check_norm_consistency;
use crate::error::{Error, Result};
use crate::types::Corpus;
use crate::utils::{normalize_term, term_counts};

/// A document's TF-IDF weights and their Euclidean norm.
#[derive(Debug, Clone)]
struct DocumentVector {
    weights: BucketedMap<String, f64>,
    norm: f64,
}

/// A query's TF-IDF weights against one corpus, and their norm.
///
/// Built by [`RelevanceEngine::query_vector`]; only meaningful for the engine
/// that built it.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryVector {
    weights: Vec<(String, f64)>,
    norm: f64,
}

impl QueryVector {
    /// True when no query term carries weight, so every page scores 0.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.norm == 0.0
    }
}

/// Scores how well a query matches each page of a fixed corpus.
#[derive(Debug, Clone)]
pub struct RelevanceEngine {
    document_frequency: BucketedMap<String, u32>,
    vectors: BucketedMap<Url, DocumentVector>,
    corpus_size: usize,
}

#[inline]
fn tf_idf(count: u32, length: usize, corpus_size: usize, df: u32) -> f64 {
    (f64::from(count) / length as f64) * (corpus_size as f64 / f64::from(df)).ln()
}

impl RelevanceEngine {
    pub fn new(corpus: &Corpus) -> Self {
        let corpus_size = corpus.len();

        // Pass 1: per-document term counts, and how many documents hold each term.
        let mut document_frequency: BucketedMap<String, u32> = BucketedMap::new();
        let mut counted = Vec::with_capacity(corpus_size);
        for page in corpus {
            let (counts, length) = term_counts(&page.words);
            for term in counts.keys() {
                match document_frequency.get_mut(term) {
                    Ok(df) => *df += 1,
                    Err(_) => {
                        document_frequency.put(term.clone(), 1);
                    }
                }
            }
            counted.push((&page.uri, counts, length));
        }

        // Pass 2: weights and norms.
        let mut vectors = BucketedMap::new();
        for (uri, counts, length) in counted {
            let mut weights = BucketedMap::new();
            let mut squared = 0.0;
            for (term, &count) in counts.key_values() {
                let df = document_frequency.get(term).copied().unwrap_or(1);
                let weight = tf_idf(count, length, corpus_size, df);
                squared += weight * weight;
                weights.put(term.clone(), weight);
            }
            let norm = f64::sqrt(squared);
            check_norm_consistency(weights.values(), norm);
            vectors.put(uri.clone(), DocumentVector { weights, norm });
        }

        debug!(
            documents = corpus_size,
            vocabulary = document_frequency.len(),
            "built relevance engine"
        );

        RelevanceEngine {
            document_frequency,
            vectors,
            corpus_size,
        }
    }

    /// Cosine similarity between `query` and the page at `uri`.
    ///
    /// Query terms are normalized like document words. Returns 0 when either
    /// vector has zero length: an empty query, a query of unseen terms, or a
    /// page with no informative words.
    pub fn compute_relevance<S: AsRef<str>>(&self, query: &[S], uri: &Url) -> Result<f64> {
        self.score(&self.query_vector(query), uri)
    }

    /// Weight a query once so it can be scored against many pages.
    pub fn query_vector<S: AsRef<str>>(&self, query: &[S]) -> QueryVector {
        let (counts, length) = term_counts(query);
        let mut weights = Vec::with_capacity(counts.len());
        let mut squared = 0.0;
        for (term, &count) in counts.key_values() {
            // Unseen terms weigh 0 and drop out of both the dot product and the norm.
            let Ok(&df) = self.document_frequency.get(term) else {
                continue;
            };
            let weight = tf_idf(count, length, self.corpus_size, df);
            squared += weight * weight;
            weights.push((term.clone(), weight));
        }
        QueryVector {
            weights,
            norm: f64::sqrt(squared),
        }
    }

    /// Cosine similarity between a weighted query and the page at `uri`.
    pub fn score(&self, query: &QueryVector, uri: &Url) -> Result<f64> {
        let document = self
            .vectors
            .get(uri)
            .map_err(|_| Error::UnknownPage(uri.clone()))?;

        let denominator = document.norm * query.norm;
        if denominator == 0.0 {
            return Ok(0.0);
        }
        let dot: f64 = query
            .weights
            .iter()
            .filter_map(|(term, weight)| {
                document.weights.get(term.as_str()).ok().map(|w| w * weight)
            })
            .sum();
        Ok(dot / denominator)
    }

    /// Precomputed term weights of the page at `uri`.
    pub fn document_vector(&self, uri: &Url) -> Result<&BucketedMap<String, f64>> {
        self.vectors
            .get(uri)
            .map(|document| &document.weights)
            .map_err(|_| Error::UnknownPage(uri.clone()))
    }

    /// Inverse document frequency `ln(N / df)` of a term, if any document
    /// contains it.
    pub fn idf(&self, term: &str) -> Option<f64> {
        let df = *self.document_frequency.get(&normalize_term(term)).ok()?;
        Some((self.corpus_size as f64 / f64::from(df)).ln())
    }

    /// Number of documents the engine was built from.
    #[inline]
    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Number of distinct terms across the corpus.
    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.document_frequency.len()
    }
}
