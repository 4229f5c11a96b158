// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking for a crawled web corpus: TF-IDF relevance and PageRank authority,
//! built on a small set of hand-written containers.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────────┐     ┌──────────────┐
//! │   types.rs   │────▶│  relevance.rs  │────▶│  search.rs   │
//! │  (Webpage,   │     │ (TF-IDF, cos)  │     │  (Searcher,  │
//! │   Corpus,    │     ├────────────────┤     │   SearchHit) │
//! │   config)    │────▶│  authority.rs  │────▶│              │
//! └──────────────┘     │  (PageRank)    │     └──────────────┘
//!                      └────────────────┘
//!        │                     │                     │
//!        ▼                     ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                      containers/                         │
//! │  Sequence · FlatMap · BucketedMap · BucketedSet ·        │
//! │  QuaternaryHeap · top_k                                  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Engines are built once from a [`Corpus`] and answer lookups from
//! precomputed tables. Nothing locks: an engine or container is owned and
//! mutated by one thread at a time.
//!
//! # Usage
//!
//! ```ignore
//! use webrank::{Corpus, PageRankConfig, Searcher};
//!
//! let corpus = Corpus::from_reader(std::fs::File::open("corpus.json")?)?;
//! let searcher = Searcher::new(&corpus, PageRankConfig::default())?;
//! for hit in searcher.search_text("rust borrow checker", 10)? {
//!     println!("{:.5} {}", hit.score, hit.uri);
//! }
//! ```

pub mod authority;
pub mod containers;
pub mod contracts;
mod error;
pub mod relevance;
pub mod search;
pub mod testing;
mod types;
mod utils;

pub use authority::{build_webgraph, AuthorityEngine, PageRankReport, RankedPage};
pub use containers::{
    top_k, BucketedMap, BucketedSet, ContainerError, FlatMap, QuaternaryHeap, Sequence,
};
pub use error::{Error, Result};
pub use relevance::{QueryVector, RelevanceEngine};
pub use search::{SearchHit, Searcher};
pub use types::{
    Corpus, PageRankConfig, Webpage, DEFAULT_DAMPING, DEFAULT_EPSILON, DEFAULT_ITERATION_LIMIT,
};
pub use utils::normalize_term;
