// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while building a corpus or querying the ranking engines.

use thiserror::Error;
use url::Url;

use crate::containers::ContainerError;

/// Error type for corpus construction and engine lookups.
#[derive(Debug, Error)]
pub enum Error {
    /// The URI does not name a page of the corpus the engine was built from.
    #[error("page {0} is not part of the corpus")]
    UnknownPage(Url),
    /// Two pages in one corpus share a URI.
    #[error("page {0} appears more than once in the corpus")]
    DuplicatePage(Url),
    /// PageRank parameters out of range.
    #[error("invalid PageRank configuration: {0}")]
    InvalidConfig(String),
    /// Corpus file could not be parsed.
    #[error("malformed corpus: {0}")]
    Corpus(#[from] serde_json::Error),
    #[error(transparent)]
    Container(#[from] ContainerError),
}

pub type Result<T> = std::result::Result<T, Error>;
