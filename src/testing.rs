// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so every test builds pages the same way.

#![doc(hidden)]

use url::Url;

use crate::types::{Corpus, Webpage};

/// Parse a URL literal. Panics on malformed input.
pub fn url(s: &str) -> Url {
    Url::parse(s).unwrap_or_else(|e| panic!("bad test URL {s:?}: {e}"))
}

/// Create a page from string literals.
///
/// This is the canonical implementation used across all tests.
pub fn make_page(uri: &str, links: &[&str], words: &[&str]) -> Webpage {
    Webpage::new(
        url(uri),
        links.iter().map(|link| url(link)).collect(),
        words.iter().map(|word| (*word).to_string()).collect(),
    )
    .with_title(format!("Title of {uri}"))
}

/// Build a corpus. Panics on duplicate URIs.
pub fn corpus_of(pages: Vec<Webpage>) -> Corpus {
    Corpus::new(pages).unwrap_or_else(|e| panic!("bad test corpus: {e}"))
}

/// `http://example.com/page-<name>.html`
pub fn page_uri(name: &str) -> String {
    format!("http://example.com/page-{name}.html")
}

/// Link-only pages named by letter, each linking to the listed letters.
pub fn link_corpus(graph: &[(&str, &[&str])]) -> Corpus {
    let pages = graph
        .iter()
        .map(|(name, targets)| {
            let targets: Vec<String> = targets.iter().map(|t| page_uri(t)).collect();
            let targets: Vec<&str> = targets.iter().map(String::as_str).collect();
            make_page(&page_uri(name), &targets, &[])
        })
        .collect();
    corpus_of(pages)
}

/// A → {B, C, D}; B, C, D → A.
pub fn star_corpus() -> Corpus {
    link_corpus(&[
        ("a", &["b", "c", "d"][..]),
        ("b", &["a"][..]),
        ("c", &["a"][..]),
        ("d", &["a"][..]),
    ])
}

/// A → B → C → A.
pub fn cycle_corpus() -> Corpus {
    link_corpus(&[
        ("a", &["b"][..]),
        ("b", &["c"][..]),
        ("c", &["a"][..]),
    ])
}

/// Five pages with one dangling page (C) and one page nobody links to (E).
pub fn dangling_corpus() -> Corpus {
    link_corpus(&[
        ("a", &["b", "d"][..]),
        ("b", &["c", "d"][..]),
        ("c", &[] as &[&str]),
        ("d", &["a"][..]),
        ("e", &["d"][..]),
    ])
}

/// Small text corpus for relevance tests.
pub fn text_corpus() -> Corpus {
    corpus_of(vec![
        make_page(
            "https://pets.example/cats",
            &["https://pets.example/dogs"],
            &["cats", "purr", "and", "cats", "sleep"],
        ),
        make_page(
            "https://pets.example/dogs",
            &["https://pets.example/cats", "https://pets.example/birds"],
            &["dogs", "bark", "and", "dogs", "run", "and", "play"],
        ),
        make_page(
            "https://pets.example/birds",
            &["https://pets.example/cats"],
            &["birds", "sing", "and", "fly"],
        ),
    ])
}
