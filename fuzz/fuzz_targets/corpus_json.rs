// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading and ranking on untrusted JSON.
//!
//! Malformed input must come back as an error. Anything that parses must
//! rank and search without panicking, and its ranks must sum to 1.

#![no_main]

use libfuzzer_sys::fuzz_target;
use webrank::{Corpus, PageRankConfig, Searcher};

fuzz_target!(|data: &[u8]| {
    let Ok(corpus) = Corpus::from_reader(data) else {
        return;
    };
    let config = PageRankConfig {
        limit: 20,
        ..PageRankConfig::default()
    };
    let searcher = Searcher::new(&corpus, config).expect("default damping is valid");

    let total: f64 = searcher.authority().ranks().map(|(_, rank)| rank).sum();
    if !corpus.is_empty() {
        assert!((total - 1.0).abs() < 1e-6, "rank mass {total}");
    }

    for page in &corpus {
        if let Some(word) = page.words.first() {
            let hits = searcher.search(&[word.as_str()], 5).expect("page is indexed");
            assert!(hits.len() <= 5);
        }
    }
});
