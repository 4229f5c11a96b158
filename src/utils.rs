// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term handling shared by the document and query sides of relevance scoring.

use crate::containers::BucketedMap;

/// Normalize a term for matching: lowercase only.
///
/// Document words and query words go through the same function, so a query
/// for "Rust" matches a page that says "rust". No stemming, no diacritic
/// folding, no stop words.
#[inline]
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase()
}

/// Count occurrences of each normalized term.
///
/// Returns the counts and the total number of terms seen (duplicates
/// included), which is the length used to normalize term frequency.
pub(crate) fn term_counts<I, S>(terms: I) -> (BucketedMap<String, u32>, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = BucketedMap::new();
    let mut total = 0;
    for term in terms {
        let term = normalize_term(term.as_ref());
        match counts.get_mut(&term) {
            Ok(count) => *count += 1,
            Err(_) => {
                counts.put(term, 1);
            }
        }
        total += 1;
    }
    (counts, total)
}
