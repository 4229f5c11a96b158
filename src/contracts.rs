// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the containers and ranking engines.
//!
//! Every check here is a `debug_assert!`, so release builds pay nothing. The
//! containers expose them through `check_invariants()`; the engines run the
//! ranking contracts once, right after construction.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Property                                         |
//! |-----------------------------|--------------------------------------------------|
//! | `check_sequence_links`      | both link directions visit exactly `len` nodes   |
//! | `check_heap_order`          | every parent ≤ each of its four children         |
//! | `check_bucket_placement`    | keys sit in their hash bucket, sizes sum to len  |
//! | `check_rank_distribution`   | ranks lie in [0, 1] and sum to 1                 |
//! | `check_norm_consistency`    | stored norm equals the recomputed norm           |
//!
//! # Usage
//!
//! ```ignore
//! use webrank::contracts::*;
//!
//! // In debug builds, this panics if the heap order is broken
//! check_heap_order(heap.as_slice());
//! ```

use std::cmp::Ordering;
use std::hash::{BuildHasher, Hash};

use crate::containers::heap::ARITY;
use crate::containers::{BucketedMap, Sequence};

/// Relative slack allowed on the total rank mass, per page.
pub const RANK_MASS_TOLERANCE: f64 = 1e-6;

/// Slack allowed between a stored norm and its recomputation.
pub const NORM_TOLERANCE: f64 = 1e-9;

// ============================================================================
// CONTAINER CONTRACTS
// ============================================================================

/// Check that a sequence's links agree with its length.
///
/// # Panics (debug builds only)
/// Panics if `head`/`tail` presence disagrees with `len`, or if walking the
/// chain in either direction visits a different number of nodes than `len`.
#[inline]
pub fn check_sequence_links<T>(seq: &Sequence<T>) {
    let len = seq.len();
    debug_assert_eq!(
        seq.has_head(),
        len > 0,
        "Contract violation: Sequence.head present={} but len={}",
        seq.has_head(),
        len
    );
    debug_assert_eq!(
        seq.has_tail(),
        len > 0,
        "Contract violation: Sequence.tail present={} but len={}",
        seq.has_tail(),
        len
    );
    debug_assert_eq!(
        seq.forward_steps(),
        len,
        "Contract violation: Sequence forward walk visited {} nodes, len={}",
        seq.forward_steps(),
        len
    );
    debug_assert_eq!(
        seq.backward_steps(),
        len,
        "Contract violation: Sequence backward walk visited {} nodes, len={}",
        seq.backward_steps(),
        len
    );
}

/// Check the min-heap property over a 4-ary array layout.
///
/// # Panics (debug builds only)
/// Panics if any child compares less than its parent.
#[inline]
pub fn check_heap_order<T: PartialOrd>(items: &[T]) {
    for child in 1..items.len() {
        let parent = (child - 1) / ARITY;
        debug_assert!(
            items[parent].partial_cmp(&items[child]) != Some(Ordering::Greater),
            "Contract violation: heap order - items[{}] < parent items[{}]",
            child,
            parent
        );
    }
}

/// Check that every key sits in the bucket its hash selects and that the
/// bucket sizes add up to the map's length.
///
/// # Panics (debug builds only)
/// Panics on a misplaced key or on a size mismatch.
#[inline]
pub fn check_bucket_placement<K, V, S>(map: &BucketedMap<K, V, S>)
where
    K: Eq + Hash,
    S: BuildHasher,
{
    let mut total = 0;
    for (index, bucket) in map.buckets().iter().enumerate() {
        let Some(bucket) = bucket else { continue };
        total += bucket.len();
        for (key, _) in bucket.iter() {
            let expected = map.bucket_index(key);
            debug_assert_eq!(
                index, expected,
                "Contract violation: BucketedMap key found in bucket {} but hashes to {}",
                index, expected
            );
        }
    }
    debug_assert_eq!(
        total,
        map.len(),
        "Contract violation: BucketedMap bucket sizes sum to {} but len={}",
        total,
        map.len()
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that a rank table is a probability distribution.
///
/// Every rank must lie in `[0, 1]` and the total must be 1 within
/// `RANK_MASS_TOLERANCE * N`. An empty table is trivially valid.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_rank_distribution<I>(ranks: I)
where
    I: IntoIterator<Item = f64>,
{
    let mut total = 0.0;
    let mut count = 0usize;
    for rank in ranks {
        debug_assert!(
            (0.0..=1.0).contains(&rank),
            "Contract violation: rank {} outside [0, 1]",
            rank
        );
        total += rank;
        count += 1;
    }
    if count > 0 {
        let slack = RANK_MASS_TOLERANCE * count as f64;
        debug_assert!(
            (total - 1.0).abs() <= slack,
            "Contract violation: ranks sum to {} over {} pages (allowed slack {})",
            total,
            count,
            slack
        );
    }
}

/// Check that a stored vector norm matches the weights it was computed from.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_norm_consistency<'a, I>(weights: I, stored: f64)
where
    I: IntoIterator<Item = &'a f64>,
{
    let recomputed = weights.into_iter().map(|w| w * w).sum::<f64>().sqrt();
    debug_assert!(
        (recomputed - stored).abs() <= NORM_TOLERANCE * recomputed.max(1.0),
        "Contract violation: stored norm {} but weights give {}",
        stored,
        recomputed
    );
}
