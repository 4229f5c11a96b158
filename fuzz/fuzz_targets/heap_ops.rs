// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! QuaternaryHeap against a sorted model, plus top_k on raw float bits.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use webrank::{top_k, ContainerError, QuaternaryHeap};

#[derive(Debug, Arbitrary)]
struct Input {
    ops: Vec<Option<i32>>,
    scores: Vec<u64>,
    k: u8,
}

fuzz_target!(|input: Input| {
    let mut heap = QuaternaryHeap::new();
    let mut model: Vec<i32> = Vec::new();

    for op in input.ops.into_iter().take(1024) {
        match op {
            Some(v) => {
                assert_eq!(heap.insert(v), Ok(()));
                let at = model.partition_point(|&x| x < v);
                model.insert(at, v);
            }
            None => {
                if model.is_empty() {
                    assert_eq!(heap.remove_min(), Err(ContainerError::EmptyContainer));
                } else {
                    assert_eq!(heap.remove_min(), Ok(model.remove(0)));
                }
            }
        }
    }
    heap.check_invariants();
    assert_eq!(heap.into_sorted_vec(), model);

    // Arbitrary bit patterns include NaN, which must be rejected rather than
    // corrupting the order.
    let scores: Vec<f64> = input.scores.iter().map(|&bits| f64::from_bits(bits)).collect();
    let k = usize::from(input.k);
    match top_k(k, scores.iter().copied()) {
        Ok(top) => {
            assert!(k == 0 || scores.iter().all(|s| !s.is_nan()));
            assert_eq!(top.len(), k.min(scores.len()));
            assert!(top.windows(2).all(|w| w[0] <= w[1]));
        }
        Err(err) => {
            assert!(matches!(err, ContainerError::InvalidArgument(_)));
            assert!(scores.iter().any(|s| s.is_nan()));
        }
    }
});
