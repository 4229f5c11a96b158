// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! FlatMap and BucketedMap against `HashMap`.
//!
//! Keys are drawn from a u8 space so puts, overwrites and removals collide
//! often, and the absent key is exercised alongside ordinary keys.

#![no_main]

use std::collections::HashMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use webrank::{BucketedMap, ContainerError, FlatMap};

#[derive(Debug, Arbitrary)]
enum Op {
    Put(Option<u8>, u32),
    Remove(Option<u8>),
    Get(Option<u8>),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut model: HashMap<Option<u8>, u32> = HashMap::new();
    let mut flat = FlatMap::new();
    let mut bucketed = BucketedMap::new();

    for op in ops.into_iter().take(1024) {
        match op {
            Op::Put(key, value) => {
                let previous = model.insert(key, value);
                match key {
                    Some(k) => {
                        assert_eq!(flat.put(k, value), previous);
                        assert_eq!(bucketed.put(k, value), previous);
                    }
                    None => {
                        assert_eq!(flat.put_absent(value), previous);
                        assert_eq!(bucketed.put_absent(value), previous);
                    }
                }
            }
            Op::Remove(key) => {
                let expected = model.remove(&key).ok_or(ContainerError::NoSuchKey);
                match key {
                    Some(k) => {
                        assert_eq!(flat.remove(&k), expected.clone());
                        assert_eq!(bucketed.remove(&k), expected);
                    }
                    None => {
                        assert_eq!(flat.remove_absent(), expected.clone());
                        assert_eq!(bucketed.remove_absent(), expected);
                    }
                }
            }
            Op::Get(key) => {
                let expected = model.get(&key).copied().ok_or(ContainerError::NoSuchKey);
                match key {
                    Some(k) => {
                        assert_eq!(flat.get(&k).copied(), expected.clone());
                        assert_eq!(bucketed.get(&k).copied(), expected);
                    }
                    None => {
                        assert_eq!(flat.get_absent().copied(), expected.clone());
                        assert_eq!(bucketed.get_absent().copied(), expected);
                    }
                }
            }
        }
        assert_eq!(flat.len(), model.len());
        assert_eq!(bucketed.len(), model.len());
    }

    bucketed.check_invariants();
    assert_eq!(bucketed.iter().count(), model.len());
    assert_eq!(flat.iter().count(), model.len());
});
