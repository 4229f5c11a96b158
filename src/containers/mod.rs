// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hand-built containers the ranking engines are written against.
//!
//! | Container          | Backing                         | Lookup / access         |
//! |--------------------|---------------------------------|-------------------------|
//! | `Sequence`         | doubly linked nodes in an arena | O(min(i, n - i))        |
//! | `FlatMap`          | flat array of entries           | O(n) scan               |
//! | `BucketedMap`      | array of `FlatMap` buckets      | O(1) expected           |
//! | `BucketedSet`      | `BucketedMap<T, ()>`            | O(1) expected           |
//! | `QuaternaryHeap`   | dense array, 4 children a node  | O(log₄ n) insert/remove |
//!
//! None of them lock; they assume a single owner mutating them at a time.

pub mod bucketed_map;
pub mod bucketed_set;
mod error;
pub mod flat_map;
pub mod heap;
pub mod sequence;

pub use bucketed_map::BucketedMap;
pub use bucketed_set::BucketedSet;
pub use error::{ContainerError, Result};
pub use flat_map::FlatMap;
pub use heap::{top_k, QuaternaryHeap};
pub use sequence::Sequence;
