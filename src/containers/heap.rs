// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Array-backed min-heap with branching factor 4.
//!
//! A wider node means a shallower tree: `log₄ n` levels instead of `log₂ n`,
//! at the price of comparing up to four children on the way down.
//!
//! ```text
//! index:     0
//!          / | | \
//!         1  2  3  4          children of i: 4i+1 ..= 4i+4
//!        /|||\                parent of i:   (i-1) / 4
//!       5 6 7 8 ...
//! ```
//!
//! Percolation is iterative, so heap depth never touches the call stack.
//!
//! # Element order
//!
//! Elements only need `PartialOrd`, which lets scores stored as `f64` go in
//! directly. An element that is not comparable with itself (a NaN) has no
//! place in a total order and is rejected with `InvalidArgument`; everything
//! that is accepted is treated as totally ordered.

use std::fmt;

use super::error::{ContainerError, Result};

/// Branching factor.
pub const ARITY: usize = 4;

/// Min-heap with four children per node.
///
/// Invariant: every item is no greater than each of its children. The backing
/// array starts with one slot and, when full, is replaced by one with
/// `4 * len + 1` slots, `len` counting the element being inserted.
#[derive(Clone)]
pub struct QuaternaryHeap<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> QuaternaryHeap<T> {
    pub fn new() -> Self {
        QuaternaryHeap {
            items: Vec::with_capacity(1),
            capacity: 1,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slots in the current backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Smallest element without removing it.
    pub fn peek_min(&self) -> Result<&T> {
        self.items.first().ok_or(ContainerError::EmptyContainer)
    }

    /// Items in heap (not sorted) order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn grow(&mut self) {
        self.capacity = ARITY * (self.items.len() + 1) + 1;
        let mut grown = Vec::with_capacity(self.capacity);
        grown.append(&mut self.items);
        self.items = grown;
    }
}

impl<T: PartialOrd> QuaternaryHeap<T> {
    /// Add an item. Amortized O(log₄ n).
    pub fn insert(&mut self, item: T) -> Result<()> {
        if item.partial_cmp(&item).is_none() {
            return Err(ContainerError::InvalidArgument(
                "element is not comparable with itself",
            ));
        }
        if self.items.len() == self.capacity {
            self.grow();
        }
        self.items.push(item);
        self.percolate_up(self.items.len() - 1);
        Ok(())
    }

    /// Remove and return the smallest item. O(log₄ n).
    pub fn remove_min(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(ContainerError::EmptyContainer);
        }
        // The last item takes the root's place, then sinks.
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.percolate_down(0);
        }
        Ok(min)
    }

    /// Drain every item in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.remove_min() {
            sorted.push(item);
        }
        sorted
    }

    /// Verify the heap order (debug builds only).
    pub fn check_invariants(&self) {
        crate::contracts::check_heap_order(&self.items);
    }

    fn percolate_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / ARITY;
            if self.items[index] < self.items[parent] {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn percolate_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let first_child = ARITY * index + 1;
            if first_child >= len {
                break;
            }
            // Strict comparison keeps the first of several equal minima.
            let mut smallest = index;
            for child in first_child..(first_child + ARITY).min(len) {
                if self.items[child] < self.items[smallest] {
                    smallest = child;
                }
            }
            if smallest == index {
                break;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T> Default for QuaternaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for QuaternaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuaternaryHeap")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}

/// The `k` largest items, in ascending order.
///
/// Keeps a heap of at most `k` items and evicts the minimum whenever it grows
/// past `k`, so the cost is O(n log₄ k) regardless of input order.
pub fn top_k<T, I>(k: usize, items: I) -> Result<Vec<T>>
where
    T: PartialOrd,
    I: IntoIterator<Item = T>,
{
    if k == 0 {
        return Ok(Vec::new());
    }
    let mut heap = QuaternaryHeap::new();
    for item in items {
        heap.insert(item)?;
        if heap.len() > k {
            heap.remove_min()?;
        }
    }
    Ok(heap.into_sorted_vec())
}
