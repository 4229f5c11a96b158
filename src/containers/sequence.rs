// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A doubly linked, index-addressable sequence.
//!
//! Nodes live in an arena and point at each other by slot index, so there are
//! no raw pointers and no shared ownership. Freed slots are recycled through a
//! free list. Indexed access walks from whichever end is closer:
//!
//! ```text
//! index <= (len - 1) / 2   →  walk forward from head   (index steps)
//! otherwise                →  walk backward from tail  (len - 1 - index steps)
//! ```
//!
//! so access clustered near either end is cheap and the middle costs O(n).
//!
//! # Invariants
//!
//! - `head` and `tail` are `None` iff `len == 0`.
//! - Walking `next` links from `head`, or `prev` links from `tail`, visits
//!   exactly `len` nodes.
//! - Every slot reachable through a link holds a node; every other slot is on
//!   the free list.
//!
//! Element payloads are mutable in place. A `set` at any index, including the
//! boundaries, swaps the value inside the existing node; no node is replaced.
//! Iterators borrow the sequence, so structural changes during iteration are
//! rejected by the borrow checker.

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use super::error::{ContainerError, Result};

type Link = Option<usize>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Link,
    next: Link,
}

/// Ordered sequence backed by a doubly linked chain of nodes.
#[derive(Clone)]
pub struct Sequence<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Link,
    tail: Link,
    len: usize,
}

impl<T> Sequence<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Sequence {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append an element at the back. O(1).
    pub fn push_back(&mut self, value: T) {
        let slot = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Remove and return the last element. O(1).
    pub fn pop_back(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(ContainerError::EmptyContainer)?;
        Ok(self.unlink(tail))
    }

    /// Remove and return the first element. O(1).
    pub fn pop_front(&mut self) -> Result<T> {
        let head = self.head.ok_or(ContainerError::EmptyContainer)?;
        Ok(self.unlink(head))
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|slot| &self.node(slot).value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|slot| &self.node(slot).value)
    }

    /// Element at `index`, walking from the nearer end.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        let slot = self.find_slot(index);
        Ok(&self.node(slot).value)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let slot = self.find_slot(index);
        Ok(&mut self.node_mut(slot).value)
    }

    /// Replace the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let current = self.get_mut(index)?;
        Ok(mem::replace(current, value))
    }

    /// Insert at `index`, shifting the element there and everything after it
    /// up by one. `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }

        let next = self.find_slot(index);
        let prev = self.node(next).prev;
        let slot = self.alloc(Node {
            value,
            prev,
            next: Some(next),
        });
        self.node_mut(next).prev = Some(slot);
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements down.
    pub fn delete(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let slot = self.find_slot(index);
        Ok(self.unlink(slot))
    }

    /// Remove every element. Keeps the arena allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Front-to-back iterator over shared references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            seq: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Verify the link structure (debug builds only).
    pub fn check_invariants(&self) {
        crate::contracts::check_sequence_links(self);
    }

    /// Number of nodes reached following `next` links from `head`.
    ///
    /// Bounded by the arena size so a corrupted cycle cannot hang.
    pub(crate) fn forward_steps(&self) -> usize {
        self.count_steps(self.head, |node| node.next)
    }

    /// Number of nodes reached following `prev` links from `tail`.
    pub(crate) fn backward_steps(&self) -> usize {
        self.count_steps(self.tail, |node| node.prev)
    }

    pub(crate) fn has_head(&self) -> bool {
        self.head.is_some()
    }

    pub(crate) fn has_tail(&self) -> bool {
        self.tail.is_some()
    }

    fn count_steps(&self, start: Link, step: impl Fn(&Node<T>) -> Link) -> usize {
        let mut steps = 0;
        let mut cursor = start;
        while let Some(slot) = cursor {
            if steps > self.slots.len() {
                break;
            }
            steps += 1;
            cursor = match self.slots.get(slot) {
                Some(Some(node)) => step(node),
                _ => None,
            };
        }
        steps
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(ContainerError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Slot of the node at `index`. Caller guarantees `index < len`.
    fn find_slot(&self, index: usize) -> usize {
        let (mut cursor, steps, forward) = if index <= (self.len - 1) / 2 {
            (self.head, index, true)
        } else {
            (self.tail, self.len - 1 - index, false)
        };
        for _ in 0..steps {
            let node = self.node(Self::linked(cursor));
            cursor = if forward { node.next } else { node.prev };
        }
        Self::linked(cursor)
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Detach the node in `slot` from the chain and return its value.
    fn unlink(&mut self, slot: usize) -> T {
        let node = match self.slots[slot].take() {
            Some(node) => node,
            None => unreachable!("unlink of free slot {slot}"),
        };
        self.free.push(slot);

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node.value
    }

    #[inline]
    fn linked(link: Link) -> usize {
        match link {
            Some(slot) => slot,
            None => unreachable!("chain ended before len nodes"),
        }
    }

    #[inline]
    fn node(&self, slot: usize) -> &Node<T> {
        match &self.slots[slot] {
            Some(node) => node,
            None => unreachable!("link to free slot {slot}"),
        }
    }

    #[inline]
    fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
        match &mut self.slots[slot] {
            Some(node) => node,
            None => unreachable!("link to free slot {slot}"),
        }
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|other| other == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { seq: self }
    }
}

/// Lazy, single-pass, front-to-back iterator.
pub struct Iter<'a, T> {
    seq: &'a Sequence<T>,
    cursor: Link,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Like `next`, but running off the end is an error.
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(ContainerError::Exhausted)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = self.seq.node(slot);
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator, drains from the front.
pub struct IntoIter<T> {
    seq: Sequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.seq.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len(), Some(self.seq.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
