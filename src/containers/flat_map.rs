// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unordered map over a flat array of entries with linear-scan lookup.
//!
//! Lookup, insertion and removal scan the entries, so each costs O(len).
//! Iteration follows storage order. This is the bucket type of
//! [`BucketedMap`](super::BucketedMap), where buckets stay short and a scan
//! over a few contiguous entries beats hashing again.
//!
//! # Absent key
//!
//! Each entry stores its key as `Option<K>`. `None` is the "no key" slot: a
//! valid key in its own right, distinct from every real key, and present at
//! most once. It is reached only through the `*_absent` methods.
//!
//! # Capacity
//!
//! The backing array starts at [`INITIAL_CAPACITY`] slots. When a `put` of a
//! new key finds it full, capacity doubles and the live entries are moved into
//! the new array, giving amortized O(1) growth.

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use super::error::{ContainerError, Result};

/// Slots allocated by [`FlatMap::new`].
pub const INITIAL_CAPACITY: usize = 8;

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: Option<K>,
    value: V,
}

/// Key-value store with linear-scan lookup.
///
/// Invariant: all entries below `len` are live and their keys pairwise
/// distinct, counting the absent key as one more key.
#[derive(Clone)]
pub struct FlatMap<K, V> {
    entries: Vec<Entry<K, V>>,
    capacity: usize,
}

impl<K, V> FlatMap<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create an empty map with room for `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        FlatMap {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slots in the current backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate `(key, value)` pairs in storage order. The absent key shows up
    /// as `None`.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Present keys only; the absent key is skipped.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().filter_map(|entry| entry.key.as_ref())
    }

    fn find<Q>(&self, key: Option<&Q>) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().position(|entry| match (&entry.key, key) {
            (Some(stored), Some(wanted)) => <K as Borrow<Q>>::borrow(stored) == wanted,
            (None, None) => true,
            _ => false,
        })
    }

    fn lookup<Q>(&self, key: Option<&Q>) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.find(key).ok_or(ContainerError::NoSuchKey)?;
        Ok(&self.entries[index].value)
    }

    fn lookup_mut<Q>(&mut self, key: Option<&Q>) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.find(key).ok_or(ContainerError::NoSuchKey)?;
        Ok(&mut self.entries[index].value)
    }

    fn store(&mut self, key: Option<K>, value: V) -> Option<V>
    where
        K: Eq,
    {
        if let Some(index) = self.find(key.as_ref()) {
            return Some(std::mem::replace(&mut self.entries[index].value, value));
        }
        if self.entries.len() == self.capacity {
            self.grow();
        }
        self.entries.push(Entry { key, value });
        None
    }

    /// Remove by swapping the last live entry into the vacated slot.
    fn take<Q>(&mut self, key: Option<&Q>) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.find(key).ok_or(ContainerError::NoSuchKey)?;
        Ok(self.entries.swap_remove(index).value)
    }

    fn grow(&mut self) {
        self.capacity *= 2;
        let mut grown = Vec::with_capacity(self.capacity);
        grown.append(&mut self.entries);
        self.entries = grown;
    }
}

impl<K: Eq, V> FlatMap<K, V> {
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.lookup(Some(key))
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.lookup_mut(Some(key))
    }

    /// Insert or overwrite. Returns the previous value for `key`, if any.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.store(Some(key), value)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.take(Some(key))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(Some(key)).is_some()
    }

    pub fn get_absent(&self) -> Result<&V> {
        self.lookup::<K>(None)
    }

    pub fn put_absent(&mut self, value: V) -> Option<V> {
        self.store(None, value)
    }

    pub fn remove_absent(&mut self) -> Result<V> {
        self.take::<K>(None)
    }

    pub fn contains_absent(&self) -> bool {
        self.find::<K>(None).is_some()
    }

    /// Insert under an optional key. Used when moving entries between maps.
    pub(crate) fn put_slot(&mut self, key: Option<K>, value: V) -> Option<V> {
        self.store(key, value)
    }
}

impl<K, V> Default for FlatMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for FlatMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Eq, V> FromIterator<(K, V)> for FlatMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FlatMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq, V> Extend<(K, V)> for FlatMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a FlatMap<K, V> {
    type Item = (Option<&'a K>, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for FlatMap<K, V> {
    type Item = (Option<K>, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

/// Borrowing iterator in storage order.
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Like `next`, but running off the end is an error.
    pub fn try_next(&mut self) -> Result<(Option<&'a K>, &'a V)> {
        self.next().ok_or(ContainerError::Exhausted)
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (Option<&'a K>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|entry| (entry.key.as_ref(), &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Owning iterator in storage order.
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<Entry<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (Option<K>, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
