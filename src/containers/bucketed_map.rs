// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Separate-chaining hash map whose chains are [`FlatMap`]s.
//!
//! A key lives in bucket `hash(key) mod capacity`; the absent key always lives
//! in bucket 0. Buckets are created on first insertion and stay `None` until
//! then.
//!
//! # Rehashing
//!
//! Before every insertion, if `len / capacity > 1.5` the bucket array doubles
//! and every entry is moved into a freshly allocated array (a full rehash, not
//! an incremental one). Corpora are loaded once, so the pause is paid during
//! construction and never during queries.
//!
//! # Hashing
//!
//! The default hasher is `DefaultHasher` with fixed keys, so bucket placement
//! and iteration order are reproducible run to run. Any `BuildHasher` can be
//! supplied through [`BucketedMap::with_hasher`].

use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::iter::FusedIterator;
use std::mem;
use std::slice;

use super::error::{ContainerError, Result};
use super::flat_map::{self, FlatMap};

/// Bucket count of a fresh map.
pub const INITIAL_BUCKETS: usize = 26;

/// Load factor above which the next insertion doubles the bucket array.
pub const MAX_LOAD_FACTOR: f64 = 1.5;

/// Deterministic default hasher.
pub type DefaultState = BuildHasherDefault<DefaultHasher>;

/// Hash table of [`FlatMap`] buckets.
///
/// Invariants: the bucket sizes sum to `len`, and every key sits in the bucket
/// its hash selects for the current capacity.
#[derive(Clone)]
pub struct BucketedMap<K, V, S = DefaultState> {
    buckets: Vec<Option<FlatMap<K, V>>>,
    len: usize,
    hash_builder: S,
}

fn empty_buckets<K, V>(count: usize) -> Vec<Option<FlatMap<K, V>>> {
    let mut buckets = Vec::with_capacity(count);
    buckets.resize_with(count, || None);
    buckets
}

impl<K, V> BucketedMap<K, V, DefaultState> {
    pub fn new() -> Self {
        Self::with_hasher(DefaultState::default())
    }
}

impl<K, V, S> BucketedMap<K, V, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        BucketedMap {
            buckets: empty_buckets(INITIAL_BUCKETS),
            len: 0,
            hash_builder,
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

    /// Number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Iterate `(key, value)` pairs bucket by bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.len,
        }
    }

    /// Present keys in iteration order; the absent key is skipped.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().filter_map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Pairs with a present key; the absent-key entry is skipped.
    pub fn key_values(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.iter()
            .filter_map(|(key, value)| key.map(|key| (key, value)))
    }

    /// Sizes of the instantiated buckets, in bucket order.
    pub fn bucket_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().flatten().map(FlatMap::len)
    }

    pub(crate) fn buckets(&self) -> &[Option<FlatMap<K, V>>] {
        &self.buckets
    }
}

impl<K, V, S> BucketedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Bucket for `key` at the current capacity.
    pub(crate) fn bucket_index<Q>(&self, key: Option<&Q>) -> usize
    where
        Q: Hash + ?Sized,
    {
        match key {
            None => 0,
            Some(key) => (self.hash_builder.hash_one(key) % self.buckets.len() as u64) as usize,
        }
    }

    fn bucket<Q>(&self, key: Option<&Q>) -> Option<&FlatMap<K, V>>
    where
        Q: Hash + ?Sized,
    {
        self.buckets[self.bucket_index(key)].as_ref()
    }

    fn bucket_mut<Q>(&mut self, key: Option<&Q>) -> Option<&mut FlatMap<K, V>>
    where
        Q: Hash + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index].as_mut()
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.bucket(Some(key))
            .ok_or(ContainerError::NoSuchKey)?
            .get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.bucket_mut(Some(key))
            .ok_or(ContainerError::NoSuchKey)?
            .get_mut(key)
    }

    /// Insert or overwrite. Returns the previous value for `key`, if any.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.store(Some(key), value)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let value = self
            .bucket_mut(Some(key))
            .ok_or(ContainerError::NoSuchKey)?
            .remove(key)?;
        self.len -= 1;
        Ok(value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.bucket(Some(key))
            .is_some_and(|bucket| bucket.contains_key(key))
    }

    pub fn get_absent(&self) -> Result<&V> {
        self.buckets[0]
            .as_ref()
            .ok_or(ContainerError::NoSuchKey)?
            .get_absent()
    }

    pub fn put_absent(&mut self, value: V) -> Option<V> {
        self.store(None, value)
    }

    pub fn remove_absent(&mut self) -> Result<V> {
        let value = self.buckets[0]
            .as_mut()
            .ok_or(ContainerError::NoSuchKey)?
            .remove_absent()?;
        self.len -= 1;
        Ok(value)
    }

    pub fn contains_absent(&self) -> bool {
        self.buckets[0]
            .as_ref()
            .is_some_and(FlatMap::contains_absent)
    }

    /// Verify bucket placement and size accounting (debug builds only).
    pub fn check_invariants(&self) {
        crate::contracts::check_bucket_placement(self);
    }

    fn store(&mut self, key: Option<K>, value: V) -> Option<V> {
        if self.len as f64 / self.buckets.len() as f64 > MAX_LOAD_FACTOR {
            self.rehash(self.buckets.len() * 2);
        }
        let index = self.bucket_index(key.as_ref());
        let previous = self.buckets[index]
            .get_or_insert_with(FlatMap::new)
            .put_slot(key, value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    fn rehash(&mut self, capacity: usize) {
        let old = mem::replace(&mut self.buckets, empty_buckets(capacity));
        let old_capacity = old.len();
        for (key, value) in old.into_iter().flatten().flatten() {
            let index = self.bucket_index(key.as_ref());
            self.buckets[index]
                .get_or_insert_with(FlatMap::new)
                .put_slot(key, value);
        }
        tracing::trace!(
            from = old_capacity,
            to = capacity,
            len = self.len,
            "rehashed bucketed map"
        );
    }
}

impl<K, V, S: Default> Default for BucketedMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for BucketedMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> FromIterator<(K, V)> for BucketedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BucketedMap::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for BucketedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a BucketedMap<K, V, S> {
    type Item = (Option<&'a K>, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator that walks each non-empty bucket in index order.
///
/// Single pass: to iterate again, ask the map for a new iterator.
pub struct Iter<'a, K, V> {
    buckets: slice::Iter<'a, Option<FlatMap<K, V>>>,
    current: Option<flat_map::Iter<'a, K, V>>,
    remaining: usize,
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
        loop {
            if let Some(item) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(item);
            }
            let bucket = self.buckets.next()?;
            self.current = bucket.as_ref().map(FlatMap::iter);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}
