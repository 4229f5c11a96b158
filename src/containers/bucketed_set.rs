// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hash set layered on [`BucketedMap`] with unit values.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::bucketed_map::{self, BucketedMap, DefaultState};
use super::error::{ContainerError, Result};

#[derive(Clone)]
pub struct BucketedSet<T, S = DefaultState> {
    map: BucketedMap<T, (), S>,
}

impl<T> BucketedSet<T, DefaultState> {
    pub fn new() -> Self {
        BucketedSet {
            map: BucketedMap::new(),
        }
    }
}

impl<T, S> BucketedSet<T, S> {
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.map.iter(),
        }
    }
}

impl<T, S> BucketedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Add `value`; returns `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.map.put(value, ()).is_none()
    }

    pub fn remove<Q>(&mut self, value: &Q) -> Result<()>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.remove(value)
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(value)
    }
}

impl<T, S: Default> Default for BucketedSet<T, S> {
    fn default() -> Self {
        BucketedSet {
            map: BucketedMap::default(),
        }
    }
}

impl<T: fmt::Debug, S> fmt::Debug for BucketedSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> FromIterator<T> for BucketedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = BucketedSet::default();
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for BucketedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, S> IntoIterator for &'a BucketedSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    inner: bucketed_map::Iter<'a, T, ()>,
}

impl<'a, T> Iter<'a, T> {
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(ContainerError::Exhausted)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        // Sets never store the absent key, so every entry has one.
        self.inner.by_ref().find_map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
