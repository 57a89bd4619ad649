//! `Set` — a hash-backed membership container with set algebra.
//!
//! Insertion, removal and membership tests are O(1) on average. The four
//! algebraic operations (`union`, `intersection`, `difference`,
//! `symmetric_difference`) are pure: they build and return a new set and
//! leave both operands untouched.
//!
//! Enumeration through [`Set::iter`] has no ordering guarantee. When a
//! reproducible order is needed (debugging, golden output), use
//! [`Set::iter_sorted_by`] or [`Set::iter_sorted`], which sort a snapshot of
//! references and are correspondingly slower.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::hash_map::RandomState;
use std::collections::hash_set::{self, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

/// A set of unique values.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de> + Eq + Hash, S: BuildHasher + Default"
))]
pub struct Set<T, S = RandomState> {
    inner: HashSet<T, S>,
}

impl<T> Set<T, RandomState> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    /// Creates an empty set with at least the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity(capacity),
        }
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set that hashes with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hasher),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over all values in no particular order.
    ///
    /// Each call yields a fresh iterator; dropping it early visits nothing
    /// further.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.inner.iter()
    }

    /// Iterates over all values in the order given by `cmp`.
    ///
    /// The references are collected and sorted before the first item is
    /// yielded, so this costs O(n log n) regardless of how much of the
    /// iterator is consumed.
    pub fn iter_sorted_by<F>(&self, mut cmp: F) -> std::vec::IntoIter<&T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items: Vec<&T> = self.inner.iter().collect();
        items.sort_by(|a, b| cmp(a, b));
        items.into_iter()
    }

    /// Iterates over all values in ascending order.
    pub fn iter_sorted(&self) -> std::vec::IntoIter<&T>
    where
        T: Ord,
    {
        self.iter_sorted_by(Ord::cmp)
    }
}

impl<T, S> Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Inserts a value. Returns `true` if it was not already present.
    #[inline]
    pub fn add(&mut self, value: T) -> bool {
        self.inner.insert(value)
    }

    /// Removes a value. Returns `true` if it was present.
    #[inline]
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(value)
    }

    /// Returns `true` if the set contains the value.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(value)
    }

    /// Returns `true` if every element of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.inner.is_subset(&other.inner)
    }

    /// Returns `true` if `self` and `other` share no element.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.inner.is_disjoint(&other.inner)
    }
}

impl<T, S> Set<T, S>
where
    S: Clone,
{
    /// Removes all elements, releasing the backing table.
    pub fn clear(&mut self) {
        self.inner = HashSet::with_hasher(self.inner.hasher().clone());
    }

    fn empty_like(&self) -> Self {
        Self::with_hasher(self.inner.hasher().clone())
    }
}

impl<T, S> Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Returns a set holding every element of either set.
    pub fn union(&self, other: &Self) -> Self {
        let mut out = self.empty_like();
        out.inner.extend(self.inner.iter().cloned());
        out.inner.extend(other.inner.iter().cloned());
        out
    }

    /// Returns a set holding the elements present in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = self.empty_like();
        out.inner
            .extend(self.inner.iter().filter(|v| other.contains(*v)).cloned());
        out
    }

    /// Returns a set holding the elements of `self` that do not occur in
    /// `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut out = self.empty_like();
        out.inner
            .extend(self.inner.iter().filter(|v| !other.contains(*v)).cloned());
        out
    }

    /// Returns a set holding the elements that occur in exactly one of the
    /// two sets.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }
}

#[cfg(feature = "parallel")]
impl<T, S> Set<T, S>
where
    T: Eq + Hash + Sync,
    S: BuildHasher + Sync,
{
    /// Iterates over all values in parallel, in no particular order.
    pub fn par_iter(&self) -> impl rayon::iter::ParallelIterator<Item = &T> + '_ {
        use rayon::iter::IntoParallelRefIterator;
        self.inner.par_iter()
    }
}

impl<T, S> Default for Set<T, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> PartialEq for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T, S> Eq for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.iter()).finish()
    }
}

impl<T, S> FromIterator<T> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Set<T, RandomState>
where
    T: Eq + Hash,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, S> Extend<T> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

macro_rules! set_operator {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<T, S> $trait<&Set<T, S>> for &Set<T, S>
        where
            T: Eq + Hash + Clone,
            S: BuildHasher + Clone,
        {
            type Output = Set<T, S>;

            fn $method(self, rhs: &Set<T, S>) -> Set<T, S> {
                self.$op(rhs)
            }
        }
    };
}

set_operator!(BitOr, bitor, union);
set_operator!(BitAnd, bitand, intersection);
set_operator!(Sub, sub, difference);
set_operator!(BitXor, bitxor, symmetric_difference);
