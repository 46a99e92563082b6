//! Sparse mapping from non-negative integer key to a numeric value
//!
//! [`SparseVector`] stores only present entries in a hash map; every absent
//! key implicitly holds the zero of the element type. Explicit zero entries
//! may exist and are distinct from absence for membership tests. Reading a
//! single key is a pure lookup and never inserts; the mutating accessor
//! [`SparseVector::entry`] vivifies with zero explicitly.
//!
//! Submodules add the operator surface: scalar/vector/dense arithmetic,
//! comparisons returning an [`Indices`] of satisfying keys, set-style
//! merges over key spaces, reductions and elementwise dispatch, and dense
//! conversions.

mod arith;
mod cmp;
mod dense;
mod reduce;
mod sets;

use std::fmt;

use rustc_hash::FxHashMap;

use crate::dtype::{can_cast_safely, DType, Element};
use crate::error::{Error, Result};
use crate::indices::Indices;

/// A sparse vector: hash map of `u64` key to element, absent keys read as zero
#[derive(Clone, Debug)]
pub struct SparseVector<T: Element> {
    entries: FxHashMap<u64, T>,
}

impl<T: Element> Default for SparseVector<T> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

#[inline]
pub(crate) fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline]
pub(crate) fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// One operand of a broadcastable vector operation
///
/// Binary operations dispatch over the operand kind once per call: a scalar
/// broadcasts to every key it is combined with, a vector reads as zero at
/// keys it does not hold.
#[derive(Copy, Clone, Debug)]
pub enum Operand<'a, T: Element> {
    /// A scalar, broadcast to every key
    Scalar(T),
    /// Another sparse vector, zero at absent keys
    Vector(&'a SparseVector<T>),
}

impl<T: Element> From<T> for Operand<'_, T> {
    fn from(value: T) -> Self {
        Self::Scalar(value)
    }
}

impl<'a, T: Element> From<&'a SparseVector<T>> for Operand<'a, T> {
    fn from(vector: &'a SparseVector<T>) -> Self {
        Self::Vector(vector)
    }
}

impl<T: Element> Operand<'_, T> {
    /// Value this operand holds at `key` (zero where absent)
    #[inline]
    pub(crate) fn get(&self, key: u64) -> T {
        match self {
            Self::Scalar(value) => *value,
            Self::Vector(vector) => vector.get(key),
        }
    }
}

impl<T: Element> SparseVector<T> {
    /// Create an empty vector
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// The element type tag
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Number of present entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry is present
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` holds an entry (explicit zeros count as present)
    #[inline]
    pub fn contains(&self, key: u64) -> bool {
        self.entries.contains_key(&key)
    }

    /// Value at `key`, or zero where absent
    ///
    /// Pure lookup: never inserts, and membership is unaffected.
    #[inline]
    pub fn get(&self, key: u64) -> T {
        self.entries.get(&key).copied().unwrap_or_else(T::zero)
    }

    /// Mutable access to the entry at `key`, vivifying it with zero
    ///
    /// This is the compound-assignment path (`*vec.entry(k) += x`); unlike
    /// [`get`](Self::get) it creates the entry.
    pub fn entry(&mut self, key: u64) -> &mut T {
        self.entries.entry(key).or_insert_with(T::zero)
    }

    /// Set the entry at `key`
    pub fn insert(&mut self, key: u64, value: T) {
        self.entries.insert(key, value);
    }

    /// Remove the entry at `key`; absent keys are a silent no-op
    pub fn remove_key(&mut self, key: u64) -> Option<T> {
        self.entries.remove(&key)
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over `(key, value)` pairs in internal order
    pub fn iter(&self) -> impl Iterator<Item = (u64, T)> + '_ {
        self.entries.iter().map(|(&key, &value)| (key, value))
    }

    /// Snapshot of the keys, in internal order
    ///
    /// Matches the order of [`values`](Self::values) while the vector is
    /// not mutated in between.
    pub fn keys(&self) -> Vec<u64> {
        self.entries.keys().copied().collect()
    }

    /// Snapshot of the values, in internal order
    pub fn values(&self) -> Vec<T> {
        self.entries.values().copied().collect()
    }

    /// Build from keys, adding `value` per occurrence
    ///
    /// Counter semantics: a key seen `n` times ends at `n * value`. With
    /// `T::one()` this counts occurrences.
    pub fn from_keys<I: IntoIterator<Item = u64>>(keys: I, value: T) -> Self {
        let mut out = Self::new();
        for key in keys {
            let slot = out.entry(key);
            *slot = *slot + value;
        }
        out
    }

    /// Build from parallel key and value arrays, accumulating duplicates
    ///
    /// Repeated keys sum their values, the coordinate-format convention.
    pub fn from_pairs(keys: &[u64], values: &[T]) -> Result<Self> {
        if keys.len() != values.len() {
            return Err(Error::length_mismatch(keys.len(), values.len()));
        }
        let mut out = Self::new();
        for (&key, &value) in keys.iter().zip(values) {
            let slot = out.entry(key);
            *slot = *slot + value;
        }
        Ok(out)
    }

    /// Re-type every value, checking representability
    ///
    /// Lossless directions (per [`can_cast_safely`]) skip per-value checks;
    /// lossy directions validate each value and fail with
    /// [`Error::ValueCast`] on the first that does not convert.
    pub fn cast<U: Element>(&self) -> Result<SparseVector<U>> {
        let safe = can_cast_safely(T::DTYPE, U::DTYPE);
        let mut out = SparseVector::new();
        for (key, value) in self.iter() {
            let converted = if safe {
                U::from_f64(value.to_f64())
            } else {
                num_traits::cast::<T, U>(value).ok_or(Error::ValueCast {
                    value: value.to_f64(),
                    from: T::DTYPE,
                    to: U::DTYPE,
                })?
            };
            out.insert(key, converted);
        }
        Ok(out)
    }

    /// Overwrite-merge the entries of `other` into `self`
    pub fn update(&mut self, other: &SparseVector<T>) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    /// Add one to the entry at each key, vivifying absent keys
    pub fn update_keys<I: IntoIterator<Item = u64>>(&mut self, keys: I) {
        for key in keys {
            let slot = self.entry(key);
            *slot = *slot + T::one();
        }
    }

    /// Remove every entry equal to `value`, returning the count removed
    pub fn remove_value(&mut self, value: T) -> usize {
        let before = self.len();
        self.entries.retain(|_, held| *held != value);
        before - self.len()
    }

    /// Remove every zero-valued entry, returning the count removed
    ///
    /// Idempotent: a compacted vector has nothing further to drop.
    pub fn compact(&mut self) -> usize {
        self.remove_value(T::zero())
    }

    /// Sub-vector of the entries present at the given keys
    pub fn select<I: IntoIterator<Item = u64>>(&self, keys: I) -> SparseVector<T> {
        keys.into_iter()
            .filter_map(|key| self.entries.get(&key).map(|&value| (key, value)))
            .collect()
    }

    /// Set every given key to `value`
    pub fn assign<I: IntoIterator<Item = u64>>(&mut self, keys: I, value: T) {
        for key in keys {
            self.insert(key, value);
        }
    }

    /// Remove every given key; absent keys are skipped silently
    pub fn remove_keys<I: IntoIterator<Item = u64>>(&mut self, keys: I) {
        for key in keys {
            self.entries.remove(&key);
        }
    }

    /// Whole-object equality (same keys, same values)
    pub fn equal(&self, other: &SparseVector<T>) -> bool {
        self == other
    }
}

/// Whole-object equality; elementwise comparison is a separate surface
impl<T: Element> PartialEq for SparseVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Mapping-style construction: later duplicates overwrite earlier ones
impl<T: Element> FromIterator<(u64, T)> for SparseVector<T> {
    fn from_iter<I: IntoIterator<Item = (u64, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Every key of the set, each with value one
impl<T: Element> From<&Indices> for SparseVector<T> {
    fn from(indices: &Indices) -> Self {
        indices.iter().map(|key| (key, T::one())).collect()
    }
}

/// The key set of the vector
impl<T: Element> From<&SparseVector<T>> for Indices {
    fn from(vector: &SparseVector<T>) -> Self {
        vector.entries.keys().copied().collect()
    }
}

impl<T: Element> fmt::Display for SparseVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vector([")?;
        for (i, key) in self.entries.keys().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{key}")?;
        }
        write!(f, "], [")?;
        for (i, value) in self.entries.values().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "])")
    }
}
