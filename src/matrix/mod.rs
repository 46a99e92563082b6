//! Sparse matrix: a defaulting mapping from row key to sparse vector
//!
//! [`SparseMatrix`] maps an arbitrary hashable row key to a
//! [`SparseVector`]; the column space is the union of the rows' key sets.
//! [`SparseMatrix::row_mut`] auto-vivifies (and retains) an empty vector,
//! mirroring a defaulting dictionary; [`SparseMatrix::get`] never inserts.
//! Arithmetic lifts the vector operators row-wise: mapping operands union
//! (`+`) or intersect (`*`) by row key, scalar operands broadcast across
//! every row.
//!
//! COO marshaling, transpose, and matrix multiplication live in
//! [`coo`](self), composed from the grouping engine and per-row dot
//! products.

mod coo;

use std::hash::Hash;
use std::ops::{Add, AddAssign, Mul, MulAssign};

use rustc_hash::FxHashMap;

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::vector::SparseVector;

/// A sparse matrix: hash map of row key to sparse row vector
#[derive(Clone, Debug)]
pub struct SparseMatrix<K, T: Element> {
    rows: FxHashMap<K, SparseVector<T>>,
}

/// Result of [`SparseMatrix::sum_axis`]: the three axes produce three types
#[derive(Clone, Debug)]
pub enum AxisSum<K, T: Element> {
    /// Grand total over every entry (`axis = None`)
    All(T),
    /// Column totals: every row vector summed into one (`axis = 0` / `-2`)
    Columns(SparseVector<T>),
    /// Per-row scalar totals (`axis = 1` / `-1`)
    Rows(FxHashMap<K, T>),
}

impl<K, T: Element> Default for SparseMatrix<K, T> {
    fn default() -> Self {
        Self {
            rows: FxHashMap::default(),
        }
    }
}

impl<K, T: Element> SparseMatrix<K, T> {
    /// Create an empty matrix
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows present (vivified empty rows included)
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no row is present
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Remove every row
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Iterate over `(row key, row vector)` in internal order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &SparseVector<T>)> {
        self.rows.iter()
    }

    /// Iterate over the row keys in internal order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.rows.keys()
    }

    /// Total number of stored entries across all rows
    pub fn nnz(&self) -> usize {
        self.rows.values().map(SparseVector::len).sum()
    }
}

impl<K: Eq + Hash + Clone, T: Element> SparseMatrix<K, T> {
    /// Build a matrix from `(row key, row vector)` pairs
    ///
    /// Mapping semantics: a repeated row key keeps the later vector.
    pub fn from_rows<I: IntoIterator<Item = (K, SparseVector<T>)>>(rows: I) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Row vector at `key`, or `None`; never inserts
    pub fn get(&self, key: &K) -> Option<&SparseVector<T>> {
        self.rows.get(key)
    }

    /// Mutable row vector at `key`, vivifying an empty row
    ///
    /// The vivified row is retained even if left empty, as a defaulting
    /// mapping does.
    pub fn row_mut(&mut self, key: K) -> &mut SparseVector<T> {
        self.rows.entry(key).or_insert_with(SparseVector::new)
    }

    /// Remove a row, returning it if present
    pub fn remove_row(&mut self, key: &K) -> Option<SparseVector<T>> {
        self.rows.remove(key)
    }

    /// Merge rows into the matrix, per-row update semantics
    ///
    /// Each incoming row is merged entry-by-entry into the existing row
    /// (overwriting matching columns), not substituted for it.
    pub fn update<I: IntoIterator<Item = (K, SparseVector<T>)>>(&mut self, data: I) {
        for (key, vector) in data {
            self.row_mut(key).update(&vector);
        }
    }

    /// Apply a vector-to-vector function to every row
    pub fn map(&self, f: impl Fn(&SparseVector<T>) -> SparseVector<T>) -> SparseMatrix<K, T> {
        self.iter().map(|(key, vec)| (key.clone(), f(vec))).collect()
    }

    /// Apply a function to every row, collecting plain per-row results
    pub fn map_values<U>(&self, f: impl Fn(&SparseVector<T>) -> U) -> FxHashMap<K, U> {
        self.iter().map(|(key, vec)| (key.clone(), f(vec))).collect()
    }

    /// Keep the rows whose vector satisfies the predicate
    pub fn filter(&self, pred: impl Fn(&SparseVector<T>) -> bool) -> SparseMatrix<K, T> {
        self.iter()
            .filter(|&(_, vec)| pred(vec))
            .map(|(key, vec)| (key.clone(), vec.clone()))
            .collect()
    }

    /// Grand total over every stored entry
    pub fn sum(&self) -> T {
        self.rows
            .values()
            .fold(T::zero(), |acc, vec| acc + vec.sum())
    }

    /// Column totals: every row vector summed into one vector
    pub fn sum_columns(&self) -> SparseVector<T> {
        let mut acc = SparseVector::new();
        for vec in self.rows.values() {
            acc += vec;
        }
        acc
    }

    /// Per-row scalar totals
    pub fn sum_rows(&self) -> FxHashMap<K, T> {
        self.map_values(SparseVector::sum)
    }

    /// Numeric-axis front-end over the three sums
    ///
    /// `None` is the grand total, `0`/`-2` the column totals, `1`/`-1` the
    /// per-row totals; anything else fails with [`Error::InvalidAxis`].
    pub fn sum_axis(&self, axis: Option<isize>) -> Result<AxisSum<K, T>> {
        match axis {
            None => Ok(AxisSum::All(self.sum())),
            Some(0 | -2) => Ok(AxisSum::Columns(self.sum_columns())),
            Some(1 | -1) => Ok(AxisSum::Rows(self.sum_rows())),
            Some(axis) => Err(Error::InvalidAxis { axis, ndim: 2 }),
        }
    }
}

impl<K: Eq + Hash, T: Element> PartialEq for SparseMatrix<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<K: Eq + Hash, T: Element> PartialEq for AxisSum<K, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::All(a), Self::All(b)) => a == b,
            (Self::Columns(a), Self::Columns(b)) => a == b,
            (Self::Rows(a), Self::Rows(b)) => a == b,
            _ => false,
        }
    }
}

impl<K: Eq + Hash, T: Element> FromIterator<(K, SparseVector<T>)> for SparseMatrix<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, SparseVector<T>)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Row-lifted arithmetic
// ---------------------------------------------------------------------------

impl<K: Eq + Hash + Clone, T: Element> AddAssign<&SparseMatrix<K, T>> for SparseMatrix<K, T> {
    /// Union of row keys, adding the corresponding row vectors
    fn add_assign(&mut self, other: &SparseMatrix<K, T>) {
        for (key, vec) in other.iter() {
            *self.row_mut(key.clone()) += vec;
        }
    }
}

impl<K: Eq + Hash + Clone, T: Element> Add<&SparseMatrix<K, T>> for &SparseMatrix<K, T> {
    type Output = SparseMatrix<K, T>;

    fn add(self, other: &SparseMatrix<K, T>) -> SparseMatrix<K, T> {
        let mut out = self.clone();
        out += other;
        out
    }
}

impl<K: Eq + Hash + Clone, T: Element> AddAssign<T> for SparseMatrix<K, T> {
    /// Broadcast the scalar across every row
    fn add_assign(&mut self, scalar: T) {
        for vec in self.rows.values_mut() {
            *vec += scalar;
        }
    }
}

impl<K: Eq + Hash + Clone, T: Element> Add<T> for &SparseMatrix<K, T> {
    type Output = SparseMatrix<K, T>;

    fn add(self, scalar: T) -> SparseMatrix<K, T> {
        self.map(|vec| vec + scalar)
    }
}

impl<K: Eq + Hash + Clone, T: Element> MulAssign<&SparseMatrix<K, T>> for SparseMatrix<K, T> {
    /// Intersection of row keys: rows absent from `other` are dropped
    fn mul_assign(&mut self, other: &SparseMatrix<K, T>) {
        self.rows.retain(|key, vec| match other.rows.get(key) {
            Some(held) => {
                *vec *= held;
                true
            }
            None => false,
        });
    }
}

impl<K: Eq + Hash + Clone, T: Element> Mul<&SparseMatrix<K, T>> for &SparseMatrix<K, T> {
    type Output = SparseMatrix<K, T>;

    /// Intersection of row keys, multiplying the corresponding rows
    fn mul(self, other: &SparseMatrix<K, T>) -> SparseMatrix<K, T> {
        self.iter()
            .filter_map(|(key, vec)| {
                other
                    .rows
                    .get(key)
                    .map(|held| (key.clone(), vec * held))
            })
            .collect()
    }
}

impl<K: Eq + Hash + Clone, T: Element> MulAssign<T> for SparseMatrix<K, T> {
    fn mul_assign(&mut self, scalar: T) {
        for vec in self.rows.values_mut() {
            *vec *= scalar;
        }
    }
}

impl<K: Eq + Hash + Clone, T: Element> Mul<T> for &SparseMatrix<K, T> {
    type Output = SparseMatrix<K, T>;

    fn mul(self, scalar: T) -> SparseMatrix<K, T> {
        self.map(|vec| vec * scalar)
    }
}
