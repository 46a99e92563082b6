//! Sparse set of non-negative integer keys
//!
//! [`Indices`] is the foundation for the key space of
//! [`SparseVector`](crate::vector::SparseVector): a hash set of `u64` keys
//! with the full set-algebra operator surface, subset comparisons, and
//! boolean-mask dense conversions. Iteration order is the internal hash-map
//! order; it is deterministic for a given construction history but matches
//! neither insertion nor numeric order.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};

/// A sparse set of non-negative integer keys
#[derive(Clone, Debug, Default, Eq)]
pub struct Indices {
    keys: FxHashSet<u64>,
}

impl Indices {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys present
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the set is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Membership test, O(1) amortized
    #[inline]
    pub fn contains(&self, key: u64) -> bool {
        self.keys.contains(&key)
    }

    /// Insert a key, returning whether the set changed
    pub fn add(&mut self, key: u64) -> bool {
        self.keys.insert(key)
    }

    /// Remove a key, returning whether the set changed
    pub fn discard(&mut self, key: u64) -> bool {
        self.keys.remove(&key)
    }

    /// Bulk insert from any source of keys
    pub fn update<I: IntoIterator<Item = u64>>(&mut self, keys: I) {
        self.keys.extend(keys);
    }

    /// Remove every key
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Iterate over the keys in internal order
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.keys.iter().copied()
    }

    /// Construct from signed keys, rejecting negatives
    pub fn from_signed(keys: &[i64]) -> Result<Self> {
        let mut out = Self::new();
        for &key in keys {
            if key < 0 {
                return Err(Error::NegativeKey { key });
            }
            out.add(key as u64);
        }
        Ok(out)
    }

    /// Whether `self` shares no key with `other`
    pub fn isdisjoint(&self, other: &Indices) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !small.iter().any(|key| large.contains(key))
    }

    /// Whether every key of `self` is in `other`
    pub fn is_subset(&self, other: &Indices) -> bool {
        self.len() <= other.len() && self.iter().all(|key| other.contains(key))
    }

    /// Union with zero or more other sets (empty input yields a copy)
    pub fn union(&self, others: &[&Indices]) -> Indices {
        let mut out = self.clone();
        for other in others {
            out |= other;
        }
        out
    }

    /// Intersection with zero or more other sets (empty input yields a copy)
    pub fn intersection(&self, others: &[&Indices]) -> Indices {
        let mut out = self.clone();
        for other in others {
            out &= other;
        }
        out
    }

    /// Difference from zero or more other sets (empty input yields a copy)
    pub fn difference(&self, others: &[&Indices]) -> Indices {
        let mut out = self.clone();
        for other in others {
            out -= other;
        }
        out
    }

    /// Size of the n-way intersection
    ///
    /// With no arguments this is the self-intersection, i.e. the
    /// cardinality of the set.
    pub fn dot(&self, others: &[&Indices]) -> usize {
        if others.is_empty() {
            return self.len();
        }
        // Drive from the smallest operand, probe the rest
        let smallest = others
            .iter()
            .copied()
            .fold(self, |best, other| if other.len() < best.len() { other } else { best });
        smallest
            .iter()
            .filter(|&key| {
                self.contains(key) && others.iter().all(|other| other.contains(key))
            })
            .count()
    }

    /// Build a set from the true positions of a boolean mask
    pub fn fromdense(mask: &[bool]) -> Self {
        mask.iter()
            .enumerate()
            .filter_map(|(pos, &set)| set.then_some(pos as u64))
            .collect()
    }

    /// Materialize a boolean mask of the requested length
    ///
    /// Defaults to one past the maximum key. Requesting a length shorter
    /// than that fails with [`Error::DenseLength`].
    pub fn todense(&self, len: Option<usize>) -> Result<Vec<bool>> {
        let required = self.iter().max().map_or(0, |max| max as usize + 1);
        let len = len.unwrap_or(required);
        if len < required {
            return Err(Error::DenseLength { len, required });
        }
        let mut mask = vec![false; len];
        for key in self.iter() {
            mask[key as usize] = true;
        }
        Ok(mask)
    }
}

impl PartialEq for Indices {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

/// Subset partial order: `<=` is subset, `<` is proper subset
impl PartialOrd for Indices {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.len().cmp(&other.len()) {
            Ordering::Equal if self == other => Some(Ordering::Equal),
            Ordering::Less if self.is_subset(other) => Some(Ordering::Less),
            Ordering::Greater if other.is_subset(self) => Some(Ordering::Greater),
            _ => None,
        }
    }

    fn le(&self, other: &Self) -> bool {
        self.is_subset(other)
    }

    fn lt(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    fn ge(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    fn gt(&self, other: &Self) -> bool {
        other.len() < self.len() && other.is_subset(self)
    }
}

impl FromIterator<u64> for Indices {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl Extend<u64> for Indices {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        self.keys.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Indices {
    type Item = u64;
    type IntoIter = std::iter::Copied<std::collections::hash_set::Iter<'a, u64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter().copied()
    }
}

impl BitOrAssign<&Indices> for Indices {
    fn bitor_assign(&mut self, other: &Indices) {
        self.keys.extend(other.iter());
    }
}

impl BitAndAssign<&Indices> for Indices {
    fn bitand_assign(&mut self, other: &Indices) {
        if other.len() < self.len() {
            // Rebuild from the smaller operand, probing the larger
            let kept: FxHashSet<u64> =
                other.iter().filter(|&key| self.contains(key)).collect();
            self.keys = kept;
        } else {
            self.keys.retain(|key| other.contains(*key));
        }
    }
}

impl SubAssign<&Indices> for Indices {
    fn sub_assign(&mut self, other: &Indices) {
        if other.len() < self.len() {
            for key in other.iter() {
                self.keys.remove(&key);
            }
        } else {
            self.keys.retain(|key| !other.contains(*key));
        }
    }
}

impl BitXorAssign<&Indices> for Indices {
    fn bitxor_assign(&mut self, other: &Indices) {
        for key in other.iter() {
            if !self.keys.remove(&key) {
                self.keys.insert(key);
            }
        }
    }
}

macro_rules! impl_indices_binop {
    ($($trait:ident, $method:ident, $assign:ident;)*) => {
        $(
            impl $trait<&Indices> for &Indices {
                type Output = Indices;

                fn $method(self, other: &Indices) -> Indices {
                    let mut out = self.clone();
                    out.$assign(other);
                    out
                }
            }
        )*
    };
}

impl_indices_binop! {
    BitOr, bitor, bitor_assign;
    BitAnd, bitand, bitand_assign;
    Sub, sub, sub_assign;
    BitXor, bitxor, bitxor_assign;
}

impl fmt::Display for Indices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "indices([")?;
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{key}")?;
        }
        write!(f, "])")
    }
}
