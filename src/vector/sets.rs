//! Set-style merges over vector key spaces
//!
//! `|` unions key spaces and keeps the elementwise maximum at overlapping
//! keys; `&` intersects key spaces and keeps the elementwise minimum; `^`
//! keeps each side's own value at keys unique to it. `maximum`/`minimum`
//! broadcast over the receiver's keys, reading a vector operand as zero
//! where absent.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

use crate::dtype::Element;

use super::{max_of, min_of, Operand, SparseVector};

impl<T: Element> BitOrAssign<&SparseVector<T>> for SparseVector<T> {
    /// Union of key spaces, elementwise maximum at overlaps
    fn bitor_assign(&mut self, other: &SparseVector<T>) {
        for (key, value) in other.iter() {
            let slot = self.entries.entry(key).or_insert(value);
            if value > *slot {
                *slot = value;
            }
        }
    }
}

impl<T: Element> BitOr<&SparseVector<T>> for &SparseVector<T> {
    type Output = SparseVector<T>;

    fn bitor(self, other: &SparseVector<T>) -> SparseVector<T> {
        let mut out = self.clone();
        out |= other;
        out
    }
}

impl<T: Element> BitAndAssign<&SparseVector<T>> for SparseVector<T> {
    /// Intersection of key spaces, elementwise minimum
    fn bitand_assign(&mut self, other: &SparseVector<T>) {
        self.entries.retain(|key, value| match other.entries.get(key) {
            Some(&held) => {
                *value = min_of(*value, held);
                true
            }
            None => false,
        });
    }
}

impl<T: Element> BitAnd<&SparseVector<T>> for &SparseVector<T> {
    type Output = SparseVector<T>;

    /// Intersection driven from the smaller operand
    fn bitand(self, other: &SparseVector<T>) -> SparseVector<T> {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .iter()
            .filter_map(|(key, value)| {
                large
                    .entries
                    .get(&key)
                    .map(|&held| (key, min_of(value, held)))
            })
            .collect()
    }
}

impl<T: Element> BitXorAssign<&SparseVector<T>> for SparseVector<T> {
    /// Symmetric difference of key spaces, own values on each side
    fn bitxor_assign(&mut self, other: &SparseVector<T>) {
        for (key, value) in other.iter() {
            if self.entries.remove(&key).is_none() {
                self.insert(key, value);
            }
        }
    }
}

impl<T: Element> BitXor<&SparseVector<T>> for &SparseVector<T> {
    type Output = SparseVector<T>;

    fn bitxor(self, other: &SparseVector<T>) -> SparseVector<T> {
        let mut out = self.clone();
        out ^= other;
        out
    }
}

impl<T: Element> SparseVector<T> {
    /// Elementwise maximum over the receiver's keys
    ///
    /// A vector operand reads as zero at keys it does not hold; keys unique
    /// to the operand do not appear in the result.
    pub fn maximum<'a>(&'a self, rhs: impl Into<Operand<'a, T>>) -> SparseVector<T> {
        let rhs = rhs.into();
        self.iter()
            .map(|(key, value)| (key, max_of(value, rhs.get(key))))
            .collect()
    }

    /// Elementwise minimum over the receiver's keys
    pub fn minimum<'a>(&'a self, rhs: impl Into<Operand<'a, T>>) -> SparseVector<T> {
        let rhs = rhs.into();
        self.iter()
            .map(|(key, value)| (key, min_of(value, rhs.get(key))))
            .collect()
    }

    /// Entries whose key is absent from every other vector
    pub fn difference(&self, others: &[&SparseVector<T>]) -> SparseVector<T> {
        self.iter()
            .filter(|&(key, _)| others.iter().all(|other| !other.contains(key)))
            .collect()
    }
}
