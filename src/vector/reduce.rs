//! Reductions, order statistics, and elementwise dispatch
//!
//! Reductions range over the stored values. `min`/`max` and the arg
//! variants fail on an empty vector rather than inventing an identity
//! element. Order statistics sort by value with ties broken by key, so
//! results are deterministic regardless of hash order.

use std::cmp::Ordering;

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::indices::Indices;

use super::{max_of, min_of, Operand, SparseVector};

/// Value-then-key ordering used by the order statistics
#[inline]
fn by_value<T: Element>(a: &(u64, T), b: &(u64, T)) -> Ordering {
    a.1.partial_cmp(&b.1)
        .unwrap_or(Ordering::Equal)
        .then(a.0.cmp(&b.0))
}

impl<T: Element> SparseVector<T> {
    /// Sum of the stored values (zero for an empty vector)
    pub fn sum(&self) -> T {
        self.entries
            .values()
            .fold(T::zero(), |acc, &value| acc + value)
    }

    /// Smallest stored value
    pub fn min(&self) -> Result<T> {
        self.entries
            .values()
            .copied()
            .reduce(min_of)
            .ok_or(Error::empty_reduction("min"))
    }

    /// Largest stored value
    pub fn max(&self) -> Result<T> {
        self.entries
            .values()
            .copied()
            .reduce(max_of)
            .ok_or(Error::empty_reduction("max"))
    }

    /// Key of the smallest value (ties broken by smaller key)
    pub fn argmin(&self) -> Result<u64> {
        self.iter()
            .reduce(|best, item| if by_value(&item, &best) == Ordering::Less { item } else { best })
            .map(|(key, _)| key)
            .ok_or(Error::empty_reduction("argmin"))
    }

    /// Key of the largest value (ties broken by smaller key)
    pub fn argmax(&self) -> Result<u64> {
        self.iter()
            .reduce(|best, item| {
                if by_value(&item, &best) == Ordering::Greater {
                    item
                } else {
                    best
                }
            })
            .map(|(key, _)| key)
            .ok_or(Error::empty_reduction("argmax"))
    }

    /// Keys in ascending value order, ties by key
    pub fn argsort(&self) -> Vec<u64> {
        let mut items: Vec<(u64, T)> = self.iter().collect();
        items.sort_by(by_value);
        items.into_iter().map(|(key, _)| key).collect()
    }

    /// Keys partitioned so the `kth` smallest values come first
    ///
    /// The first `kth` keys hold values no larger than the key at position
    /// `kth`; neither side is otherwise sorted.
    pub fn argpartition(&self, kth: usize) -> Result<Vec<u64>> {
        if kth >= self.len() {
            return Err(Error::length_mismatch(kth + 1, self.len()));
        }
        let mut items: Vec<(u64, T)> = self.iter().collect();
        items.select_nth_unstable_by(kth, by_value);
        Ok(items.into_iter().map(|(key, _)| key).collect())
    }

    /// Keys holding a non-zero value
    pub fn nonzero(&self) -> Indices {
        self.iter()
            .filter(|(_, value)| !value.is_zero())
            .map(|(key, _)| key)
            .collect()
    }

    /// Sum of products over the intersection of key spaces
    ///
    /// Zero for disjoint vectors; commutative; iterates the smaller
    /// operand and probes the larger.
    pub fn dot(&self, other: &SparseVector<T>) -> T {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .iter()
            .filter_map(|(key, value)| large.entries.get(&key).map(|&held| value * held))
            .fold(T::zero(), |acc, product| acc + product)
    }

    /// Apply a unary function to every value
    pub fn map<U: Element>(&self, f: impl Fn(T) -> U) -> SparseVector<U> {
        self.iter().map(|(key, value)| (key, f(value))).collect()
    }

    /// Apply a binary function against an operand, over the receiver's keys
    ///
    /// A vector operand reads as zero where absent.
    pub fn map2<'a>(
        &'a self,
        rhs: impl Into<Operand<'a, T>>,
        f: impl Fn(T, T) -> T,
    ) -> SparseVector<T> {
        let rhs = rhs.into();
        self.iter()
            .map(|(key, value)| (key, f(value, rhs.get(key))))
            .collect()
    }

    /// Keep only the entries whose value satisfies the predicate
    pub fn filter(&self, pred: impl Fn(T) -> bool) -> SparseVector<T> {
        self.iter().filter(|&(_, value)| pred(value)).collect()
    }

    /// Keep only the entries satisfying a binary predicate against an operand
    pub fn filter_with<'a>(
        &'a self,
        rhs: impl Into<Operand<'a, T>>,
        pred: impl Fn(T, T) -> bool,
    ) -> SparseVector<T> {
        let rhs = rhs.into();
        self.iter()
            .filter(|&(key, value)| pred(value, rhs.get(key)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown() -> SparseVector<f64> {
        // keys 0..5 holding 5, 4, 3, 2, 1
        (0..5u64).map(|key| (key, (5 - key) as f64)).collect()
    }

    #[test]
    fn test_reductions() {
        let vec = countdown();
        assert_eq!(vec.sum(), 15.0);
        assert_eq!(vec.min().unwrap(), 1.0);
        assert_eq!(vec.max().unwrap(), 5.0);
        assert_eq!(vec.argmin().unwrap(), 4);
        assert_eq!(vec.argmax().unwrap(), 0);
    }

    #[test]
    fn test_empty_reductions_fail() {
        let vec: SparseVector<f64> = SparseVector::new();
        assert_eq!(vec.sum(), 0.0);
        assert!(vec.min().is_err());
        assert!(vec.max().is_err());
        assert!(vec.argmin().is_err());
        assert!(vec.argmax().is_err());
    }

    #[test]
    fn test_argsort_and_partition() {
        let vec = countdown();
        assert_eq!(vec.argsort(), vec![4, 3, 2, 1, 0]);
        let keys = vec.argpartition(2).unwrap();
        let head: Indices = keys[..2].iter().copied().collect();
        assert_eq!(head, [3, 4].into_iter().collect());
        assert_eq!(keys[2], 2);
        assert!(vec.argpartition(5).is_err());
    }

    #[test]
    fn test_argsort_tie_break_by_key() {
        let vec: SparseVector<i64> = [(7, 1), (3, 1), (5, 0)].into_iter().collect();
        assert_eq!(vec.argsort(), vec![5, 3, 7]);
    }

    #[test]
    fn test_dot_commutes() {
        let vec = SparseVector::from_keys(0..3, 1.0);
        let other = SparseVector::from_keys([2, 3].into_iter(), 2.0);
        assert_eq!(vec.dot(&other), 2.0);
        assert_eq!(other.dot(&vec), 2.0);
        let disjoint = SparseVector::from_keys([9].into_iter(), 4.0);
        assert_eq!(vec.dot(&disjoint), 0.0);
    }

    #[test]
    fn test_map_filter() {
        let vec: SparseVector<f64> =
            [(0, -1.0), (1, 0.0), (2, 1.0)].into_iter().collect();
        let clipped = vec.map2(0.0, f64::min);
        assert_eq!(clipped.values().iter().filter(|&&v| v == 0.0).count(), 2);
        let zeros = vec.filter(|value| value == 0.0);
        assert_eq!(zeros.keys(), vec![1]);
        let eq_abs = vec.filter_with(&vec.abs(), |a, b| a == b);
        assert_eq!(eq_abs.len(), 2);
        assert_eq!(vec.nonzero(), [0, 2].into_iter().collect());
    }
}
