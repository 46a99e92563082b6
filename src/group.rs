//! Grouping engine: partition a key sequence by distinct key
//!
//! `arggroupby` yields every distinct key with the positions at which it
//! occurs, in ascending key order. Two algorithms produce identical
//! semantics:
//!
//! - **Bucket path**: when every key is losslessly representable as a
//!   non-negative machine integer, one scan builds a histogram of positions
//!   per key and the distinct keys are then sorted. O(n + k log k).
//! - **Sort fallback**: otherwise (negative, floating-point, or non-numeric
//!   keys), a stable argsort followed by run detection over adjacent keys.
//!
//! The fallback exists purely for applicability, never for different
//! semantics. Keys that are neither integer-castable nor orderable do not
//! satisfy [`GroupKey`] and are rejected at compile time.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

/// A key that a sequence can be grouped by
///
/// `as_index` returns the key's lossless non-negative integer
/// representation, or `None` when the key must take the sort fallback.
/// `order` is a total ordering over keys; for distinct keys it must be
/// consistent with `as_index` where both are defined.
pub trait GroupKey: Clone {
    /// Lossless non-negative integer representation, if any
    fn as_index(&self) -> Option<u64>;

    /// Total ordering used by the sort fallback
    fn order(&self, other: &Self) -> Ordering;
}

macro_rules! impl_groupkey_unsigned {
    ($($t:ty),*) => {
        $(
            impl GroupKey for $t {
                #[inline]
                fn as_index(&self) -> Option<u64> {
                    Some(*self as u64)
                }

                #[inline]
                fn order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_groupkey_signed {
    ($($t:ty),*) => {
        $(
            impl GroupKey for $t {
                #[inline]
                fn as_index(&self) -> Option<u64> {
                    if *self >= 0 { Some(*self as u64) } else { None }
                }

                #[inline]
                fn order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

// Floats never take the bucket path: an integer-valued float is still a
// float-typed key.
macro_rules! impl_groupkey_float {
    ($($t:ty),*) => {
        $(
            impl GroupKey for $t {
                #[inline]
                fn as_index(&self) -> Option<u64> {
                    None
                }

                #[inline]
                fn order(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )*
    };
}

impl_groupkey_unsigned!(u64, u32, u16, u8, usize);
impl_groupkey_signed!(i64, i32, i16, i8, isize);
impl_groupkey_float!(f64, f32);

impl GroupKey for String {
    #[inline]
    fn as_index(&self) -> Option<u64> {
        None
    }

    #[inline]
    fn order(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl GroupKey for &str {
    #[inline]
    fn as_index(&self) -> Option<u64> {
        None
    }

    #[inline]
    fn order(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Group positions by distinct key, ascending by key
///
/// Every distinct value in `keys` is paired with the positions at which it
/// occurs, positions in ascending order. Selects the bucket path when every
/// key has an integer index, the sort fallback otherwise.
pub fn arggroupby<K: GroupKey>(keys: &[K]) -> Vec<(K, Vec<usize>)> {
    match bucket_groups(keys) {
        Some(groups) => groups,
        None => sorted_groups(keys),
    }
}

/// Bucket path: histogram of positions per integer key
fn bucket_groups<K: GroupKey>(keys: &[K]) -> Option<Vec<(K, Vec<usize>)>> {
    let mut buckets: FxHashMap<u64, Vec<usize>> = FxHashMap::default();
    for (pos, key) in keys.iter().enumerate() {
        buckets.entry(key.as_index()?).or_default().push(pos);
    }
    let mut groups: Vec<(u64, Vec<usize>)> = buckets.into_iter().collect();
    groups.sort_unstable_by_key(|&(index, _)| index);
    Some(
        groups
            .into_iter()
            .map(|(_, positions)| (keys[positions[0]].clone(), positions))
            .collect(),
    )
}

/// Sort fallback: stable argsort, then run boundaries over adjacent keys
fn sorted_groups<K: GroupKey>(keys: &[K]) -> Vec<(K, Vec<usize>)> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| keys[a].order(&keys[b]));

    let mut groups: Vec<(K, Vec<usize>)> = Vec::new();
    for pos in order {
        if let Some((key, positions)) = groups.last_mut() {
            if keys[pos].order(key) == Ordering::Equal {
                positions.push(pos);
                continue;
            }
        }
        groups.push((keys[pos].clone(), vec![pos]));
    }
    groups
}

/// Group one parallel array by distinct key
///
/// For every distinct key, yields the key with the slice of `values`
/// restricted to the positions where it occurs.
pub fn groupby<K: GroupKey, V: Clone>(keys: &[K], values: &[V]) -> Result<Vec<(K, Vec<V>)>> {
    if values.len() != keys.len() {
        return Err(Error::length_mismatch(keys.len(), values.len()));
    }
    Ok(arggroupby(keys)
        .into_iter()
        .map(|(key, positions)| {
            let taken = positions.iter().map(|&p| values[p].clone()).collect();
            (key, taken)
        })
        .collect())
}

/// Group two parallel arrays by distinct key
pub fn groupby2<K: GroupKey, A: Clone, B: Clone>(
    keys: &[K],
    a: &[A],
    b: &[B],
) -> Result<Vec<(K, Vec<A>, Vec<B>)>> {
    if a.len() != keys.len() {
        return Err(Error::length_mismatch(keys.len(), a.len()));
    }
    if b.len() != keys.len() {
        return Err(Error::length_mismatch(keys.len(), b.len()));
    }
    Ok(arggroupby(keys)
        .into_iter()
        .map(|(key, positions)| {
            let xs = positions.iter().map(|&p| a[p].clone()).collect();
            let ys = positions.iter().map(|&p| b[p].clone()).collect();
            (key, xs, ys)
        })
        .collect())
}
