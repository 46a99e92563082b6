//! Dense conversions
//!
//! A dense slice is the interchange representation: `fromdense` keeps only
//! the non-zero positions, `todense` materializes a zero-filled buffer of
//! the requested length. Entries holding an exact zero are lost in a
//! dense round trip; that is the documented contract, not a defect.

use crate::dtype::Element;
use crate::error::{Error, Result};

use super::SparseVector;

impl<T: Element> SparseVector<T> {
    /// Keep the non-zero positions of a dense slice
    pub fn fromdense(dense: &[T]) -> Self {
        dense
            .iter()
            .enumerate()
            .filter_map(|(pos, &value)| (!value.is_zero()).then_some((pos as u64, value)))
            .collect()
    }

    /// Materialize a dense buffer of the requested length, zero-filled
    ///
    /// Defaults to one past the maximum present key. Requesting a shorter
    /// length fails with [`Error::DenseLength`].
    pub fn todense(&self, len: Option<usize>) -> Result<Vec<T>> {
        let required = self
            .entries
            .keys()
            .copied()
            .max()
            .map_or(0, |max| max as usize + 1);
        let len = len.unwrap_or(required);
        if len < required {
            return Err(Error::DenseLength { len, required });
        }
        let mut out: Vec<T> = bytemuck::zeroed_vec(len);
        for (key, value) in self.iter() {
            out[key as usize] = value;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let vec = SparseVector::fromdense(&[0i64, 1, 2, 3]);
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.todense(None).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(vec.todense(Some(5)).unwrap(), vec![0, 1, 2, 3, 0]);
        assert!(vec.todense(Some(3)).is_err());
    }

    #[test]
    fn test_explicit_zeros_lost() {
        let vec: SparseVector<f64> = [(0, 0.0), (1, 1.0)].into_iter().collect();
        let round = SparseVector::fromdense(&vec.todense(None).unwrap());
        assert_eq!(round.len(), 1);
        assert!(!round.contains(0));
    }

    #[test]
    fn test_empty() {
        let vec: SparseVector<f64> = SparseVector::new();
        assert_eq!(vec.todense(None).unwrap(), Vec::<f64>::new());
        assert_eq!(vec.todense(Some(2)).unwrap(), vec![0.0, 0.0]);
    }
}
