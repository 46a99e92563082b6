//! Arithmetic operators for sparse vectors
//!
//! Scalar operands broadcast over the vector's existing keys. Vector
//! operands combine over the union of key spaces for `+`/`-` and over the
//! intersection for `*` (a product against an implicit zero is zero).
//! In-place forms mutate only the receiver. There is deliberately no `-=`
//! or `/` between two vectors: subtraction has no union semantics worth
//! guessing at for in-place use, and division by implicit zeros is
//! undefined.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::dtype::Element;
use crate::error::{Error, Result};

use super::SparseVector;

// ---------------------------------------------------------------------------
// Scalar operands
// ---------------------------------------------------------------------------

macro_rules! impl_scalar_op {
    ($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt;)*) => {
        $(
            impl<T: Element> $trait<T> for &SparseVector<T> {
                type Output = SparseVector<T>;

                fn $method(self, scalar: T) -> SparseVector<T> {
                    self.iter().map(|(key, value)| (key, value $op scalar)).collect()
                }
            }

            impl<T: Element> $assign_trait<T> for SparseVector<T> {
                fn $assign_method(&mut self, scalar: T) {
                    for value in self.entries.values_mut() {
                        *value = *value $op scalar;
                    }
                }
            }
        )*
    };
}

impl_scalar_op! {
    Add, add, AddAssign, add_assign, +;
    Sub, sub, SubAssign, sub_assign, -;
    Mul, mul, MulAssign, mul_assign, *;
    Div, div, DivAssign, div_assign, /;
}

// Reflected scalar forms (`scalar op &vec`) per supported primitive
macro_rules! impl_reflected_scalar {
    ($($t:ty),*) => {
        $(
            impl Add<&SparseVector<$t>> for $t {
                type Output = SparseVector<$t>;

                fn add(self, vector: &SparseVector<$t>) -> SparseVector<$t> {
                    vector.iter().map(|(key, value)| (key, self + value)).collect()
                }
            }

            impl Sub<&SparseVector<$t>> for $t {
                type Output = SparseVector<$t>;

                fn sub(self, vector: &SparseVector<$t>) -> SparseVector<$t> {
                    vector.iter().map(|(key, value)| (key, self - value)).collect()
                }
            }

            impl Mul<&SparseVector<$t>> for $t {
                type Output = SparseVector<$t>;

                fn mul(self, vector: &SparseVector<$t>) -> SparseVector<$t> {
                    vector.iter().map(|(key, value)| (key, self * value)).collect()
                }
            }

            impl Div<&SparseVector<$t>> for $t {
                type Output = SparseVector<$t>;

                fn div(self, vector: &SparseVector<$t>) -> SparseVector<$t> {
                    vector.iter().map(|(key, value)| (key, self / value)).collect()
                }
            }
        )*
    };
}

impl_reflected_scalar!(f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);

// ---------------------------------------------------------------------------
// Vector operands
// ---------------------------------------------------------------------------

impl<T: Element> AddAssign<&SparseVector<T>> for SparseVector<T> {
    /// Union of key spaces; absent keys read as zero
    fn add_assign(&mut self, other: &SparseVector<T>) {
        for (key, value) in other.iter() {
            let slot = self.entry(key);
            *slot = *slot + value;
        }
    }
}

impl<T: Element> Add<&SparseVector<T>> for &SparseVector<T> {
    type Output = SparseVector<T>;

    fn add(self, other: &SparseVector<T>) -> SparseVector<T> {
        let mut out = self.clone();
        out += other;
        out
    }
}

impl<T: Element> Sub<&SparseVector<T>> for &SparseVector<T> {
    type Output = SparseVector<T>;

    /// Union of key spaces; absent keys read as zero
    fn sub(self, other: &SparseVector<T>) -> SparseVector<T> {
        let mut out = self.clone();
        for (key, value) in other.iter() {
            let slot = out.entry(key);
            *slot = *slot - value;
        }
        out
    }
}

impl<T: Element> MulAssign<&SparseVector<T>> for SparseVector<T> {
    /// Intersection of key spaces: keys absent from `other` are dropped
    fn mul_assign(&mut self, other: &SparseVector<T>) {
        self.entries.retain(|key, value| match other.entries.get(key) {
            Some(&factor) => {
                *value = *value * factor;
                true
            }
            None => false,
        });
    }
}

impl<T: Element> Mul<&SparseVector<T>> for &SparseVector<T> {
    type Output = SparseVector<T>;

    /// Intersection of key spaces, driven from the smaller operand
    fn mul(self, other: &SparseVector<T>) -> SparseVector<T> {
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
                    .map(|&factor| (key, value * factor))
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Exponentiation, negation, absolute value
// ---------------------------------------------------------------------------

impl<T: Element> SparseVector<T> {
    /// Elementwise power (`self ** exp`)
    pub fn pow(&self, exp: T) -> SparseVector<T> {
        self.iter()
            .map(|(key, value)| (key, T::from_f64(value.to_f64().powf(exp.to_f64()))))
            .collect()
    }

    /// In-place elementwise power
    pub fn pow_assign(&mut self, exp: T) {
        for value in self.entries.values_mut() {
            *value = T::from_f64(value.to_f64().powf(exp.to_f64()));
        }
    }

    /// Reflected power (`base ** self`)
    pub fn rpow(&self, base: T) -> SparseVector<T> {
        self.iter()
            .map(|(key, value)| (key, T::from_f64(base.to_f64().powf(value.to_f64()))))
            .collect()
    }

    /// Elementwise absolute value
    pub fn abs(&self) -> SparseVector<T> {
        self.iter()
            .map(|(key, value)| (key, T::from_f64(value.to_f64().abs())))
            .collect()
    }
}

impl<T: Element> Neg for &SparseVector<T> {
    type Output = SparseVector<T>;

    fn neg(self) -> SparseVector<T> {
        self.iter()
            .map(|(key, value)| (key, T::from_f64(-value.to_f64())))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Dense operands
// ---------------------------------------------------------------------------

impl<T: Element> SparseVector<T> {
    /// Combine with a dense slice, key-as-index, producing a dense result
    ///
    /// `f` is applied at every dense position, reading the vector as zero
    /// where it has no entry. A present key at or beyond the dense length
    /// fails with [`Error::DenseLength`] before anything is computed.
    pub fn zip_dense(&self, dense: &[T], f: impl Fn(T, T) -> T) -> Result<Vec<T>> {
        if let Some(max) = self.entries.keys().copied().max() {
            let required = max as usize + 1;
            if dense.len() < required {
                return Err(Error::DenseLength {
                    len: dense.len(),
                    required,
                });
            }
        }
        Ok(dense
            .iter()
            .enumerate()
            .map(|(pos, &held)| f(self.get(pos as u64), held))
            .collect())
    }

    /// Dense addition: `self + dense`, aligned by key as index
    pub fn add_dense(&self, dense: &[T]) -> Result<Vec<T>> {
        self.zip_dense(dense, |value, held| value + held)
    }

    /// Dense multiplication: `self * dense`, aligned by key as index
    pub fn mul_dense(&self, dense: &[T]) -> Result<Vec<T>> {
        self.zip_dense(dense, |value, held| value * held)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(n: u64) -> SparseVector<f64> {
        SparseVector::from_keys(0..n, 1.0)
    }

    #[test]
    fn test_scalar_ops() {
        let vec = ones(3);
        assert_eq!(&vec + 1.0, SparseVector::from_keys(0..3, 2.0));
        assert_eq!(&(&vec + 1.0) / 2.0, SparseVector::from_keys(0..3, 1.0));
        let mut vec = ones(3);
        vec *= 2.0;
        vec -= 1.0;
        assert_eq!(vec, ones(3));
    }

    #[test]
    fn test_reflected_scalar() {
        let vec = ones(3);
        assert_eq!(3.0 - &vec, SparseVector::from_keys(0..3, 2.0));
        assert_eq!(1.0 / &(&vec + 1.0), SparseVector::from_keys(0..3, 0.5));
    }

    #[test]
    fn test_vector_union_and_intersection() {
        let vec = SparseVector::from_keys(0..3, 1.0);
        let other = SparseVector::from_keys([2, 3].into_iter(), 2.0);
        let sum = &vec + &other;
        assert_eq!(sum.get(2), 3.0);
        assert_eq!(sum.get(3), 2.0);
        let product = &vec * &other;
        assert_eq!(product.len(), 1);
        assert_eq!(product.get(2), 2.0);
    }

    #[test]
    fn test_inplace_mul_drops_keys() {
        let mut vec = SparseVector::from_keys(0..4, 4.0);
        vec *= &SparseVector::from_keys([3, 4].into_iter(), 2.0);
        assert_eq!(vec, [(3, 8.0)].into_iter().collect());
    }

    #[test]
    fn test_pow_and_neg() {
        let vec = SparseVector::from_keys(0..3, 2.0);
        assert_eq!(vec.pow(3.0), SparseVector::from_keys(0..3, 8.0));
        assert_eq!(vec.rpow(3.0), SparseVector::from_keys(0..3, 9.0));
        assert_eq!(-&vec, SparseVector::from_keys(0..3, -2.0));
    }

    #[test]
    fn test_dense_bridge() {
        let vec: SparseVector<i64> = [(1, 10)].into_iter().collect();
        assert_eq!(vec.add_dense(&[1, 2, 3]).unwrap(), vec![1, 12, 3]);
        assert!(vec.add_dense(&[1]).is_err());
    }
}
