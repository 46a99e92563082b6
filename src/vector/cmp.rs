//! Elementwise comparisons yielding the satisfying key set
//!
//! Comparison against a scalar ranges over the vector's own keys;
//! comparison against another vector ranges over the union of key spaces
//! with absent keys reading as zero. The result is always an [`Indices`]
//! of the keys satisfying the predicate, never a boolean: whole-object
//! equality is `==`/[`SparseVector::equal`], and ordering two whole
//! vectors is not defined.

use crate::dtype::Element;
use crate::indices::Indices;

use super::{Operand, SparseVector};

impl<T: Element> SparseVector<T> {
    /// Keys whose value satisfies `pred` against the operand
    fn positions<'a>(
        &'a self,
        rhs: impl Into<Operand<'a, T>>,
        pred: impl Fn(T, T) -> bool,
    ) -> Indices {
        match rhs.into() {
            Operand::Scalar(scalar) => self
                .iter()
                .filter(|&(_, value)| pred(value, scalar))
                .map(|(key, _)| key)
                .collect(),
            Operand::Vector(other) => {
                let mut out: Indices = self
                    .iter()
                    .filter(|&(key, value)| pred(value, other.get(key)))
                    .map(|(key, _)| key)
                    .collect();
                for (key, value) in other.iter() {
                    if !self.contains(key) && pred(T::zero(), value) {
                        out.add(key);
                    }
                }
                out
            }
        }
    }

    /// Keys where `self < rhs`
    pub fn lt<'a>(&'a self, rhs: impl Into<Operand<'a, T>>) -> Indices {
        self.positions(rhs, |a, b| a < b)
    }

    /// Keys where `self <= rhs`
    pub fn le<'a>(&'a self, rhs: impl Into<Operand<'a, T>>) -> Indices {
        self.positions(rhs, |a, b| a <= b)
    }

    /// Keys where `self > rhs`
    pub fn gt<'a>(&'a self, rhs: impl Into<Operand<'a, T>>) -> Indices {
        self.positions(rhs, |a, b| a > b)
    }

    /// Keys where `self >= rhs`
    pub fn ge<'a>(&'a self, rhs: impl Into<Operand<'a, T>>) -> Indices {
        self.positions(rhs, |a, b| a >= b)
    }

    /// Keys where `self == rhs` elementwise
    pub fn eq_where<'a>(&'a self, rhs: impl Into<Operand<'a, T>>) -> Indices {
        self.positions(rhs, |a, b| a == b)
    }

    /// Keys where `self != rhs` elementwise
    pub fn ne_where<'a>(&'a self, rhs: impl Into<Operand<'a, T>>) -> Indices {
        self.positions(rhs, |a, b| a != b)
    }
}
