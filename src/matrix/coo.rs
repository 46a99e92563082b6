//! COO marshaling, transpose, and matrix multiplication
//!
//! The coordinate format is the matrix's interchange representation:
//! parallel `(row, col, data)` arrays covering every stored entry.
//! `fromcoo` rebuilds a matrix by grouping the column/value pairs by row
//! key through the grouping engine; `transpose` is the same rebuild keyed
//! by the former column axis, a full reconstruction rather than a view.

use std::hash::Hash;

use crate::dtype::Element;
use crate::error::Result;
use crate::group::{arggroupby, groupby2, GroupKey};
use crate::vector::SparseVector;

use super::SparseMatrix;

impl<K: Eq + Hash + Clone, T: Element> SparseMatrix<K, T> {
    /// COO row key array: each row key repeated once per stored entry
    ///
    /// Aligned with [`col`](Self::col) and [`data`](Self::data) while the
    /// matrix is not mutated in between.
    pub fn row(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.nnz());
        for (key, vec) in self.iter() {
            out.extend(std::iter::repeat_with(|| key.clone()).take(vec.len()));
        }
        out
    }

    /// COO column index array
    pub fn col(&self) -> Vec<u64> {
        let mut out = Vec::with_capacity(self.nnz());
        for (_, vec) in self.iter() {
            out.extend(vec.keys());
        }
        out
    }

    /// COO value array
    pub fn data(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.nnz());
        for (_, vec) in self.iter() {
            out.extend(vec.values());
        }
        out
    }

    /// The aligned `(row, col, data)` triple in one traversal
    pub fn coo(&self) -> (Vec<K>, Vec<u64>, Vec<T>) {
        let mut rows = Vec::with_capacity(self.nnz());
        let mut cols = Vec::with_capacity(self.nnz());
        let mut values = Vec::with_capacity(self.nnz());
        for (key, vec) in self.iter() {
            for (col, value) in vec.iter() {
                rows.push(key.clone());
                cols.push(col);
                values.push(value);
            }
        }
        (rows, cols, values)
    }

    /// For every row of `self`, the dot products against the rows of a
    /// transposed right operand, keeping only the non-zero results
    fn dot_rows(&self, transposed: &SparseMatrix<u64, T>) -> SparseMatrix<K, T> {
        self.iter()
            .map(|(key, vec)| {
                let products: SparseVector<T> = transposed
                    .iter()
                    .filter_map(|(&col, column)| {
                        let product = vec.dot(column);
                        (!product.is_zero()).then_some((col, product))
                    })
                    .collect();
                (key.clone(), products)
            })
            .collect()
    }

    /// Matrix multiplication by repeated row-against-column dot products
    ///
    /// Transposes the right operand, then computes every left row against
    /// every original right column. Cost is proportional to
    /// `left rows x right columns x average overlap`; deliberately the
    /// simple triple loop, not a sparse-sparse kernel.
    pub fn matmul(&self, other: &SparseMatrix<u64, T>) -> SparseMatrix<K, T> {
        self.dot_rows(&other.transpose())
    }
}

impl<K: GroupKey + Eq + Hash, T: Element> SparseMatrix<K, T> {
    /// Build a matrix from COOrdinate format arrays
    ///
    /// Groups the `(col, data)` pairs by row key, then accumulates one
    /// sparse vector per distinct row; repeated coordinates sum.
    pub fn fromcoo(rows: &[K], cols: &[u64], data: &[T]) -> Result<Self> {
        let groups = groupby2(rows, cols, data)?;
        let mut out = Self::new();
        for (key, cols, values) in groups {
            let vec = out.row_mut(key);
            for (col, value) in cols.into_iter().zip(values) {
                let slot = vec.entry(col);
                *slot = *slot + value;
            }
        }
        Ok(out)
    }
}

impl<T: Element> SparseMatrix<u64, T> {
    /// Rebuild keyed by the former column axis
    pub fn transpose(&self) -> SparseMatrix<u64, T> {
        let (rows, cols, values) = self.coo();
        let mut out = SparseMatrix::new();
        for (key, positions) in arggroupby(&cols) {
            let vec = out.row_mut(key);
            for pos in positions {
                let slot = vec.entry(rows[pos]);
                *slot = *slot + values[pos];
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn triples(mat: &SparseMatrix<u64, f64>) -> FxHashSet<(u64, u64, i64)> {
        let (rows, cols, values) = mat.coo();
        rows.into_iter()
            .zip(cols)
            .zip(values)
            .map(|((row, col), value)| (row, col, value as i64))
            .collect()
    }

    #[test]
    fn test_fromcoo_accumulates_duplicates() {
        let mat =
            SparseMatrix::<u64, f64>::fromcoo(&[0, 0], &[1, 1], &[1.0, 2.0]).unwrap();
        assert_eq!(mat.get(&0).unwrap().get(1), 3.0);
    }

    #[test]
    fn test_double_transpose_round_trip() {
        let mat = SparseMatrix::<u64, f64>::fromcoo(
            &[0, 0, 1, 1],
            &[1, 2, 1, 2],
            &[1.0, 2.0, 3.0, 4.0],
        )
        .unwrap();
        let round = mat.transpose().transpose();
        assert_eq!(triples(&round), triples(&mat));
    }

    #[test]
    fn test_empty_fromcoo_is_falsy() {
        let mat = SparseMatrix::<u64, f64>::fromcoo(&[], &[], &[]).unwrap();
        assert!(mat.is_empty());
    }

    #[test]
    fn test_matmul_matches_dots() {
        let a = SparseMatrix::<u64, f64>::fromcoo(&[0, 0, 1], &[0, 1, 1], &[1.0, 2.0, 3.0])
            .unwrap();
        let b = SparseMatrix::<u64, f64>::fromcoo(&[0, 1, 1], &[0, 0, 1], &[4.0, 5.0, 6.0])
            .unwrap();
        let product = a.matmul(&b);
        // a = [[1, 2], [0, 3]], b = [[4, 0], [5, 6]] => a @ b = [[14, 12], [15, 18]]
        assert_eq!(product.get(&0).unwrap().get(0), 14.0);
        assert_eq!(product.get(&0).unwrap().get(1), 12.0);
        assert_eq!(product.get(&1).unwrap().get(0), 15.0);
        assert_eq!(product.get(&1).unwrap().get(1), 18.0);
    }

    #[test]
    fn test_string_row_keys() {
        let rows = vec!["a", "b", "a"];
        let mat = SparseMatrix::<&str, f64>::fromcoo(&rows, &[0, 1, 2], &[1.0, 2.0, 3.0])
            .unwrap();
        assert_eq!(mat.len(), 2);
        assert_eq!(mat.get(&"a").unwrap().len(), 2);
    }
}
