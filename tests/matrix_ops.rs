//! Behavioral tests for the sparse matrix

use rustc_hash::FxHashSet;
use sparr::prelude::*;

fn triples(mat: &SparseMatrix<u64, f64>) -> FxHashSet<(u64, u64, i64)> {
    let (rows, cols, values) = mat.coo();
    rows.into_iter()
        .zip(cols)
        .zip(values)
        .map(|((row, col), value)| (row, col, value as i64))
        .collect()
}

#[test]
fn test_basic_coo_accessors() {
    let mut mat: SparseMatrix<u64, f64> = SparseMatrix::new();
    mat.row_mut(0).insert(1, 2.0);
    assert_eq!(mat.row(), vec![0]);
    assert_eq!(mat.col(), vec![1]);
    assert_eq!(mat.data(), vec![2.0]);
    assert_eq!(mat.nnz(), 1);
}

#[test]
fn test_vivification() {
    let mut mat: SparseMatrix<u64, f64> = SparseMatrix::new();
    assert!(mat.get(&9).is_none());
    mat.row_mut(9).clear();
    assert!(mat.get(&9).is_some());
    assert_eq!(mat.len(), 1);
    assert_eq!(mat.nnz(), 0);
}

#[test]
fn test_fromcoo_and_transpose_round_trip() {
    let mat = SparseMatrix::<u64, f64>::fromcoo(
        &[0, 0, 1, 1],
        &[1, 2, 1, 2],
        &[1.0, 2.0, 3.0, 4.0],
    )
    .unwrap();
    assert_eq!(mat.len(), 2);
    let transposed = mat.transpose();
    assert_eq!(transposed.len(), 2);
    assert_eq!(transposed.get(&1).unwrap().get(0), 1.0);
    assert_eq!(transposed.get(&2).unwrap().get(1), 4.0);
    assert_eq!(triples(&transposed.transpose()), triples(&mat));
}

#[test]
fn test_fromcoo_empty_is_falsy() {
    let mat = SparseMatrix::<u64, f64>::fromcoo(&[], &[], &[]).unwrap();
    assert!(mat.is_empty());
    assert_eq!(mat.nnz(), 0);
}

#[test]
fn test_fromcoo_length_mismatch() {
    assert!(SparseMatrix::<u64, f64>::fromcoo(&[0], &[1, 2], &[1.0]).is_err());
}

#[test]
fn test_update_merges_rows() {
    let mut mat = SparseMatrix::<u64, f64>::fromcoo(&[0], &[0], &[1.0]).unwrap();
    let incoming: SparseVector<f64> = [(1, 2.0)].into_iter().collect();
    mat.update([(0, incoming), (1, [(0, 3.0)].into_iter().collect())]);
    assert_eq!(mat.get(&0).unwrap().get(0), 1.0);
    assert_eq!(mat.get(&0).unwrap().get(1), 2.0);
    assert_eq!(mat.get(&1).unwrap().get(0), 3.0);
}

#[test]
fn test_from_rows_keeps_later_duplicate() {
    let mat = SparseMatrix::from_rows([
        (0u64, [(0, 1.0)].into_iter().collect::<SparseVector<f64>>()),
        (1, [(0, 2.0)].into_iter().collect()),
        (0, [(1, 3.0)].into_iter().collect()),
    ]);
    assert_eq!(mat.len(), 2);
    assert!(!mat.get(&0).unwrap().contains(0));
    assert_eq!(mat.get(&0).unwrap().get(1), 3.0);
}

#[test]
fn test_add() {
    let a = SparseMatrix::<u64, f64>::fromcoo(&[0, 1], &[0, 0], &[1.0, 2.0]).unwrap();
    let b = SparseMatrix::<u64, f64>::fromcoo(&[1, 2], &[0, 0], &[3.0, 4.0]).unwrap();
    let sum = &a + &b;
    assert_eq!(sum.len(), 3);
    assert_eq!(sum.get(&1).unwrap().get(0), 5.0);

    // Scalar operand broadcasts across every row
    let shifted = &a + 1.0;
    assert_eq!(shifted.get(&0).unwrap().get(0), 2.0);
    let mut inplace = a.clone();
    inplace += &b;
    assert_eq!(triples(&inplace), triples(&sum));
}

#[test]
fn test_mul_intersects_rows() {
    let a = SparseMatrix::<u64, f64>::fromcoo(&[0, 1], &[0, 0], &[2.0, 3.0]).unwrap();
    let b = SparseMatrix::<u64, f64>::fromcoo(&[1, 2], &[0, 0], &[5.0, 7.0]).unwrap();
    let product = &a * &b;
    assert_eq!(product.len(), 1);
    assert_eq!(product.get(&1).unwrap().get(0), 15.0);

    // In-place form drops rows absent from the operand
    let mut inplace = a.clone();
    inplace *= &b;
    assert_eq!(inplace.len(), 1);
    assert!(inplace.get(&0).is_none());

    let doubled = &a * 2.0;
    assert_eq!(doubled.get(&0).unwrap().get(0), 4.0);
}

#[test]
fn test_sum_axes() {
    let mat = SparseMatrix::<u64, f64>::fromcoo(
        &[0, 0, 1],
        &[0, 1, 1],
        &[1.0, 2.0, 3.0],
    )
    .unwrap();
    assert_eq!(mat.sum(), 6.0);
    assert_eq!(mat.sum_axis(None).unwrap(), AxisSum::All(6.0));

    let cols = mat.sum_columns();
    assert_eq!(cols.get(0), 1.0);
    assert_eq!(cols.get(1), 5.0);
    assert_eq!(mat.sum_axis(Some(-2)).unwrap(), AxisSum::Columns(cols));

    let rows = mat.sum_rows();
    assert_eq!(rows[&0], 3.0);
    assert_eq!(rows[&1], 3.0);
    assert_eq!(mat.sum_axis(Some(-1)).unwrap(), AxisSum::Rows(rows));

    assert_eq!(
        mat.sum_axis(Some(2)),
        Err(Error::InvalidAxis { axis: 2, ndim: 2 })
    );
}

#[test]
fn test_map_and_filter() {
    let mat = SparseMatrix::<u64, f64>::fromcoo(&[0, 1], &[0, 0], &[1.0, 2.0]).unwrap();
    let doubled = mat.map(|vec| vec * 2.0);
    assert_eq!(doubled.get(&1).unwrap().get(0), 4.0);
    let sums = mat.map_values(SparseVector::sum);
    assert_eq!(sums[&0], 1.0);
    let heavy = mat.filter(|vec| vec.sum() > 1.0);
    assert_eq!(heavy.len(), 1);
    assert!(heavy.get(&1).is_some());
}

#[test]
fn test_matmul() {
    // a = [[1, 2], [0, 3]], b = [[4, 0], [5, 6]]
    let a = SparseMatrix::<u64, f64>::fromcoo(&[0, 0, 1], &[0, 1, 1], &[1.0, 2.0, 3.0])
        .unwrap();
    let b = SparseMatrix::<u64, f64>::fromcoo(&[0, 1, 1], &[0, 0, 1], &[4.0, 5.0, 6.0])
        .unwrap();
    let product = a.matmul(&b);
    let expected = SparseMatrix::<u64, f64>::fromcoo(
        &[0, 0, 1, 1],
        &[0, 1, 0, 1],
        &[14.0, 12.0, 15.0, 18.0],
    )
    .unwrap();
    assert_eq!(triples(&product), triples(&expected));

    // Rows of the product are the dot products against the right columns
    let transposed = b.transpose();
    for (key, vec) in a.iter() {
        let row = product.get(key).unwrap();
        for (&col, column) in transposed.iter() {
            assert_eq!(row.get(col), vec.dot(column));
        }
    }
}

#[test]
fn test_string_row_keys() {
    let rows = vec!["x".to_string(), "y".to_string(), "x".to_string()];
    let mat =
        SparseMatrix::<String, f64>::fromcoo(&rows, &[0, 0, 1], &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(mat.len(), 2);
    assert_eq!(mat.get(&"x".to_string()).unwrap().len(), 2);
    let row_keys = mat.row();
    assert_eq!(row_keys.len(), 3);
}
