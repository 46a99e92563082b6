//! Behavioral tests for the sparse index set

use sparr::prelude::*;

fn ind<I: IntoIterator<Item = u64>>(keys: I) -> Indices {
    keys.into_iter().collect()
}

#[test]
fn test_basic() {
    let mut set = Indices::new();
    assert_eq!(set.to_string(), "indices([])");
    assert_eq!(set.len(), 0);
    assert!(!set.contains(0));
    assert_eq!(set.iter().count(), 0);

    assert!(set.add(0));
    assert!(!set.add(0));
    assert_eq!(set.to_string(), "indices([0])");
    assert_eq!(set.len(), 1);
    assert!(set.contains(0));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![0]);

    assert!(set.discard(0));
    assert!(!set.discard(0));
    set.update(0..3);
    assert_eq!(set, ind(0..3));
    set.update(&ind([3]));
    assert!(set.contains(3));
    set.clear();
    assert!(set.is_empty());
}

#[test]
fn test_construction_sources() {
    // From a vector's key set
    let vec: SparseVector<f64> = SparseVector::from_keys([0].into_iter(), 1.0);
    assert!(!Indices::from(&vec).is_empty());

    // Signed sources reject negatives
    assert!(Indices::from_signed(&[0, 1, 2]).is_ok());
    assert_eq!(
        Indices::from_signed(&[1, -2]),
        Err(Error::NegativeKey { key: -2 })
    );
}

#[test]
fn test_cmp() {
    let set = ind([0, 1]);
    assert_eq!(set, ind([0, 1]));
    assert_eq!(set, ind([1, 0]));
    assert_ne!(set, ind([0, 2]));
    assert!(!(set <= ind([0])));
    assert!(set <= set.clone());
    assert!(!(set < set.clone()));
    assert!(set < ind(0..3));

    assert!(!set.isdisjoint(&ind([0])));
    assert!(set.isdisjoint(&ind([2])));
    assert_eq!(set.dot(&[&ind([0])]), 1);
    assert_eq!(set.dot(&[&ind(0..3)]), 2);
}

#[test]
fn test_set_operators() {
    let x = ind([0, 1]);
    let y = ind([1, 2]);
    assert_eq!(&x | &y, ind(0..3));
    assert_eq!(&x & &y, ind([1]));
    assert_eq!(&x - &y, ind([0]));
    assert_eq!(&x ^ &y, ind([0, 2]));
}

#[test]
fn test_variadic_methods() {
    let x = ind([0, 1]);
    let y = ind([1, 2]);
    let z = ind([2]);
    assert_eq!(x.union(&[]), x);
    assert_eq!(x.union(&[&ind([1]), &z]), ind(0..3));
    assert_eq!(x.intersection(&[]), x);
    assert_eq!(x.intersection(&[&y, &ind([1])]), ind([1]));
    assert_eq!(x.difference(&[]), x);
    assert_eq!(x.difference(&[&y, &ind([3])]), ind([0]));
    assert_eq!(x.dot(&[]), 2);
    assert_eq!(x.dot(&[&y]), 1);
    assert_eq!(x.dot(&[&y, &y]), 1);
}

#[test]
fn test_inplace_operators() {
    let y = ind([1, 2]);
    let mut z = ind([0, 1]);
    z ^= &y;
    assert_eq!(z, ind([0, 2]));
    z |= &y;
    assert_eq!(z, ind(0..3));
    z -= &y;
    assert_eq!(z, ind([0]));
    z &= &y;
    assert_eq!(z, Indices::new());
    assert!((&y & &z).is_empty());
}

#[test]
fn test_set_algebra_laws() {
    let a = ind([0, 1, 4]);
    let b = ind([1, 2, 8]);
    let union = &a | &b;
    assert_eq!(&union & &union, union);
    assert_eq!(&a & &b, &b & &a);
    assert_eq!(&a ^ &b, &(&a - &b) | &(&b - &a));
    assert_eq!(a.isdisjoint(&b), (&a & &b).is_empty());
}

#[test]
fn test_distinct_membership() {
    let keys = [5u64, 3, 5, 0, 3, 5];
    let set = ind(keys);
    assert_eq!(set.len(), 3);
    for key in 0..10 {
        assert_eq!(set.contains(key), keys.contains(&key));
    }
}

#[test]
fn test_dense() {
    let mut mask = vec![false; 4];
    mask[0] = true;
    mask[2] = true;
    let set = Indices::fromdense(&mask);
    assert_eq!(set, ind([0, 2]));
    assert_eq!(set.todense(None).unwrap(), &mask[..3]);
    assert_eq!(set.todense(Some(4)).unwrap(), mask);
    assert_eq!(
        set.todense(Some(2)),
        Err(Error::DenseLength {
            len: 2,
            required: 3
        })
    );
}
