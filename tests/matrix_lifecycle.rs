//! Integration tests for construction, copying and buffer management.

mod common;

use common::mat;
use dense_linalg::Matrix;

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn default_is_empty_and_unallocated() {
    let m = Matrix::new();
    assert!(m.is_empty());
    assert_eq!(m.rows(), 0);
    assert_eq!(m.columns(), 0);
    assert_eq!(m.capacity(), 0);
    assert!(m.as_ptr().is_null());
}

#[test]
fn zeros_allocates_exact_size() {
    let m = Matrix::zeros(3, 4);
    assert_eq!(m.shape(), (3, 4));
    assert_eq!(m.size(), 12);
    assert_eq!(m.capacity(), 12);
    assert!(!m.is_empty());
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn column_vector_constructor() {
    let m = Matrix::column_vector(6);
    assert_eq!(m.rows(), 6);
    assert_eq!(m.columns(), 1);
    assert!(!m.is_empty());
}

#[test]
fn nested_literal() {
    let m = mat(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.capacity(), 6);
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn empty_nested_literal() {
    let rows: [[f64; 0]; 0] = [];
    let m = Matrix::from_rows(&rows).unwrap();
    assert!(m.is_empty());
    assert_eq!(m.capacity(), 0);
    assert!(m.as_ptr().is_null());
}

#[test]
fn ragged_literal_is_shape_error() {
    let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]).unwrap_err();
    assert!(err.is_shape());
    assert!(err.to_string().contains("inconsistent row length"));
}

#[test]
fn flat_literal_is_column_vector() {
    let v = Matrix::from_column(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(v.shape(), (4, 1));
    assert_eq!(v.capacity(), 4);
    assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

    let same: Matrix = vec![1.0, 2.0, 3.0, 4.0].into();
    assert_eq!(same, v);
}

#[test]
fn empty_flat_literal() {
    let v = Matrix::from_column(&[]);
    assert!(v.is_empty());
    assert!(v.as_ptr().is_null());
    assert!(Matrix::from(Vec::new()).is_empty());
}

#[test]
fn try_from_nested_vectors() {
    let m = Matrix::try_from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(m, mat(&[[1.0, 2.0], [3.0, 4.0]]));
    assert!(Matrix::try_from(vec![vec![1.0], vec![]]).is_err());
}

// ---------------------------------------------------------------------------
// Copy, assignment and move
// ---------------------------------------------------------------------------

fn counting(rows: usize, columns: usize) -> Matrix {
    let mut m = Matrix::zeros(rows, columns);
    for (i, v) in m.as_mut_slice().iter_mut().enumerate() {
        *v = i as f64;
    }
    m
}

#[test]
fn clone_is_deep_and_mirrors_capacity() {
    let mut original = counting(2, 3);
    original.reserve(10);
    let copy = original.clone();

    assert_eq!(copy.shape(), original.shape());
    assert_eq!(copy.capacity(), original.capacity());
    assert_eq!(copy.as_slice(), original.as_slice());
    assert_ne!(copy.as_ptr(), original.as_ptr());
}

#[test]
fn clone_from_into_smaller_destination() {
    let mut source = counting(3, 3);
    let mut dest = Matrix::zeros(2, 2);
    dest.clone_from(&source);

    assert_ne!(dest.as_ptr(), source.as_ptr());
    assert_eq!(dest.shape(), (3, 3));
    assert_eq!(dest.capacity(), 9);
    assert_eq!(dest.as_slice()[8], 8.0);

    source.as_mut_slice()[0] = 999.0;
    assert_eq!(dest.as_slice()[0], 0.0);
}

#[test]
fn clone_from_reuses_sufficient_capacity() {
    let mut dest = Matrix::zeros(3, 3);
    let before = dest.as_ptr();
    let source = counting(2, 2);

    dest.clone_from(&source);

    assert_eq!(dest.capacity(), 9);
    assert_eq!(dest.as_ptr(), before);
    assert_eq!(dest.shape(), (2, 2));
    assert_eq!(dest.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn take_transfers_buffer() {
    let mut source = counting(2, 2);
    let before = source.as_ptr();

    let moved = source.take();

    assert_eq!(moved.shape(), (2, 2));
    assert_eq!(moved.capacity(), 4);
    assert_eq!(moved.as_ptr(), before);
    assert_eq!(moved.as_slice()[3], 3.0);

    assert!(source.is_empty());
    assert_eq!(source.capacity(), 0);
    assert!(source.as_ptr().is_null());
}

#[test]
fn move_keeps_buffer_identity() {
    let source = counting(3, 3);
    let before = source.as_ptr();
    let mut dest = Matrix::zeros(2, 2);
    assert_eq!(dest.capacity(), 4);
    dest = source;
    assert_eq!(dest.as_ptr(), before);
    assert_eq!(dest.as_slice()[5], 5.0);
}

#[test]
fn swap_exchanges_everything() {
    let mut a = Matrix::zeros(2, 2);
    a.as_mut_slice()[0] = 1.0;
    let mut b = Matrix::zeros(3, 3);
    b.as_mut_slice()[0] = 9.0;
    let (pa, pb) = (a.as_ptr(), b.as_ptr());

    a.swap(&mut b);

    assert_eq!(a.shape(), (3, 3));
    assert_eq!(a.as_slice()[0], 9.0);
    assert_eq!(a.as_ptr(), pb);
    assert_eq!(b.shape(), (2, 2));
    assert_eq!(b.as_slice()[0], 1.0);
    assert_eq!(b.as_ptr(), pa);
}

// ---------------------------------------------------------------------------
// reserve / reshape / shrink_to_fit / clear
// ---------------------------------------------------------------------------

#[test]
fn reshape_grow_reallocates() {
    let mut m = Matrix::zeros(2, 2);
    m.as_mut_slice()[0] = 1.0;
    m.as_mut_slice()[1] = 2.0;

    m.reshape(3, 3);

    assert_eq!(m.shape(), (3, 3));
    assert_eq!(m.capacity(), 9);
    assert_eq!(m.as_slice()[..2], [1.0, 2.0]);
}

#[test]
fn reshape_shrink_keeps_capacity() {
    let mut m = Matrix::zeros(3, 3);
    let before = m.as_ptr();
    m.reshape(2, 2);
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.capacity(), 9);
    assert_eq!(m.as_ptr(), before);
}

#[test]
fn reshape_within_capacity_changes_orientation() {
    let mut m = mat(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    m.reshape(3, 2);
    assert_eq!(m, mat(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]));
}

#[test]
fn reserve_beyond_capacity_moves_buffer() {
    let mut m = counting(2, 2);
    let before = m.as_ptr();
    m.reserve(10);

    assert!(m.capacity() >= 10);
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    assert_ne!(m.as_ptr(), before);
}

#[test]
fn reserve_within_capacity_is_noop() {
    let mut m = Matrix::zeros(2, 2);
    let before = m.as_ptr();
    m.reserve(3);
    m.reserve(4);
    assert_eq!(m.as_ptr(), before);
    assert_eq!(m.capacity(), 4);
}

#[test]
fn reserve_on_empty_allocates() {
    let mut m = Matrix::new();
    m.reserve(5);
    assert_eq!(m.capacity(), 5);
    assert!(!m.as_ptr().is_null());
    assert!(m.is_empty());
}

#[test]
fn clear_keeps_allocation() {
    let mut m = Matrix::zeros(3, 4);
    m.clear();
    assert!(m.is_empty());
    assert_eq!(m.rows(), 0);
    assert_eq!(m.columns(), 0);
    assert_eq!(m.capacity(), 12);
    assert!(!m.as_ptr().is_null());
}

#[test]
fn shrink_to_fit_reallocates_to_size() {
    let mut m = Matrix::zeros(3, 3);
    m.reshape(2, 2);
    let before = m.as_ptr();
    m.shrink_to_fit();

    assert_eq!(m.capacity(), 4);
    assert_eq!(m.size(), 4);
    assert_ne!(m.as_ptr(), before);
}

#[test]
fn shrink_to_fit_on_empty_releases() {
    let mut m = Matrix::new();
    m.shrink_to_fit();
    assert_eq!(m.capacity(), 0);
    assert!(m.as_ptr().is_null());

    let mut cleared = Matrix::zeros(2, 2);
    cleared.clear();
    cleared.shrink_to_fit();
    assert_eq!(cleared.capacity(), 0);
    assert!(cleared.as_ptr().is_null());
}

#[test]
fn shrink_to_fit_when_tight_is_noop() {
    let mut m = Matrix::zeros(2, 2);
    let before = m.as_ptr();
    m.shrink_to_fit();
    assert_eq!(m.as_ptr(), before);
}
