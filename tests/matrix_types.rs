//! Integration tests for the core Matrix container: construction, indexing,
//! resizing, extraction, and conversion.

use num_complex::Complex;
use sigmat::Matrix;

// ---------------------------------------------------------------------------
// Construction and shape
// ---------------------------------------------------------------------------

#[test]
fn construction_round_trips_shape() {
    for &(rows, cols) in &[(1usize, 1usize), (1, 5), (5, 1), (3, 4), (7, 7)] {
        let m: Matrix<f64> = Matrix::new(rows, cols);
        assert_eq!(m.shape(), (rows, cols));
        assert_eq!(m.len(), rows * cols);
    }
}

#[test]
fn extents_below_two_normalize_to_one() {
    let m: Matrix<i32> = Matrix::new(1, 9);
    assert_eq!(m.shape(), (1, 9));
    let m = Matrix::from_elem(1, 1, 3i32);
    assert_eq!(m.shape(), (1, 1));
    assert!(m.is_scalar());
}

#[test]
fn empty_state() {
    let m: Matrix<f64> = Matrix::empty();
    assert_eq!(m.shape(), (0, 0));
    assert!(m.is_empty());
    assert_eq!(m, Matrix::default());
}

#[test]
fn from_elem_fills_every_element() {
    let m = Matrix::from_elem(3, 2, 7i64);
    for at in 0..m.len() {
        assert_eq!(m[at], 7);
    }
}

#[test]
fn from_shape_vec_checks_length() {
    let ok = Matrix::from_shape_vec((2, 2), vec![1, 2, 3, 4]);
    assert!(ok.is_ok());
    let bad = Matrix::from_shape_vec((2, 2), vec![1, 2, 3]);
    assert!(bad.is_err());
}

#[test]
fn shape_classification() {
    let row: Matrix<f32> = Matrix::new(1, 4);
    let col: Matrix<f32> = Matrix::new(4, 1);
    let square: Matrix<f32> = Matrix::new(3, 3);
    assert!(row.is_vector() && !row.is_scalar());
    assert!(col.is_vector());
    assert!(!square.is_vector());
    assert!(square.is_square());
    assert!(Matrix::from_elem(1, 1, 0.0f32).is_scalar());
}

// ---------------------------------------------------------------------------
// Column-major indexing
// ---------------------------------------------------------------------------

#[test]
fn column_major_linear_index_law() {
    let rows = 4;
    let cols = 3;
    let mut m: Matrix<i32> = Matrix::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            m[(r, c)] = (r * 100 + c) as i32;
        }
    }
    for r in 0..rows {
        for c in 0..cols {
            assert_eq!(m[(r, c)], (r * 100 + c) as i32);
            // linear index = row + col * rows
            assert_eq!(m[r + c * rows], m[(r, c)]);
            assert_eq!(m.as_slice()[r + c * rows], m[(r, c)]);
        }
    }
}

#[test]
fn get_matches_indexing() {
    let m = Matrix::from_shape_vec((2, 2), vec![1, 3, 2, 4]).unwrap();
    assert_eq!(m.get(0, 1), 2);
    assert_eq!(m.get_lin(1), 3);
}

#[test]
#[should_panic(expected = "out of range")]
fn out_of_range_index_panics() {
    let m: Matrix<f64> = Matrix::new(2, 2);
    let _ = m[(2, 0)];
}

// ---------------------------------------------------------------------------
// Mutation: resize, set_all, swaps, row/column overwrite
// ---------------------------------------------------------------------------

#[test]
fn resize_is_destructive() {
    let mut m = Matrix::from_elem(2, 2, 9i32);
    m.resize(3, 4);
    assert_eq!(m.shape(), (3, 4));
    assert_eq!(m.len(), 12);
    for at in 0..m.len() {
        assert_eq!(m[at], 0);
    }
}

#[test]
fn zero_extent_construction_clamps_to_one() {
    // shape-derived extents may legitimately reach 0; constructors clamp
    let m: Matrix<i32> = Matrix::zeros(0, 3);
    assert_eq!(m.shape(), (1, 3));
    let m: Matrix<i32> = Matrix::zeros(0, 0);
    assert_eq!(m.shape(), (1, 1));
}

#[test]
#[cfg_attr(not(debug_assertions), ignore)]
#[should_panic(expected = "extents must be nonzero")]
fn resize_to_zero_extent_is_rejected() {
    let mut m: Matrix<i32> = Matrix::new(2, 2);
    m.resize(0, 2);
}

#[test]
fn set_all_overwrites() {
    let mut m: Matrix<f64> = Matrix::new(2, 3);
    m.set_all(1.5);
    for at in 0..m.len() {
        assert_eq!(m[at], 1.5);
    }
}

#[test]
fn swap_rows_and_cols() {
    // [1 3; 2 4] column-major
    let mut m = Matrix::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    m.swap_rows(0, 1);
    assert_eq!(m[(0, 0)], 2);
    assert_eq!(m[(1, 1)], 3);
    m.swap_cols(0, 1);
    assert_eq!(m[(0, 0)], 4);
    assert_eq!(m[(0, 1)], 2);
}

#[test]
fn set_row_copies_prefix() {
    let mut m: Matrix<i32> = Matrix::new(2, 3);
    let src = Matrix::from_shape_vec((1, 4), vec![7, 8, 9, 10]).unwrap();
    assert!(m.set_row(1, &src));
    assert_eq!(m.row(1).as_slice(), &[7, 8, 9]);
    // untouched row
    assert_eq!(m.row(0).as_slice(), &[0, 0, 0]);
}

#[test]
fn set_row_rejects_bad_input() {
    let mut m: Matrix<i32> = Matrix::new(2, 3);
    let short = Matrix::from_shape_vec((1, 2), vec![1, 2]).unwrap();
    assert!(!m.set_row(0, &short));
    assert!(!m.set_row(2, &Matrix::from_elem(1, 3, 1)));
    // receiver untouched on failure
    assert_eq!(m.as_slice(), &[0; 6]);
}

#[test]
fn set_col_copies_prefix() {
    let mut m: Matrix<i32> = Matrix::new(3, 2);
    let src = Matrix::from_shape_vec((3, 1), vec![4, 5, 6]).unwrap();
    assert!(m.set_col(0, &src));
    assert_eq!(m.col(0).as_slice(), &[4, 5, 6]);
    assert!(!m.set_col(2, &src));
}

// ---------------------------------------------------------------------------
// Extraction: row/col, shrink, vector slices
// ---------------------------------------------------------------------------

#[test]
fn row_and_col_extraction() {
    let m = Matrix::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    // column-major: columns are [1 2], [3 4], [5 6]
    assert_eq!(m.col(1).as_slice(), &[3, 4]);
    assert_eq!(m.row(0).as_slice(), &[1, 3, 5]);
    assert_eq!(m.row(0).shape(), (1, 3));
    assert_eq!(m.col(2).shape(), (2, 1));
}

#[test]
fn row_out_of_range_yields_default_vector() {
    let m = Matrix::from_elem(2, 3, 5i32);
    let permissive = m.row(9);
    assert_eq!(permissive.shape(), (1, 3));
    assert_eq!(permissive.as_slice(), &[0, 0, 0]);
    let permissive = m.col(7);
    assert_eq!(permissive.as_slice(), &[0, 0]);
}

#[test]
fn shrink_removes_row_and_column() {
    let m = Matrix::from_shape_vec((3, 3), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    // remove middle row and middle column
    let minor = m.shrink(1, 1);
    assert_eq!(minor.shape(), (2, 2));
    assert_eq!(minor[(0, 0)], m[(0, 0)]);
    assert_eq!(minor[(0, 1)], m[(0, 2)]);
    assert_eq!(minor[(1, 0)], m[(2, 0)]);
    assert_eq!(minor[(1, 1)], m[(2, 2)]);
}

#[test]
fn vector_slices() {
    let v = Matrix::from_shape_vec((1, 5), vec![1, 2, 3, 4, 5]).unwrap();
    assert_eq!(v.left(2).as_slice(), &[1, 2]);
    assert_eq!(v.right(2).as_slice(), &[4, 5]);
    assert_eq!(v.mid(1, 3).as_slice(), &[2, 3, 4]);
    assert_eq!(v.left(2).shape(), (1, 2));

    let v = Matrix::from_shape_vec((4, 1), vec![1, 2, 3, 4]).unwrap();
    assert_eq!(v.right(3).as_slice(), &[2, 3, 4]);
    assert_eq!(v.right(3).shape(), (3, 1));
    assert_eq!(v.right(4), v);
}

#[test]
#[should_panic(expected = "not implemented")]
fn slicing_a_general_matrix_panics() {
    let m: Matrix<f64> = Matrix::new(2, 2);
    let _ = m.left(2);
}

// ---------------------------------------------------------------------------
// Deep copy and element conversion
// ---------------------------------------------------------------------------

#[test]
fn clone_is_deep() {
    let mut a = Matrix::from_elem(2, 2, 1i32);
    let b = a.clone();
    a.set_all(9);
    assert_eq!(b.as_slice(), &[1, 1, 1, 1]);
}

#[test]
fn convert_between_primitives() {
    let m = Matrix::from_shape_vec((1, 3), vec![1i32, -2, 3]).unwrap();
    let f: Matrix<f64> = m.convert();
    assert_eq!(f.as_slice(), &[1.0, -2.0, 3.0]);
    let back: Matrix<i8> = f.convert();
    assert_eq!(back.as_slice(), &[1, -2, 3]);
}

#[test]
fn convert_promotes_real_to_complex() {
    let m = Matrix::from_shape_vec((1, 2), vec![1.5f64, -2.0]).unwrap();
    let c: Matrix<Complex<f64>> = m.convert();
    assert_eq!(c[0], Complex::new(1.5, 0.0));
    assert_eq!(c[1], Complex::new(-2.0, 0.0));
}

#[test]
fn convert_complex_component_wise() {
    let m = Matrix::from_shape_vec((1, 1), vec![Complex::new(1.25f64, -3.5)]).unwrap();
    let narrowed: Matrix<Complex<f32>> = m.convert();
    assert_eq!(narrowed[0], Complex::new(1.25f32, -3.5));
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

#[test]
fn equality_requires_matching_shape() {
    let a = Matrix::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    let b = Matrix::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    let c = Matrix::from_shape_vec((4, 1), vec![1, 2, 3, 4]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}
