//! Free-function linear algebra over [`Matrix`].
//!
//! These operate through the public slice accessors on the column-major
//! buffer directly, which keeps the inner loops free of per-element bounds
//! checks.

use num_traits::NumAssign;

use crate::math::Matrix;

/// Matrix product `lhs * rhs`.
///
/// Panics when the inner extents disagree.
pub fn matmul<T: Copy + NumAssign>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Matrix<T> {
    assert!(
        lhs.ncols() == rhs.nrows(),
        "matmul: inner extents disagree ({:?} vs {:?})",
        lhs.shape(),
        rhs.shape()
    );

    let (m, k) = lhs.shape();
    let n = rhs.ncols();
    let mut out = Matrix::zeros(m, n);

    let a = lhs.as_slice();
    let b = rhs.as_slice();
    let c = out.as_mut_slice();
    // Column-major: walking b down a column and a across a row keeps the
    // writes into c sequential.
    for col in 0..n {
        for inner in 0..k {
            let scale = b[inner + col * k];
            for row in 0..m {
                c[row + col * m] += a[row + inner * m] * scale;
            }
        }
    }
    out
}

/// The transpose of `arg`.
pub fn transpose<T: Copy + Default>(arg: &Matrix<T>) -> Matrix<T> {
    let (rows, cols) = arg.shape();
    if arg.is_empty() {
        return Matrix::empty();
    }
    let mut out = Matrix::new(cols, rows);
    let src = arg.as_slice();
    for col in 0..cols {
        for row in 0..rows {
            out[(col, row)] = src[row + col * rows];
        }
    }
    out
}
