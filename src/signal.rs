//! Signal processing over [`Matrix`]: resampling, the general IIR/FIR
//! difference-equation filter, convolution, and the structured-matrix
//! constructions built from it.
//!
//! `filter` and `conv` treat a single-row or single-column matrix as a
//! sample sequence; a general matrix is filtered independently down each
//! column, following the convention that a matrix column is a vector.

use std::ops::{AddAssign, Mul, SubAssign};

use num_traits::{NumAssign, Zero};

use crate::math::Matrix;

/// Inserts `rate - 1` zero samples after every input sample.
///
/// The result has `rate * nrows(x)` rows; original samples land at stride
/// `rate` down each column.
pub fn upsample<T: Copy + Zero>(x: &Matrix<T>, rate: usize) -> Matrix<T> {
    assert!(rate > 0, "upsample rate must be nonzero");
    let mut out = Matrix::zeros(rate * x.nrows(), x.ncols());
    for col in 0..x.ncols() {
        for row in 0..x.nrows() {
            out[(row * rate, col)] = x[(row, col)];
        }
    }
    out
}

/// Keeps every `rate`-th sample starting at index 0; the result has
/// `floor(nrows(x) / rate)` rows.
pub fn downsample<T: Copy + Zero>(x: &Matrix<T>, rate: usize) -> Matrix<T> {
    assert!(rate > 0, "downsample rate must be nonzero");
    let rows = x.nrows() / rate;
    let mut out = Matrix::zeros(rows, x.ncols());
    for col in 0..x.ncols() {
        for row in 0..rows {
            out[(row, col)] = x[(row * rate, col)];
        }
    }
    out
}

/// Direct-form difference-equation filter:
///
/// `y[n] = b[0]*x[n] + ... + b[nb]*x[n-nb] - a[1]*y[n-1] - ... - a[na]*y[n-na]`
///
/// Out-of-range history terms are zero (no wraparound) and `a[0]` is taken
/// as 1; callers must pre-divide the coefficients by it. `tail` extra output
/// samples are produced past the input length, which is how [`conv`] obtains
/// the full convolution. A column vector and a row vector are filtered along
/// their single dimension; a general matrix is filtered per column; any
/// other shape (including 1x1) yields the empty matrix.
///
/// The coefficient element type `C` may differ from the sample type `T`,
/// e.g. real taps over complex samples.
pub fn filter<T, C>(b: &Matrix<C>, a: &Matrix<C>, x: &Matrix<T>, tail: usize) -> Matrix<T>
where
    C: Copy,
    T: Copy + Zero + AddAssign + SubAssign + Mul<C, Output = T>,
{
    let nb = b.len();
    let na = a.len();
    let x_rows = x.nrows();
    let x_cols = x.ncols();

    if x_rows > 1 && x_cols > 1 {
        let out_len = x_rows + tail;
        let mut y = Matrix::zeros(out_len, x_cols);
        for col in 0..x_cols {
            for i in 0..out_len {
                for k in 0..nb {
                    if i >= k && i - k < x_rows {
                        let term = x[(i - k, col)] * b[k];
                        y[(i, col)] += term;
                    }
                }
                for k in 1..na {
                    if i >= k {
                        let term = y[(i - k, col)] * a[k];
                        y[(i, col)] -= term;
                    }
                }
            }
        }
        y
    } else if x_cols == 1 && x_rows > 1 {
        filter_vector(b, a, x, tail, true)
    } else if x_rows == 1 && x_cols > 1 {
        filter_vector(b, a, x, tail, false)
    } else {
        Matrix::empty()
    }
}

// Shared recursion for the two vector regimes; `column` picks the output
// orientation.
fn filter_vector<T, C>(
    b: &Matrix<C>,
    a: &Matrix<C>,
    x: &Matrix<T>,
    tail: usize,
    column: bool,
) -> Matrix<T>
where
    C: Copy,
    T: Copy + Zero + AddAssign + SubAssign + Mul<C, Output = T>,
{
    let nb = b.len();
    let na = a.len();
    let x_len = x.len();
    let out_len = x_len + tail;
    let mut y = if column {
        Matrix::zeros(out_len, 1)
    } else {
        Matrix::zeros(1, out_len)
    };

    for i in 0..out_len {
        for k in 0..nb {
            if i >= k && i - k < x_len {
                let term = x[i - k] * b[k];
                y[i] += term;
            }
        }
        for k in 1..na {
            if i >= k {
                let term = y[i - k] * a[k];
                y[i] -= term;
            }
        }
    }
    y
}

/// Linear convolution of two vectors, full length `|p| + |q| - 1`.
///
/// Implemented by running the vector operand through [`filter`] as FIR taps
/// against a unit-impulse denominator. A 1x1 operand degenerates to scalar
/// multiplication. Convolving two general matrices is unsupported and
/// panics.
pub fn conv<T: Copy + NumAssign>(p: &Matrix<T>, q: &Matrix<T>) -> Matrix<T> {
    if q.is_vector() {
        filter(q, &Matrix::ones(1, 1), p, q.len() - 1)
    } else if p.is_vector() {
        filter(p, &Matrix::ones(1, 1), q, p.len() - 1)
    } else if q.is_scalar() {
        p.scalar_mul(q[0])
    } else if p.is_scalar() {
        q.scalar_mul(p[0])
    } else {
        panic!(
            "conv: unsupported operand shapes {:?} and {:?}",
            p.shape(),
            q.shape()
        );
    }
}

/// The convolution matrix of the impulse response `h` for length-`n` inputs,
/// such that `matmul(&convmtx(h, n), x) == conv(h, x)`.
///
/// A column vector yields the `(|h| + n - 1) x n` banded matrix whose
/// columns are successive zero-padded shifts of `h`; a row vector yields the
/// transposed orientation. Panics when `h` is not a vector.
pub fn convmtx<T: Copy + Zero>(h: &Matrix<T>, n: usize) -> Matrix<T> {
    assert!(h.is_vector(), "the input argument is not a vector");
    assert!(n > 0, "the target length must be nonzero");
    let m = h.len();

    if h.ncols() == 1 {
        let mut out = Matrix::zeros(m + n - 1, n);
        for col in 0..n {
            for row in col..m + col {
                out[(row, col)] = h[row - col];
            }
        }
        out
    } else {
        let mut out = Matrix::zeros(n, m + n - 1);
        for row in 0..n {
            for col in row..m + row {
                out[(row, col)] = h[col - row];
            }
        }
        out
    }
}

/// The symmetric Toeplitz matrix generated by `col`: entry `(i, j)` is
/// `col[|j - i|]`, so the result is square, symmetric, and constant along
/// each diagonal with `col[0]` on the main one.
pub fn toeplitz<T: Copy + Zero>(col: &Matrix<T>) -> Matrix<T> {
    let n = col.len();
    let mut out = Matrix::zeros(n, n);
    for row in 0..n {
        for at in 0..n {
            out[(row, at)] = col[row.abs_diff(at)];
        }
    }
    out
}

/// Two-argument Toeplitz construction, restricted to the symmetric
/// `col[|j - i|]` form: both generators must have the same element count and
/// only `col` sources the entries. The asymmetric upper/lower split is not
/// implemented.
pub fn toeplitz_with<T: Copy + Zero>(col: &Matrix<T>, row: &Matrix<T>) -> Matrix<T> {
    assert!(
        col.len() == row.len(),
        "toeplitz generators must have the same element count"
    );
    toeplitz(col)
}
