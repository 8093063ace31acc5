use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::error::ShapeError;
use crate::math::cast::CastTo;

/// A dense two-dimensional container with column-major storage.
///
/// The linear index of `(row, col)` is `row + col * rows`; every consumer of
/// the raw buffer (arithmetic, parsing, signal processing) relies on that
/// layout. A matrix with a single row or a single column is a *vector*, a
/// 1x1 matrix is a *scalar*, and `rows == cols == 0` with an empty buffer is
/// the *empty* state.
///
/// Requested extents below 2 are normalized to exactly 1, so the minimum
/// valid extent on either axis is 1. Copies are deep (`Clone`), moves hand
/// over the buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

// Constructors clamp silently, including a requested 0, so shape-derived
// extents such as floor(rows/rate) stay well-defined; only resize treats a
// zero extent as a caller error.
#[inline]
fn normalize(extent: usize) -> usize {
    if extent < 2 {
        1
    } else {
        extent
    }
}

impl<T> Matrix<T> {
    /// The empty matrix: no rows, no columns, no buffer.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Builds a matrix over an existing column-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let rows = normalize(shape.0);
        let cols = normalize(shape.1);
        if data.len() != rows * cols {
            return Err(ShapeError::BufferLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True iff the matrix has a single row or a single column (not both).
    pub fn is_vector(&self) -> bool {
        (self.rows == 1 && self.cols > 1) || (self.rows > 1 && self.cols == 1)
    }

    /// True iff the matrix is 1x1.
    pub fn is_scalar(&self) -> bool {
        self.rows == 1 && self.cols == 1
    }

    /// Column-major buffer view, length `rows * cols`.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row + col * self.rows
    }
}

impl<T: Copy> Matrix<T> {
    /// A `rows x cols` matrix with every element set to `value`.
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        let rows = normalize(rows);
        let cols = normalize(cols);
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    pub fn from_shape_elem(shape: (usize, usize), value: T) -> Self {
        Self::from_elem(shape.0, shape.1, value)
    }

    /// Returns the element at `(row, col)`.
    ///
    /// Panics when either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.rows && col < self.cols,
            "one or more indices is/are out of range"
        );
        self.data[self.offset(row, col)]
    }

    /// Returns the element at linear index `elem` in the storage order.
    pub fn get_lin(&self, elem: usize) -> T {
        assert!(elem < self.data.len(), "the element index is out of range");
        self.data[elem]
    }

    /// Overwrites every element with `value`.
    pub fn set_all(&mut self, value: T) {
        for slot in self.data.iter_mut() {
            *slot = value;
        }
    }

    /// Swaps two rows in place.
    pub fn swap_rows(&mut self, row_a: usize, row_b: usize) {
        assert!(
            row_a < self.rows && row_b < self.rows,
            "row index out of range"
        );
        for col in 0..self.cols {
            let at_a = self.offset(row_a, col);
            let at_b = self.offset(row_b, col);
            self.data.swap(at_a, at_b);
        }
    }

    /// Swaps two columns in place.
    pub fn swap_cols(&mut self, col_a: usize, col_b: usize) {
        assert!(
            col_a < self.cols && col_b < self.cols,
            "column index out of range"
        );
        for row in 0..self.rows {
            let at_a = self.offset(row, col_a);
            let at_b = self.offset(row, col_b);
            self.data.swap(at_a, at_b);
        }
    }

    /// Copies the first `ncols` elements of `src` (linear order) into row
    /// `row`. Returns false, without touching the receiver, when the index is
    /// out of range or `src` holds fewer elements than the row; `src` may
    /// hold more.
    pub fn set_row(&mut self, row: usize, src: &Matrix<T>) -> bool {
        if row >= self.rows || src.len() < self.cols {
            log::warn!(
                "set_row({}) rejected: target has {} rows, source has {} elements",
                row,
                self.rows,
                src.len()
            );
            return false;
        }
        for col in 0..self.cols {
            let at = self.offset(row, col);
            self.data[at] = src.data[col];
        }
        true
    }

    /// Column counterpart of [`set_row`](Matrix::set_row).
    pub fn set_col(&mut self, col: usize, src: &Matrix<T>) -> bool {
        if col >= self.cols || src.len() < self.rows {
            log::warn!(
                "set_col({}) rejected: target has {} columns, source has {} elements",
                col,
                self.cols,
                src.len()
            );
            return false;
        }
        for row in 0..self.rows {
            let at = self.offset(row, col);
            self.data[at] = src.data[row];
        }
        true
    }

    /// Converts every element to `U`, keeping the shape.
    ///
    /// Real sources promote to complex targets with a zero imaginary part;
    /// complex-to-complex converts component-wise.
    pub fn convert<U>(&self) -> Matrix<U>
    where
        T: CastTo<U>,
    {
        Matrix {
            data: self.data.iter().map(|v| v.cast()).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Copy + Default> Matrix<T> {
    /// A `rows x cols` matrix filled with the element default.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::default())
    }

    pub fn from_shape(shape: (usize, usize)) -> Self {
        Self::new(shape.0, shape.1)
    }

    /// Destructively resizes to the new extents.
    ///
    /// The buffer is reallocated and prior contents are not preserved;
    /// callers that need the data must copy first.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        debug_assert!(rows > 0 && cols > 0, "matrix extents must be nonzero");
        let rows = normalize(rows);
        let cols = normalize(cols);
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.resize(rows * cols, T::default());
    }

    /// Returns row `row` as a freshly allocated `1 x cols` matrix.
    ///
    /// An out-of-range index returns the default-filled row instead of
    /// panicking; only a bounds check gates the copy loop. This permissive
    /// behavior is part of the contract.
    pub fn row(&self, row: usize) -> Matrix<T> {
        let mut out = Matrix::new(1, self.cols);
        if row < self.rows {
            for col in 0..self.cols {
                out.data[col] = self.data[self.offset(row, col)];
            }
        }
        out
    }

    /// Returns column `col` as a freshly allocated `rows x 1` matrix; same
    /// permissive out-of-range behavior as [`row`](Matrix::row).
    pub fn col(&self, col: usize) -> Matrix<T> {
        let mut out = Matrix::new(self.rows, 1);
        if col < self.cols {
            for row in 0..self.rows {
                out.data[row] = self.data[self.offset(row, col)];
            }
        }
        out
    }

    /// The matrix minor: a copy with row `elim_row` and column `elim_col`
    /// removed. Requires both extents above 1 and in-range indices; otherwise
    /// the source is returned unchanged (debug builds assert).
    pub fn shrink(&self, elim_row: usize, elim_col: usize) -> Matrix<T> {
        debug_assert!(
            self.rows > 1 && self.cols > 1,
            "shrink requires both extents above 1"
        );
        debug_assert!(
            elim_row < self.rows && elim_col < self.cols,
            "the input arguments exceed the matrix size"
        );
        if self.rows <= 1 || self.cols <= 1 || elim_row >= self.rows || elim_col >= self.cols {
            return self.clone();
        }

        let mut out = Matrix::new(self.rows - 1, self.cols - 1);
        for row in 0..self.rows {
            if row == elim_row {
                continue;
            }
            let new_row = if row > elim_row { row - 1 } else { row };
            for col in 0..self.cols {
                if col == elim_col {
                    continue;
                }
                let new_col = if col > elim_col { col - 1 } else { col };
                out[(new_row, new_col)] = self.data[self.offset(row, col)];
            }
        }
        out
    }

    /// Vector-only slice: the first `count` elements in linear order, with
    /// the source's row/column orientation.
    pub fn left(&self, count: usize) -> Matrix<T> {
        assert!(count <= self.len(), "slice length exceeds the element count");
        let mut out = self.vector_shaped(count);
        out.data[..count].copy_from_slice(&self.data[..count]);
        out
    }

    /// Vector-only slice: the last `count` elements in linear order.
    pub fn right(&self, count: usize) -> Matrix<T> {
        assert!(count <= self.len(), "slice length exceeds the element count");
        if count == self.len() {
            return self.clone();
        }
        let mut out = self.vector_shaped(count);
        let start = self.len() - count;
        out.data[..count].copy_from_slice(&self.data[start..]);
        out
    }

    /// Vector-only slice of the inclusive linear range `begin..=end`.
    pub fn mid(&self, begin: usize, end: usize) -> Matrix<T> {
        assert!(
            begin < self.len() && end < self.len() && end > begin,
            "invalid mid range"
        );
        let count = end - begin + 1;
        let mut out = self.vector_shaped(count);
        out.data[..count].copy_from_slice(&self.data[begin..=end]);
        out
    }

    // Shape carrier for the vector slices; selecting from a matrix that is
    // neither row- nor column-shaped is an unimplemented path.
    fn vector_shaped(&self, count: usize) -> Matrix<T> {
        if self.rows == 1 && self.cols != 1 {
            Matrix::new(1, count)
        } else if self.rows != 1 && self.cols == 1 {
            Matrix::new(count, 1)
        } else {
            panic!("not implemented: vector slicing of a non-vector matrix");
        }
    }
}

impl<T: Copy + Zero> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::zero())
    }
}

impl<T: Copy + One> Matrix<T> {
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::one())
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "one or more indices is/are out of range"
        );
        &self.data[index.0 + index.1 * self.rows]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "one or more indices is/are out of range"
        );
        let at = index.0 + index.1 * self.rows;
        &mut self.data[at]
    }
}

/// Linear indexing over the column-major storage order.
impl<T> Index<usize> for Matrix<T> {
    type Output = T;

    fn index(&self, elem: usize) -> &Self::Output {
        assert!(elem < self.data.len(), "the element index is out of range");
        &self.data[elem]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, elem: usize) -> &mut Self::Output {
        assert!(elem < self.data.len(), "the element index is out of range");
        &mut self.data[elem]
    }
}
