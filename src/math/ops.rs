//! Element-wise arithmetic between matrices and between matrices and scalars.
//!
//! Matrix-matrix operators require identical shapes. On mismatch they return
//! a zero-filled result of the left operand's shape and log a warning; the
//! `try_*` methods report the same condition as a `ShapeError` for callers
//! that want strict checking.

use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use num_complex::Complex;
use num_traits::Num;

use crate::error::ShapeError;
use crate::math::Matrix;

fn elementwise<T, F>(lhs: &Matrix<T>, rhs: &Matrix<T>, name: &str, op: F) -> Matrix<T>
where
    T: Copy + Num,
    F: Fn(T, T) -> T,
{
    if lhs.shape() != rhs.shape() {
        log::warn!(
            "element-wise {} on mismatched shapes {:?} vs {:?}; returning zeros",
            name,
            lhs.shape(),
            rhs.shape()
        );
        return Matrix::zeros(lhs.nrows(), lhs.ncols());
    }
    let mut out = Matrix::zeros(lhs.nrows(), lhs.ncols());
    for (slot, (a, b)) in out
        .as_mut_slice()
        .iter_mut()
        .zip(lhs.as_slice().iter().zip(rhs.as_slice().iter()))
    {
        *slot = op(*a, *b);
    }
    out
}

fn checked<T, F>(lhs: &Matrix<T>, rhs: &Matrix<T>, op: F) -> Result<Matrix<T>, ShapeError>
where
    T: Copy + Num,
    F: Fn(T, T) -> T,
{
    if lhs.shape() != rhs.shape() {
        return Err(ShapeError::Mismatch {
            left: lhs.shape(),
            right: rhs.shape(),
        });
    }
    let mut out = Matrix::zeros(lhs.nrows(), lhs.ncols());
    for (slot, (a, b)) in out
        .as_mut_slice()
        .iter_mut()
        .zip(lhs.as_slice().iter().zip(rhs.as_slice().iter()))
    {
        *slot = op(*a, *b);
    }
    Ok(out)
}

impl<T: Copy + Num> Matrix<T> {
    /// Element-wise sum, failing on shape mismatch instead of zero-filling.
    pub fn try_add(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, ShapeError> {
        checked(self, rhs, |a, b| a + b)
    }

    pub fn try_sub(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, ShapeError> {
        checked(self, rhs, |a, b| a - b)
    }

    pub fn try_mul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, ShapeError> {
        checked(self, rhs, |a, b| a * b)
    }

    pub fn try_div(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, ShapeError> {
        checked(self, rhs, |a, b| a / b)
    }

    /// Broadcasts `value` over every element with the given operation; these
    /// back the concrete-type scalar operators and stay available for generic
    /// element types.
    pub fn scalar_add(&self, value: T) -> Matrix<T> {
        self.broadcast(|a| a + value)
    }

    /// `self - value` per element.
    pub fn scalar_sub(&self, value: T) -> Matrix<T> {
        self.broadcast(|a| a - value)
    }

    /// `value - self` per element (the non-commutative order).
    pub fn scalar_rsub(&self, value: T) -> Matrix<T> {
        self.broadcast(|a| value - a)
    }

    pub fn scalar_mul(&self, value: T) -> Matrix<T> {
        self.broadcast(|a| a * value)
    }

    /// `self / value` per element.
    pub fn scalar_div(&self, value: T) -> Matrix<T> {
        self.broadcast(|a| a / value)
    }

    fn broadcast<F: Fn(T) -> T>(&self, op: F) -> Matrix<T> {
        let mut out = Matrix::zeros(self.nrows(), self.ncols());
        for (slot, a) in out.as_mut_slice().iter_mut().zip(self.as_slice().iter()) {
            *slot = op(*a);
        }
        out
    }
}

impl<'a, 'b, T: Copy + Num> Add<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        elementwise(self, rhs, "add", |a, b| a + b)
    }
}

impl<'a, 'b, T: Copy + Num> Sub<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        elementwise(self, rhs, "sub", |a, b| a - b)
    }
}

impl<'a, 'b, T: Copy + Num> Mul<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        elementwise(self, rhs, "mul", |a, b| a * b)
    }
}

impl<'a, 'b, T: Copy + Num> Div<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        elementwise(self, rhs, "div", |a, b| a / b)
    }
}

/// Compound assignment; a shape mismatch leaves the receiver unchanged.
impl<'a, T: Copy + Num> AddAssign<&'a Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &'a Matrix<T>) {
        if self.shape() != rhs.shape() {
            log::warn!(
                "+= on mismatched shapes {:?} vs {:?}; left operand unchanged",
                self.shape(),
                rhs.shape()
            );
            return;
        }
        for (slot, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice().iter()) {
            *slot = *slot + *b;
        }
    }
}

impl<'a, T: Copy + Num> SubAssign<&'a Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &'a Matrix<T>) {
        if self.shape() != rhs.shape() {
            log::warn!(
                "-= on mismatched shapes {:?} vs {:?}; left operand unchanged",
                self.shape(),
                rhs.shape()
            );
            return;
        }
        for (slot, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice().iter()) {
            *slot = *slot - *b;
        }
    }
}

// Scalar operands on either side, per concrete element type. A generic
// right-hand scalar impl would collide with the matrix-matrix operators
// under coherence, so the numeric grid is spelled out.
macro_rules! scalar_ops {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<'a> Add<$t> for &'a Matrix<$t> {
                type Output = Matrix<$t>;

                fn add(self, rhs: $t) -> Matrix<$t> {
                    self.scalar_add(rhs)
                }
            }

            impl<'a> Add<&'a Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn add(self, rhs: &'a Matrix<$t>) -> Matrix<$t> {
                    rhs.scalar_add(self)
                }
            }

            impl<'a> Sub<$t> for &'a Matrix<$t> {
                type Output = Matrix<$t>;

                fn sub(self, rhs: $t) -> Matrix<$t> {
                    self.scalar_sub(rhs)
                }
            }

            impl<'a> Sub<&'a Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn sub(self, rhs: &'a Matrix<$t>) -> Matrix<$t> {
                    rhs.scalar_rsub(self)
                }
            }

            impl<'a> Mul<$t> for &'a Matrix<$t> {
                type Output = Matrix<$t>;

                fn mul(self, rhs: $t) -> Matrix<$t> {
                    self.scalar_mul(rhs)
                }
            }

            impl<'a> Mul<&'a Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: &'a Matrix<$t>) -> Matrix<$t> {
                    rhs.scalar_mul(self)
                }
            }

            impl<'a> Div<$t> for &'a Matrix<$t> {
                type Output = Matrix<$t>;

                fn div(self, rhs: $t) -> Matrix<$t> {
                    self.scalar_div(rhs)
                }
            }
        )+
    };
}

scalar_ops!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
scalar_ops!(Complex<f32>, Complex<f64>);
