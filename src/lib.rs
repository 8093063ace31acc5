//! sigmat: dense column-major matrices and signal-processing primitives.
//!
//! This crate provides a generic two-dimensional container (`math::Matrix`)
//! with element-wise arithmetic, a bracketed textual matrix format, and the
//! classic difference-equation toolbox built on top of it: up/down-sampling,
//! IIR/FIR filtering, convolution, convolution-matrix and Toeplitz-matrix
//! construction.
//!
//! The design favors small, testable modules. Precondition violations panic
//! with a message; expected boundary conditions (shape mismatches, malformed
//! text) fall back to deterministic values and are reported through the `log`
//! facade and the checked `try_*` surfaces.
pub mod error;
pub mod linalg;
pub mod math;
pub mod signal;

pub use error::{ParseError, ShapeError};
pub use math::Matrix;
