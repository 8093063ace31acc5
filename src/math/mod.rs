//! The dense matrix type and its operator/text surfaces.
//!
//! Provides `Matrix` (2D, column-major) plus element conversion, element-wise
//! arithmetic, and the bracketed text format. The container is intentionally
//! small and owns its buffer outright; copies are deep and moves transfer the
//! buffer without reallocation.
pub mod cast;
pub mod matrix;
pub mod ops;
pub mod text;

pub use cast::CastTo;
pub use matrix::Matrix;
pub use text::FromToken;
