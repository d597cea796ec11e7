//! Dense value types used throughout the crate.
//!
//! Provides `Vector` (1D) and `Matrix` (2D, row-major) containers over `f64`.
//! Both own their storage; cloning or returning a value always yields an
//! independent buffer.
pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
