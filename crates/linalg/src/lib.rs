//! linalg: dense real vectors and matrices with checked shapes.
//!
//! The crate offers two value types, [`Vector`] and [`Matrix`], backed by
//! owned `f64` storage. Every operation that can violate a shape or index
//! precondition returns a [`Result`] carrying a [`LinAlgError`]; failed
//! operations leave their operands untouched.
//!
//! Sums (inner products and both matrix products) are accumulated strictly
//! in ascending index order starting from `0.0`, so results are reproducible
//! bit for bit.
pub mod config;
pub mod error;
pub mod math;

pub use config::FormatConfig;
pub use error::{LinAlgError, Result};
pub use math::{Matrix, Vector};
