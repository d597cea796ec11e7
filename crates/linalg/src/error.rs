use std::error::Error;
use std::fmt;

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, LinAlgError>;

/// The single failure kind raised when an operation's preconditions do not hold.
///
/// Variants only separate the causes for the message; callers that need to
/// react programmatically should treat them all as a linear-algebra failure.
#[derive(Debug, Clone, PartialEq)]
pub enum LinAlgError {
    /// A dimension argument (vector length, row or column count) was zero.
    NonPositiveDimension { what: &'static str, dim: usize },
    /// An index fell outside the instance along the named axis.
    IndexOutOfBounds { axis: &'static str, index: usize, len: usize },
    /// The requested shape holds more elements than a buffer can address.
    ShapeOverflow { what: &'static str, shape: (usize, usize) },
    /// Binary operation over operands of incompatible shape.
    DimensionMismatch { op: &'static str, lhs: usize, rhs: usize },
    /// Vector text form could not be read.
    MalformedParse { reason: String, input: String },
}

impl fmt::Display for LinAlgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinAlgError::NonPositiveDimension { what, dim } => {
                write!(f, "{} dimension {} cannot be less than 1", what, dim)
            }
            LinAlgError::IndexOutOfBounds { axis, index, len } => {
                write!(f, "{} index {} is out of bounds for length {}", axis, index, len)
            }
            LinAlgError::ShapeOverflow { what, shape } => write!(
                f,
                "{} shape {}x{} exceeds the addressable element count",
                what, shape.0, shape.1
            ),
            LinAlgError::DimensionMismatch { op, lhs, rhs } => {
                write!(f, "Dimension mismatch in {}: {} vs {}", op, lhs, rhs)
            }
            LinAlgError::MalformedParse { reason, input } => {
                write!(f, "Malformed vector initialization: {} in \"{}\"", reason, input)
            }
        }
    }
}

impl Error for LinAlgError {}

/// Number of elements in a `rows x cols` buffer, or `ShapeOverflow` when it
/// cannot be allocated as `f64` storage.
pub(crate) fn checked_len(what: &'static str, rows: usize, cols: usize) -> Result<usize> {
    const MAX_ELEMENTS: usize = isize::MAX as usize / std::mem::size_of::<f64>();
    rows.checked_mul(cols)
        .filter(|&len| len <= MAX_ELEMENTS)
        .ok_or(LinAlgError::ShapeOverflow {
            what,
            shape: (rows, cols),
        })
}
