use core::fmt::{self, Display};

/// Errors reported by rational arithmetic and conversions.
///
/// Most undefined conditions (zero denominator at construction, a
/// single NaN operand, division by zero) produce the NaN value
/// instead of an error; only the two cases below surface as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Both operands of a binary arithmetic operation are NaN.
    InvalidOperation,

    /// The value is NaN or its reduced denominator is not 1, so it can
    /// not be represented as an integer.
    NotAnInteger,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidOperation => write!(f, "both operands are NaN"),
            Error::NotAnInteger => write!(f, "value is not representable as an integer"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
