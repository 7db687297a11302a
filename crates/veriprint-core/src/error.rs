//! Error type for field-boundary conversions.

use thiserror::Error;

/// Failure while crossing the decimal-string / field-element boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The input was not a non-negative decimal integer.
    #[error("invalid decimal field element: {0:?}")]
    InvalidDecimal(String),
}
