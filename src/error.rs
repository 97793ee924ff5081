//! Error types for hue-spread operations

use thiserror::Error;

/// Result type alias for hue-spread operations
pub type SpreadResult<T> = Result<T, SpreadError>;

/// Errors that can occur while configuring a run
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpreadError {
    /// The divisor argument is not a number at all
    #[error("divisor {0:?} is not a number")]
    UnparsableDivisor(String),

    /// The divisor parsed but cannot drive a split
    #[error("divisor {value} is out of range: must be finite and greater than zero")]
    DivisorOutOfRange {
        /// The rejected value
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpreadError::UnparsableDivisor("banana".to_string());
        assert_eq!(err.to_string(), "divisor \"banana\" is not a number");

        let err = SpreadError::DivisorOutOfRange { value: -2.0 };
        assert_eq!(
            err.to_string(),
            "divisor -2 is out of range: must be finite and greater than zero"
        );
    }

    #[test]
    fn test_error_equality() {
        let a = SpreadError::UnparsableDivisor("x".to_string());
        let b = SpreadError::UnparsableDivisor("x".to_string());
        assert_eq!(a, b);
    }
}
