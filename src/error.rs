//! Error types for complex arithmetic.

use thiserror::Error;

/// Errors that can occur during complex arithmetic.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
	/// The divisor had zero modulus.
	#[error("division by zero: divisor has zero modulus")]
	DivisionByZero,
}

/// Result type for fallible complex operations.
pub type MathResult<T> = Result<T, MathError>;
