//! Error type shared by every public operation of the crate.

/// Result type alias using [ChebyshevError].
pub type Result<T> = std::result::Result<T, ChebyshevError>;

/// Errors reported by table construction and polynomial evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChebyshevError {
    /// Degree outside of the accepted range: either a table degree that cannot be built,
    /// or a lookup past the last row of a table.
    #[error("Invalid degree {degree}, expected a degree in {min}..={max}")]
    InvalidDegree {
        /// Requested degree
        degree: usize,
        /// Smallest accepted degree
        min: usize,
        /// Largest accepted degree
        max: usize,
    },

    /// Resolution too small to place evenly spaced samples between two endpoints.
    #[error("Resolution must be at least 2, got {0}")]
    InvalidResolution(usize),

    /// Caller supplied sequence does not have the expected length.
    #[error("Length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Horner evaluation needs at least one coefficient.
    #[error("Coefficient row is empty")]
    EmptyCoefficientRow,
}
