//! Chebyshev polynomials of the first kind: integer coefficient tables built with the
//! three term recurrence, and their evaluation with Horner's method at single points,
//! over the unit range `[-1, 1]` or as weighted sums.
//! A cosine sampler over a range of degrees is provided alongside.
//!
//! # Example
//! ```
//! use chebyshev_table::{build_coefficients, evaluate_at_points, evaluate_over_unit_range};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let table = build_coefficients(3).unwrap();
//!
//! // T_3(x) = 4x^3 - 3x
//! assert_eq!(evaluate_at_points(3, &table, &[-1.0, 0.0, 1.0]).unwrap(), vec![-1.0, 0.0, 1.0]);
//!
//! let values = evaluate_over_unit_range(3, 5, &table).unwrap();
//! assert_approx_eq!(values[1], 1.0, 1e-12);
//! assert!(evaluate_over_unit_range(3, 1, &table).is_err());
//! ```

mod coefficients;
mod cosine;
mod error;
mod evaluator;
mod grid;
mod polynomial;

pub use coefficients::{build_coefficients, CoefficientTable, MAX_DEGREE};
pub use cosine::cosine_samples;
pub use error::{ChebyshevError, Result};
pub use evaluator::{
    evaluate_at_points, evaluate_over_unit_range, evaluate_weighted_sum,
    evaluate_weighted_sum_over_unit_range,
};
pub use grid::SampleGrid;
pub use polynomial::horner_eval;
