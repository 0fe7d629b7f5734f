use log::{debug, trace};

use crate::{
    coefficients::CoefficientTable,
    error::{ChebyshevError, Result},
    grid::SampleGrid,
    polynomial::horner_eval,
};

/// Evaluates `T_degree` at `resolution` evenly spaced points covering `[-1, 1]`.
/// Results are ordered by ascending x.
///
/// # Example
/// ```
/// use chebyshev_table::{build_coefficients, evaluate_over_unit_range};
///
/// let table = build_coefficients(2).unwrap();
/// let values = evaluate_over_unit_range(2, 3, &table).unwrap();
///
/// assert_eq!(values, vec![1.0, -1.0, 1.0]);
/// ```
/// # Errors
/// - [ChebyshevError::InvalidResolution] when `resolution` is lower than 2,
/// - [ChebyshevError::InvalidDegree] when `degree` is not a row of `table`.
pub fn evaluate_over_unit_range(
    degree: usize,
    resolution: usize,
    table: &CoefficientTable,
) -> Result<Vec<f64>> {
    let coefficients = table.row(degree)?;
    let grid = SampleGrid::unit_range(resolution)?;
    evaluate_row(degree, coefficients, grid.points())
}

/// Evaluates `T_degree` at every caller supplied x, preserving their order.
/// # Errors
/// [ChebyshevError::InvalidDegree] is returned when `degree` is not a row of `table`.
pub fn evaluate_at_points(degree: usize, table: &CoefficientTable, xs: &[f64]) -> Result<Vec<f64>> {
    let coefficients = table.row(degree)?;
    evaluate_row(degree, coefficients, xs)
}

/// Evaluates `sum_i weights[i] * T_{i+1}(x)` at every x. Degrees start at 1, `T_0` never
/// takes part in the sum. An empty `weights` slice yields zeros.
///
/// # Example
/// ```
/// use chebyshev_table::{build_coefficients, evaluate_weighted_sum};
///
/// let table = build_coefficients(2).unwrap();
///
/// // 3 T_1(x) + 2 T_2(x) = 4x^2 + 3x - 2
/// let values = evaluate_weighted_sum(&[3, 2], &table, &[0.0, 0.5]).unwrap();
/// assert_eq!(values, vec![-2.0, 0.5]);
/// ```
/// # Errors
/// [ChebyshevError::LengthMismatch] is returned when `table` holds fewer degrees than there are weights.
pub fn evaluate_weighted_sum(
    weights: &[i64],
    table: &CoefficientTable,
    xs: &[f64],
) -> Result<Vec<f64>> {
    if weights.len() > table.degree() {
        debug!(
            "rejected {} weights for coefficient table of degree {}",
            weights.len(),
            table.degree()
        );
        return Err(ChebyshevError::LengthMismatch { expected: table.degree(), got: weights.len() });
    }

    trace!("weighted sum of {} polynomials at {} points", weights.len(), xs.len());

    let mut sum = vec![0.0; xs.len()];
    for (degree, weight) in (1..).zip(weights) {
        let values = evaluate_at_points(degree, table, xs)?;
        let weight = *weight as f64;

        for (accumulated, value) in sum.iter_mut().zip(values) {
            *accumulated += value * weight;
        }
    }
    Ok(sum)
}

/// [evaluate_weighted_sum] over `resolution` evenly spaced points covering `[-1, 1]`.
/// # Errors
/// - [ChebyshevError::InvalidResolution] when `resolution` is lower than 2,
/// - [ChebyshevError::LengthMismatch] when `table` holds fewer degrees than there are weights.
pub fn evaluate_weighted_sum_over_unit_range(
    weights: &[i64],
    resolution: usize,
    table: &CoefficientTable,
) -> Result<Vec<f64>> {
    let grid = SampleGrid::unit_range(resolution)?;
    evaluate_weighted_sum(weights, table, grid.points())
}

fn evaluate_row(degree: usize, coefficients: &[i64], xs: &[f64]) -> Result<Vec<f64>> {
    trace!("evaluating T_{} at {} points", degree, xs.len());

    xs.iter().map(|x| horner_eval(*x, coefficients)).collect()
}
