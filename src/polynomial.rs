use crate::error::{ChebyshevError, Result};

/// Evaluates `c[0] + c[1] x + ... + c[n-1] x^(n-1)` with Horner's method,
/// folding from the highest power down so only `n - 1` multiplications are needed.
///
/// # Example
/// ```
/// use chebyshev_table::horner_eval;
///
/// // 2x^2 - 1
/// assert_eq!(horner_eval(0.5, &[-1, 0, 2]).unwrap(), -0.5);
/// ```
/// # Errors
/// [ChebyshevError::EmptyCoefficientRow] is returned for an empty `coefficients` slice.
pub fn horner_eval(x: f64, coefficients: &[i64]) -> Result<f64> {
    let (highest, rest) = coefficients
        .split_last()
        .ok_or(ChebyshevError::EmptyCoefficientRow)?;

    Ok(rest
        .iter()
        .rev()
        .fold(*highest as f64, |result, c| *c as f64 + x * result))
}
