use log::trace;

use crate::{error::Result, grid::linear_samples};

/// Cosine of `resolution` evenly spaced angles from `from_degrees` to `to_degrees`, both included.
///
/// # Example
/// ```
/// use chebyshev_table::cosine_samples;
/// use assert_approx_eq::assert_approx_eq;
///
/// let samples = cosine_samples(0.0, 180.0, 3).unwrap();
///
/// assert_approx_eq!(samples[0], 1.0, 1e-12);
/// assert_approx_eq!(samples[1], 0.0, 1e-12);
/// assert_approx_eq!(samples[2], -1.0, 1e-12);
/// ```
/// # Errors
/// [crate::ChebyshevError::InvalidResolution] is returned when `resolution` is lower than 2.
pub fn cosine_samples(from_degrees: f64, to_degrees: f64, resolution: usize) -> Result<Vec<f64>> {
    let angles = linear_samples(from_degrees, to_degrees, resolution)?;
    trace!("cosine of {} angles from {} to {} degrees", resolution, from_degrees, to_degrees);

    Ok(angles.into_iter().map(|angle| angle.to_radians().cos()).collect())
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use crate::ChebyshevError;
    use super::*;

    #[test]
    fn quarter_turns() {
        let eps = 1e-12;
        let samples = cosine_samples(0.0, 360.0, 5).unwrap();

        assert_eq!(5, samples.len());
        assert_approx_eq!(samples[0], 1.0, eps);
        assert_approx_eq!(samples[1], 0.0, eps);
        assert_approx_eq!(samples[2], -1.0, eps);
        assert_approx_eq!(samples[3], 0.0, eps);
        assert_approx_eq!(samples[4], 1.0, eps);
    }

    #[test]
    fn fractional_step() {
        let eps = 1e-12;
        // a 22.5 degree step
        let samples = cosine_samples(0.0, 90.0, 5).unwrap();

        assert_approx_eq!(samples[1], 22.5f64.to_radians().cos(), eps);
        assert_approx_eq!(samples[3], 67.5f64.to_radians().cos(), eps);
    }

    #[test]
    fn descending_range() {
        let eps = 1e-12;
        let samples = cosine_samples(60.0, 0.0, 3).unwrap();

        assert_approx_eq!(samples[0], 0.5, eps);
        assert_approx_eq!(samples[2], 1.0, eps);
        assert!(samples.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn invalid_resolution() {
        assert_eq!(Err(ChebyshevError::InvalidResolution(1)), cosine_samples(0.0, 90.0, 1));
    }
}
