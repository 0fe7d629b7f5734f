use log::debug;

use crate::error::{ChebyshevError, Result};

/// Ordered x values at which polynomials are evaluated.
///
/// The grid is either generated as `resolution` evenly spaced points covering `[-1, 1]`,
/// or supplied by the caller together with the resolution it is expected to have.
///
/// # Example
/// ```
/// use chebyshev_table::SampleGrid;
///
/// let grid = SampleGrid::unit_range(5).unwrap();
/// assert_eq!(grid.points(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
///
/// // length must agree with the declared resolution
/// assert!(SampleGrid::from_points(vec![0.0, 0.5], 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    points: Vec<f64>,
}

impl SampleGrid {
    /// `resolution` points from -1 to 1 inclusive, ascending.
    /// # Errors
    /// [ChebyshevError::InvalidResolution] is returned when `resolution` is lower than 2.
    pub fn unit_range(resolution: usize) -> Result<Self> {
        let points = linear_samples(-1.0, 1.0, resolution)?;
        Ok(SampleGrid { points })
    }

    /// Wraps caller supplied points.
    /// # Errors
    /// [ChebyshevError::LengthMismatch] is returned when `points.len()` differs from `resolution`.
    pub fn from_points(points: Vec<f64>, resolution: usize) -> Result<Self> {
        if points.len() != resolution {
            debug!("rejected {} points for resolution {}", points.len(), resolution);
            return Err(ChebyshevError::LengthMismatch { expected: resolution, got: points.len() });
        }
        Ok(SampleGrid { points })
    }

    /// Grid points in order.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of points, equal to the resolution the grid was built with.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` only for a caller supplied grid declared with resolution 0.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gives the points back to the caller.
    pub fn into_points(self) -> Vec<f64> {
        self.points
    }
}

/// `resolution` evenly spaced values from `from` to `to`, both ends included.
///
/// Every value is computed from its index rather than by accumulating the step,
/// and the last one is exactly `to`.
pub(crate) fn linear_samples(from: f64, to: f64, resolution: usize) -> Result<Vec<f64>> {
    if resolution < 2 {
        debug!("rejected resolution {}", resolution);
        return Err(ChebyshevError::InvalidResolution(resolution));
    }

    let last = resolution - 1;
    let step = (to - from) / last as f64;

    Ok((0..resolution)
        .map(|i| if i == last { to } else { from + step * i as f64 })
        .collect())
}
