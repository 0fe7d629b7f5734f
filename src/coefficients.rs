use log::debug;
use nalgebra::DMatrix;

use crate::error::{ChebyshevError, Result};

/// Largest degree whose coefficient table fits in `i64`, intermediate products of the
/// recurrence included.
pub const MAX_DEGREE: usize = 52;

/// Integer coefficients of Chebyshev polynomials of the first kind `T_0..=T_degree`.
///
/// Polynomial `T_p` is stored as `degree + 1` coefficients where entry `q` multiplies `x^q`.
/// Entries with `q > p` are zero. The table can not be modified once built.
///
/// # Example
/// ```
/// use chebyshev_table::CoefficientTable;
///
/// let table = CoefficientTable::new(3).unwrap();
///
/// // T_3(x) = 4x^3 - 3x
/// assert_eq!(table.row(3).unwrap(), &[0, -3, 0, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoefficientTable {
    // column p holds the coefficients of T_p, which keeps every polynomial contiguous
    coefficients: DMatrix<i64>,
    degree: usize,
}

impl CoefficientTable {
    /// Builds the table up to `degree` with the three term recurrence
    /// `T_{p+1} = 2x T_p - T_{p-1}` seeded with `T_0 = 1` and `T_1 = x`.
    /// # Errors
    /// [ChebyshevError::InvalidDegree] is returned when `degree` is 0 or greater than [MAX_DEGREE].
    /// ```
    /// use chebyshev_table::CoefficientTable;
    ///
    /// assert!(CoefficientTable::new(0).is_err());
    /// ```
    pub fn new(degree: usize) -> Result<Self> {
        if degree == 0 || degree > MAX_DEGREE {
            debug!("rejected coefficient table of degree {}", degree);
            return Err(ChebyshevError::InvalidDegree { degree, min: 1, max: MAX_DEGREE });
        }

        let size = degree + 1;
        let mut coefficients = DMatrix::<i64>::zeros(size, size);

        coefficients[(0, 0)] = 1;
        coefficients[(1, 1)] = 1;

        for p in 1..degree {
            coefficients[(0, p + 1)] = -coefficients[(0, p - 1)];

            for q in 0..degree {
                coefficients[(q + 1, p + 1)] =
                    2 * coefficients[(q, p)] - coefficients[(q + 1, p - 1)];
            }
        }

        debug!("built coefficient table of degree {} ({}x{})", degree, size, size);
        Ok(CoefficientTable { coefficients, degree })
    }

    /// Highest polynomial degree held by the table.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of rows (and coefficients per row), `degree + 1`.
    pub fn size(&self) -> usize {
        self.degree + 1
    }

    /// Coefficient of `x^q` in `T_p`.
    /// # Errors
    /// [ChebyshevError::InvalidDegree] is returned when `p` or `q` is greater than [CoefficientTable::degree].
    pub fn coefficient(&self, p: usize, q: usize) -> Result<i64> {
        self.row(p)?
            .get(q)
            .copied()
            .ok_or(ChebyshevError::InvalidDegree { degree: q, min: 0, max: self.degree })
    }

    /// Coefficients of `T_p` ordered from `x^0` up to `x^degree`.
    /// # Errors
    /// [ChebyshevError::InvalidDegree] is returned when `p` is greater than [CoefficientTable::degree].
    pub fn row(&self, p: usize) -> Result<&[i64]> {
        if p > self.degree {
            return Err(ChebyshevError::InvalidDegree { degree: p, min: 0, max: self.degree });
        }
        let size = self.size();
        let start = p * size;
        Ok(&self.coefficients.as_slice()[start..start + size])
    }

    /// Copies the table into nested vectors indexed as `[p][q]`.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.coefficients
            .column_iter()
            .map(|column| column.iter().copied().collect())
            .collect()
    }
}

/// Builds a [CoefficientTable] up to `degree`. Same as [CoefficientTable::new].
pub fn build_coefficients(degree: usize) -> Result<CoefficientTable> {
    CoefficientTable::new(degree)
}
