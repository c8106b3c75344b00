//! General-degree polynomial least-squares fitting
//!
//! Builds the normal-equations system from power sums and solves it with a
//! rank-revealing decomposition. The normal-equations matrix becomes
//! ill-conditioned quickly as the order grows, so the solve goes through
//! nalgebra's SVD least squares rather than naive elimination or matrix
//! inversion. On a rank-deficient system (e.g. duplicate x values) the SVD
//! returns the minimum-norm solution; the result is not re-validated
//! against the residual.

use std::ops::Deref;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{FitError, FitResult};

/// Singular values below this are treated as zero during the SVD solve.
const SVD_EPS: f64 = 1e-12;

/// Fitted polynomial coefficients, lowest degree first.
///
/// Index i holds the coefficient of xⁱ; a fit of order m yields m + 1
/// coefficients. Produced fresh by each fit, never aliasing dataset storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolynomialCoefficients(Vec<f64>);

impl PolynomialCoefficients {
    /// Degree of the polynomial (number of coefficients minus one).
    pub fn order(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Evaluate the polynomial at x using Horner's scheme.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.0.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }
}

impl Deref for PolynomialCoefficients {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for PolynomialCoefficients {
    fn from(coeffs: Vec<f64>) -> Self {
        Self(coeffs)
    }
}

/// Fit a polynomial of the given order by least squares.
///
/// Fails fast when the order is below 1 or when the dataset holds fewer
/// than order + 1 points (the system would be under-determined). Returns
/// coefficients c₀..c_order, lowest degree first.
pub fn polynomial_fit(dataset: &Dataset, order: usize) -> FitResult<PolynomialCoefficients> {
    if order < 1 {
        return Err(FitError::InvalidOrder { order });
    }

    let points = dataset.points();
    let required = order + 1;
    if points.len() < required {
        return Err(FitError::InsufficientData {
            points: points.len(),
            required,
        });
    }

    // Power sums S_k = Σ xᵢᵏ for k = 0..=2·order; A[i][j] = S_{i+j}
    let mut x_pow_sums = vec![0.0; 2 * order + 1];
    for p in points {
        for (k, sum) in x_pow_sums.iter_mut().enumerate() {
            *sum += p.x.powi(k as i32);
        }
    }

    let size = order + 1;
    let a = DMatrix::from_fn(size, size, |i, j| x_pow_sums[i + j]);
    let b = DVector::from_fn(size, |i, _| {
        points.iter().map(|p| p.y * p.x.powi(i as i32)).sum::<f64>()
    });

    let solution = a
        .svd(true, true)
        .solve(&b, SVD_EPS)
        .map_err(|_| FitError::SingularSystem)?;

    Ok(PolynomialCoefficients(solution.iter().copied().collect()))
}
