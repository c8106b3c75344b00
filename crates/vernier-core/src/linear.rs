//! Ordinary least-squares line fitting
//!
//! Degree-1 fitting has a closed form, so no linear-system solve is needed:
//! one pass accumulates the five sums and the slope/intercept/R² fall out
//! directly. Degenerate inputs yield the all-zero null result.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::stats::NEAR_ZERO;

/// Result of fitting y = slope·x + intercept
///
/// The all-zero default is the "null result" returned when fitting is not
/// possible; callers should check against it (or the dataset size) before
/// trusting the values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearFitResult {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, in [0, 1] under well-posed conditions
    pub r_squared: f64,
}

/// Fit a line to the dataset by ordinary least squares.
///
/// Returns the null result when fewer than 2 points are given or when the
/// x values have (near-)zero spread, which makes the fit ill-posed. When
/// the y values have (near-)zero spread, R² is defined as 1.0 by
/// convention instead of dividing by a vanishing variance.
pub fn linear_fit(dataset: &Dataset) -> LinearFitResult {
    let n = dataset.size();
    if n < 2 {
        return LinearFitResult::default();
    }
    let n = n as f64;

    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for p in dataset.points() {
        sum_x += p.x;
        sum_y += p.y;
        sum_xy += p.x * p.y;
        sum_x2 += p.x * p.x;
        sum_y2 += p.y * p.y;
    }

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < NEAR_ZERO {
        return LinearFitResult::default();
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let r_denominator = (n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y);
    let r_squared = if r_denominator.abs() < NEAR_ZERO {
        1.0
    } else {
        let r_numerator = n * sum_xy - sum_x * sum_y;
        (r_numerator * r_numerator) / r_denominator
    };

    LinearFitResult {
        slope,
        intercept,
        r_squared,
    }
}
