//! Descriptive statistics for measurement sequences
//!
//! Provides the summaries a lab report needs from repeated readings:
//! count, mean, sample (Bessel-corrected) variance and standard deviation,
//! and the coefficient of variation. Also the type-A uncertainty of a
//! dataset's y values (standard error of the mean).

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Threshold below which a denominator is treated as zero.
///
/// Absolute, not scaled by input magnitude; kept fixed for reproducible
/// output across implementations. For very large inputs this can
/// under-trigger the degenerate-case guards (known limitation).
pub(crate) const NEAR_ZERO: f64 = 1e-9;

/// Summary statistics for a sequence of readings
///
/// Fields that cannot be computed for the given input size stay at zero:
/// everything for an empty input, and variance/std_dev/cv for a single
/// reading (sample variance is undefined for n < 2).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    /// Number of readings
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample variance, Σ(v − mean)² / (count − 1)
    pub variance: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Coefficient of variation, std_dev / mean (zero when |mean| ≤ 1e-9)
    pub cv: f64,
}

/// Compute summary statistics from raw values.
///
/// Recomputed from scratch on every call; never incremental.
pub fn compute_statistics(values: &[f64]) -> StatisticsResult {
    let mut result = StatisticsResult {
        count: values.len(),
        ..Default::default()
    };

    if result.count == 0 {
        return result;
    }

    let sum: f64 = values.iter().sum();
    result.mean = sum / result.count as f64;

    if result.count < 2 {
        return result;
    }

    let sq_sum: f64 = values.iter().map(|v| (v - result.mean).powi(2)).sum();
    result.variance = sq_sum / (result.count - 1) as f64;
    result.std_dev = result.variance.sqrt();

    if result.mean.abs() > NEAR_ZERO {
        result.cv = result.std_dev / result.mean;
    }

    result
}

/// Type-A uncertainty of a dataset's y values: std_dev / sqrt(n).
///
/// Estimated statistically from the repeated readings themselves.
/// Returns 0.0 for an empty dataset, and naturally 0.0 for a single
/// reading (its standard deviation is zero).
pub fn type_a_uncertainty(dataset: &Dataset) -> f64 {
    if dataset.is_empty() {
        return 0.0;
    }
    let stats = compute_statistics(&dataset.y_values());
    stats.std_dev / (stats.count as f64).sqrt()
}
