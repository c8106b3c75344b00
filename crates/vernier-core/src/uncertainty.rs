//! Combination of independent measurement uncertainties
//!
//! Independent uncertainty sources combine as the root sum of squares.
//! Type-A estimation lives in [`crate::stats::type_a_uncertainty`]; the
//! type-B value comes from the caller (instrument specification) and is
//! combined here with no further interpretation.

/// Root-sum-of-squares combination of any number of independent sources.
///
/// Pure and total: an empty list yields 0.0.
pub fn combine(uncertainties: &[f64]) -> f64 {
    uncertainties.iter().map(|u| u * u).sum::<f64>().sqrt()
}

/// Total measurement uncertainty from a type-A and a type-B component.
pub fn combine_two(u_a: f64, u_b: f64) -> f64 {
    (u_a * u_a + u_b * u_b).sqrt()
}
