//! Exact definite integration of fitted polynomials
//!
//! Integrates term by term: term i contributes cᵢ / (i + 1) · xⁱ⁺¹ to the
//! antiderivative. This is the exact integral of the fitted polynomial,
//! not a quadrature approximation of the underlying data.

use crate::polynomial::PolynomialCoefficients;

/// Definite integral of the polynomial from x_start to x_end.
///
/// The bounds carry no ordering requirement: swapping them negates the
/// result, which is the expected signed-area behavior.
pub fn integrate(coefficients: &PolynomialCoefficients, x_start: f64, x_end: f64) -> f64 {
    antiderivative(coefficients, x_end) - antiderivative(coefficients, x_start)
}

fn antiderivative(coefficients: &PolynomialCoefficients, x: f64) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .map(|(i, c)| c / (i + 1) as f64 * x.powi(i as i32 + 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parabola_third() {
        // ∫₀¹ x² dx = 1/3
        let poly = PolynomialCoefficients::from(vec![0.0, 0.0, 1.0]);
        assert!((integrate(&poly, 0.0, 1.0) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_is_width_times_height() {
        let poly = PolynomialCoefficients::from(vec![4.0]);
        assert!((integrate(&poly, -1.0, 2.0) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_reversed_bounds_negate() {
        let poly = PolynomialCoefficients::from(vec![1.0, -2.0, 3.0, 0.5]);
        let forward = integrate(&poly, 1.0, 2.0);
        let backward = integrate(&poly, 2.0, 1.0);
        assert!((forward + backward).abs() < 1e-12);
    }

    #[test]
    fn test_zero_width_interval_is_zero() {
        let poly = PolynomialCoefficients::from(vec![5.0, 1.0]);
        assert_eq!(integrate(&poly, 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_odd_polynomial_symmetric_interval() {
        // ∫₋ₐᵃ of an odd polynomial vanishes
        let poly = PolynomialCoefficients::from(vec![0.0, 2.0, 0.0, -1.0]);
        assert!(integrate(&poly, -2.0, 2.0).abs() < 1e-12);
    }
}
