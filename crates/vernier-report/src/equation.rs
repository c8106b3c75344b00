//! Polynomial equation formatting shared by both renderers

use vernier_core::PolynomialCoefficients;

/// Render "y = ..." right-hand side, highest degree first.
///
/// Signs are folded into the joining operator so negative coefficients
/// read as subtraction. `times` is the multiplication mark between a
/// coefficient and x (`" * "` for Markdown code spans, `" "` for Typst
/// math).
pub(crate) fn polynomial_rhs(coefficients: &PolynomialCoefficients, times: &str) -> String {
    let mut out = String::new();
    for (i, &c) in coefficients.iter().enumerate().rev() {
        if i < coefficients.len() - 1 {
            out.push_str(if c >= 0.0 { " + " } else { " - " });
        } else if c < 0.0 {
            out.push('-');
        }
        out.push_str(&format!("{:.4}", c.abs()));
        if i > 0 {
            out.push_str(times);
            out.push('x');
        }
        if i > 1 {
            out.push_str(&format!("^{}", i));
        }
    }
    out
}
