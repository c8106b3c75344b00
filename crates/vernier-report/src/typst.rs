//! Typst rendering of an analysis report

use std::fmt::Write;

use vernier_core::AnalysisReport;

use crate::equation::polynomial_rhs;

/// Render the report as Typst source.
///
/// Same content and section policy as the Markdown renderer, expressed as
/// a typeset-ready document with a data table and math-mode equations.
pub fn render_typst(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("#set text(font: \"New Computer Modern\")\n");
    out.push_str("#set heading(numbering: \"1.1\")\n\n");
    out.push_str("= Physics Laboratory Report\n\n");

    out.push_str("== Raw Data\n\n");
    out.push_str("#table(\n");
    out.push_str("  columns: (auto, auto),\n");
    out.push_str("  stroke: 0.5pt,\n");
    out.push_str("  [*X*], [*Y*],\n");
    for p in report.dataset.points() {
        let _ = writeln!(out, "  [{:.4}], [{:.4}],", p.x, p.y);
    }
    out.push_str(")\n\n");

    if let Some(stats) = &report.statistics {
        out.push_str("== Statistical Analysis\n\n");
        let _ = writeln!(out, "- Number of points (N): {}", stats.count);
        let _ = writeln!(out, "- Mean: {:.4}", stats.mean);
        let _ = writeln!(out, "- Variance ($s^2$): {:.4}", stats.variance);
        let _ = writeln!(out, "- Standard deviation ($s$): {:.4}", stats.std_dev);
        let _ = writeln!(out, "- Coefficient of variation ($s$/mean): {:.4}\n", stats.cv);
    }

    if report.linear_fit.is_some() || report.polynomial_fit.is_some() {
        out.push_str("== Fit Results\n\n");
    }
    if let Some(fit) = &report.linear_fit {
        out.push_str("=== Linear Fit\n");
        let _ = writeln!(
            out,
            "- *Equation*: $ y = {:.4} x + {:.4} $",
            fit.slope, fit.intercept
        );
        let _ = writeln!(
            out,
            "- *Coefficient of determination* ($R^2$): {:.4}\n",
            fit.r_squared
        );
    }
    if let Some(fit) = &report.polynomial_fit {
        let _ = writeln!(out, "=== Order-{} Polynomial Fit", fit.order);
        let _ = writeln!(
            out,
            "- *Equation*: $ y = {} $\n",
            polynomial_rhs(&fit.coefficients, " ")
        );
    }

    if let Some(budget) = &report.uncertainty {
        out.push_str("== Uncertainty Analysis\n\n");
        let _ = writeln!(out, "- Type-A uncertainty ($u_A$): {:.4}", budget.type_a);
        let _ = writeln!(out, "- Type-B uncertainty ($u_B$): {:.4}", budget.type_b);
        let _ = writeln!(out, "- *Total uncertainty* ($u$): {:.4}\n", budget.combined);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernier_core::{
        compute_statistics, linear_fit, polynomial_fit, type_a_uncertainty, Dataset,
        PolynomialFitResult, UncertaintyBudget,
    };

    fn full_report() -> AnalysisReport {
        let data = Dataset::from_pairs([(1.0, 2.0), (2.0, 4.0), (3.0, 6.0), (4.0, 8.0)]);
        let coeffs = polynomial_fit(&data, 2).unwrap();
        AnalysisReport::new(data.clone())
            .with_statistics(compute_statistics(&data.y_values()))
            .with_linear_fit(linear_fit(&data))
            .with_polynomial_fit(PolynomialFitResult::new(2, coeffs))
            .with_uncertainty(UncertaintyBudget::new(type_a_uncertainty(&data), 0.05))
    }

    #[test]
    fn test_preamble_and_title() {
        let typ = render_typst(&full_report());
        assert!(typ.starts_with("#set text(font: \"New Computer Modern\")"));
        assert!(typ.contains("= Physics Laboratory Report"));
    }

    #[test]
    fn test_data_table_rows() {
        let typ = render_typst(&full_report());
        assert!(typ.contains("#table("));
        assert!(typ.contains("  [1.0000], [2.0000],"));
        assert!(typ.contains("  [4.0000], [8.0000],"));
    }

    #[test]
    fn test_math_mode_equations() {
        let typ = render_typst(&full_report());
        assert!(typ.contains("$ y = 2.0000 x + 0.0000 $"));
        assert!(typ.contains("($R^2$): 1.0000"));
    }

    #[test]
    fn test_absent_sections_omitted() {
        let data = Dataset::from_pairs([(1.0, 1.0), (2.0, 2.0)]);
        let typ = render_typst(&AnalysisReport::new(data));
        assert!(typ.contains("== Raw Data"));
        assert!(!typ.contains("== Statistical Analysis"));
        assert!(!typ.contains("== Fit Results"));
        assert!(!typ.contains("== Uncertainty Analysis"));
    }

    #[test]
    fn test_uncertainty_section_symbols() {
        let typ = render_typst(&full_report());
        assert!(typ.contains("($u_A$)"));
        assert!(typ.contains("($u_B$)"));
        assert!(typ.contains("*Total uncertainty* ($u$)"));
    }
}
