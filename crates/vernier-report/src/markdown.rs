//! Markdown rendering of an analysis report

use std::fmt::Write;

use vernier_core::AnalysisReport;

use crate::equation::polynomial_rhs;

/// Render the report as a Markdown document.
///
/// Sections for absent analyses are omitted entirely; only the raw-data
/// table is always present.
pub fn render_markdown(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("# Physics Laboratory Report\n\n");

    out.push_str("## 1. Raw Data\n\n");
    out.push_str("| X | Y |\n");
    out.push_str("|---|---|\n");
    for p in report.dataset.points() {
        let _ = writeln!(out, "| {:.4} | {:.4} |", p.x, p.y);
    }
    out.push('\n');

    if let Some(stats) = &report.statistics {
        out.push_str("## 2. Statistical Analysis\n\n");
        let _ = writeln!(out, "- Number of points (N): {}", stats.count);
        let _ = writeln!(out, "- Mean: {:.4}", stats.mean);
        let _ = writeln!(out, "- Variance (s²): {:.4}", stats.variance);
        let _ = writeln!(out, "- Standard deviation (s): {:.4}", stats.std_dev);
        let _ = writeln!(out, "- Coefficient of variation (s/mean): {:.4}\n", stats.cv);
    }

    if report.linear_fit.is_some() || report.polynomial_fit.is_some() {
        out.push_str("## 3. Fit Results\n\n");
    }
    if let Some(fit) = &report.linear_fit {
        out.push_str("### Linear Fit\n");
        let _ = writeln!(
            out,
            "- **Equation**: `y = {:.4} * x + {:.4}`",
            fit.slope, fit.intercept
        );
        let _ = writeln!(
            out,
            "- **Coefficient of determination (R²)**: {:.4}\n",
            fit.r_squared
        );
    }
    if let Some(fit) = &report.polynomial_fit {
        let _ = writeln!(out, "### Order-{} Polynomial Fit", fit.order);
        let _ = writeln!(
            out,
            "- **Equation**: `y = {}`\n",
            polynomial_rhs(&fit.coefficients, " * ")
        );
    }

    if let Some(budget) = &report.uncertainty {
        out.push_str("## 4. Uncertainty Analysis\n\n");
        let _ = writeln!(out, "- Type-A uncertainty (uA): {:.4}", budget.type_a);
        let _ = writeln!(out, "- Type-B uncertainty (uB): {:.4}", budget.type_b);
        let _ = writeln!(out, "- **Total uncertainty (u)**: {:.4}\n", budget.combined);
    }

    out
}
