//! vernier-report - Lab report rendering over vernier analysis results
//!
//! Serializes an [`AnalysisReport`] into two text markup formats:
//!
//! - **Markdown**: portable report for version control and quick review
//! - **Typst**: typeset-ready source for submission-quality output
//!
//! Both renderers are pure consumers of vernier-core value types. A section
//! is emitted only for analyses actually present on the report; all numbers
//! are written with four decimal places.

pub mod markdown;
pub mod typst;

mod equation;

pub use markdown::render_markdown;
pub use typst::render_typst;
