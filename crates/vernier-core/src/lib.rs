//! vernier-core - Measurement analysis engine for physics laboratory data
//!
//! This crate provides the numerical core for vernier, a toolkit for
//! analyzing (x, y) observations from repeated laboratory measurements:
//!
//! - **Dataset**: ordered collection of 2-D sample points
//! - **Statistics**: mean, sample variance/deviation, coefficient of variation
//! - **Linear fit**: closed-form ordinary least squares with R²
//! - **Polynomial fit**: general-degree least squares via normal equations
//! - **Uncertainty**: type-A estimation and root-sum-of-squares combination
//! - **Integration**: exact definite integral of a fitted polynomial
//! - **AnalysisReport**: immutable aggregate of completed analyses
//!
//! # Design Philosophy
//!
//! Every operation is a pure, synchronous function over an immutable view of
//! its inputs. Degenerate inputs (too few points, zero x-spread) yield
//! well-defined zero-valued results rather than errors; only the polynomial
//! fit, whose preconditions the caller controls directly, fails fast.

pub mod dataset;
pub mod error;
pub mod integrate;
pub mod linear;
pub mod polynomial;
pub mod report;
pub mod stats;
pub mod uncertainty;

pub use dataset::*;
pub use error::*;
pub use integrate::*;
pub use linear::*;
pub use polynomial::*;
pub use report::*;
pub use stats::*;
pub use uncertainty::*;
