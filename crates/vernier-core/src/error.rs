//! Error types for vernier-core
//!
//! Only the polynomial fit can fail: its preconditions (a sensible order and
//! enough points to determine the normal equations) are under direct caller
//! control. Everything else guards degenerate input by returning a
//! well-defined zero-valued result instead of an error.

use thiserror::Error;

/// Errors from least-squares polynomial fitting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    /// Requested polynomial order is below the minimum of 1
    #[error("Polynomial order must be at least 1 (got {order})")]
    InvalidOrder { order: usize },

    /// Too few points to determine the normal-equations system
    #[error("Fitting requires at least {required} points (got {points})")]
    InsufficientData { points: usize, required: usize },

    /// The decomposition produced no solution for the normal equations
    #[error("Normal-equations system could not be solved")]
    SingularSystem,
}

/// Result type alias for fitting operations
pub type FitResult<T> = Result<T, FitError>;
