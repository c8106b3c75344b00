//! Immutable aggregate of completed analyses
//!
//! The hand-off value between the analysis engine and its presentation and
//! report collaborators. Presence of each analysis is expressed through
//! `Option` fields filled by builder methods, so consumers branch on the
//! data itself instead of tracking "has this been computed" flags.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::linear::LinearFitResult;
use crate::polynomial::PolynomialCoefficients;
use crate::stats::StatisticsResult;
use crate::uncertainty::combine_two;

/// A polynomial fit together with the order it was requested at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialFitResult {
    pub order: usize,
    pub coefficients: PolynomialCoefficients,
}

impl PolynomialFitResult {
    pub fn new(order: usize, coefficients: PolynomialCoefficients) -> Self {
        Self {
            order,
            coefficients,
        }
    }
}

/// Type-A, type-B, and combined measurement uncertainty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyBudget {
    /// Statistical component (standard error of the mean)
    pub type_a: f64,
    /// Instrument component, supplied by the caller
    pub type_b: f64,
    /// Root-sum-of-squares total
    pub combined: f64,
}

impl UncertaintyBudget {
    /// Build a budget from its two components; the total is derived here.
    pub fn new(type_a: f64, type_b: f64) -> Self {
        Self {
            type_a,
            type_b,
            combined: combine_two(type_a, type_b),
        }
    }
}

/// Everything one analysis session produced, constructed immutably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub dataset: Dataset,
    pub statistics: Option<StatisticsResult>,
    pub linear_fit: Option<LinearFitResult>,
    pub polynomial_fit: Option<PolynomialFitResult>,
    pub uncertainty: Option<UncertaintyBudget>,
}

impl AnalysisReport {
    /// Start a report over the given dataset with no analyses attached.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            statistics: None,
            linear_fit: None,
            polynomial_fit: None,
            uncertainty: None,
        }
    }

    pub fn with_statistics(mut self, statistics: StatisticsResult) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn with_linear_fit(mut self, fit: LinearFitResult) -> Self {
        self.linear_fit = Some(fit);
        self
    }

    pub fn with_polynomial_fit(mut self, fit: PolynomialFitResult) -> Self {
        self.polynomial_fit = Some(fit);
        self
    }

    pub fn with_uncertainty(mut self, budget: UncertaintyBudget) -> Self {
        self.uncertainty = Some(budget);
        self
    }
}
