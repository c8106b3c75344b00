//! Ordered collections of 2-D measurement samples
//!
//! A `Dataset` is the input to every analysis operation. It preserves
//! insertion order (for display and report fidelity) and performs no
//! deduplication, sorting, or value validation: NaN and infinite
//! coordinates are accepted and flow through the numeric routines.

use serde::{Deserialize, Serialize};

/// A single (x, y) observation. Immutable once added to a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered, append-only sequence of samples.
///
/// Created empty, grown with [`add_point`](Dataset::add_point), and reset by
/// replacing the whole instance. There is no single-point removal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    points: Vec<Sample>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from (x, y) pairs, preserving order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        pairs.into_iter().collect()
    }

    /// Append a sample. No validation is performed.
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.points.push(Sample::new(x, y));
    }

    /// Number of samples.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The y-components in insertion order, as raw input for statistics.
    pub fn y_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Read-only view of the full ordered sequence.
    pub fn points(&self) -> &[Sample] {
        &self.points
    }
}

impl FromIterator<(f64, f64)> for Dataset {
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().map(|(x, y)| Sample::new(x, y)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_starts_empty() {
        let data = Dataset::new();
        assert_eq!(data.size(), 0);
        assert!(data.is_empty());
        assert!(data.y_values().is_empty());
    }

    #[test]
    fn test_add_point_preserves_order() {
        let mut data = Dataset::new();
        data.add_point(3.0, 9.0);
        data.add_point(1.0, 1.0);
        data.add_point(2.0, 4.0);

        assert_eq!(data.size(), 3);
        let xs: Vec<f64> = data.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![3.0, 1.0, 2.0]);
        assert_eq!(data.y_values(), vec![9.0, 1.0, 4.0]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let data = Dataset::from_pairs([(1.0, 2.0), (1.0, 2.0)]);
        assert_eq!(data.size(), 2);
    }

    #[test]
    fn test_non_finite_points_accepted() {
        let mut data = Dataset::new();
        data.add_point(f64::NAN, f64::INFINITY);
        assert_eq!(data.size(), 1);
        assert!(data.points()[0].x.is_nan());
    }

    #[test]
    fn test_serde_round_trip() {
        let data = Dataset::from_pairs([(1.0, 2.0), (3.0, 4.0)]);
        let json = serde_json::to_string(&data).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
