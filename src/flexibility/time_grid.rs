use serde::Serialize;

use crate::error::FlexError;

/// Shared time axis for all flexibility and disturbance computations
///
/// Strictly increasing, at least two samples, first sample > 0 so the
/// disturbance curve's 1/t singularity is never evaluated. The grid is
/// validated once at construction and immutable afterwards; every computation
/// takes it as an explicit parameter rather than reading a shared ambient
/// axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeGrid {
    points: Vec<f64>,
}

impl TimeGrid {
    /// Create a time grid from explicit sample points
    pub fn new(points: Vec<f64>) -> Result<Self, FlexError> {
        if points.len() < 2 {
            return Err(FlexError::InvalidTimeGrid(format!(
                "need at least 2 samples, got {}",
                points.len()
            )));
        }

        if points.iter().any(|t| !t.is_finite()) {
            return Err(FlexError::InvalidTimeGrid("samples must be finite".into()));
        }

        if points[0] <= 0.0 {
            return Err(FlexError::InvalidTimeGrid(format!(
                "first sample must be > 0 s, got {}",
                points[0]
            )));
        }

        if points.windows(2).any(|w| w[1] <= w[0]) {
            return Err(FlexError::InvalidTimeGrid(
                "samples must be strictly increasing".into(),
            ));
        }

        Ok(Self { points })
    }

    /// Create a uniformly spaced grid over `[start_s, end_s]` with `samples` points
    pub fn linspace(start_s: f64, end_s: f64, samples: usize) -> Result<Self, FlexError> {
        if samples < 2 {
            return Err(FlexError::InvalidTimeGrid(format!(
                "need at least 2 samples, got {samples}"
            )));
        }

        let step = (end_s - start_s) / (samples - 1) as f64;
        let points = (0..samples).map(|i| start_s + step * i as f64).collect();
        Self::new(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        // Always false by the length invariant, kept for clippy's sake.
        self.points.is_empty()
    }

    /// Constant grid spacing (s)
    ///
    /// Only meaningful for uniform grids; the energy-limit correction assumes
    /// uniform spacing and uses the first difference.
    pub fn dt(&self) -> f64 {
        self.points[1] - self.points[0]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_linspace_endpoints_and_spacing() {
        let grid = TimeGrid::linspace(0.1, 5.0, 50).unwrap();
        assert_eq!(grid.len(), 50);
        assert!((grid.as_slice()[0] - 0.1).abs() < 1e-12);
        assert!((grid.as_slice()[49] - 5.0).abs() < 1e-9);
        assert!((grid.dt() - (5.0 - 0.1) / 49.0).abs() < 1e-12);
    }

    #[test]
    fn test_explicit_grid_accepted() {
        let grid = TimeGrid::new(vec![0.5, 2.0, 3.0]).unwrap();
        assert_eq!(grid.as_slice(), &[0.5, 2.0, 3.0]);
    }

    #[rstest]
    #[case(vec![1.0])]
    #[case(vec![0.0, 1.0])]
    #[case(vec![-0.1, 1.0])]
    #[case(vec![1.0, 1.0])]
    #[case(vec![1.0, 0.5])]
    #[case(vec![1.0, f64::NAN])]
    fn test_invalid_grids_rejected(#[case] points: Vec<f64>) {
        assert!(matches!(
            TimeGrid::new(points),
            Err(FlexError::InvalidTimeGrid(_))
        ));
    }

    #[test]
    fn test_linspace_needs_two_samples() {
        assert!(TimeGrid::linspace(0.1, 5.0, 1).is_err());
    }
}
