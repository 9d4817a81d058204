use itertools::izip;
use serde::Serialize;
use strum::Display;

use super::disturbance::DisturbanceCurve;
use super::envelope::FlexibilityEnvelope;
use super::time_grid::TimeGrid;
use crate::error::FlexError;

/// Disturbance direction, from the grid's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Generation deficit: flexibility must ramp up
    #[strum(serialize = "upward")]
    Up,

    /// Generation surplus: flexibility must ramp down
    #[strum(serialize = "downward")]
    Down,
}

/// Crossing points between the system envelope and the tolerance curve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisturbanceResult {
    /// Largest survivable generation-deficit disturbance (MW)
    pub max_disturbance_mw: f64,

    /// Time at which the upward crossing occurs (s)
    pub max_disturbance_time_s: f64,

    /// Largest survivable generation-surplus disturbance (MW, ≤ 0)
    pub min_disturbance_mw: f64,

    /// Time at which the downward crossing occurs (s)
    pub min_disturbance_time_s: f64,
}

/// Locate where the aggregated envelope crosses the tolerance curve
///
/// Scans the time grid in increasing order for the first index where the
/// envelope strictly exceeds the curve in each direction: there the system's
/// ramping has rebalanced the disturbance before the frequency limit would
/// have been reached. Exact equality counts as not-yet-crossed; this is a
/// discretization policy, not a continuous-root solve. Fails with
/// `NoCrossingFound` when a direction never crosses within the grid, which
/// tells the caller the horizon is too short or the tolerance is unlimited at
/// the sampled resolution.
pub fn solve(
    system_envelope: &FlexibilityEnvelope,
    curve: &DisturbanceCurve,
    time: &TimeGrid,
) -> Result<DisturbanceResult, FlexError> {
    debug_assert_eq!(system_envelope.len(), time.len());
    debug_assert_eq!(curve.upper.len(), time.len());

    // Storage zeroing can punch holes in the envelope, so the comparison is
    // not guaranteed monotone and a first-match scan is required.
    let (max_disturbance_mw, max_disturbance_time_s) =
        izip!(time.iter(), &curve.upper, &system_envelope.up)
            .find(|(_, tolerance, up)| **tolerance < **up)
            .map(|(t, tolerance, _)| (*tolerance, t))
            .ok_or(FlexError::NoCrossingFound(Direction::Up))?;

    let (min_disturbance_mw, min_disturbance_time_s) =
        izip!(time.iter(), &curve.lower, &system_envelope.down)
            .find(|(_, tolerance, down)| **tolerance > **down)
            .map(|(t, tolerance, _)| (*tolerance, t))
            .ok_or(FlexError::NoCrossingFound(Direction::Down))?;

    Ok(DisturbanceResult {
        max_disturbance_mw,
        max_disturbance_time_s,
        min_disturbance_mw,
        min_disturbance_time_s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(upper: Vec<f64>, lower: Vec<f64>) -> DisturbanceCurve {
        DisturbanceCurve { upper, lower }
    }

    fn envelope(up: Vec<f64>, down: Vec<f64>) -> FlexibilityEnvelope {
        FlexibilityEnvelope {
            up,
            down,
            base_output_mw: 0.0,
        }
    }

    #[test]
    fn test_first_strict_crossing_reported() {
        let time = TimeGrid::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let curve = curve(
            vec![8.0, 4.0, 2.0, 1.0],
            vec![-8.0, -4.0, -2.0, -1.0],
        );
        let envelope = envelope(
            vec![0.0, 1.0, 3.0, 3.0],
            vec![0.0, -1.5, -5.0, -7.0],
        );

        let result = solve(&envelope, &curve, &time).unwrap();
        // Upward: first index with upper < up is i = 2 (2 < 3).
        assert_eq!(result.max_disturbance_mw, 2.0);
        assert_eq!(result.max_disturbance_time_s, 3.0);
        // Downward: first index with lower > down is i = 2 (-2 > -5).
        assert_eq!(result.min_disturbance_mw, -2.0);
        assert_eq!(result.min_disturbance_time_s, 3.0);
    }

    #[test]
    fn test_exact_equality_is_not_a_crossing() {
        let time = TimeGrid::new(vec![1.0, 2.0]).unwrap();
        let curve = curve(vec![3.0, 2.0], vec![-3.0, -2.0]);
        // up meets the curve exactly at index 0, strictly exceeds at index 1
        let envelope = envelope(vec![3.0, 2.5], vec![-3.0, -2.5]);

        let result = solve(&envelope, &curve, &time).unwrap();
        assert_eq!(result.max_disturbance_time_s, 2.0);
        assert_eq!(result.min_disturbance_time_s, 2.0);
    }

    #[test]
    fn test_no_upward_crossing_is_an_error() {
        let time = TimeGrid::new(vec![1.0, 2.0]).unwrap();
        let curve = curve(vec![100.0, 50.0], vec![-0.5, -0.25]);
        let envelope = envelope(vec![1.0, 2.0], vec![-1.0, -2.0]);

        assert_eq!(
            solve(&envelope, &curve, &time),
            Err(FlexError::NoCrossingFound(Direction::Up))
        );
    }

    #[test]
    fn test_no_downward_crossing_is_an_error() {
        let time = TimeGrid::new(vec![1.0, 2.0]).unwrap();
        let curve = curve(vec![0.5, 0.25], vec![-100.0, -50.0]);
        let envelope = envelope(vec![1.0, 2.0], vec![-1.0, -2.0]);

        assert_eq!(
            solve(&envelope, &curve, &time),
            Err(FlexError::NoCrossingFound(Direction::Down))
        );
    }

    #[test]
    fn test_zero_envelope_never_crosses() {
        let time = TimeGrid::new(vec![1.0, 2.0]).unwrap();
        let curve = curve(vec![1.0, 0.5], vec![-1.0, -0.5]);
        let envelope = FlexibilityEnvelope::zero(2);

        assert!(matches!(
            solve(&envelope, &curve, &time),
            Err(FlexError::NoCrossingFound(_))
        ));
    }
}
