use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::time_grid::TimeGrid;
use crate::error::FlexError;

/// Grid-wide inertia and frequency operating window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSystem {
    /// Total rotational kinetic energy at the current frequency (MWs)
    pub inertia_mws: f64,

    /// Current system frequency (Hz)
    pub freq_hz: f64,

    /// Lower frequency excursion limit (Hz)
    pub freq_min_hz: f64,

    /// Upper frequency excursion limit (Hz)
    pub freq_max_hz: f64,
}

impl GridSystem {
    pub fn validate(&self) -> Result<(), FlexError> {
        let fields = [
            ("inertia_mws", self.inertia_mws),
            ("freq_hz", self.freq_hz),
            ("freq_min_hz", self.freq_min_hz),
            ("freq_max_hz", self.freq_max_hz),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(FlexError::InvalidSystemConfiguration(format!(
                    "{name} is not finite: {value}"
                )));
            }
        }

        if self.inertia_mws < 0.0 {
            return Err(FlexError::InvalidSystemConfiguration(format!(
                "inertia_mws cannot be negative, got {}",
                self.inertia_mws
            )));
        }

        if self.freq_min_hz >= self.freq_hz || self.freq_hz >= self.freq_max_hz {
            return Err(FlexError::InvalidSystemConfiguration(format!(
                "freq_hz {} must lie strictly within [{}, {}]",
                self.freq_hz, self.freq_min_hz, self.freq_max_hz
            )));
        }

        Ok(())
    }
}

/// Instantaneous power-disturbance tolerance over the time grid
///
/// `upper[i]` is the largest disturbance (MW, positive = generation deficit
/// direction) the grid can absorb by `time[i]` before hitting the lower
/// frequency limit; `lower[i]` mirrors it for the opposite direction. Both
/// shrink in magnitude as time grows: this is a tolerance curve parameterized
/// by time, not a time history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisturbanceCurve {
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Derive the grid's disturbance tolerance from kinetic energy and the
/// frequency window
///
/// The inertia is treated as rotational kinetic energy `K = ½ J ω²` at the
/// current frequency with the electrical-to-mechanical convention
/// `ω = 2π·f/2`. The same effective moment gives the kinetic energy at the
/// floor and ceiling frequencies; dividing the available margin by elapsed
/// time yields the average-power tolerance at each sample. The t=0
/// singularity is excluded by the time grid invariant.
pub fn compute_disturbance_curve(
    system: &GridSystem,
    time: &TimeGrid,
) -> Result<DisturbanceCurve, FlexError> {
    system.validate()?;

    let k = system.inertia_mws;
    let j = (2.0 * k) / (4.0 * PI * system.freq_hz / 2.0).powi(2);

    let k_min = 0.5 * j * (4.0 * PI * system.freq_min_hz / 2.0).powi(2);
    let k_max = 0.5 * j * (4.0 * PI * system.freq_max_hz / 2.0).powi(2);

    let avail_down_mws = k - k_min;
    let avail_up_mws = k_max - k;

    let upper = time.iter().map(|t| avail_down_mws / t).collect();
    let lower = time.iter().map(|t| -avail_up_mws / t).collect();

    Ok(DisturbanceCurve { upper, lower })
}
