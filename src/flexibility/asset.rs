use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::FlexError;

/// Fleet slot an asset occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "kebab-case")]
pub enum AssetKind {
    GasFired,
    Hydro,
    Solar,
    Wind,
    Battery,
}

/// Stored-energy parameters for energy-limited assets (battery storage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageParams {
    /// State of charge (%)
    pub charge_percent: f64,

    /// Usable energy capacity (MWs)
    pub energy_capacity_mws: f64,
}

/// One generation/storage resource
///
/// Constructed fresh from external configuration for each evaluation and
/// immutable during the computation. An asset without `storage` is pure
/// rate/latency/bound limited; with `storage`, cumulative delivered/absorbed
/// energy is additionally capped by the energy available to empty or to fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Current real power output (MW), signed
    pub output_mw: f64,

    /// Operating ceiling (MW)
    pub max_output_mw: f64,

    /// Operating floor (MW)
    pub min_output_mw: f64,

    /// Dead time before ramping begins (s)
    pub latency_s: f64,

    /// Maximum upward rate of change (MW/s), magnitude
    pub ramp_up_mw_per_s: f64,

    /// Maximum downward rate of change (MW/s), magnitude
    pub ramp_down_mw_per_s: f64,

    /// Present only for storage-type assets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageParams>,
}

impl Asset {
    /// Validate the configuration, rejecting rather than clamping
    pub fn validate(&self) -> Result<(), FlexError> {
        let fields = [
            ("output_mw", self.output_mw),
            ("max_output_mw", self.max_output_mw),
            ("min_output_mw", self.min_output_mw),
            ("latency_s", self.latency_s),
            ("ramp_up_mw_per_s", self.ramp_up_mw_per_s),
            ("ramp_down_mw_per_s", self.ramp_down_mw_per_s),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(FlexError::InvalidAssetConfiguration(format!(
                    "{name} is not finite: {value}"
                )));
            }
        }

        if self.ramp_up_mw_per_s <= 0.0 {
            return Err(FlexError::InvalidAssetConfiguration(format!(
                "ramp_up_mw_per_s must be positive, got {}",
                self.ramp_up_mw_per_s
            )));
        }

        if self.ramp_down_mw_per_s <= 0.0 {
            return Err(FlexError::InvalidAssetConfiguration(format!(
                "ramp_down_mw_per_s must be positive, got {}",
                self.ramp_down_mw_per_s
            )));
        }

        if self.latency_s < 0.0 {
            return Err(FlexError::InvalidAssetConfiguration(format!(
                "latency_s cannot be negative, got {}",
                self.latency_s
            )));
        }

        if self.min_output_mw > self.output_mw || self.output_mw > self.max_output_mw {
            return Err(FlexError::InvalidAssetConfiguration(format!(
                "output_mw {} outside operating bounds [{}, {}]",
                self.output_mw, self.min_output_mw, self.max_output_mw
            )));
        }

        if let Some(storage) = &self.storage {
            if !storage.charge_percent.is_finite()
                || !(0.0..=100.0).contains(&storage.charge_percent)
            {
                return Err(FlexError::InvalidAssetConfiguration(format!(
                    "charge_percent must be within [0, 100], got {}",
                    storage.charge_percent
                )));
            }

            if !storage.energy_capacity_mws.is_finite() || storage.energy_capacity_mws <= 0.0 {
                return Err(FlexError::InvalidAssetConfiguration(format!(
                    "energy_capacity_mws must be positive, got {}",
                    storage.energy_capacity_mws
                )));
            }
        }

        Ok(())
    }

    /// Additional power deliverable upward before hitting the ceiling (MW)
    pub fn headroom_mw(&self) -> f64 {
        self.max_output_mw - self.output_mw
    }

    /// Additional power deliverable downward before hitting the floor (MW, ≤ 0)
    pub fn footroom_mw(&self) -> f64 {
        self.min_output_mw - self.output_mw
    }
}
