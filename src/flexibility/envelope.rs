use serde::Serialize;

use super::asset::Asset;
use super::time_grid::TimeGrid;
use crate::error::FlexError;

/// Up/down ramping capability of one asset (or an aggregated fleet) over the
/// time grid, expressed as deltas from the current operating point
///
/// `up[i] ≥ 0` and `down[i] ≤ 0` pointwise. For a real asset
/// `base_output_mw + up[i]` never exceeds the ceiling and
/// `base_output_mw + down[i]` never drops below the floor; an absent asset
/// contributes the identically-zero envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlexibilityEnvelope {
    /// Additional power deliverable upward (MW, ≥ 0 pointwise)
    pub up: Vec<f64>,

    /// Additional power deliverable downward (MW, ≤ 0 pointwise)
    pub down: Vec<f64>,

    /// Current output (MW) translating deltas into absolute power levels
    pub base_output_mw: f64,
}

impl FlexibilityEnvelope {
    /// The zero envelope contributed by an absent/disabled asset
    pub fn zero(len: usize) -> Self {
        Self {
            up: vec![0.0; len],
            down: vec![0.0; len],
            base_output_mw: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.up.len()
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty()
    }
}

/// Compute an asset's ramping envelope over the time grid
///
/// `None` stands for a disabled fleet slot and yields the zero envelope so
/// callers can aggregate uniformly. Upward capability is a fixed dead time
/// followed by a linear ramp at `ramp_up_mw_per_s`, clamped to `≥ 0` before
/// the latency elapses and to the headroom above; downward is the mirror
/// against `ramp_down_mw_per_s` and the footroom.
pub fn compute_envelope(
    asset: Option<&Asset>,
    time: &TimeGrid,
) -> Result<FlexibilityEnvelope, FlexError> {
    let Some(asset) = asset else {
        return Ok(FlexibilityEnvelope::zero(time.len()));
    };

    asset.validate()?;

    let headroom = asset.headroom_mw();
    let footroom = asset.footroom_mw();

    let mut up: Vec<f64> = time
        .iter()
        .map(|t| {
            let ramped = asset.ramp_up_mw_per_s * (t - asset.latency_s);
            ramped.max(0.0).min(headroom)
        })
        .collect();

    let mut down: Vec<f64> = time
        .iter()
        .map(|t| {
            let ramped = -asset.ramp_down_mw_per_s * (t - asset.latency_s);
            ramped.min(0.0).max(footroom)
        })
        .collect();

    if let Some(storage) = &asset.storage {
        let energy_to_empty = storage.charge_percent / 100.0 * storage.energy_capacity_mws;
        let energy_to_full = storage.energy_capacity_mws - energy_to_empty;
        let dt = time.dt();

        zero_where_energy_exceeded(&mut up, dt, energy_to_empty);
        zero_where_energy_exceeded(&mut down, dt, energy_to_full);
    }

    Ok(FlexibilityEnvelope {
        up,
        down,
        base_output_mw: asset.output_mw,
    })
}

/// Pointwise energy-budget correction for storage assets
///
/// Zeroes capability at every index where the running sum of the *pre-zeroing*
/// magnitudes, integrated with uniform step `dt`, exceeds the budget. The sum
/// keeps accumulating the pre-zeroing values, so a later sample is judged
/// against the same running total whether or not earlier samples were zeroed.
/// This is a simplifying approximation of a depleting state of charge, kept
/// deliberately: it may under-constrain later samples.
fn zero_where_energy_exceeded(values: &mut [f64], dt: f64, budget_mws: f64) {
    let mut cumulative = 0.0;
    for value in values.iter_mut() {
        cumulative += value.abs();
        if cumulative * dt > budget_mws {
            *value = 0.0;
        }
    }
}

/// Elementwise sum of asset envelopes into one system-wide envelope
///
/// Commutative and associative; the empty input yields the zero envelope. No
/// clamping is reapplied here: the aggregate may legitimately exceed any
/// single asset's bound. No single base output is meaningful for the
/// aggregate, so it is reported as 0; callers needing absolute levels add
/// each asset's own base before summing.
pub fn aggregate(envelopes: &[FlexibilityEnvelope]) -> FlexibilityEnvelope {
    let len = envelopes.first().map_or(0, FlexibilityEnvelope::len);
    let mut up = vec![0.0; len];
    let mut down = vec![0.0; len];

    for envelope in envelopes {
        debug_assert_eq!(envelope.len(), len, "envelope length mismatch");
        for (acc, value) in up.iter_mut().zip(&envelope.up) {
            *acc += value;
        }
        for (acc, value) in down.iter_mut().zip(&envelope.down) {
            *acc += value;
        }
    }

    FlexibilityEnvelope {
        up,
        down,
        base_output_mw: 0.0,
    }
}
