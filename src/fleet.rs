use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FlexError;
use crate::flexibility::{
    aggregate, compute_disturbance_curve, compute_envelope, solve, Asset, AssetKind,
    DisturbanceCurve, DisturbanceResult, FlexibilityEnvelope, GridSystem, TimeGrid,
};

/// The five optional generation/storage slots of the modeled system
///
/// A `None` slot is a disabled asset type; it still participates in
/// aggregation through the zero envelope, so enabling or disabling a slot
/// never changes the shape of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_fired: Option<Asset>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydro: Option<Asset>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar: Option<Asset>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<Asset>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery: Option<Asset>,
}

impl Fleet {
    /// All slots in fixed order, enabled or not
    pub fn slots(&self) -> [(AssetKind, Option<&Asset>); 5] {
        [
            (AssetKind::GasFired, self.gas_fired.as_ref()),
            (AssetKind::Hydro, self.hydro.as_ref()),
            (AssetKind::Solar, self.solar.as_ref()),
            (AssetKind::Wind, self.wind.as_ref()),
            (AssetKind::Battery, self.battery.as_ref()),
        ]
    }

    pub fn enabled_count(&self) -> usize {
        self.slots().iter().filter(|(_, a)| a.is_some()).count()
    }
}

/// One enabled asset's envelope within a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetFlexibility {
    pub kind: AssetKind,
    pub envelope: FlexibilityEnvelope,
}

/// Everything a presentation layer needs to render one evaluation
///
/// Plain numeric arrays/records only; no rendering or layout concerns. The
/// report is serializable as-is and carries the time axis so consumers never
/// need a side channel for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub time: TimeGrid,
    pub system: GridSystem,

    /// Envelopes of the enabled assets, in fleet slot order
    pub assets: Vec<AssetFlexibility>,

    /// Elementwise sum of all slot envelopes (disabled slots contribute zero)
    pub system_envelope: FlexibilityEnvelope,

    pub disturbance_curve: DisturbanceCurve,
    pub result: DisturbanceResult,
}

/// Run the full pipeline: per-asset envelopes, aggregation, tolerance curve,
/// crossing search
pub fn evaluate(
    fleet: &Fleet,
    system: &GridSystem,
    time: &TimeGrid,
) -> Result<EvaluationReport, FlexError> {
    let mut assets = Vec::with_capacity(fleet.enabled_count());
    let mut envelopes = Vec::with_capacity(5);

    for (kind, asset) in fleet.slots() {
        let envelope = compute_envelope(asset, time)?;
        if asset.is_some() {
            assets.push(AssetFlexibility {
                kind,
                envelope: envelope.clone(),
            });
        }
        envelopes.push(envelope);
    }

    let system_envelope = aggregate(&envelopes);
    let disturbance_curve = compute_disturbance_curve(system, time)?;
    let result = solve(&system_envelope, &disturbance_curve, time)?;

    debug!(
        enabled_assets = assets.len(),
        max_disturbance_mw = result.max_disturbance_mw,
        min_disturbance_mw = result.min_disturbance_mw,
        "fleet evaluation complete"
    );

    Ok(EvaluationReport {
        time: time.clone(),
        system: system.clone(),
        assets,
        system_envelope,
        disturbance_curve,
        result,
    })
}
