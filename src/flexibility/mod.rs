/// Flexibility & Disturbance Engine
///
/// This module contains the pure compute core: per-asset ramping envelopes
/// over a shared time grid, the grid's kinetic-energy disturbance tolerance
/// curve, elementwise aggregation of asset envelopes, and the solver that
/// locates where the aggregated envelope crosses the tolerance curve.
///
/// Every function here is stateless and referentially transparent: identical
/// inputs always produce identical outputs, and each call completes in time
/// proportional to the time grid length.

pub mod asset;
pub mod disturbance;
pub mod envelope;
pub mod solver;
pub mod time_grid;

pub use asset::{Asset, AssetKind, StorageParams};
pub use disturbance::{compute_disturbance_curve, DisturbanceCurve, GridSystem};
pub use envelope::{aggregate, compute_envelope, FlexibilityEnvelope};
pub use solver::{solve, Direction, DisturbanceResult};
pub use time_grid::TimeGrid;
