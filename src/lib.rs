//! Power-system flexibility and disturbance tolerance engine
//!
//! Models the short-term real-power flexibility of a generation/storage
//! fleet, derives the grid's disturbance tolerance from rotational kinetic
//! energy and frequency limits, and locates where the aggregated flexibility
//! envelope crosses the tolerance curve: the maximum survivable disturbance
//! and the time it occurs.

pub mod api;
pub mod config;
pub mod error;
pub mod fleet;
pub mod flexibility;
pub mod telemetry;

pub use error::FlexError;
pub use fleet::{evaluate, EvaluationReport, Fleet};
pub use flexibility::{
    aggregate, compute_disturbance_curve, compute_envelope, solve, Asset, AssetKind,
    DisturbanceCurve, DisturbanceResult, FlexibilityEnvelope, GridSystem, StorageParams, TimeGrid,
};
