use thiserror::Error;

use crate::flexibility::solver::Direction;

/// Core computation errors
///
/// All of these surface to the caller unchanged; the engine never recovers
/// silently or substitutes a default output. Retrying without changing the
/// input is pointless since every computation is deterministic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlexError {
    #[error("invalid time grid: {0}")]
    InvalidTimeGrid(String),

    #[error("invalid asset configuration: {0}")]
    InvalidAssetConfiguration(String),

    #[error("invalid system configuration: {0}")]
    InvalidSystemConfiguration(String),

    #[error("no {0} crossing within the sampled horizon")]
    NoCrossingFound(Direction),
}
