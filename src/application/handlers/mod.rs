//! Application handlers.
//!
//! Query and command handlers that orchestrate domain calculations.

pub mod financial;
pub mod scenario;
pub mod scoring;

pub use financial::{ComputeFinancialsHandler, ComputeFinancialsQuery, ComputeFinancialsResult};
pub use scenario::{SimulateScenarioHandler, SimulateScenarioQuery, SimulateScenarioResult};
pub use scoring::{
    RankTechnologiesHandler, RankTechnologiesQuery, RankTechnologiesResult,
    RebalanceWeightsCommand, RebalanceWeightsHandler, RebalanceWeightsResult,
};
