//! Application layer - Queries, Commands, and Handlers.
//!
//! This layer is what presentation collaborators call. Each handler validates
//! its request, runs the pure domain calculation, and returns a serde record.
//! No handler holds state between calls.

pub mod handlers;
mod json;

pub use handlers::{
    // Financial
    ComputeFinancialsHandler, ComputeFinancialsQuery, ComputeFinancialsResult,
    // Scoring
    RankTechnologiesHandler, RankTechnologiesQuery, RankTechnologiesResult,
    RebalanceWeightsCommand, RebalanceWeightsHandler, RebalanceWeightsResult,
    // Scenario
    SimulateScenarioHandler, SimulateScenarioQuery, SimulateScenarioResult,
};
pub use json::handle_json;
