//! Scenario simulation handlers.

mod simulate_scenario;

pub use simulate_scenario::{
    SimulateScenarioHandler, SimulateScenarioQuery, SimulateScenarioResult,
};
