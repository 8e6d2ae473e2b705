//! Scenario Module - What-if simulation of a municipal waste stream.

mod simulator;

pub use simulator::{ScenarioInputs, ScenarioOutcome, ScenarioSimulator};
