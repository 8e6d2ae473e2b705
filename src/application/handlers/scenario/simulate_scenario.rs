//! SimulateScenarioHandler - Query handler for waste stream what-ifs.

use serde::{Deserialize, Serialize};

use crate::application::handle_json;
use crate::domain::foundation::DomainError;
use crate::domain::scenario::{ScenarioInputs, ScenarioOutcome, ScenarioSimulator};

/// Query to simulate a waste stream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulateScenarioQuery {
    #[serde(default)]
    pub inputs: ScenarioInputs,
    /// Run every technology instead of only `inputs.technology`.
    #[serde(default)]
    pub compare_all: bool,
}

/// Simulated outcomes, one per technology run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateScenarioResult {
    pub outcomes: Vec<ScenarioOutcome>,
}

/// Handler for scenario queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulateScenarioHandler;

impl SimulateScenarioHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        query: SimulateScenarioQuery,
    ) -> Result<SimulateScenarioResult, DomainError> {
        let outcomes = if query.compare_all {
            ScenarioSimulator::simulate_all(&query.inputs)?
        } else {
            vec![ScenarioSimulator::simulate(&query.inputs)?]
        };

        Ok(SimulateScenarioResult { outcomes })
    }

    /// Same as [`handle`](Self::handle), over JSON text.
    pub fn handle_json(&self, input: &str) -> Result<String, DomainError> {
        handle_json(input, |query| self.handle(query))
    }
}
