//! RebalanceWeightsHandler - Command handler for a single weight edit.
//!
//! The caller sends the vector it currently displays plus the edit; the
//! handler returns a brand-new vector. Nothing is stored between calls.

use serde::{Deserialize, Serialize};

use crate::application::handle_json;
use crate::domain::foundation::{Criterion, DomainError};
use crate::domain::scoring::{WeightRebalancer, WeightVector};

/// Command to change one criterion's weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebalanceWeightsCommand {
    pub current: WeightVector,
    pub criterion: Criterion,
    pub new_value: i32,
}

/// Result of a weight edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebalanceWeightsResult {
    pub weights: WeightVector,
    /// Every weight lies within the configured per-criterion bounds.
    pub within_bounds: bool,
}

/// Handler for weight edits.
#[derive(Debug, Clone, Default)]
pub struct RebalanceWeightsHandler {
    rebalancer: WeightRebalancer,
}

impl RebalanceWeightsHandler {
    pub fn new(rebalancer: WeightRebalancer) -> Self {
        Self { rebalancer }
    }

    pub fn handle(
        &self,
        cmd: RebalanceWeightsCommand,
    ) -> Result<RebalanceWeightsResult, DomainError> {
        let weights = self
            .rebalancer
            .rebalance(&cmd.current, cmd.criterion, cmd.new_value)?;

        let settings = self.rebalancer.settings();
        Ok(RebalanceWeightsResult {
            within_bounds: weights.is_within(settings.min_weight, settings.max_weight),
            weights,
        })
    }

    /// Same as [`handle`](Self::handle), over JSON text.
    pub fn handle_json(&self, input: &str) -> Result<String, DomainError> {
        handle_json(input, |cmd| self.handle(cmd))
    }
}
