//! ComputeFinancialsHandler - Query handler for project feasibility.
//!
//! Runs the financial model for one parameter set and reports whether the
//! project repays its capital within its lifetime.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::handle_json;
use crate::domain::financial::{FinancialCalculator, FinancialResult, ProjectParameters};
use crate::domain::foundation::DomainError;

/// Query to compute the financials of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeFinancialsQuery {
    pub parameters: ProjectParameters,
}

/// Result of a financial computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeFinancialsResult {
    pub financials: FinancialResult,
    /// Payback is finite and shorter than the project lifetime.
    pub feasible: bool,
}

/// Handler for financial feasibility queries.
#[derive(Debug, Clone, Default)]
pub struct ComputeFinancialsHandler {
    calculator: FinancialCalculator,
}

impl ComputeFinancialsHandler {
    pub fn new(calculator: FinancialCalculator) -> Self {
        Self { calculator }
    }

    pub fn handle(
        &self,
        query: ComputeFinancialsQuery,
    ) -> Result<ComputeFinancialsResult, DomainError> {
        let financials = self.calculator.compute(&query.parameters)?;
        let feasible = financials.is_feasible();

        debug!(
            technology = %query.parameters.technology,
            feasible,
            "Handled financial feasibility query"
        );

        Ok(ComputeFinancialsResult {
            financials,
            feasible,
        })
    }

    /// Same as [`handle`](Self::handle), over JSON text.
    pub fn handle_json(&self, input: &str) -> Result<String, DomainError> {
        handle_json(input, |query| self.handle(query))
    }
}
