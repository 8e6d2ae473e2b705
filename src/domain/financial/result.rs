//! Financial result types.

use serde::{Deserialize, Serialize};

use super::{CashFlowPoint, IrrEstimate, SensitivityCase};
use crate::domain::foundation::TechnologyKind;

/// Years needed for cumulative profit to repay the capital outlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaybackPeriod {
    Years { years: f64 },
    /// Annual profit is zero or negative; the outlay is never repaid.
    Never,
}

impl PaybackPeriod {
    /// Simple payback: `capital_cost / annual_profit`.
    ///
    /// A negative capital cost is an up-front inflow, so there is nothing to
    /// repay and the payback is zero years.
    pub fn from_flat_profit(capital_cost: f64, annual_profit: f64) -> Self {
        if annual_profit <= 0.0 {
            PaybackPeriod::Never
        } else {
            PaybackPeriod::Years {
                years: (capital_cost / annual_profit).max(0.0),
            }
        }
    }

    pub fn years(&self) -> Option<f64> {
        match self {
            PaybackPeriod::Years { years } => Some(*years),
            PaybackPeriod::Never => None,
        }
    }

    /// Returns the payback as a real number, infinite when never reached.
    pub fn as_f64(&self) -> f64 {
        self.years().unwrap_or(f64::INFINITY)
    }
}

/// Everything derived from one [`ProjectParameters`](super::ProjectParameters) record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialResult {
    pub technology: TechnologyKind,
    pub lifetime_years: u32,
    pub annual_revenue: f64,
    /// Fixed O&M plus per-ton processing cost.
    pub annual_operating_cost: f64,
    pub annual_profit: f64,
    pub npv: f64,
    pub irr: IrrEstimate,
    pub payback_period: PaybackPeriod,
    pub cash_flow_series: Vec<CashFlowPoint>,
    pub generated_energy_kwh: f64,
    /// Avoided emissions per year (tCO2e).
    pub estimated_emission_reduction: f64,
    /// Operating cost per delivered ton; `None` when nothing is processed.
    pub operating_cost_per_ton: Option<f64>,
    pub sensitivity: Vec<SensitivityCase>,
}

impl FinancialResult {
    pub fn generated_energy_mwh(&self) -> f64 {
        self.generated_energy_kwh / 1000.0
    }

    /// True when the outlay is repaid within the project lifetime.
    pub fn is_feasible(&self) -> bool {
        match self.payback_period {
            PaybackPeriod::Years { years } => {
                years.is_finite() && years >= 0.0 && years < f64::from(self.lifetime_years)
            }
            PaybackPeriod::Never => false,
        }
    }

    pub fn npv_positive(&self) -> bool {
        self.npv > 0.0
    }
}
