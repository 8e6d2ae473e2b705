//! Financial Calculator - turns project parameters into cash flows and metrics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cash_flow::{build_series, cash_flows, npv};
use super::irr::{estimate_irr, IrrSettings};
use super::sensitivity::{perturbed_price, scenario_label, DEFAULT_PRICE_STEPS_PERCENT};
use super::{FinancialResult, PaybackPeriod, ProjectParameters, SensitivityCase};
use crate::domain::foundation::{ensure_finite, ValidationError};

/// Tunables for the financial model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialSettings {
    pub irr: IrrSettings,
    /// Energy price perturbations for the sensitivity table, in percent.
    pub sensitivity_steps_percent: Vec<f64>,
}

impl Default for FinancialSettings {
    fn default() -> Self {
        Self {
            irr: IrrSettings::default(),
            sensitivity_steps_percent: DEFAULT_PRICE_STEPS_PERCENT.to_vec(),
        }
    }
}

impl FinancialSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.irr.validate()?;
        for step in &self.sensitivity_steps_percent {
            ensure_finite("sensitivity_steps_percent", *step)?;
            if *step <= -100.0 {
                return Err(ValidationError::out_of_range(
                    "sensitivity_steps_percent",
                    -100.0,
                    f64::MAX,
                    *step,
                ));
            }
        }
        Ok(())
    }
}

/// Flat yearly figures under the constant-profit assumption.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AnnualFigures {
    generated_energy_kwh: f64,
    revenue: f64,
    operating_cost: f64,
    profit: f64,
    emission_reduction: f64,
}

impl AnnualFigures {
    fn derive(params: &ProjectParameters, energy_price_per_mwh: f64) -> Self {
        let profile = params.technology.profile();
        let tonnage = params.annual_tonnage();

        let generated_energy_kwh = tonnage * profile.energy_per_ton_kwh();
        let revenue = generated_energy_kwh / 1000.0 * energy_price_per_mwh;
        let operating_cost =
            params.annual_operating_cost + tonnage * profile.processing_cost_per_ton;

        Self {
            generated_energy_kwh,
            revenue,
            operating_cost,
            profit: revenue - operating_cost,
            emission_reduction: generated_energy_kwh * profile.carbon_factor,
        }
    }
}

/// Pure, deterministic feasibility calculator.
#[derive(Debug, Clone, Default)]
pub struct FinancialCalculator {
    settings: FinancialSettings,
}

impl FinancialCalculator {
    /// # Errors
    /// Settings that [`FinancialSettings::validate`] rejects.
    pub fn new(settings: FinancialSettings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &FinancialSettings {
        &self.settings
    }

    /// Computes revenue, costs, cash flows, NPV, IRR, payback and sensitivity.
    ///
    /// # Edge Cases
    /// - Zero capacity: zero revenue; profit is minus the fixed O&M
    /// - Zero lifetime: the series holds only the year-0 outlay
    /// - Profit ≤ 0: IRR undefined, payback never reached
    ///
    /// # Errors
    /// Returns `ValidationError` only for malformed input (see
    /// [`ProjectParameters::validate`]).
    pub fn compute(&self, params: &ProjectParameters) -> Result<FinancialResult, ValidationError> {
        params.validate()?;

        let annual = AnnualFigures::derive(params, params.energy_price_per_mwh);
        let flows = cash_flows(params.capital_cost, annual.profit, params.lifetime_years);
        let npv_value = npv(&flows, params.discount_rate_fraction());
        let irr = estimate_irr(&flows, annual.profit, &self.settings.irr);
        let payback_period = PaybackPeriod::from_flat_profit(params.capital_cost, annual.profit);

        let tonnage = params.annual_tonnage();
        let operating_cost_per_ton = if tonnage > 0.0 {
            Some(annual.operating_cost / tonnage)
        } else {
            None
        };

        debug!(
            technology = %params.technology,
            annual_profit = annual.profit,
            npv = npv_value,
            irr = ?irr.rate_percent(),
            payback_years = ?payback_period.years(),
            "Computed project financials"
        );

        Ok(FinancialResult {
            technology: params.technology,
            lifetime_years: params.lifetime_years,
            annual_revenue: annual.revenue,
            annual_operating_cost: annual.operating_cost,
            annual_profit: annual.profit,
            npv: npv_value,
            irr,
            payback_period,
            cash_flow_series: build_series(
                params.capital_cost,
                annual.profit,
                params.lifetime_years,
            ),
            generated_energy_kwh: annual.generated_energy_kwh,
            estimated_emission_reduction: annual.emission_reduction,
            operating_cost_per_ton,
            sensitivity: self.sensitivity(params),
        })
    }

    /// Recomputes NPV for each configured energy price perturbation.
    pub fn sensitivity(&self, params: &ProjectParameters) -> Vec<SensitivityCase> {
        let rate = params.discount_rate_fraction();

        self.settings
            .sensitivity_steps_percent
            .iter()
            .map(|&step| {
                let price = perturbed_price(params.energy_price_per_mwh, step);
                let annual = AnnualFigures::derive(params, price);
                let flows = cash_flows(params.capital_cost, annual.profit, params.lifetime_years);

                SensitivityCase {
                    label: scenario_label(step),
                    price_change_percent: step,
                    energy_price_per_mwh: price,
                    npv: npv(&flows, rate),
                }
            })
            .collect()
    }
}

/// Computes financials with the default settings.
pub fn compute_financials(params: &ProjectParameters) -> Result<FinancialResult, ValidationError> {
    FinancialCalculator::default().compute(params)
}
