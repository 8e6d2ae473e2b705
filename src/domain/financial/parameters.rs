//! Project parameters - the input record of the financial model.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ensure_finite, TechnologyKind, ValidationError};

/// Longest project lifetime the model will project, in years.
pub const MAX_PROJECT_LIFETIME_YEARS: u32 = 100;

/// Days of plant operation per year.
pub const OPERATING_DAYS_PER_YEAR: f64 = 365.0;

/// Parameters for a single feasibility calculation.
///
/// Immutable per call. Unusual but finite business values (negative capital,
/// negative prices, zero capacity) are accepted as-is; only malformed numbers
/// are rejected by [`ProjectParameters::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectParameters {
    pub technology: TechnologyKind,
    /// Feedstock processed per day (tons/day).
    pub capacity_tons_per_day: f64,
    /// Up-front capital outlay, booked in year 0.
    pub capital_cost: f64,
    /// Fixed operating and maintenance cost per year.
    pub annual_operating_cost: f64,
    /// Energy sale price (currency/MWh).
    pub energy_price_per_mwh: f64,
    /// Discount rate as a percentage (8.0 means 8%).
    pub discount_rate_percent: f64,
    pub lifetime_years: u32,
}

impl ProjectParameters {
    /// Creates the reference case for a technology: 200 t/day, 25M capital,
    /// 1.8M fixed O&M, 120/MWh, 8% discount rate, 20 years.
    pub fn reference_case(technology: TechnologyKind) -> Self {
        Self {
            technology,
            capacity_tons_per_day: 200.0,
            capital_cost: 25_000_000.0,
            annual_operating_cost: 1_800_000.0,
            energy_price_per_mwh: 120.0,
            discount_rate_percent: 8.0,
            lifetime_years: 20,
        }
    }

    pub fn with_capacity(mut self, tons_per_day: f64) -> Self {
        self.capacity_tons_per_day = tons_per_day;
        self
    }

    pub fn with_capital_cost(mut self, capital_cost: f64) -> Self {
        self.capital_cost = capital_cost;
        self
    }

    pub fn with_operating_cost(mut self, annual_operating_cost: f64) -> Self {
        self.annual_operating_cost = annual_operating_cost;
        self
    }

    pub fn with_energy_price(mut self, price_per_mwh: f64) -> Self {
        self.energy_price_per_mwh = price_per_mwh;
        self
    }

    pub fn with_discount_rate(mut self, percent: f64) -> Self {
        self.discount_rate_percent = percent;
        self
    }

    pub fn with_lifetime(mut self, years: u32) -> Self {
        self.lifetime_years = years;
        self
    }

    /// Returns the discount rate as a fraction (0.08 for 8%).
    pub fn discount_rate_fraction(&self) -> f64 {
        self.discount_rate_percent / 100.0
    }

    /// Tons of feedstock processed per year.
    pub fn annual_tonnage(&self) -> f64 {
        self.capacity_tons_per_day * OPERATING_DAYS_PER_YEAR
    }

    /// Rejects malformed numeric input.
    ///
    /// # Errors
    /// - Any non-finite field
    /// - Discount rate at or below -100% (discount factor undefined)
    /// - Lifetime above [`MAX_PROJECT_LIFETIME_YEARS`]
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_finite("capacity_tons_per_day", self.capacity_tons_per_day)?;
        ensure_finite("capital_cost", self.capital_cost)?;
        ensure_finite("annual_operating_cost", self.annual_operating_cost)?;
        ensure_finite("energy_price_per_mwh", self.energy_price_per_mwh)?;
        ensure_finite("discount_rate_percent", self.discount_rate_percent)?;

        if self.discount_rate_percent <= -100.0 {
            return Err(ValidationError::out_of_range(
                "discount_rate_percent",
                -100.0,
                f64::MAX,
                self.discount_rate_percent,
            ));
        }

        if self.lifetime_years > MAX_PROJECT_LIFETIME_YEARS {
            return Err(ValidationError::out_of_range(
                "lifetime_years",
                0,
                MAX_PROJECT_LIFETIME_YEARS,
                self.lifetime_years,
            ));
        }

        Ok(())
    }
}

impl Default for ProjectParameters {
    fn default() -> Self {
        Self::reference_case(TechnologyKind::Gasification)
    }
}
