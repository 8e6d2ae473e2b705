//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WTE_ENGINE` prefix and nested values use double underscores as separators.
//!
//! Every field has a default, so an empty environment yields the reference
//! behavior (1% IRR scan, ±10/20% price sensitivity, permissive rebalancing).
//! The calculation core never reads the environment itself; the host
//! application loads an [`EngineConfig`] and builds calculators from it.
//!
//! # Example
//!
//! ```no_run
//! use wte_decision_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init().expect("Failed to install subscriber");
//!
//! let calculator = config.financial_calculator().expect("Invalid financial settings");
//! ```

mod error;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;
use std::path::Path;

use crate::domain::financial::{FinancialCalculator, FinancialSettings};
use crate::domain::scoring::{ScoringSettings, WeightRebalancer};

const ENV_PREFIX: &str = "WTE_ENGINE";

/// Root engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// IRR scan and sensitivity settings
    #[serde(default)]
    pub financial: FinancialSettings,

    /// Weight bounds and rebalance policy
    #[serde(default)]
    pub scoring: ScoringSettings,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WTE_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `WTE_ENGINE__SCORING__REBALANCE_POLICY=reclamp` -> `scoring.rebalance_policy`
    /// - `WTE_ENGINE__FINANCIAL__IRR__METHOD=bisection` -> `financial.irr.method`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top
    ///
    /// The file format is inferred from the extension (e.g. `engine.toml`).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.financial
            .validate()
            .map_err(ValidationError::section("financial"))?;
        self.scoring
            .validate()
            .map_err(ValidationError::section("scoring"))?;
        self.logging.validate()?;
        Ok(())
    }

    /// Build a financial calculator from these settings
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSection` for the `financial` section.
    pub fn financial_calculator(&self) -> Result<FinancialCalculator, ValidationError> {
        FinancialCalculator::new(self.financial.clone())
            .map_err(ValidationError::section("financial"))
    }

    /// Build a weight rebalancer from these settings
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSection` for the `scoring` section.
    pub fn weight_rebalancer(&self) -> Result<WeightRebalancer, ValidationError> {
        WeightRebalancer::new(self.scoring.clone()).map_err(ValidationError::section("scoring"))
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}
