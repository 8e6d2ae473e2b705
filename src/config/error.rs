//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::ValidationError as SettingsError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid {section} settings: {source}")]
    InvalidSection {
        section: &'static str,
        #[source]
        source: SettingsError,
    },

    #[error("Log filter cannot be empty")]
    EmptyLogFilter,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}

impl ValidationError {
    pub(crate) fn section(section: &'static str) -> impl FnOnce(SettingsError) -> Self {
        move |source| ValidationError::InvalidSection { section, source }
    }
}
