//! Criterion enum representing the five fixed MCDA criteria.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The five decision criteria, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Economic,
    Environmental,
    Social,
    Technical,
    Regulatory,
}

impl Criterion {
    /// Number of criteria.
    pub const COUNT: usize = 5;

    /// All criteria in canonical order.
    pub const ALL: [Criterion; Criterion::COUNT] = [
        Criterion::Economic,
        Criterion::Environmental,
        Criterion::Social,
        Criterion::Technical,
        Criterion::Regulatory,
    ];

    /// Returns the 0-based index of this criterion in the canonical order.
    pub fn index(&self) -> usize {
        match self {
            Criterion::Economic => 0,
            Criterion::Environmental => 1,
            Criterion::Social => 2,
            Criterion::Technical => 3,
            Criterion::Regulatory => 4,
        }
    }

    /// Returns the machine name used in structured records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Economic => "economic",
            Criterion::Environmental => "environmental",
            Criterion::Social => "social",
            Criterion::Technical => "technical",
            Criterion::Regulatory => "regulatory",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Economic => "Economic",
            Criterion::Environmental => "Environmental",
            Criterion::Social => "Social",
            Criterion::Technical => "Technical",
            Criterion::Regulatory => "Regulatory",
        }
    }

    /// Returns a short description of what the criterion covers.
    pub fn description(&self) -> &'static str {
        match self {
            Criterion::Economic => "Capital cost, ROI, O&M costs",
            Criterion::Environmental => "Emissions, resource recovery",
            Criterion::Social => "Public acceptance, job creation",
            Criterion::Technical => "Reliability, maturity, scalability",
            Criterion::Regulatory => "Permitting, policy alignment",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("criterion", format!("unknown criterion '{}'", s))
            })
    }
}
