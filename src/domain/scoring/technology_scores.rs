//! Per-criterion technology scores.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ensure_finite, Criterion, ValidationError};

/// Highest raw score a technology can receive on a criterion.
pub const MAX_CRITERION_SCORE: f64 = 10.0;

/// One value per criterion. Used for raw scores and weighted contributions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CriterionScores {
    pub economic: f64,
    pub environmental: f64,
    pub social: f64,
    pub technical: f64,
    pub regulatory: f64,
}

impl CriterionScores {
    pub fn new(
        economic: f64,
        environmental: f64,
        social: f64,
        technical: f64,
        regulatory: f64,
    ) -> Self {
        Self {
            economic,
            environmental,
            social,
            technical,
            regulatory,
        }
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Economic => self.economic,
            Criterion::Environmental => self.environmental,
            Criterion::Social => self.social,
            Criterion::Technical => self.technical,
            Criterion::Regulatory => self.regulatory,
        }
    }

    /// Builds a value set by evaluating `f` for each criterion.
    pub fn from_fn(mut f: impl FnMut(Criterion) -> f64) -> Self {
        Self {
            economic: f(Criterion::Economic),
            environmental: f(Criterion::Environmental),
            social: f(Criterion::Social),
            technical: f(Criterion::Technical),
            regulatory: f(Criterion::Regulatory),
        }
    }

    pub fn sum(&self) -> f64 {
        Criterion::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Checks every value is a finite raw score in [0, 10].
    pub fn validate(&self) -> Result<(), ValidationError> {
        for criterion in Criterion::ALL {
            let score = ensure_finite(criterion.as_str(), self.get(criterion))?;
            if !(0.0..=MAX_CRITERION_SCORE).contains(&score) {
                return Err(ValidationError::out_of_range(
                    criterion.as_str(),
                    0.0,
                    MAX_CRITERION_SCORE,
                    score,
                ));
            }
        }
        Ok(())
    }
}

/// A candidate technology and its raw criterion scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyScores {
    pub name: String,
    pub scores: CriterionScores,
}

impl TechnologyScores {
    pub fn new(name: impl Into<String>, scores: CriterionScores) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }

    /// Validates the scores, reporting the technology name on failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::invalid_format(
                "name",
                "technology name cannot be empty",
            ));
        }
        self.scores.validate().map_err(|err| match err {
            ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            } => ValidationError::OutOfRange {
                field: format!("{}.{}", self.name, field),
                min,
                max,
                actual,
            },
            ValidationError::NotFinite { field } => ValidationError::NotFinite {
                field: format!("{}.{}", self.name, field),
            },
            other => other,
        })
    }
}
