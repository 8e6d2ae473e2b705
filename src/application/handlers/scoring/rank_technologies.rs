//! RankTechnologiesHandler - Query handler for the weighted ranking.
//!
//! Scores the supplied technologies (or the default catalog when none are
//! given) against a weight vector and picks a recommendation.

use serde::{Deserialize, Serialize};

use crate::application::handle_json;
use crate::domain::foundation::DomainError;
use crate::domain::scoring::{
    default_catalog, RankedResult, Recommendation, TechnologyScores, WeightVector, WeightedScorer,
};

/// Query to rank technologies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankTechnologiesQuery {
    /// Candidates to rank; the default catalog when absent.
    #[serde(default)]
    pub technologies: Option<Vec<TechnologyScores>>,
    pub weights: WeightVector,
}

/// Ranked technologies, best first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankTechnologiesResult {
    pub ranking: Vec<RankedResult>,
    pub recommendation: Option<Recommendation>,
}

/// Handler for ranking queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankTechnologiesHandler;

impl RankTechnologiesHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        query: RankTechnologiesQuery,
    ) -> Result<RankTechnologiesResult, DomainError> {
        let technologies: &[TechnologyScores] = match &query.technologies {
            Some(list) => list,
            None => default_catalog(),
        };

        let ranking = WeightedScorer::score(technologies, &query.weights)?;
        let recommendation = WeightedScorer::recommend(&ranking);

        Ok(RankTechnologiesResult {
            ranking,
            recommendation,
        })
    }

    /// Same as [`handle`](Self::handle), over JSON text.
    pub fn handle_json(&self, input: &str) -> Result<String, DomainError> {
        handle_json(input, |query| self.handle(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::CriterionScores;

    #[test]
    fn falls_back_to_default_catalog() {
        let result = RankTechnologiesHandler::new()
            .handle(RankTechnologiesQuery {
                technologies: None,
                weights: WeightVector::default(),
            })
            .unwrap();

        assert_eq!(result.ranking.len(), 5);
        assert_eq!(
            result.recommendation.unwrap().technology_name,
            "Anaerobic Digestion"
        );
    }

    #[test]
    fn economic_weighting_favours_incineration() {
        let weights = WeightVector::new(50, 5, 5, 35, 5).unwrap();
        let result = RankTechnologiesHandler::new()
            .handle(RankTechnologiesQuery {
                technologies: None,
                weights,
            })
            .unwrap();

        assert_eq!(result.ranking[0].technology_name, "Incineration");
    }

    #[test]
    fn ranking_is_non_increasing() {
        let result = RankTechnologiesHandler::new()
            .handle(RankTechnologiesQuery {
                technologies: None,
                weights: WeightVector::equal(),
            })
            .unwrap();

        assert!(result
            .ranking
            .windows(2)
            .all(|w| w[0].total_score >= w[1].total_score));
    }

    #[test]
    fn empty_list_has_no_recommendation() {
        let result = RankTechnologiesHandler::new()
            .handle(RankTechnologiesQuery {
                technologies: Some(Vec::new()),
                weights: WeightVector::default(),
            })
            .unwrap();

        assert!(result.ranking.is_empty());
        assert!(result.recommendation.is_none());
    }

    #[test]
    fn custom_technologies_are_validated() {
        let err = RankTechnologiesHandler::new()
            .handle(RankTechnologiesQuery {
                technologies: Some(vec![TechnologyScores::new(
                    "Bad",
                    CriterionScores::new(11.0, 5.0, 5.0, 5.0, 5.0),
                )]),
                weights: WeightVector::default(),
            })
            .unwrap_err();

        assert_eq!(err.details.get("field"), Some(&"Bad.economic".to_string()));
    }
}
