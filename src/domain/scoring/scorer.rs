//! Weighted Scorer - weighted-sum scoring and ranking of technologies.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CriterionScores, TechnologyScores, WeightVector};
use crate::domain::foundation::ValidationError;

/// A technology's weighted scores and its place in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub technology_name: String,
    /// `raw × weight / 100` for each criterion.
    pub weighted_scores: CriterionScores,
    /// Sum of the weighted scores; at most 10.
    pub total_score: f64,
}

/// The top-ranked technology and how clearly it leads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub technology_name: String,
    pub total_score: f64,
    pub runner_up: Option<String>,
    /// Lead over the runner-up; `None` with a single candidate.
    pub margin: Option<f64>,
    /// True when the runner-up has exactly the same total.
    pub tied: bool,
    pub summary: String,
}

/// Multi-criteria weighted-sum scoring functions.
pub struct WeightedScorer;

impl WeightedScorer {
    /// Scores a single technology.
    pub fn weighted_scores(scores: &CriterionScores, weights: &WeightVector) -> CriterionScores {
        CriterionScores::from_fn(|c| scores.get(c) * weights.fraction(c))
    }

    /// Scores and ranks technologies.
    ///
    /// # Algorithm
    /// For each technology: total = Σ(raw[c] × weight[c] / 100).
    /// Sorted by total descending; the sort is stable so exact ties keep
    /// their input order.
    ///
    /// # Edge Cases
    /// - Empty input: Returns empty Vec
    ///
    /// # Errors
    /// Any raw score outside [0, 10] or not finite.
    pub fn score(
        technologies: &[TechnologyScores],
        weights: &WeightVector,
    ) -> Result<Vec<RankedResult>, ValidationError> {
        let mut ranked = Vec::with_capacity(technologies.len());

        for tech in technologies {
            tech.validate()?;
            let weighted = Self::weighted_scores(&tech.scores, weights);
            ranked.push(RankedResult {
                rank: 0,
                technology_name: tech.name.clone(),
                total_score: weighted.sum(),
                weighted_scores: weighted,
            });
        }

        // Totals are finite; -0.0 and 0.0 compare equal and keep input order.
        ranked.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(Ordering::Equal)
        });
        for (position, result) in ranked.iter_mut().enumerate() {
            result.rank = position + 1;
        }

        debug!(
            technologies = ranked.len(),
            weights = %weights,
            top = ranked.first().map(|r| r.technology_name.as_str()),
            "Ranked technologies"
        );

        Ok(ranked)
    }

    /// Builds a recommendation from an already-ranked list.
    /// Returns None if the list is empty.
    pub fn recommend(ranked: &[RankedResult]) -> Option<Recommendation> {
        let best = ranked.first()?;
        let runner_up = ranked.get(1);
        let tied = runner_up.is_some_and(|r| r.total_score == best.total_score);

        Some(Recommendation {
            technology_name: best.technology_name.clone(),
            total_score: best.total_score,
            runner_up: runner_up.map(|r| r.technology_name.clone()),
            margin: runner_up.map(|r| best.total_score - r.total_score),
            tied,
            summary: format!(
                "{} ranks first with a score of {:.2} out of 10",
                best.technology_name, best.total_score
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::default_catalog;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn gasification_example_totals_7_59() {
        let tech = TechnologyScores::new(
            "Gasification",
            CriterionScores::new(7.5, 8.2, 6.8, 7.8, 7.0),
        );
        let weights = WeightVector::new(20, 30, 15, 20, 15).unwrap();

        let ranked = WeightedScorer::score(&[tech], &weights).unwrap();
        let result = &ranked[0];

        assert!(approx(result.weighted_scores.economic, 1.5));
        assert!(approx(result.weighted_scores.environmental, 2.46));
        assert!(approx(result.weighted_scores.social, 1.02));
        assert!(approx(result.weighted_scores.technical, 1.56));
        assert!(approx(result.weighted_scores.regulatory, 1.05));
        assert!(approx(result.total_score, 7.59));
        assert_eq!(result.rank, 1);
    }

    #[test]
    fn default_catalog_ranking() {
        let ranked = WeightedScorer::score(default_catalog(), &WeightVector::default()).unwrap();
        let names: Vec<_> = ranked.iter().map(|r| r.technology_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Anaerobic Digestion",
                "Gasification",
                "RDF",
                "Pyrolysis",
                "Incineration"
            ]
        );
        assert!(approx(ranked[0].total_score, 8.03));
        assert!(approx(ranked[4].total_score, 6.825));
    }

    #[test]
    fn empty_input_yields_empty_ranking() {
        let ranked = WeightedScorer::score(&[], &WeightVector::default()).unwrap();
        assert!(ranked.is_empty());
        assert!(WeightedScorer::recommend(&ranked).is_none());
    }

    #[test]
    fn exact_ties_keep_input_order() {
        let same = CriterionScores::new(5.0, 5.0, 5.0, 5.0, 5.0);
        let techs = vec![
            TechnologyScores::new("First", same),
            TechnologyScores::new("Better", CriterionScores::new(9.0, 9.0, 9.0, 9.0, 9.0)),
            TechnologyScores::new("Second", same),
        ];

        let ranked = WeightedScorer::score(&techs, &WeightVector::equal()).unwrap();
        let names: Vec<_> = ranked.iter().map(|r| r.technology_name.as_str()).collect();
        assert_eq!(names, vec!["Better", "First", "Second"]);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn perfect_scores_total_ten() {
        let tech = TechnologyScores::new("Ideal", CriterionScores::new(10.0, 10.0, 10.0, 10.0, 10.0));
        let ranked = WeightedScorer::score(&[tech], &WeightVector::default()).unwrap();
        assert!(approx(ranked[0].total_score, 10.0));
    }

    #[test]
    fn invalid_score_is_rejected() {
        let tech = TechnologyScores::new("Broken", CriterionScores::new(-1.0, 5.0, 5.0, 5.0, 5.0));
        assert!(WeightedScorer::score(&[tech], &WeightVector::default()).is_err());
    }

    #[test]
    fn recommendation_reports_margin() {
        let ranked = WeightedScorer::score(default_catalog(), &WeightVector::default()).unwrap();
        let rec = WeightedScorer::recommend(&ranked).unwrap();

        assert_eq!(rec.technology_name, "Anaerobic Digestion");
        assert_eq!(rec.runner_up.as_deref(), Some("Gasification"));
        assert!(approx(rec.margin.unwrap(), 8.03 - 7.59));
        assert!(!rec.tied);
        assert_eq!(
            rec.summary,
            "Anaerobic Digestion ranks first with a score of 8.03 out of 10"
        );
    }

    #[test]
    fn recommendation_flags_ties() {
        let same = CriterionScores::new(6.0, 6.0, 6.0, 6.0, 6.0);
        let techs = vec![
            TechnologyScores::new("A", same),
            TechnologyScores::new("B", same),
        ];
        let ranked = WeightedScorer::score(&techs, &WeightVector::equal()).unwrap();
        let rec = WeightedScorer::recommend(&ranked).unwrap();
        assert_eq!(rec.technology_name, "A");
        assert!(rec.tied);
    }

    #[test]
    fn signed_zero_totals_keep_input_order() {
        let zero = TechnologyScores::new("Zero", CriterionScores::new(0.0, 0.0, 0.0, 0.0, 0.0));
        let negative_zero = TechnologyScores::new(
            "Negative Zero",
            CriterionScores::new(-0.0, -0.0, -0.0, -0.0, -0.0),
        );

        for techs in [
            vec![zero.clone(), negative_zero.clone()],
            vec![negative_zero.clone(), zero.clone()],
        ] {
            let ranked = WeightedScorer::score(&techs, &WeightVector::default()).unwrap();
            let names: Vec<_> = ranked.iter().map(|r| r.technology_name.as_str()).collect();
            let expected: Vec<_> = techs.iter().map(|t| t.name.as_str()).collect();
            assert_eq!(names, expected);
        }
    }

    fn score_strategy() -> impl Strategy<Value = CriterionScores> {
        prop::array::uniform5((0u8..=20).prop_map(|half_points| f64::from(half_points) / 2.0))
            .prop_map(|[e, env, s, t, r]| CriterionScores::new(e, env, s, t, r))
    }

    fn weight_strategy() -> impl Strategy<Value = WeightVector> {
        prop::array::uniform4(0i32..=100).prop_map(|mut cuts| {
            cuts.sort_unstable();
            WeightVector::from_array([
                cuts[0],
                cuts[1] - cuts[0],
                cuts[2] - cuts[1],
                cuts[3] - cuts[2],
                100 - cuts[3],
            ])
            .unwrap()
        })
    }

    proptest! {
        #[test]
        fn ranking_is_non_increasing_and_stable(
            pool in prop::collection::vec(score_strategy(), 1..4),
            picks in prop::collection::vec(any::<prop::sample::Index>(), 0..12),
            weights in weight_strategy()
        ) {
            // Drawing from a small pool makes exact ties common.
            let techs: Vec<_> = picks
                .iter()
                .enumerate()
                .map(|(i, pick)| TechnologyScores::new(format!("{}", i), *pick.get(&pool)))
                .collect();

            let ranked = WeightedScorer::score(&techs, &weights).unwrap();
            prop_assert_eq!(ranked.len(), techs.len());

            for (position, result) in ranked.iter().enumerate() {
                prop_assert_eq!(result.rank, position + 1);
            }
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].total_score >= pair[1].total_score);
                if pair[0].total_score == pair[1].total_score {
                    let first: usize = pair[0].technology_name.parse().unwrap();
                    let second: usize = pair[1].technology_name.parse().unwrap();
                    prop_assert!(first < second, "tie reordered: {} before {}", first, second);
                }
            }
        }
    }
}
