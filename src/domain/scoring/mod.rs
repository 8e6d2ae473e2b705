//! Scoring Module - Multi-criteria weighted scoring of technologies.
//!
//! # Components
//!
//! - `WeightVector` - Five integer weights that always sum to 100
//! - `WeightRebalancer` - Proportional redistribution after a single-weight edit
//! - `WeightedScorer` - Weighted totals, ranking and recommendation
//! - `default_catalog` - Reference technologies and their expert scores
//!
//! All functions are pure. Rebalancing returns a new vector rather than
//! mutating the one passed in.

mod catalog;
mod rebalancer;
mod scorer;
mod technology_scores;
mod weights;

pub use catalog::default_catalog;
pub use rebalancer::{
    rebalance, RebalancePolicy, ScoringSettings, WeightRebalancer, DEFAULT_MAX_WEIGHT,
    DEFAULT_MIN_WEIGHT,
};
pub use scorer::{RankedResult, Recommendation, WeightedScorer};
pub use technology_scores::{CriterionScores, TechnologyScores, MAX_CRITERION_SCORE};
pub use weights::{WeightVector, WEIGHT_TOTAL};
