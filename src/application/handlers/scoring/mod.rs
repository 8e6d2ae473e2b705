//! Multi-criteria scoring handlers.
//!
//! Weight edits and technology ranking are separate calls: the UI rebalances
//! on every slider change, then ranks with the returned vector.

mod rank_technologies;
mod rebalance_weights;

pub use rank_technologies::{
    RankTechnologiesHandler, RankTechnologiesQuery, RankTechnologiesResult,
};
pub use rebalance_weights::{
    RebalanceWeightsCommand, RebalanceWeightsHandler, RebalanceWeightsResult,
};
