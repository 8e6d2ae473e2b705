//! Financial feasibility handlers.

mod compute_financials;

pub use compute_financials::{
    ComputeFinancialsHandler, ComputeFinancialsQuery, ComputeFinancialsResult,
};
