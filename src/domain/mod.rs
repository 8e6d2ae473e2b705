//! Domain layer containing the calculation engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (criteria, technology kinds, errors)
//! - `financial` - Cash flows, NPV, IRR, payback and sensitivity
//! - `scoring` - Weight vectors, rebalancing and weighted ranking
//! - `scenario` - Waste stream what-if simulation

pub mod financial;
pub mod foundation;
pub mod scenario;
pub mod scoring;
