//! WTE Decision Engine - Waste-to-Energy Feasibility and Technology Ranking
//!
//! This crate implements the calculation core behind a waste-to-energy
//! planning tool: project financials (NPV, IRR, payback, price sensitivity),
//! multi-criteria technology scoring with proportional weight rebalancing,
//! and a what-if simulator for municipal waste streams.

pub mod application;
pub mod config;
pub mod domain;
