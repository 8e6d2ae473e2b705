//! Financial Module - Project feasibility calculations.
//!
//! Turns a [`ProjectParameters`] record into a [`FinancialResult`]: yearly
//! revenue and costs, the cash-flow series, NPV, an approximate IRR, simple
//! payback and an energy-price sensitivity table.
//!
//! # Design Philosophy
//!
//! Everything here is pure and synchronous. Results are recomputed on every
//! call and never cached; "not computable" outcomes (IRR, payback) are values.

mod calculator;
mod cash_flow;
mod irr;
mod parameters;
mod result;
mod sensitivity;

pub use calculator::{compute_financials, FinancialCalculator, FinancialSettings};
pub use cash_flow::{build_series, cash_flows, npv, CashFlowPoint};
pub use irr::{
    estimate_irr, IrrEstimate, IrrMethod, IrrSettings, IrrUndefinedReason, MAX_SCAN_STEPS,
};
pub use parameters::{ProjectParameters, MAX_PROJECT_LIFETIME_YEARS, OPERATING_DAYS_PER_YEAR};
pub use result::{FinancialResult, PaybackPeriod};
pub use sensitivity::{scenario_label, SensitivityCase, DEFAULT_PRICE_STEPS_PERCENT};
