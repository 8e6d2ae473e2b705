//! Cash-flow series and discounting.

use serde::{Deserialize, Serialize};

/// One year of the projected cash-flow series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    pub year: u32,
    pub period_cash_flow: f64,
    pub cumulative_cash_flow: f64,
}

/// Raw cash flows: year 0 carries the negative capital outlay, years
/// 1..=lifetime carry the flat annual profit.
pub fn cash_flows(capital_cost: f64, annual_profit: f64, lifetime_years: u32) -> Vec<f64> {
    std::iter::once(-capital_cost)
        .chain((1..=lifetime_years).map(|_| annual_profit))
        .collect()
}

/// Builds the year-by-year series with running cumulative totals.
///
/// The series always has `lifetime_years + 1` points.
pub fn build_series(capital_cost: f64, annual_profit: f64, lifetime_years: u32) -> Vec<CashFlowPoint> {
    let mut cumulative = 0.0;

    cash_flows(capital_cost, annual_profit, lifetime_years)
        .into_iter()
        .zip(0u32..)
        .map(|(flow, year)| {
            cumulative += flow;
            CashFlowPoint {
                year,
                period_cash_flow: flow,
                cumulative_cash_flow: cumulative,
            }
        })
        .collect()
}

/// Net present value of `flows` at `rate` (a fraction, 0.08 for 8%).
///
/// `flows[t]` is discounted by `(1 + rate)^t`.
pub fn npv(flows: &[f64], rate: f64) -> f64 {
    let base = 1.0 + rate;
    let mut discount = 1.0;
    let mut total = 0.0;

    for flow in flows {
        total += flow / discount;
        discount *= base;
    }

    total
}
