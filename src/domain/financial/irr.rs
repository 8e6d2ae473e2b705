//! Internal rate of return estimation.
//!
//! The default method scans the discount rate upward in fixed steps and
//! reports the last sampled rate whose NPV was still positive. Precision is
//! therefore limited to the step size (1 percentage point by default), and the
//! estimate always sits at or just below the true root. The bisection method
//! refines the same bracket; both methods agree on when the IRR is undefined.

use serde::{Deserialize, Serialize};

use super::cash_flow::npv;
use crate::domain::foundation::{ensure_finite, ValidationError};

const BISECTION_TOLERANCE: f64 = 1e-9;
const BISECTION_MAX_ITERATIONS: u32 = 200;

/// Upper limit on scan samples, whatever the configured step.
pub const MAX_SCAN_STEPS: u32 = 100_000;

/// How the IRR is located once a sign change is bracketed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrMethod {
    /// Report the last scanned rate before NPV turned non-positive.
    #[default]
    Scan,
    /// Bisect the bracket found by the scan.
    Bisection,
}

/// Scan range and method. All rates are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrrSettings {
    pub method: IrrMethod,
    pub lower_bound_percent: f64,
    pub step_percent: f64,
    /// Exclusive upper bound of the scan.
    pub upper_bound_percent: f64,
}

impl Default for IrrSettings {
    fn default() -> Self {
        Self {
            method: IrrMethod::Scan,
            lower_bound_percent: 0.0,
            step_percent: 1.0,
            upper_bound_percent: 100.0,
        }
    }
}

impl IrrSettings {
    /// Checks that the scan is well-formed and bounded.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_finite("irr.lower_bound_percent", self.lower_bound_percent)?;
        ensure_finite("irr.step_percent", self.step_percent)?;
        ensure_finite("irr.upper_bound_percent", self.upper_bound_percent)?;

        if self.lower_bound_percent <= -100.0 {
            return Err(ValidationError::out_of_range(
                "irr.lower_bound_percent",
                -100.0,
                self.upper_bound_percent,
                self.lower_bound_percent,
            ));
        }
        if self.step_percent <= 0.0 {
            return Err(ValidationError::out_of_range(
                "irr.step_percent",
                0.0,
                f64::MAX,
                self.step_percent,
            ));
        }
        if self.upper_bound_percent <= self.lower_bound_percent {
            return Err(ValidationError::out_of_range(
                "irr.upper_bound_percent",
                self.lower_bound_percent,
                f64::MAX,
                self.upper_bound_percent,
            ));
        }

        let min_step =
            (self.upper_bound_percent - self.lower_bound_percent) / f64::from(MAX_SCAN_STEPS);
        if self.step_percent < min_step {
            return Err(ValidationError::out_of_range(
                "irr.step_percent",
                min_step,
                f64::MAX,
                self.step_percent,
            ));
        }
        Ok(())
    }
}

/// Why no IRR could be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrUndefinedReason {
    /// Annual profit is zero or negative, so NPV never turns positive.
    NonPositiveProfit,
    /// NPV is already non-positive at the bottom of the scan range.
    NotPositiveAtLowerBound,
    /// NPV stays positive across the whole scan range.
    NoSignChange,
}

/// Outcome of an IRR estimate. "Undefined" is a result, not an error:
/// callers must treat it as "not computable", never as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IrrEstimate {
    Estimated { rate_percent: f64 },
    Undefined { reason: IrrUndefinedReason },
}

impl IrrEstimate {
    /// Returns the estimated rate in percent, if defined.
    pub fn rate_percent(&self) -> Option<f64> {
        match self {
            IrrEstimate::Estimated { rate_percent } => Some(*rate_percent),
            IrrEstimate::Undefined { .. } => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, IrrEstimate::Estimated { .. })
    }

    fn undefined(reason: IrrUndefinedReason) -> Self {
        IrrEstimate::Undefined { reason }
    }
}

/// Estimates the IRR of `flows`.
///
/// # Algorithm
/// Sample `r_k = lower + k × step` for k = 0, 1, ... while `r_k < upper`.
/// Given NPV(r_0) > 0, stop at the first k with NPV(r_k) ≤ 0 and report r_(k-1)
/// (or bisect [r_(k-1), r_k]). At most [`MAX_SCAN_STEPS`] rates are sampled.
pub fn estimate_irr(flows: &[f64], annual_profit: f64, settings: &IrrSettings) -> IrrEstimate {
    if annual_profit <= 0.0 {
        return IrrEstimate::undefined(IrrUndefinedReason::NonPositiveProfit);
    }

    let lower = settings.lower_bound_percent / 100.0;
    let step = settings.step_percent / 100.0;
    let upper = settings.upper_bound_percent / 100.0;

    if npv(flows, lower) <= 0.0 {
        return IrrEstimate::undefined(IrrUndefinedReason::NotPositiveAtLowerBound);
    }

    let mut previous = lower;
    for k in 1..=MAX_SCAN_STEPS {
        let rate = lower + f64::from(k) * step;
        if rate.is_nan() || rate >= upper {
            break;
        }

        if npv(flows, rate) <= 0.0 {
            let root = match settings.method {
                IrrMethod::Scan => previous,
                IrrMethod::Bisection => bisect(flows, previous, rate),
            };
            return IrrEstimate::Estimated {
                rate_percent: root * 100.0,
            };
        }

        previous = rate;
    }

    IrrEstimate::undefined(IrrUndefinedReason::NoSignChange)
}

/// Narrows a bracket with NPV(lo) > 0 ≥ NPV(hi).
fn bisect(flows: &[f64], mut lo: f64, mut hi: f64) -> f64 {
    for _ in 0..BISECTION_MAX_ITERATIONS {
        if hi - lo < BISECTION_TOLERANCE {
            break;
        }
        let mid = (lo + hi) / 2.0;
        if npv(flows, mid) > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0
}
