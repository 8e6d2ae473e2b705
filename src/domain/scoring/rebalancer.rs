//! Weight Rebalancer - keeps the weight vector summing to 100 after an edit.
//!
//! When one criterion's weight changes, the other four are scaled
//! proportionally to absorb the difference. Independent rounding of four
//! values can leave the total off by a point or two; that error is added to
//! the largest of the other weights.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{WeightVector, WEIGHT_TOTAL};
use crate::domain::foundation::{Criterion, ValidationError};

pub const DEFAULT_MIN_WEIGHT: u8 = 5;
pub const DEFAULT_MAX_WEIGHT: u8 = 50;

/// What to do when the rounding fix-up pushes a weight outside its bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebalancePolicy {
    /// Leave the fixed-up weights as they are (logged at warn level).
    #[default]
    Permissive,
    /// Clamp the other weights into bounds and redistribute one point at a time.
    Reclamp,
}

/// Tunables for weight editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    pub rebalance_policy: RebalancePolicy,
    /// Lowest weight an edit may set.
    pub min_weight: u8,
    /// Highest weight an edit may set.
    pub max_weight: u8,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            rebalance_policy: RebalancePolicy::Permissive,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
        }
    }
}

impl ScoringSettings {
    /// Bounds must leave room for any edited value to be balanced by the
    /// other four: `4 × max + min ≥ 100` and `4 × min + max ≤ 100`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let min = i32::from(self.min_weight);
        let max = i32::from(self.max_weight);

        if max > WEIGHT_TOTAL || min > max {
            return Err(ValidationError::out_of_range(
                "max_weight",
                min,
                WEIGHT_TOTAL,
                max,
            ));
        }
        if 4 * max + min < WEIGHT_TOTAL || 4 * min + max > WEIGHT_TOTAL {
            return Err(ValidationError::invalid_format(
                "weight_bounds",
                format!("bounds [{}, {}] cannot keep five weights summing to 100", min, max),
            ));
        }
        Ok(())
    }
}

/// Pure weight-vector editor.
#[derive(Debug, Clone, Default)]
pub struct WeightRebalancer {
    settings: ScoringSettings,
}

impl WeightRebalancer {
    /// # Errors
    /// Bounds that [`ScoringSettings::validate`] rejects.
    pub fn new(settings: ScoringSettings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &ScoringSettings {
        &self.settings
    }

    /// Returns a new vector with `changed` set to `new_value` and the other
    /// four rescaled so the total stays at 100.
    ///
    /// # Algorithm
    /// 1. Clamp `new_value` to `[min_weight, max_weight]`
    /// 2. `others_sum = 100 - old`, scale each other weight by
    ///    `(100 - new) / others_sum`, rounding half up
    /// 3. Add `100 - sum` to the largest other weight (first in canonical
    ///    order on ties)
    /// 4. Under [`RebalancePolicy::Reclamp`], pull the others back into bounds
    ///
    /// # Edge Cases
    /// - `new_value` equal to the current weight: vector returned unchanged
    /// - Other weights all zero: remaining budget split evenly
    ///
    /// # Errors
    /// `new_value` outside [0, 100] is rejected.
    pub fn rebalance(
        &self,
        current: &WeightVector,
        changed: Criterion,
        new_value: i32,
    ) -> Result<WeightVector, ValidationError> {
        if !(0..=WEIGHT_TOTAL).contains(&new_value) {
            return Err(ValidationError::out_of_range(
                changed.as_str(),
                0,
                WEIGHT_TOTAL,
                new_value,
            ));
        }

        let min = i32::from(self.settings.min_weight);
        let max = i32::from(self.settings.max_weight);
        let value = new_value.clamp(min, max);
        let old = i32::from(current.get(changed));

        if value == old {
            return Ok(*current);
        }

        let before = current.to_array();
        let mut weights = before;
        weights[changed.index()] = value;

        let others: Vec<usize> = Criterion::ALL
            .iter()
            .filter(|c| **c != changed)
            .map(Criterion::index)
            .collect();

        let others_sum = WEIGHT_TOTAL - old;
        let budget = WEIGHT_TOTAL - value;

        if others_sum == 0 {
            split_evenly(&mut weights, &others, budget);
        } else {
            for &i in &others {
                weights[i] = round_half_up(before[i] * budget, others_sum);
            }
        }

        let rounding_error = WEIGHT_TOTAL - weights.iter().sum::<i32>();
        if rounding_error != 0 {
            absorb_rounding_error(&mut weights, &others, rounding_error);
        }

        match self.settings.rebalance_policy {
            RebalancePolicy::Reclamp => reclamp(&mut weights, &others, min, max),
            RebalancePolicy::Permissive => {
                if others.iter().any(|&i| weights[i] < min || weights[i] > max) {
                    warn!(
                        criterion = %changed,
                        weights = ?weights,
                        "Rebalanced weights fall outside [{}, {}]",
                        min,
                        max
                    );
                }
            }
        }

        debug!(
            criterion = %changed,
            requested = new_value,
            applied = value,
            rounding_error,
            "Rebalanced criterion weights"
        );

        WeightVector::from_array(weights)
    }
}

/// Rebalances with the default settings.
pub fn rebalance(
    current: &WeightVector,
    changed: Criterion,
    new_value: i32,
) -> Result<WeightVector, ValidationError> {
    WeightRebalancer::default().rebalance(current, changed, new_value)
}

/// `round(numerator / denominator)` with halves rounded up; both non-negative.
fn round_half_up(numerator: i32, denominator: i32) -> i32 {
    (2 * numerator + denominator) / (2 * denominator)
}

fn split_evenly(weights: &mut [i32], others: &[usize], budget: i32) {
    let count = others.len() as i32;
    let share = budget / count;
    let remainder = budget % count;

    for (n, &i) in others.iter().enumerate() {
        weights[i] = share + i32::from((n as i32) < remainder);
    }
}

/// Adds `error` to the largest other weight. A negative error that would
/// take that weight below zero spills over to the next largest.
fn absorb_rounding_error(weights: &mut [i32], others: &[usize], error: i32) {
    let mut by_size = others.to_vec();
    // Stable: ties keep canonical order.
    by_size.sort_by(|a, b| weights[*b].cmp(&weights[*a]));

    let mut remaining = error;
    for i in by_size {
        let applied = remaining.max(-weights[i]);
        weights[i] += applied;
        remaining -= applied;
        if remaining == 0 {
            break;
        }
    }
}

/// Clamps the other weights into `[min, max]`, then moves single points until
/// the total is back at 100: a surplus goes to the smallest weight with room,
/// a deficit comes from the largest weight above the minimum.
fn reclamp(weights: &mut [i32], others: &[usize], min: i32, max: i32) {
    for &i in others {
        weights[i] = weights[i].clamp(min, max);
    }

    let mut diff = WEIGHT_TOTAL - weights.iter().sum::<i32>();
    while diff != 0 {
        let target = if diff > 0 {
            others
                .iter()
                .copied()
                .filter(|&i| weights[i] < max)
                .min_by_key(|&i| weights[i])
        } else {
            others
                .iter()
                .copied()
                .filter(|&i| weights[i] > min)
                .reduce(|best, i| if weights[i] > weights[best] { i } else { best })
        };

        let Some(i) = target else { break };
        let step = diff.signum();
        weights[i] += step;
        diff -= step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reclamping() -> WeightRebalancer {
        WeightRebalancer::new(ScoringSettings {
            rebalance_policy: RebalancePolicy::Reclamp,
            ..ScoringSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn unchanged_value_returns_same_vector() {
        let weights = WeightVector::default();
        let result = rebalance(&weights, Criterion::Social, 15).unwrap();
        assert_eq!(result, weights);
    }

    #[test]
    fn scales_others_proportionally() {
        // Environmental 30 -> 40 leaves 60 for others summing 70.
        let result = rebalance(&WeightVector::default(), Criterion::Environmental, 40).unwrap();
        assert_eq!(result.get(Criterion::Environmental), 40);
        assert_eq!(result.total(), 100);
        // 20 * 60/70 = 17.14 -> 17, 15 * 60/70 = 12.86 -> 13: 17+13+17+13 = 60
        assert_eq!(result.to_array(), [17, 40, 13, 17, 13]);
    }

    #[test]
    fn rounding_error_goes_to_first_largest_other() {
        // Equal 20s, economic -> 27: others scale to 18.25 -> 18 each = 72, error +1.
        let result = rebalance(&WeightVector::equal(), Criterion::Economic, 27).unwrap();
        assert_eq!(result.to_array(), [27, 19, 18, 18, 18]);
    }

    #[test]
    fn new_value_is_clamped_to_bounds() {
        let result = rebalance(&WeightVector::default(), Criterion::Economic, 80).unwrap();
        assert_eq!(result.get(Criterion::Economic), 50);
        assert_eq!(result.total(), 100);

        let result = rebalance(&WeightVector::default(), Criterion::Economic, 0).unwrap();
        assert_eq!(result.get(Criterion::Economic), 5);
    }

    #[test]
    fn rejects_value_outside_percentage_range() {
        assert!(rebalance(&WeightVector::default(), Criterion::Economic, 101).is_err());
        assert!(rebalance(&WeightVector::default(), Criterion::Economic, -1).is_err());
    }

    #[test]
    fn permissive_policy_can_leave_weight_above_max() {
        let skewed = WeightVector::new(50, 5, 5, 5, 35).unwrap();
        let result = rebalance(&skewed, Criterion::Economic, 5).unwrap();
        // Others scale by 95/50: 10, 10, 10, 67 -> 102, error -2 on regulatory.
        assert_eq!(result.to_array(), [5, 10, 10, 10, 65]);
        assert!(!result.is_within(DEFAULT_MIN_WEIGHT, DEFAULT_MAX_WEIGHT));
    }

    #[test]
    fn reclamp_policy_keeps_weights_in_bounds() {
        let skewed = WeightVector::new(50, 5, 5, 5, 35).unwrap();
        let result = reclamping().rebalance(&skewed, Criterion::Economic, 5).unwrap();
        assert_eq!(result.to_array(), [5, 15, 15, 15, 50]);
        assert!(result.is_within(DEFAULT_MIN_WEIGHT, DEFAULT_MAX_WEIGHT));
    }

    #[test]
    fn zero_other_weights_split_budget_evenly() {
        let lopsided = WeightVector::new(100, 0, 0, 0, 0).unwrap();
        let result = rebalance(&lopsided, Criterion::Economic, 50).unwrap();
        assert_eq!(result.to_array(), [50, 13, 13, 12, 12]);
    }

    #[test]
    fn negative_error_spills_past_small_weights() {
        let settings = ScoringSettings {
            min_weight: 0,
            max_weight: 100,
            ..ScoringSettings::default()
        };
        let rebalancer = WeightRebalancer::new(settings).unwrap();
        // Economic 0 -> 98 leaves 2 for four equal 25s: each rounds 0.5 -> 1, error -2.
        let start = WeightVector::new(0, 25, 25, 25, 25).unwrap();
        let result = rebalancer.rebalance(&start, Criterion::Economic, 98).unwrap();
        assert_eq!(result.to_array(), [98, 0, 0, 1, 1]);
    }

    #[test]
    fn settings_reject_unsatisfiable_bounds() {
        let too_tight = ScoringSettings {
            min_weight: 5,
            max_weight: 20,
            ..ScoringSettings::default()
        };
        assert!(too_tight.validate().is_err());
        assert!(ScoringSettings::default().validate().is_ok());
    }

    #[test]
    fn rebalancer_rejects_inverted_bounds() {
        let inverted = ScoringSettings {
            min_weight: 60,
            max_weight: 50,
            ..ScoringSettings::default()
        };
        let err = WeightRebalancer::new(inverted).unwrap_err();
        assert_eq!(err.field(), Some("max_weight"));
    }

    fn criterion_strategy() -> impl Strategy<Value = Criterion> {
        prop::sample::select(Criterion::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2000))]

        #[test]
        fn every_edit_sequence_sums_to_100(
            edits in prop::collection::vec((criterion_strategy(), 0i32..=100), 1..20)
        ) {
            let rebalancer = WeightRebalancer::default();
            let mut weights = WeightVector::default();
            for (criterion, value) in edits {
                weights = rebalancer.rebalance(&weights, criterion, value).unwrap();
                prop_assert_eq!(weights.total(), 100);
                prop_assert_eq!(
                    i32::from(weights.get(criterion)),
                    value.clamp(5, 50)
                );
            }
        }

        #[test]
        fn reclamp_keeps_every_weight_in_bounds(
            edits in prop::collection::vec((criterion_strategy(), 0i32..=100), 1..20)
        ) {
            let rebalancer = reclamping();
            let mut weights = WeightVector::default();
            for (criterion, value) in edits {
                weights = rebalancer.rebalance(&weights, criterion, value).unwrap();
                prop_assert_eq!(weights.total(), 100);
                prop_assert!(weights.is_within(5, 50), "out of bounds: {}", weights);
            }
        }
    }
}
