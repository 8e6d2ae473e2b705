//! Energy-price sensitivity table.

use serde::{Deserialize, Serialize};

/// Price perturbations applied by default, in percent of the base price.
pub const DEFAULT_PRICE_STEPS_PERCENT: [f64; 5] = [-20.0, -10.0, 0.0, 10.0, 20.0];

/// NPV recomputed under a perturbed energy price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityCase {
    pub label: String,
    pub price_change_percent: f64,
    pub energy_price_per_mwh: f64,
    pub npv: f64,
}

/// Label for a price step, e.g. "-10% Energy Price" or "Base Case".
pub fn scenario_label(price_change_percent: f64) -> String {
    if price_change_percent == 0.0 {
        "Base Case".to_string()
    } else {
        format!("{:+}% Energy Price", price_change_percent)
    }
}

/// Applies a percentage change to a base price.
pub fn perturbed_price(base_price: f64, price_change_percent: f64) -> f64 {
    base_price * (1.0 + price_change_percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_dashboard_wording() {
        assert_eq!(scenario_label(-20.0), "-20% Energy Price");
        assert_eq!(scenario_label(10.0), "+10% Energy Price");
        assert_eq!(scenario_label(0.0), "Base Case");
        assert_eq!(scenario_label(2.5), "+2.5% Energy Price");
    }

    #[test]
    fn perturbed_price_scales_base() {
        assert!((perturbed_price(120.0, -10.0) - 108.0).abs() < 1e-9);
        assert!((perturbed_price(120.0, 20.0) - 144.0).abs() < 1e-9);
    }
}
