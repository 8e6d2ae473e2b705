//! Weight vector value object (five integer weights summing to 100).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Criterion, ValidationError};

/// Every valid weight vector sums to exactly this.
pub const WEIGHT_TOTAL: i32 = 100;

/// Criterion importance weights, in percent.
///
/// Each weight is an integer in [0, 100] and the five always sum to
/// [`WEIGHT_TOTAL`]. There is no way to observe or build a vector that
/// violates the sum; edits go through
/// [`WeightRebalancer`](super::WeightRebalancer), which returns a new vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WeightRecord", into = "WeightRecord")]
pub struct WeightVector([u8; Criterion::COUNT]);

impl WeightVector {
    /// Creates a weight vector, validating range and sum.
    pub fn new(
        economic: i32,
        environmental: i32,
        social: i32,
        technical: i32,
        regulatory: i32,
    ) -> Result<Self, ValidationError> {
        Self::from_array([economic, environmental, social, technical, regulatory])
    }

    /// Creates a weight vector from values in canonical criterion order.
    pub fn from_array(values: [i32; Criterion::COUNT]) -> Result<Self, ValidationError> {
        let mut weights = [0u8; Criterion::COUNT];

        for (criterion, value) in Criterion::ALL.iter().zip(values) {
            weights[criterion.index()] = u8::try_from(value)
                .ok()
                .filter(|w| i32::from(*w) <= WEIGHT_TOTAL)
                .ok_or_else(|| {
                    ValidationError::out_of_range(criterion.as_str(), 0, WEIGHT_TOTAL, value)
                })?;
        }

        let sum: i32 = values.iter().sum();
        if sum != WEIGHT_TOTAL {
            return Err(ValidationError::weight_sum(sum));
        }

        Ok(Self(weights))
    }

    /// 20% on every criterion.
    pub fn equal() -> Self {
        Self([20; Criterion::COUNT])
    }

    /// Returns the weight for a criterion in percent.
    pub fn get(&self, criterion: Criterion) -> u8 {
        self.0[criterion.index()]
    }

    /// Returns the weight for a criterion as a fraction (0.0 to 1.0).
    pub fn fraction(&self, criterion: Criterion) -> f64 {
        f64::from(self.get(criterion)) / f64::from(WEIGHT_TOTAL)
    }

    /// Returns weights in canonical criterion order.
    pub fn to_array(&self) -> [i32; Criterion::COUNT] {
        self.0.map(i32::from)
    }

    /// Iterates `(criterion, weight)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, u8)> + '_ {
        Criterion::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Sum of all weights. Always [`WEIGHT_TOTAL`].
    pub fn total(&self) -> i32 {
        self.to_array().iter().sum()
    }

    /// True when every weight lies within `[min, max]`.
    pub fn is_within(&self, min: u8, max: u8) -> bool {
        self.0.iter().all(|w| (min..=max).contains(w))
    }
}

impl Default for WeightVector {
    /// Economic 20, environmental 30, social 15, technical 20, regulatory 15.
    fn default() -> Self {
        Self([20, 30, 15, 20, 15])
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(c, w)| format!("{}={}%", c.as_str(), w))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Serialized shape of a weight vector: one named field per criterion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct WeightRecord {
    economic: i32,
    environmental: i32,
    social: i32,
    technical: i32,
    regulatory: i32,
}

impl TryFrom<WeightRecord> for WeightVector {
    type Error = ValidationError;

    fn try_from(record: WeightRecord) -> Result<Self, Self::Error> {
        WeightVector::new(
            record.economic,
            record.environmental,
            record.social,
            record.technical,
            record.regulatory,
        )
    }
}

impl From<WeightVector> for WeightRecord {
    fn from(weights: WeightVector) -> Self {
        let [economic, environmental, social, technical, regulatory] = weights.to_array();
        Self {
            economic,
            environmental,
            social,
            technical,
            regulatory,
        }
    }
}
