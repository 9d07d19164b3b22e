use serde::{Deserialize, Serialize};

/// Floor applied to the grand total.
pub const MIN_SCORE: f64 = 18.32;

/// Upper bounds (inclusive) of the low, moderate and high impact bands.
pub const LOW_IMPACT_CEILING: f64 = 18.32;
pub const MODERATE_IMPACT_CEILING: f64 = 45.54;
pub const HIGH_IMPACT_CEILING: f64 = 72.77;

/// Fixed scoring constants: the total floor and the impact band breakpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub min_score: f64,
    pub low_ceiling: f64,
    pub moderate_ceiling: f64,
    pub high_ceiling: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_score: MIN_SCORE,
            low_ceiling: LOW_IMPACT_CEILING,
            moderate_ceiling: MODERATE_IMPACT_CEILING,
            high_ceiling: HIGH_IMPACT_CEILING,
        }
    }
}
