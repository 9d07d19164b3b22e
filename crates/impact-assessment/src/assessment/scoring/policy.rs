use super::super::domain::ImpactLevel;
use super::config::ScoringConfig;

pub(crate) fn classify(score: f64, config: &ScoringConfig) -> ImpactLevel {
    if score <= config.low_ceiling {
        ImpactLevel::Low
    } else if score <= config.moderate_ceiling {
        ImpactLevel::Moderate
    } else if score <= config.high_ceiling {
        ImpactLevel::High
    } else {
        ImpactLevel::VeryHigh
    }
}

/// Position of the score between the floor and the catalog maximum, as a percentage.
pub(crate) fn scale_position(score: f64, min_score: f64, max_score: f64) -> f64 {
    if max_score <= min_score {
        return 0.0;
    }
    (((score - min_score) / (max_score - min_score)) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive_upper_bounds() {
        let config = ScoringConfig::default();
        assert_eq!(classify(18.32, &config), ImpactLevel::Low);
        assert_eq!(classify(18.33, &config), ImpactLevel::Moderate);
        assert_eq!(classify(45.54, &config), ImpactLevel::Moderate);
        assert_eq!(classify(45.55, &config), ImpactLevel::High);
        assert_eq!(classify(72.77, &config), ImpactLevel::High);
        assert_eq!(classify(72.78, &config), ImpactLevel::VeryHigh);
    }

    #[test]
    fn scale_position_is_clamped() {
        assert_eq!(scale_position(18.32, 18.32, 100.0), 0.0);
        assert_eq!(scale_position(100.0, 18.32, 100.0), 100.0);
        assert_eq!(scale_position(150.0, 18.32, 100.0), 100.0);
        assert_eq!(scale_position(10.0, 18.32, 18.32), 0.0);
    }
}
