//! Probability → risk tier discretization.

use cardio_core::config::RiskPolicy;
use cardio_core::constants::{BINARY_RISK_THRESHOLD, TIER_UPPER_BOUNDS};
use cardio_core::models::{BinaryRisk, RiskLevel};

/// Discretize a probability under the active policy.
///
/// Tier edges are closed on the upper bound: exactly 0.2 is tier 1, and
/// exactly 0.5 is Low under the binary policy.
pub fn risk_level(probability: f64, policy: RiskPolicy) -> RiskLevel {
    match policy {
        RiskPolicy::Binary => {
            if probability > BINARY_RISK_THRESHOLD {
                RiskLevel::Binary(BinaryRisk::High)
            } else {
                RiskLevel::Binary(BinaryRisk::Low)
            }
        }
        RiskPolicy::FiveTier => {
            let tier = TIER_UPPER_BOUNDS
                .iter()
                .position(|&bound| probability <= bound)
                .map(|i| i as u8 + 1)
                .unwrap_or(5);
            RiskLevel::Tier(tier)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_threshold_is_strict() {
        assert_eq!(
            risk_level(0.5, RiskPolicy::Binary),
            RiskLevel::Binary(BinaryRisk::Low)
        );
        assert_eq!(
            risk_level(0.500001, RiskPolicy::Binary),
            RiskLevel::Binary(BinaryRisk::High)
        );
    }

    #[test]
    fn tier_edges_are_closed_on_the_upper_bound() {
        assert_eq!(risk_level(0.2, RiskPolicy::FiveTier), RiskLevel::Tier(1));
        assert_eq!(risk_level(0.4, RiskPolicy::FiveTier), RiskLevel::Tier(2));
        assert_eq!(risk_level(0.6, RiskPolicy::FiveTier), RiskLevel::Tier(3));
        assert_eq!(risk_level(0.8, RiskPolicy::FiveTier), RiskLevel::Tier(4));
    }

    #[test]
    fn tier_interiors() {
        assert_eq!(risk_level(0.0, RiskPolicy::FiveTier), RiskLevel::Tier(1));
        assert_eq!(risk_level(0.3, RiskPolicy::FiveTier), RiskLevel::Tier(2));
        assert_eq!(risk_level(0.81, RiskPolicy::FiveTier), RiskLevel::Tier(5));
        assert_eq!(risk_level(1.0, RiskPolicy::FiveTier), RiskLevel::Tier(5));
    }
}
