use serde::{Deserialize, Serialize};

/// Result of one inference request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Positive-class membership probability, in [0, 1].
    pub probability: f64,
    /// Predicted class label (0 or 1).
    pub class: u8,
    /// Discretized risk, per the active policy.
    pub risk_level: RiskLevel,
}

/// Discretized risk for display.
///
/// Serializes as `"High"`/`"Low"` under the binary policy and as a bare
/// integer 1–5 under the five-tier policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskLevel {
    Binary(BinaryRisk),
    Tier(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryRisk {
    High,
    Low,
}
