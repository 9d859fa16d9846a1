use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalization fallback: the raw input could not be used and the
/// feature degraded to its default value.
///
/// The numeric contract is unchanged by a fallback; this exists so the
/// orchestration layer can observe and log degraded inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackEvent {
    pub feature: String,
    /// The raw value as received, `None` when the key was absent.
    pub raw: Option<Value>,
    pub timestamp: DateTime<Utc>,
}
