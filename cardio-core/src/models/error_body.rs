use serde::{Deserialize, Serialize};

/// Failure payload returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error category.
    pub error: String,
    /// Detail message.
    pub message: String,
}
