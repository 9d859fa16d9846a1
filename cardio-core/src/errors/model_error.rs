/// Model capability errors.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model load failed for {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("feature count mismatch: model expects {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}
