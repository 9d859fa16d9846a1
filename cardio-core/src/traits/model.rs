use crate::errors::ModelError;
use crate::models::ModelOutput;

/// The trained classifier, treated as an opaque capability.
///
/// Loaded once before the first request and never swapped afterwards;
/// implementations must be safe to share across request handlers.
pub trait ModelCapability: Send + Sync {
    /// Run one inference over an ordered feature vector.
    fn predict(&self, features: &[f64]) -> Result<ModelOutput, ModelError>;

    /// Number of input features the model was fitted with.
    fn n_features(&self) -> usize;

    /// Human-readable model name.
    fn name(&self) -> &str;

    /// Whether this capability can currently serve predictions.
    fn is_available(&self) -> bool;
}
