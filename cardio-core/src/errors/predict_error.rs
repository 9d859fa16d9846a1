use super::model_error::ModelError;

/// Prediction service errors.
///
/// Normalization never contributes here: malformed input degrades to a
/// default feature value and is reported only through fallback events.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("no model is loaded")]
    ModelUnavailable,

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("internal error: {reason}")]
    Internal { reason: String },
}
