pub mod config_error;
pub mod model_error;
pub mod predict_error;

pub use config_error::ConfigError;
pub use model_error::ModelError;
pub use predict_error::PredictError;

/// Result alias used across the prediction path.
pub type CardioResult<T> = Result<T, PredictError>;
