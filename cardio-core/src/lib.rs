//! # cardio-core
//!
//! Foundation crate for the Cardio risk service.
//! Defines feature profiles, config, errors, models, and traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ClampPolicy, Encoding, FeatureProfile, FeatureSpec, RiskPolicy, ServiceConfig};
pub use errors::{CardioResult, ConfigError, ModelError, PredictError};
pub use models::{BinaryRisk, ErrorBody, FallbackEvent, ModelOutput, Prediction, RiskLevel};
pub use traits::ModelCapability;
