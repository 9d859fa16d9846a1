pub mod defaults;
pub mod feature_spec;
pub mod profile;
pub mod service_config;

pub use feature_spec::{Encoding, FeatureSpec};
pub use profile::{ClampPolicy, FeatureProfile, RiskPolicy};
pub use service_config::ServiceConfig;
