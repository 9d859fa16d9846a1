pub mod error_body;
pub mod fallback_event;
pub mod model_output;
pub mod prediction;

pub use error_body::ErrorBody;
pub use fallback_event::FallbackEvent;
pub use model_output::ModelOutput;
pub use prediction::{BinaryRisk, Prediction, RiskLevel};
