//! PredictionService — one inbound payload in, one prediction or one
//! error out.
//!
//! The model capability and the feature profile are injected at
//! construction and never swapped afterwards; each request is stateless
//! and independent.

use cardio_core::config::{FeatureProfile, ServiceConfig};
use cardio_core::errors::{CardioResult, ConfigError, PredictError};
use cardio_core::models::Prediction;
use cardio_core::traits::ModelCapability;
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::risk;
use crate::vector;

/// The prediction orchestrator.
pub struct PredictionService {
    model: Option<Box<dyn ModelCapability>>,
    profile: FeatureProfile,
}

impl std::fmt::Debug for PredictionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionService")
            .field("model", &self.model.as_ref().map(|m| m.name()))
            .field("profile", &self.profile.name)
            .finish()
    }
}

impl PredictionService {
    /// Build a service from an already-resolved model capability.
    ///
    /// Load-time capability check: a model whose feature count does not
    /// match the profile is refused here, leaving the service degraded,
    /// rather than failing every request with a shape mismatch later.
    pub fn new(model: Option<Box<dyn ModelCapability>>, profile: FeatureProfile) -> Self {
        let model = match model {
            Some(m) if m.n_features() != profile.features.len() => {
                error!(
                    model = m.name(),
                    model_features = m.n_features(),
                    profile_features = profile.features.len(),
                    "model/profile feature count mismatch, refusing model"
                );
                None
            }
            other => other,
        };

        if model.is_none() {
            warn!(profile = %profile.name, "service starting degraded: every prediction will fail");
        }

        Self { model, profile }
    }

    /// Resolve profile and model from config and build the service.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ConfigError> {
        let profile = FeatureProfile::builtin(&config.profile).ok_or_else(|| {
            ConfigError::UnknownProfile {
                name: config.profile.clone(),
            }
        })?;
        let model = cardio_inference::resolve_model(config);
        Ok(Self::new(model, profile))
    }

    /// Whether the service is running without a model.
    pub fn is_degraded(&self) -> bool {
        self.model.is_none()
    }

    /// The active feature profile.
    pub fn profile(&self) -> &FeatureProfile {
        &self.profile
    }

    /// Run one prediction.
    ///
    /// Normalization failures never surface here: they degrade to
    /// default feature values and are logged. Model failures always
    /// surface, opaquely, and are never retried — a shape mismatch is a
    /// deployment defect, not a transient condition.
    pub fn predict(&self, payload: &Map<String, Value>) -> CardioResult<Prediction> {
        let Some(model) = self.model.as_ref().filter(|m| m.is_available()) else {
            error!("prediction requested but no model is loaded");
            return Err(PredictError::ModelUnavailable);
        };

        let keys: Vec<&String> = payload.keys().collect();
        info!(?keys, "prediction request received");

        let (input, fallbacks) = vector::build_vector(payload, &self.profile);
        for event in &fallbacks {
            warn!(feature = %event.feature, raw = ?event.raw, "normalization fell back to default");
        }
        info!(len = input.len(), vector = ?input, "input vector assembled");

        match model.predict(&input) {
            Ok(output) => {
                let risk_level = risk::risk_level(output.probability, self.profile.risk);
                info!(
                    class = output.label,
                    probability = output.probability,
                    risk = ?risk_level,
                    "prediction succeeded"
                );
                Ok(Prediction {
                    probability: output.probability,
                    class: output.label,
                    risk_level,
                })
            }
            Err(e) => {
                error!(
                    error = %e,
                    ?keys,
                    vector = ?input,
                    "model invocation failed"
                );
                Err(e.into())
            }
        }
    }
}
