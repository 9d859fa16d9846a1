//! Startup model resolution.
//!
//! Walks the ordered candidate paths from the service config; the first
//! path that exists and loads wins. Resolution happens exactly once,
//! before the first request. A failed resolution is not fatal to the
//! process: the service serves `ModelUnavailable` until redeployed.

use cardio_core::config::ServiceConfig;
use cardio_core::traits::ModelCapability;
use tracing::{debug, error, info, warn};

use crate::onnx::OnnxModel;

/// Resolve the model capability from the configured candidate paths.
///
/// Returns `None` when no candidate resolves; the caller then runs in
/// degraded mode.
pub fn resolve_model(config: &ServiceConfig) -> Option<Box<dyn ModelCapability>> {
    for path in &config.model_paths {
        if !path.exists() {
            debug!(path = %path.display(), "model candidate absent, trying next");
            continue;
        }

        info!(path = %path.display(), "loading model");
        match OnnxModel::load(path, config.model_features) {
            Ok(model) => {
                info!(model = model.name(), features = model.n_features(), "model loaded");
                return Some(Box::new(model));
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "model load failed, trying next candidate");
            }
        }
    }

    error!("no model candidate could be loaded; serving degraded");
    None
}
