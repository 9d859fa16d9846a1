//! ONNX Runtime classifier backend.
//!
//! Loads sklearn/xgboost classifier exports via the `ort` crate (v2) and
//! runs single-row inference: one `[1, n]` f32 input, a label tensor and
//! a probabilities tensor out.

use std::path::Path;
use std::sync::Mutex;

use cardio_core::constants::BINARY_RISK_THRESHOLD;
use cardio_core::errors::ModelError;
use cardio_core::models::ModelOutput;
use cardio_core::traits::ModelCapability;
use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

/// ONNX-backed classifier.
pub struct OnnxModel {
    /// Session requires `&mut self` for `run`, so we wrap in Mutex
    /// to satisfy the `&self` trait requirement.
    session: Mutex<Session>,
    n_features: usize,
    model_name: String,
}

// Safety: Session is Send but not Sync by default. The Mutex provides Sync.
unsafe impl Sync for OnnxModel {}

impl std::fmt::Debug for OnnxModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxModel")
            .field("model_name", &self.model_name)
            .field("n_features", &self.n_features)
            .finish()
    }
}

impl OnnxModel {
    /// Load an ONNX classifier from the given path.
    ///
    /// `n_features` is the feature count the model was exported with; the
    /// caller checks it against the active profile before serving.
    ///
    /// # Errors
    /// Returns `ModelError::LoadFailed` if the model cannot be loaded.
    pub fn load(model_path: &Path, n_features: usize) -> Result<Self, ModelError> {
        if !model_path.exists() {
            return Err(ModelError::LoadFailed {
                path: model_path.display().to_string(),
                reason: "model file not found".to_string(),
            });
        }

        let session = Session::builder()
            .map_err(|e| ModelError::LoadFailed {
                path: model_path.display().to_string(),
                reason: e.to_string(),
            })?
            .with_intra_threads(2)
            .map_err(|e| ModelError::LoadFailed {
                path: model_path.display().to_string(),
                reason: e.to_string(),
            })?
            .commit_from_file(model_path)
            .map_err(|e| ModelError::LoadFailed {
                path: model_path.display().to_string(),
                reason: e.to_string(),
            })?;

        let model_name = model_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_name, features = n_features, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            n_features,
            model_name,
        })
    }

    /// Run one inference over an already-validated feature vector.
    fn infer(&self, features: &[f64]) -> Result<ModelOutput, ModelError> {
        let row: Vec<f32> = features.iter().map(|&v| v as f32).collect();

        let input =
            Tensor::from_array((vec![1i64, row.len() as i64], row)).map_err(|e| {
                ModelError::InferenceFailed {
                    reason: format!("tensor creation error: {e}"),
                }
            })?;

        let mut session = self.session.lock().map_err(|e| ModelError::InferenceFailed {
            reason: format!("session lock poisoned: {e}"),
        })?;

        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| ModelError::InferenceFailed {
                reason: e.to_string(),
            })?;

        // Classifier exports carry a label tensor (i64) and a class
        // probability tensor (f32, one column per class). Take the label
        // from the former and the positive-class probability from the
        // last column of the latter.
        let mut label: Option<u8> = None;
        let mut probability: Option<f64> = None;

        for (_name, output) in outputs.iter() {
            if probability.is_none() {
                if let Ok((_shape, data)) = output.try_extract_tensor::<f32>() {
                    probability = data.last().map(|&p| p as f64);
                    continue;
                }
            }
            if label.is_none() {
                if let Ok((_shape, data)) = output.try_extract_tensor::<i64>() {
                    label = data.first().map(|&l| l as u8);
                }
            }
        }

        let probability = probability.ok_or_else(|| ModelError::InferenceFailed {
            reason: "no probability tensor in model output".to_string(),
        })?;
        let label =
            label.unwrap_or(if probability > BINARY_RISK_THRESHOLD { 1 } else { 0 });

        Ok(ModelOutput { probability, label })
    }
}

impl ModelCapability for OnnxModel {
    fn predict(&self, features: &[f64]) -> Result<ModelOutput, ModelError> {
        if features.len() != self.n_features {
            return Err(ModelError::ShapeMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }
        self.infer(features)
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_of_missing_file_is_load_failed() {
        let err = OnnxModel::load(Path::new("/definitely/not/here.onnx"), 9).unwrap_err();
        match err {
            ModelError::LoadFailed { reason, .. } => {
                assert!(reason.contains("not found"));
            }
            other => panic!("expected LoadFailed, got {other:?}"),
        }
    }
}
