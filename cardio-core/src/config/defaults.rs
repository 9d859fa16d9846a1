//! Default values for [`super::ServiceConfig`].

use std::path::PathBuf;

use crate::constants;

pub const DEFAULT_PROFILE: &str = "normalized_9";

pub const DEFAULT_MODEL_FEATURES: usize = 9;

pub fn default_model_paths() -> Vec<PathBuf> {
    constants::DEFAULT_MODEL_PATHS
        .iter()
        .map(PathBuf::from)
        .collect()
}
