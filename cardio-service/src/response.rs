//! Outbound payload shaping.
//!
//! The surrounding request layer (out of scope here) only needs a JSON
//! body and a status code; both come from this module. Every failure is
//! status 500 — the core distinguishes failure kinds in logs, not in
//! status codes.

use cardio_core::errors::PredictError;
use cardio_core::models::{ErrorBody, Prediction};
use serde_json::Value;

/// HTTP status for any core failure.
pub const FAILURE_STATUS: u16 = 500;

/// Shape a successful prediction as its wire body.
pub fn success_body(prediction: &Prediction) -> Value {
    // Prediction's serde derive is the wire contract; this cannot fail
    // for plain numeric fields.
    serde_json::to_value(prediction).unwrap_or(Value::Null)
}

/// Shape a failure as status code plus error body.
pub fn failure_body(err: &PredictError) -> (u16, ErrorBody) {
    let body = match err {
        PredictError::ModelUnavailable => ErrorBody {
            error: "Model Unavailable".to_string(),
            message: "no model is loaded service side".to_string(),
        },
        other => ErrorBody {
            error: "Internal Server Error".to_string(),
            message: other.to_string(),
        },
    };
    (FAILURE_STATUS, body)
}
