//! # cardio-inference
//!
//! The Model Capability: loads the trained classifier from an ordered
//! list of candidate paths and exposes it behind the `ModelCapability`
//! trait. If no candidate resolves, the service comes up degraded and
//! serves `ModelUnavailable` instead of crashing.

pub mod loader;
pub mod onnx;

pub use loader::resolve_model;
pub use onnx::OnnxModel;
