//! # cardio-service
//!
//! The Prediction Service: turns one inbound payload into one prediction
//! or one error payload. Owns the active feature profile and the loaded
//! model capability, both injected at construction and immutable for the
//! life of the process.

pub mod engine;
pub mod response;
pub mod risk;
pub mod telemetry;
pub mod vector;

pub use engine::PredictionService;
