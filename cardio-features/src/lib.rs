//! # cardio-features
//!
//! The Feature Normalizer: pure functions mapping one raw, loosely-typed
//! request value to one numeric model input, driven by the declarative
//! per-feature encoding in `cardio-core`.
//!
//! Normalization never fails past its own boundary. Malformed or
//! unrecognized input degrades to the feature's default value, and the
//! degradation is reported through a flag rather than an error so the
//! numeric contract stays identical to the models' training pipeline.

pub mod normalizer;
pub mod parse;

pub use normalizer::{normalize, Normalized};
