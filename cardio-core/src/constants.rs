/// Cardio system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Probability above which the binary policy reports High risk.
/// Strictly greater-than: exactly 0.5 is Low.
pub const BINARY_RISK_THRESHOLD: f64 = 0.5;

/// Upper bounds of tiers 1–4 under the five-tier policy, inclusive.
/// Anything above the last bound is tier 5.
pub const TIER_UPPER_BOUNDS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

/// Ordered model load candidates: deployment volume first, then the
/// working directory, then the legacy export kept around for rollback.
pub const DEFAULT_MODEL_PATHS: [&str; 3] = [
    "/var/data/cvd_model.onnx",
    "cvd_model.onnx",
    "cvd_model_legacy.onnx",
];
