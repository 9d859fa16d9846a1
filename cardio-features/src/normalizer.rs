//! The normalization contract: one raw value plus one feature spec in,
//! one numeric value out, never an error.

use cardio_core::config::{Encoding, FeatureSpec};
use serde_json::Value;

use crate::parse;

/// Outcome of normalizing one raw value.
///
/// `fallback` is true when the raw input could not be used and the value
/// is the encoding's default. The numeric result is authoritative either
/// way; the flag exists so the orchestration layer can observe degraded
/// inputs without changing the numeric contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    pub value: f64,
    pub fallback: bool,
}

impl Normalized {
    fn ok(value: f64) -> Self {
        Self {
            value,
            fallback: false,
        }
    }

    fn fallback(value: f64) -> Self {
        Self {
            value,
            fallback: true,
        }
    }
}

/// Normalize one raw attribute value against its feature spec.
///
/// - Linear: `(v - min) / (max - min)`, not clamped here. Missing or
///   unparseable input falls back to 0.0.
/// - Categorical: exact, case-sensitive token match; anything else falls
///   back to the configured default.
/// - Raw: direct numeric parse, floored when the spec says so.
pub fn normalize(raw: Option<&Value>, spec: &FeatureSpec) -> Normalized {
    match &spec.encoding {
        Encoding::Linear { min, max } => {
            if parse::is_missing(raw) {
                return Normalized::fallback(0.0);
            }
            // Degenerate ranges cannot scale anything meaningfully.
            if !(max > min) {
                return Normalized::fallback(0.0);
            }
            match raw.and_then(parse::as_number) {
                Some(v) => Normalized::ok((v - min) / (max - min)),
                None => Normalized::fallback(0.0),
            }
        }
        Encoding::Categorical { map, default } => match raw {
            None | Some(Value::Null) => Normalized::fallback(*default),
            Some(value) => {
                let token = parse::token_form(value);
                match map.get(&token) {
                    Some(code) => Normalized::ok(*code),
                    None => Normalized::fallback(*default),
                }
            }
        },
        Encoding::Raw { floor } => {
            if parse::is_missing(raw) {
                return Normalized::fallback(0.0);
            }
            match raw.and_then(parse::as_number) {
                Some(v) => Normalized::ok(floor.map_or(v, |f| v.max(f))),
                None => Normalized::fallback(0.0),
            }
        }
    }
}
