use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How one raw attribute becomes one numeric model input.
///
/// Exactly one encoding kind applies per feature; the table is fixed at
/// startup and never mutated during request handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Min-max rescale: `(v - min) / (max - min)`.
    ///
    /// The normalizer does not clamp the result; out-of-range raw inputs
    /// produce values outside [0, 1] and the vector assembler clamps them
    /// when the model's input contract requires it.
    Linear { min: f64, max: f64 },

    /// Exact, case-sensitive token match against `map`. Unmatched tokens
    /// resolve to `default`. No fuzzy matching: callers must send
    /// canonical tokens.
    Categorical {
        map: HashMap<String, f64>,
        default: f64,
    },

    /// Direct numeric parse, optionally floored with `max(v, floor)`.
    Raw { floor: Option<f64> },
}

/// One named input dimension of the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSpec {
    /// Unique identifier; doubles as the key into the raw request payload.
    pub name: String,
    pub encoding: Encoding,
}

impl FeatureSpec {
    pub fn linear(name: &str, min: f64, max: f64) -> Self {
        Self {
            name: name.to_string(),
            encoding: Encoding::Linear { min, max },
        }
    }

    pub fn categorical(name: &str, pairs: &[(&str, f64)]) -> Self {
        let map = pairs
            .iter()
            .map(|(token, code)| (token.to_string(), *code))
            .collect();
        Self {
            name: name.to_string(),
            encoding: Encoding::Categorical { map, default: 0.0 },
        }
    }

    pub fn raw(name: &str) -> Self {
        Self {
            name: name.to_string(),
            encoding: Encoding::Raw { floor: None },
        }
    }

    pub fn raw_floored(name: &str, floor: f64) -> Self {
        Self {
            name: name.to_string(),
            encoding: Encoding::Raw { floor: Some(floor) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_builder_defaults_to_zero() {
        let spec = FeatureSpec::categorical("General_Health", &[("Poor", 0.0), ("Good", 0.5)]);
        match spec.encoding {
            Encoding::Categorical { ref map, default } => {
                assert_eq!(map.get("Good"), Some(&0.5));
                assert_eq!(default, 0.0);
            }
            _ => panic!("expected categorical encoding"),
        }
    }

    #[test]
    fn encoding_round_trips_through_serde() {
        let spec = FeatureSpec::linear("Weight", 30.0, 150.0);
        let json = serde_json::to_string(&spec).unwrap();
        let back: FeatureSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
