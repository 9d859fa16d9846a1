use serde::{Deserialize, Serialize};

use super::feature_spec::FeatureSpec;

/// Whether the vector assembler clamps each value into [0, 1].
///
/// Clamping is a property of the model's input contract, not of any
/// single feature's encoding, so it lives at the profile level and is
/// applied only at vector assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampPolicy {
    None,
    UnitInterval,
}

/// How a probability is discretized for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskPolicy {
    /// "High" above 0.5 (strict), else "Low".
    Binary,
    /// Tiers 1–5 with inclusive upper bounds at 0.2, 0.4, 0.6, 0.8.
    FiveTier,
}

/// A complete deployment profile: the ordered feature table plus the
/// clamp and risk policies that go with the model it was fitted for.
///
/// The declared feature order is load-bearing: it must exactly match the
/// column order the model was trained with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProfile {
    pub name: String,
    pub features: Vec<FeatureSpec>,
    pub clamp: ClampPolicy,
    pub risk: RiskPolicy,
}

impl FeatureProfile {
    /// Look up one of the built-in profiles by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "normalized_9" => Some(Self::normalized_9()),
            "raw_floor_9" => Some(Self::raw_floor_9()),
            "raw_18" => Some(Self::raw_18()),
            "normalized_9_tiered" => Some(Self::normalized_9_tiered()),
            _ => None,
        }
    }

    /// 9-feature model fitted on min-max scaled inputs. Values are
    /// clamped into [0, 1] at vector assembly.
    pub fn normalized_9() -> Self {
        Self {
            name: "normalized_9".to_string(),
            features: vec![
                FeatureSpec::linear("Weight", 30.0, 150.0),
                FeatureSpec::linear("Height", 120.0, 220.0),
                FeatureSpec::linear("Green_Vegetables", 0.0, 30.0),
                FeatureSpec::categorical("General_Health", GENERAL_HEALTH_SCALED),
                FeatureSpec::linear("Fruit", 0.0, 30.0),
                FeatureSpec::linear("Fried_Potato", 0.0, 30.0),
                FeatureSpec::linear("BMI", 15.0, 50.0),
                FeatureSpec::linear("Age", 18.0, 80.0),
                FeatureSpec::linear("Alcohol", 0.0, 30.0),
            ],
            clamp: ClampPolicy::UnitInterval,
            risk: RiskPolicy::Binary,
        }
    }

    /// 9-feature model fitted on raw inputs. The consumption-frequency
    /// fields carry a floor of 1.0: the model skews against exact-zero
    /// inputs there.
    pub fn raw_floor_9() -> Self {
        Self {
            name: "raw_floor_9".to_string(),
            features: vec![
                FeatureSpec::raw("Weight"),
                FeatureSpec::raw("Height"),
                FeatureSpec::raw_floored("Green_Vegetables", 1.0),
                FeatureSpec::categorical("General_Health", GENERAL_HEALTH_ORDINAL_1_5),
                FeatureSpec::raw_floored("Fruit", 1.0),
                FeatureSpec::raw_floored("Fried_Potato", 1.0),
                FeatureSpec::raw("BMI"),
                FeatureSpec::raw("Age"),
                FeatureSpec::raw_floored("Alcohol", 1.0),
            ],
            clamp: ClampPolicy::None,
            risk: RiskPolicy::Binary,
        }
    }

    /// 18-feature model fitted on raw inputs with per-field semantic
    /// encodings for the categorical survey answers.
    pub fn raw_18() -> Self {
        Self {
            name: "raw_18".to_string(),
            features: vec![
                FeatureSpec::raw("Age"),
                FeatureSpec::categorical("Sex", SEX),
                FeatureSpec::raw("Height"),
                FeatureSpec::raw("Weight"),
                FeatureSpec::raw("BMI"),
                FeatureSpec::categorical("General_Health", GENERAL_HEALTH_ORDINAL_0_4),
                FeatureSpec::categorical("Checkup", CHECKUP),
                FeatureSpec::categorical("Diabetes", DIABETES),
                FeatureSpec::raw("Skin_Cancer"),
                FeatureSpec::raw("Other_Cancer"),
                FeatureSpec::raw("Depression"),
                FeatureSpec::raw("Arthritis"),
                FeatureSpec::raw("Exercise"),
                FeatureSpec::raw("Smoking"),
                FeatureSpec::raw("Alcohol"),
                FeatureSpec::raw("Fruit"),
                FeatureSpec::raw("Green_Vegetables"),
                FeatureSpec::raw("Fried_Potato"),
            ],
            clamp: ClampPolicy::None,
            risk: RiskPolicy::Binary,
        }
    }

    /// Same table as [`Self::normalized_9`] but reporting a 1–5 risk
    /// scale instead of High/Low.
    pub fn normalized_9_tiered() -> Self {
        Self {
            name: "normalized_9_tiered".to_string(),
            risk: RiskPolicy::FiveTier,
            ..Self::normalized_9()
        }
    }
}

const GENERAL_HEALTH_SCALED: &[(&str, f64)] = &[
    ("Poor", 0.0),
    ("Fair", 0.25),
    ("Good", 0.5),
    ("Very_Good", 0.75),
    ("Excellent", 1.0),
];

const GENERAL_HEALTH_ORDINAL_1_5: &[(&str, f64)] = &[
    ("Poor", 1.0),
    ("Fair", 2.0),
    ("Good", 3.0),
    ("Very_Good", 4.0),
    ("Excellent", 5.0),
];

const GENERAL_HEALTH_ORDINAL_0_4: &[(&str, f64)] = &[
    ("Poor", 0.0),
    ("Fair", 1.0),
    ("Good", 2.0),
    ("Very_Good", 3.0),
    ("Excellent", 4.0),
];

const SEX: &[(&str, f64)] = &[("Female", 0.0), ("Male", 1.0), ("0", 0.0), ("1", 1.0)];

const CHECKUP: &[(&str, f64)] = &[
    ("Never", 0.0),
    ("5 or more years ago", 1.0),
    ("Within 5 years", 2.0),
    ("Within 2 years", 3.0),
    ("Within 1 year", 4.0),
];

// "Borderline" and "During Pregnancy" share the "No" code. This matches
// the encoding the shipped model was trained with; see DESIGN.md before
// changing it.
const DIABETES: &[(&str, f64)] = &[
    ("No", 0.0),
    ("Borderline", 0.0),
    ("During Pregnancy", 0.0),
    ("Yes", 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_covers_all_profiles() {
        for name in ["normalized_9", "raw_floor_9", "raw_18", "normalized_9_tiered"] {
            let profile = FeatureProfile::builtin(name).unwrap();
            assert_eq!(profile.name, name);
        }
        assert!(FeatureProfile::builtin("nonexistent").is_none());
    }

    #[test]
    fn normalized_9_declares_the_trained_column_order() {
        let profile = FeatureProfile::normalized_9();
        let names: Vec<&str> = profile
            .features
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Weight",
                "Height",
                "Green_Vegetables",
                "General_Health",
                "Fruit",
                "Fried_Potato",
                "BMI",
                "Age",
                "Alcohol"
            ]
        );
    }

    #[test]
    fn raw_18_has_eighteen_features() {
        assert_eq!(FeatureProfile::raw_18().features.len(), 18);
    }

    #[test]
    fn tiered_profile_shares_the_normalized_table() {
        let base = FeatureProfile::normalized_9();
        let tiered = FeatureProfile::normalized_9_tiered();
        assert_eq!(tiered.features, base.features);
        assert_eq!(tiered.clamp, ClampPolicy::UnitInterval);
        assert_eq!(tiered.risk, RiskPolicy::FiveTier);
    }
}
