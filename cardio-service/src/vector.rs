//! Feature vector assembly.
//!
//! Iterates the profile's declared feature order — the single most
//! important invariant in the system, it must exactly match the column
//! order the model was trained with — and produces one value per
//! feature for any payload, including an empty one.

use cardio_core::config::{ClampPolicy, FeatureProfile};
use cardio_core::models::FallbackEvent;
use chrono::Utc;
use serde_json::{Map, Value};
use tracing::debug;

/// Build the ordered feature vector for one request.
///
/// Returns the vector plus one event per feature that degraded to its
/// fallback value. The vector always has exactly
/// `profile.features.len()` entries.
pub fn build_vector(
    payload: &Map<String, Value>,
    profile: &FeatureProfile,
) -> (Vec<f64>, Vec<FallbackEvent>) {
    let mut vector = Vec::with_capacity(profile.features.len());
    let mut events = Vec::new();

    for spec in &profile.features {
        let raw = payload.get(&spec.name);
        let normalized = cardio_features::normalize(raw, spec);

        // Clamping is the model input contract's concern, not the
        // encoding's, so it happens here and only under the profile's
        // policy.
        let value = match profile.clamp {
            ClampPolicy::UnitInterval => normalized.value.clamp(0.0, 1.0),
            ClampPolicy::None => normalized.value,
        };

        if normalized.fallback {
            events.push(FallbackEvent {
                feature: spec.name.clone(),
                raw: raw.cloned(),
                timestamp: Utc::now(),
            });
        }

        debug!(feature = %spec.name, raw = ?raw, value, "feature normalized");
        vector.push(value);
    }

    (vector, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn empty_payload_still_fills_the_vector() {
        let profile = FeatureProfile::normalized_9();
        let (vector, events) = build_vector(&Map::new(), &profile);
        assert_eq!(vector.len(), 9);
        assert!(vector.iter().all(|&v| v == 0.0));
        assert_eq!(events.len(), 9);
    }

    #[test]
    fn clamped_profile_pins_out_of_range_inputs_to_the_boundary() {
        let profile = FeatureProfile::normalized_9();
        let (vector, events) = build_vector(&payload(json!({"Weight": -40, "Height": 500})), &profile);
        // Weight is the first feature, Height the second.
        assert_eq!(vector[0], 0.0);
        assert_eq!(vector[1], 1.0);
        // Out-of-range values are not fallbacks: they parsed fine.
        assert!(events.iter().all(|e| e.feature != "Weight" && e.feature != "Height"));
    }

    #[test]
    fn unclamped_profile_passes_extremes_through() {
        let profile = FeatureProfile::raw_18();
        let (vector, _) = build_vector(&payload(json!({"Age": 200})), &profile);
        assert_eq!(vector[0], 200.0);
    }

    #[test]
    fn fallback_events_name_the_degraded_features() {
        let profile = FeatureProfile::normalized_9();
        let (_, events) = build_vector(
            &payload(json!({
                "Weight": 80, "Height": 175, "Green_Vegetables": 15,
                "General_Health": "great", "Fruit": 10, "Fried_Potato": 2,
                "BMI": 26.12, "Age": 45, "Alcohol": 5
            })),
            &profile,
        );
        let names: Vec<&str> = events.iter().map(|e| e.feature.as_str()).collect();
        assert_eq!(names, ["General_Health"]);
        assert_eq!(events[0].raw, Some(json!("great")));
    }

    #[test]
    fn order_follows_the_profile_not_the_payload() {
        let profile = FeatureProfile::normalized_9();
        // Weight 90 → 0.5, Age 49 → 0.5; Age is index 7, Weight index 0.
        let (vector, _) = build_vector(&payload(json!({"Age": 49, "Weight": 90})), &profile);
        assert_eq!(vector[0], 0.5);
        assert_eq!(vector[7], 0.5);
    }
}
