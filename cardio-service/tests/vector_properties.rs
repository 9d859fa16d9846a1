//! Property tests for vector assembly invariants.

use cardio_core::config::FeatureProfile;
use cardio_service::vector::build_vector;
use proptest::prelude::*;
use serde_json::{Map, Value};

/// Arbitrary raw value: numbers, numeric strings, garbage strings, null.
fn raw_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1e6f64..1e6f64).prop_map(|v| serde_json::json!(v)),
        (-1000i64..1000i64).prop_map(|v| serde_json::json!(v.to_string())),
        ".{0,12}".prop_map(|s| serde_json::json!(s)),
        Just(Value::Null),
    ]
}

fn arbitrary_payload() -> impl Strategy<Value = Map<String, Value>> {
    let keys: Vec<String> = FeatureProfile::normalized_9()
        .features
        .iter()
        .map(|f| f.name.clone())
        .collect();
    proptest::collection::btree_map(
        proptest::sample::select(keys),
        raw_value(),
        0..9,
    )
    .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn vector_length_is_always_the_profile_length(payload in arbitrary_payload()) {
        let profile = FeatureProfile::normalized_9();
        let (vector, _) = build_vector(&payload, &profile);
        prop_assert_eq!(vector.len(), profile.features.len());
    }

    #[test]
    fn clamped_vectors_stay_in_the_unit_interval(payload in arbitrary_payload()) {
        let profile = FeatureProfile::normalized_9();
        let (vector, _) = build_vector(&payload, &profile);
        prop_assert!(vector.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn unclamped_vectors_never_lose_entries(payload in arbitrary_payload()) {
        let profile = FeatureProfile::raw_floor_9();
        let (vector, events) = build_vector(&payload, &profile);
        prop_assert_eq!(vector.len(), 9);
        prop_assert!(events.len() <= 9);
    }
}
