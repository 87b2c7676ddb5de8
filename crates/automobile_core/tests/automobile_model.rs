use automobile_core::{Automobile, AutomobileId, AutomobileInput};
use serde_json::json;

#[test]
fn record_serializes_all_five_keys_with_nulls() {
    let record = Automobile {
        id: AutomobileId(3),
        make: Some("Tesla".to_string()),
        model: None,
        year: None,
        vin: None,
    };

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({ "id": 3, "make": "Tesla", "model": null, "year": null, "vin": null })
    );
}

#[test]
fn input_missing_keys_default_to_none() {
    let input: AutomobileInput = serde_json::from_value(json!({ "model": "Golf" })).unwrap();
    assert_eq!(
        input,
        AutomobileInput {
            model: Some("Golf".to_string()),
            ..AutomobileInput::default()
        }
    );
}

#[test]
fn input_rejects_year_outside_i32() {
    let result = serde_json::from_value::<AutomobileInput>(json!({ "year": 3_000_000_000_i64 }));
    assert!(result.is_err());
}

#[test]
fn record_roundtrips_through_json() {
    let record = Automobile {
        id: AutomobileId(9),
        make: Some("Volkswagen".to_string()),
        model: Some("Golf".to_string()),
        year: Some(2008),
        vin: Some("WVW".to_string()),
    };
    let text = serde_json::to_string(&record).unwrap();
    let parsed: Automobile = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, record);
}
