//! Boundary behaviour of the validator and the display gate

use rusty_cip::prelude::*;

fn spot(value: f64) -> RateInputs {
    RateInputs::default().with(Field::SpotRate, value)
}

#[test]
fn test_spot_rate_boundaries() {
    assert!(validate(&spot(0.0)).contains(Field::SpotRate));
    assert!(validate(&spot(0.0001)).is_empty());
    assert!(validate(&spot(10.0001)).contains(Field::SpotRate));
    assert!(validate(&spot(10.0)).is_empty());
    assert!(validate(&spot(-3.0))
        .get(Field::SpotRate)
        .unwrap()
        .contains("must be positive"));
    assert!(validate(&spot(10.0001))
        .get(Field::SpotRate)
        .unwrap()
        .contains("unrealistically high"));
}

#[test]
fn test_rate_boundaries() {
    for field in [Field::DomesticRate, Field::ForeignRate] {
        let at = |value: f64| validate(&RateInputs::default().with(field, value));

        let errors = at(-100.0);
        assert!(errors.get(field).unwrap().contains("must be greater than -100%"));
        assert!(at(-99.999).is_empty());
        let errors = at(50.0001);
        assert!(errors.get(field).unwrap().contains("cannot exceed 50%"));
        assert!(at(50.0).is_empty());
    }
}

#[test]
fn test_messages_name_the_field() {
    let errors = validate(&RateInputs::new(1.0, 75.0, 75.0));
    assert_eq!(
        errors.get(Field::DomesticRate),
        Some("Domestic rate cannot exceed 50%")
    );
    assert_eq!(
        errors.get(Field::ForeignRate),
        Some("Foreign rate cannot exceed 50%")
    );
}

#[test]
fn test_fields_validated_independently() {
    let errors = validate(&RateInputs::new(0.0, 2.0, 2.0));
    assert_eq!(errors.len(), 1);
    assert!(!errors.contains(Field::DomesticRate));
    assert!(!errors.contains(Field::ForeignRate));
}

#[test]
fn test_missing_value_is_invalid() {
    let errors = validate(&RateInputs::new(f64::NAN, 2.0, 2.0));
    assert_eq!(errors.get(Field::SpotRate), Some("Spot rate must be positive"));
}

#[test]
fn test_rejected_inputs_are_never_displayed() {
    for inputs in [
        RateInputs::new(0.0, 2.0, 2.0),
        RateInputs::new(1.0, -100.0, 2.0),
        RateInputs::new(1.0, 2.0, 50.0001),
    ] {
        let evaluation = evaluate(&inputs);
        assert!(!evaluation.is_priced());
        assert!(evaluation.displayable().is_none());
    }
}

#[test]
fn test_out_of_domain_pricing_is_flagged() {
    let result = price(&RateInputs::new(1.0, -100.0, 2.0));
    assert!(!result.is_valid);
    assert_eq!(result.chart_data.len(), 2);
}
