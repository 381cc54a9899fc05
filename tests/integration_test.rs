//! End-to-end scenarios through the public API

use approx::assert_abs_diff_eq;
use rusty_cip::prelude::*;

#[test]
fn test_default_scenario() {
    let evaluation = evaluate(&RateInputs::default());
    let result = evaluation.displayable().expect("default inputs should price");

    assert_abs_diff_eq!(result.forward_rate, 1.2602 * 0.0007_f64.exp(), epsilon = 1e-12);
    assert_abs_diff_eq!(result.forward_rate, 1.26108, epsilon = 1e-5);
    assert_abs_diff_eq!(result.domestic_ending_value, 1023.60, epsilon = 1e-9);
    assert_abs_diff_eq!(result.domestic_equivalent, 1023.60, epsilon = 1e-9);
    assert!(result.no_arbitrage);
    assert!(result.forward_points_pips() > 0.0);
}

#[test]
fn test_equal_rates_scenario() {
    let result = price_checked(&RateInputs::new(1.35, 3.25, 3.25)).unwrap();
    assert_eq!(result.forward_rate, 1.35);
    assert_abs_diff_eq!(result.forward_premium_pct(), 0.0);
}

#[test]
fn test_inverted_differential_scenario() {
    let result = price_checked(&RateInputs::new(1.2602, 5.0, 1.0)).unwrap();
    assert!(result.forward_rate < 1.2602);
    assert_abs_diff_eq!(result.implied_differential(), -0.04, epsilon = 1e-12);
}

#[test]
fn test_extreme_valid_inputs_stay_consistent() {
    for inputs in [
        RateInputs::new(0.0001, -99.999, 50.0),
        RateInputs::new(10.0, 50.0, -99.999),
        RateInputs::new(10.0, 50.0, 50.0),
    ] {
        let result = price_checked(&inputs).unwrap();
        assert!(result.is_valid);
        assert!(result.no_arbitrage, "{:?}", inputs);
        assert!(result.forward_rate > 0.0);
    }
}

#[test]
fn test_json_request_response() {
    let request = r#"{"spotRate": 1.2602, "domesticRate": 2.36, "foreignRate": 2.43}"#;
    let inputs: RateInputs = serde_json::from_str(request).unwrap();

    let response = serde_json::to_value(evaluate(&inputs)).unwrap();
    assert_eq!(response["status"], "priced");
    assert_eq!(response["result"]["chartData"][0]["label"], "t=0");
    assert_eq!(response["result"]["chartData"][1]["label"], "t=1");

    let bad: RateInputs =
        serde_json::from_str(r#"{"spotRate": 0, "domesticRate": 2.36, "foreignRate": 99}"#)
            .unwrap();
    let response = serde_json::to_value(evaluate(&bad)).unwrap();
    assert_eq!(response["status"], "rejected");
    assert_eq!(response["errors"]["spotRate"], "Spot rate must be positive");
    assert_eq!(response["errors"]["foreignRate"], "Foreign rate cannot exceed 50%");
    assert!(response.get("result").is_none());
}

#[test]
fn test_evaluation_round_trips() {
    let evaluation = evaluate(&RateInputs::default());
    let json = serde_json::to_string(&evaluation).unwrap();
    let back: Evaluation = serde_json::from_str(&json).unwrap();
    let (original, parsed) = (evaluation.result().unwrap(), back.result().unwrap());
    assert_abs_diff_eq!(parsed.forward_rate, original.forward_rate, epsilon = 1e-12);
    assert_eq!(parsed.chart_data.len(), 2);
    assert_eq!(parsed.no_arbitrage, original.no_arbitrage);
}

#[test]
fn test_sweep_matches_single_pricing() {
    let base = RateInputs::default();
    let points = sweep_foreign_rate(&base, 0.0, 5.0, 6);
    assert_eq!(points.len(), 6);
    for point in &points {
        let single = price(&base.with(Field::ForeignRate, point.rate_pct));
        assert_eq!(point.forward_rate, single.forward_rate);
    }
}
