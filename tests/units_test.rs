use fitledger::core::units::{convert, from_input, to_display, Direction, Quantity};
use fitledger::models::config::Units;

// ── convert ──────────────────────────────────────────────────────────────────

#[test]
fn test_weight_kg_to_lbs() {
    let v = convert(70.0, Quantity::Weight, Direction::MetricToImperial).unwrap();
    assert!((v - 154.3).abs() < f64::EPSILON);
}

#[test]
fn test_weight_lbs_to_kg() {
    let v = convert(154.3, Quantity::Weight, Direction::ImperialToMetric).unwrap();
    assert!((v - 70.0).abs() < f64::EPSILON);
}

#[test]
fn test_height_cm_to_in() {
    let v = convert(170.0, Quantity::Height, Direction::MetricToImperial).unwrap();
    assert!((v - 66.9).abs() < f64::EPSILON);
}

#[test]
fn test_height_in_to_cm() {
    let v = convert(66.9, Quantity::Height, Direction::ImperialToMetric).unwrap();
    assert!((v - 169.9).abs() < f64::EPSILON);
}

#[test]
fn test_round_trip_is_lossy_but_close() {
    // Rounding to one decimal loses information; this is accepted.
    let there = convert(170.0, Quantity::Height, Direction::MetricToImperial).unwrap();
    let back = convert(there, Quantity::Height, Direction::ImperialToMetric).unwrap();
    assert!((back - 170.0).abs() <= 0.2);
}

#[test]
fn test_convert_rejects_nan() {
    assert!(convert(f64::NAN, Quantity::Weight, Direction::MetricToImperial).is_err());
}

#[test]
fn test_convert_rejects_infinity() {
    assert!(convert(f64::INFINITY, Quantity::Height, Direction::ImperialToMetric).is_err());
    assert!(convert(f64::NEG_INFINITY, Quantity::Weight, Direction::ImperialToMetric).is_err());
}

// ── from_input / to_display ──────────────────────────────────────────────────

#[test]
fn test_from_input_metric_passthrough() {
    let units = Units::default();
    let v = from_input(82.55, Quantity::Weight, &units).unwrap();
    assert!((v - 82.55).abs() < f64::EPSILON);
}

#[test]
fn test_from_input_imperial_weight_unrounded() {
    let units = Units::imperial();
    let v = from_input(180.0, Quantity::Weight, &units).unwrap();
    // Storage keeps full precision; only display rounds.
    assert!((v - 180.0 * 0.453592).abs() < 1e-9);
}

#[test]
fn test_from_input_rejects_non_finite() {
    let units = Units::default();
    assert!(from_input(f64::NAN, Quantity::Weight, &units).is_err());
}

#[test]
fn test_to_display_metric_labels() {
    let units = Units::default();
    let (v, label) = to_display(70.0, Quantity::Weight, &units).unwrap();
    assert!((v - 70.0).abs() < f64::EPSILON);
    assert_eq!(label, "kg");

    let (_, label) = to_display(170.0, Quantity::Height, &units).unwrap();
    assert_eq!(label, "cm");
}

#[test]
fn test_to_display_imperial_converts() {
    let units = Units::imperial();
    let (v, label) = to_display(70.0, Quantity::Weight, &units).unwrap();
    assert!((v - 154.3).abs() < f64::EPSILON);
    assert_eq!(label, "lbs");

    let (v, label) = to_display(170.0, Quantity::Height, &units).unwrap();
    assert!((v - 66.9).abs() < f64::EPSILON);
    assert_eq!(label, "in");
}
