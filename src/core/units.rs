use anyhow::{bail, Result};

use crate::models::config::Units;

const KG_TO_LBS: f64 = 2.20462;
const LBS_TO_KG: f64 = 0.453592;
const CM_TO_IN: f64 = 0.393701;
const IN_TO_CM: f64 = 2.54;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    Height,
    Weight,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    MetricToImperial,
    ImperialToMetric,
}

/// Convert a height or weight value between unit systems, rounded to one
/// decimal place. Round trips are lossy by design. Non-finite input is a
/// domain error rather than a propagated NaN/infinity.
pub fn convert(value: f64, quantity: Quantity, direction: Direction) -> Result<f64> {
    if !value.is_finite() {
        bail!("cannot convert non-finite value: {}", value);
    }
    let converted = match (quantity, direction) {
        (Quantity::Weight, Direction::MetricToImperial) => value * KG_TO_LBS,
        (Quantity::Weight, Direction::ImperialToMetric) => value * LBS_TO_KG,
        (Quantity::Height, Direction::MetricToImperial) => value * CM_TO_IN,
        (Quantity::Height, Direction::ImperialToMetric) => value * IN_TO_CM,
    };
    Ok(round1(converted))
}

/// Convert a stored (metric) value to the display value + unit label for
/// the active unit system.
pub fn to_display(value: f64, quantity: Quantity, units: &Units) -> Result<(f64, &'static str)> {
    if !units.is_imperial() {
        let label = match quantity {
            Quantity::Weight => "kg",
            Quantity::Height => "cm",
        };
        return Ok((round1(value), label));
    }
    let converted = convert(value, quantity, Direction::MetricToImperial)?;
    let label = match quantity {
        Quantity::Weight => "lbs",
        Quantity::Height => "in",
    };
    Ok((converted, label))
}

/// Convert a user-input value (in their configured unit system) to metric
/// for storage. Storage is always metric.
pub fn from_input(value: f64, quantity: Quantity, units: &Units) -> Result<f64> {
    if !value.is_finite() {
        bail!("cannot convert non-finite value: {}", value);
    }
    if !units.is_imperial() {
        return Ok(value);
    }
    match quantity {
        Quantity::Weight => Ok(value * LBS_TO_KG),
        Quantity::Height => Ok(value * IN_TO_CM),
    }
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
