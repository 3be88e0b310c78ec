use anyhow::{bail, Result};

use super::units::round1;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Underweight => write!(f, "underweight"),
            Self::Normal => write!(f, "normal"),
            Self::Overweight => write!(f, "overweight"),
            Self::Obese => write!(f, "obese"),
        }
    }
}

/// BMI = weight(kg) / height(m)^2, rounded to one decimal. Inputs must be
/// positive and finite; a zero height is a domain error, not infinity.
pub fn bmi(height_cm: f64, weight_kg: f64) -> Result<f64> {
    if !height_cm.is_finite() || !weight_kg.is_finite() {
        bail!("bmi inputs must be finite");
    }
    if height_cm <= 0.0 {
        bail!("height must be positive, got {}", height_cm);
    }
    if weight_kg <= 0.0 {
        bail!("weight must be positive, got {}", weight_kg);
    }
    let h_m = height_cm / 100.0;
    Ok(round1(weight_kg / (h_m * h_m)))
}

/// Category bounds are half-open: <18.5, [18.5, 25), [25, 30), >=30.
pub fn category(bmi: f64) -> BmiCategory {
    match bmi {
        b if b < 18.5 => BmiCategory::Underweight,
        b if b < 25.0 => BmiCategory::Normal,
        b if b < 30.0 => BmiCategory::Overweight,
        _ => BmiCategory::Obese,
    }
}
