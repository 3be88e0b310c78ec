use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::config::{Goal, Pacing};

/// kcal equivalent of one kilogram of body weight.
const KCAL_PER_KG: f64 = 7700.0;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Unspecified => write!(f, "unspecified"),
        }
    }
}

impl FromStr for Sex {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "unspecified" | "other" => Ok(Self::Unspecified),
            _ => bail!("invalid sex: {} (expected male/female/unspecified)", s),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sedentary => write!(f, "sedentary"),
            Self::Light => write!(f, "light"),
            Self::Moderate => write!(f, "moderate"),
            Self::Active => write!(f, "active"),
            Self::VeryActive => write!(f, "very_active"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            _ => bail!(
                "invalid activity level: {} (expected sedentary/light/moderate/active/very_active)",
                s
            ),
        }
    }
}

struct Coefficients {
    base: f64,
    weight: f64,
    height: f64,
    age: f64,
}

const MALE: Coefficients = Coefficients {
    base: 88.362,
    weight: 13.397,
    height: 4.799,
    age: 5.677,
};

const FEMALE: Coefficients = Coefficients {
    base: 447.593,
    weight: 9.247,
    height: 3.098,
    age: 4.330,
};

fn coefficients(sex: Sex) -> Coefficients {
    match sex {
        Sex::Male => MALE,
        Sex::Female => FEMALE,
        // Coefficient-wise mean of the two models, inherited behavior.
        Sex::Unspecified => Coefficients {
            base: (MALE.base + FEMALE.base) / 2.0,
            weight: (MALE.weight + FEMALE.weight) / 2.0,
            height: (MALE.height + FEMALE.height) / 2.0,
            age: (MALE.age + FEMALE.age) / 2.0,
        },
    }
}

/// Basal metabolic rate via the sex-specific linear model over metric
/// weight, height, and age.
pub fn bmr(sex: Sex, weight_kg: f64, height_cm: f64, age_years: u32) -> Result<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() {
        bail!("bmr inputs must be finite");
    }
    if weight_kg <= 0.0 {
        bail!("weight must be positive, got {}", weight_kg);
    }
    if height_cm <= 0.0 {
        bail!("height must be positive, got {}", height_cm);
    }
    let c = coefficients(sex);
    Ok(c.base + c.weight * weight_kg + c.height * height_cm - c.age * f64::from(age_years))
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn daily_target(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Goal-adjusted daily target. Returns `None` when no target weight is set.
/// The deficit/surplus is linear: the weight delta converts to kcal at
/// 7700 kcal/kg and is spread per day according to the pacing policy.
pub fn goal_adjusted_target(
    daily: f64,
    current_weight_kg: f64,
    goal: &Goal,
) -> Result<Option<f64>> {
    let Some(target) = goal.target_weight_kg else {
        return Ok(None);
    };
    if !target.is_finite() || target <= 0.0 {
        bail!("target weight must be positive and finite, got {}", target);
    }
    if !current_weight_kg.is_finite() || current_weight_kg <= 0.0 {
        bail!(
            "current weight must be positive and finite, got {}",
            current_weight_kg
        );
    }

    let delta_kg = target - current_weight_kg;
    let per_day = match goal.pacing {
        Pacing::Horizon => {
            if goal.horizon_weeks == 0 {
                bail!("horizon_weeks must be at least 1");
            }
            delta_kg * KCAL_PER_KG / (f64::from(goal.horizon_weeks) * 7.0)
        }
        Pacing::Rate => {
            if goal.rate_kg_per_week <= 0.0 || !goal.rate_kg_per_week.is_finite() {
                bail!(
                    "rate_kg_per_week must be positive, got {}",
                    goal.rate_kg_per_week
                );
            }
            // Rate fixes the per-week magnitude; the sign follows the delta.
            if delta_kg == 0.0 {
                0.0
            } else {
                delta_kg.signum() * goal.rate_kg_per_week * KCAL_PER_KG / 7.0
            }
        }
    };
    Ok(Some(daily + per_day))
}
