use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// A single body-weight measurement, stored in kilograms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightSample {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub weight_kg: f64,
}

impl WeightSample {
    pub fn new(weight_kg: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            weight_kg,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Light,
    Moderate,
    Vigorous,
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Moderate => write!(f, "moderate"),
            Self::Vigorous => write!(f, "vigorous"),
        }
    }
}

impl FromStr for Intensity {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "vigorous" => Ok(Self::Vigorous),
            _ => anyhow::bail!(
                "invalid intensity: {} (expected light/moderate/vigorous)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub category: String,
    pub duration_min: f64,
    pub intensity: Intensity,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exercises: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WorkoutSession {
    pub fn new(category: String, duration_min: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            category,
            duration_min,
            intensity: Intensity::Moderate,
            exercises: Vec::new(),
            calories: None,
            note: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl std::fmt::Display for Meal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breakfast => write!(f, "breakfast"),
            Self::Lunch => write!(f, "lunch"),
            Self::Dinner => write!(f, "dinner"),
            Self::Snack => write!(f, "snack"),
        }
    }
}

impl FromStr for Meal {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => anyhow::bail!(
                "invalid meal: {} (expected breakfast/lunch/dinner/snack)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub meal: Meal,
    pub kcal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CalorieEntry {
    pub fn new(meal: Meal, kcal: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            meal,
            kcal,
            note: None,
        }
    }
}
