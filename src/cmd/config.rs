use anyhow::Result;
use serde_json::json;
use std::str::FromStr;

use crate::core::energy::{ActivityLevel, Sex};
use crate::core::units::{self, Quantity};
use crate::models::config::{Config, Pacing, Units};
use crate::output;

pub fn run_show(human: bool) -> Result<()> {
    let config = Config::load()?;
    if human {
        let toml_str = toml::to_string_pretty(&config)?;
        println!("{}", toml_str);
    } else {
        let out = output::success("config", json!({ "config": config }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "height" => {
            let v: f64 = value.parse()?;
            if !v.is_finite() || v <= 0.0 {
                anyhow::bail!("height must be positive, got {}", value);
            }
            config.profile.height_cm = Some(units::from_input(v, Quantity::Height, &config.units)?);
        }
        "age" => config.profile.age_years = Some(value.parse()?),
        "sex" => config.profile.sex = Sex::from_str(value)?,
        "activity" => config.profile.activity = ActivityLevel::from_str(value)?,
        "target_weight" => {
            let v: f64 = value.parse()?;
            if !v.is_finite() || v <= 0.0 {
                anyhow::bail!("target weight must be positive, got {}", value);
            }
            config.goal.target_weight_kg =
                Some(units::from_input(v, Quantity::Weight, &config.units)?);
        }
        "units.system" => match value {
            "metric" => config.units = Units::default(),
            "imperial" => config.units = Units::imperial(),
            _ => anyhow::bail!("units.system must be 'metric' or 'imperial'"),
        },
        "goal.pacing" => config.goal.pacing = Pacing::from_str(value)?,
        "goal.horizon_weeks" => {
            let v: u32 = value.parse()?;
            if v == 0 {
                anyhow::bail!("horizon_weeks must be at least 1");
            }
            config.goal.horizon_weeks = v;
        }
        "goal.rate_kg_per_week" => {
            let v: f64 = value.parse()?;
            if !v.is_finite() || v <= 0.0 {
                anyhow::bail!("rate_kg_per_week must be positive, got {}", value);
            }
            config.goal.rate_kg_per_week = v;
        }
        _ => anyhow::bail!("unknown config key: {}", key),
    }

    config.save()?;
    let out = output::success("config", json!({ "key": key, "value": value }));
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
