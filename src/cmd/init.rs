use anyhow::Result;
use std::io::{self, Write};
use std::str::FromStr;

use crate::core::energy::{ActivityLevel, Sex};
use crate::core::units::{self, Quantity};
use crate::db::Database;
use crate::models::config::Config;
use crate::models::WeightSample;

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    if !skip {
        println!("fitledger — Initial Setup\n");

        // Prompt labels follow the configured unit system.
        let (h_unit, w_unit) = if config.units.is_imperial() {
            ("in", "lbs")
        } else {
            ("cm", "kg")
        };

        let height = prompt_f64(&format!("Height ({})", h_unit))?;
        config.profile.height_cm = Some(units::from_input(height, Quantity::Height, &config.units)?);
        let weight = prompt_f64(&format!("Current weight ({})", w_unit))?;
        config.profile.age_years = Some(prompt_u32("Age (years)")?);
        config.profile.sex = Sex::from_str(&prompt_string("Sex (male/female/unspecified)")?)?;
        config.profile.activity = ActivityLevel::from_str(&prompt_string(
            "Activity level (sedentary/light/moderate/active/very_active)",
        )?)?;

        let target = prompt_string(&format!("Target weight ({}, or empty)", w_unit))?;
        if !target.is_empty() {
            config.goal.target_weight_kg =
                Some(units::from_input(target.parse()?, Quantity::Weight, &config.units)?);
        }

        config.save()?;

        // Log initial weight
        let db = Database::open(&Config::db_path())?;
        let kg = units::from_input(weight, Quantity::Weight, &config.units)?;
        db.insert_weight(&WeightSample::new(kg))?;

        println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
    } else {
        config.save()?;
        Database::open(&Config::db_path())?;
        println!("Config initialized with defaults at {:?}", Config::path());
    }

    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn prompt_f64(label: &str) -> Result<f64> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn prompt_u32(label: &str) -> Result<u32> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a number."),
        }
    }
}
