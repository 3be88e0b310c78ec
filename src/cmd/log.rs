use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::json;
use std::str::FromStr;

use crate::cli::LogEntry;
use crate::core::units::{self, Quantity};
use crate::db::Database;
use crate::models::config::Config;
use crate::models::record::{Intensity, Meal};
use crate::models::{CalorieEntry, WeightSample, WorkoutSession};
use crate::output;
use crate::output::human;

pub fn run(entry: LogEntry, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    match entry {
        LogEntry::Weight { value } => {
            if !value.is_finite() || value <= 0.0 {
                bail!("weight must be positive, got {}", value);
            }
            let kg = units::from_input(value, Quantity::Weight, &config.units)?;
            let mut sample = WeightSample::new(kg);
            if let Some(ts) = backdate(date) {
                sample.timestamp = ts;
            }
            db.insert_weight(&sample)?;

            if human_flag {
                println!("Logged: {}", human::format_weight(&sample, &config.units));
            } else {
                let out = output::success("log", json!({ "entry": sample }));
                println!("{}", serde_json::to_string(&out)?);
            }
        }
        LogEntry::Workout {
            category,
            minutes,
            intensity,
            exercises,
            calories,
            note,
        } => {
            if !minutes.is_finite() || minutes <= 0.0 {
                bail!("duration must be positive, got {}", minutes);
            }
            let mut session = WorkoutSession::new(category, minutes);
            session.intensity = Intensity::from_str(&intensity)?;
            if let Some(e) = exercises {
                session.exercises = e.split(',').map(|s| s.trim().to_string()).collect();
            }
            session.calories = calories;
            session.note = note;
            if let Some(ts) = backdate(date) {
                session.timestamp = ts;
            }
            db.insert_workout(&session)?;

            if human_flag {
                println!("Logged: {}", human::format_workout(&session));
            } else {
                let out = output::success("log", json!({ "entry": session }));
                println!("{}", serde_json::to_string(&out)?);
            }
        }
        LogEntry::Meal { meal, kcal, note } => {
            if !kcal.is_finite() || kcal <= 0.0 {
                bail!("kcal must be positive, got {}", kcal);
            }
            let mut entry = CalorieEntry::new(Meal::from_str(&meal)?, kcal);
            entry.note = note;
            if let Some(ts) = backdate(date) {
                entry.timestamp = ts;
            }
            db.insert_calorie(&entry)?;

            if human_flag {
                println!("Logged: {}", human::format_calorie(&entry));
            } else {
                let out = output::success("log", json!({ "entry": entry }));
                println!("{}", serde_json::to_string(&out)?);
            }
        }
    }
    Ok(())
}

/// Backdated entries land at noon UTC of the requested day.
fn backdate(date: Option<NaiveDate>) -> Option<DateTime<Utc>> {
    date.and_then(|d| d.and_hms_opt(12, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
}
