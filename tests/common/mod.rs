#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use fitledger::db::Database;
use fitledger::models::record::{CalorieEntry, Meal, WeightSample, WorkoutSession};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

/// Noon UTC on the given day.
pub fn noon(date: NaiveDate) -> DateTime<Utc> {
    let dt = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    Utc.from_utc_datetime(&dt)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Weight sample dated at noon UTC.
pub fn weight_on(day: NaiveDate, kg: f64) -> WeightSample {
    let mut w = WeightSample::new(kg);
    w.timestamp = noon(day);
    w
}

/// Workout session dated at noon UTC.
pub fn workout_on(day: NaiveDate, category: &str) -> WorkoutSession {
    let mut w = WorkoutSession::new(category.to_string(), 30.0);
    w.timestamp = noon(day);
    w
}

/// Calorie entry dated at noon UTC.
pub fn meal_on(day: NaiveDate, kcal: f64) -> CalorieEntry {
    let mut c = CalorieEntry::new(Meal::Lunch, kcal);
    c.timestamp = noon(day);
    c
}
