use anyhow::Result;
use chrono::{NaiveDate, Utc};

use crate::db::Database;
use crate::models::config::Config;
use crate::output;
use crate::output::human;

pub fn run(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    // Calendar days are UTC everywhere, so "today" must be too.
    let today = date.unwrap_or_else(|| Utc::now().date_naive());
    let snapshot = db.snapshot()?;
    let states = db.achievement_states()?;
    let status = crate::core::status::compute(&snapshot, &states, &config, today)?;

    if human_flag {
        println!("{}", human::format_status(&status, &config.units));
    } else {
        let out = output::success("status", serde_json::to_value(&status)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
