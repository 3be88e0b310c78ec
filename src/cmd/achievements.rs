use anyhow::Result;
use chrono::{NaiveDate, Utc};

use crate::core::achievements::evaluate;
use crate::db::Database;
use crate::models::config::Config;
use crate::output;
use crate::output::human;

/// Run one evaluation pass, persist any new unlocks, and print the catalog.
pub fn run(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    // Calendar days are UTC everywhere, so "today" must be too.
    let today = date.unwrap_or_else(|| Utc::now().date_naive());
    let now = Utc::now();
    let snapshot = db.snapshot()?;
    let states = db.achievement_states()?;

    let eval = evaluate(
        &states,
        &snapshot,
        config.goal.target_weight_kg,
        today,
        now,
    );

    for id in &eval.newly_unlocked {
        db.record_unlock(id, now)?;
    }

    if human_flag {
        println!("{}", human::format_achievements(&eval));
    } else {
        let out = output::success("achievements", serde_json::to_value(&eval)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
