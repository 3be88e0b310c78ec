use anyhow::Result;
use serde_json::json;

use crate::cli::ShowTarget;
use crate::db::Database;
use crate::models::config::Config;
use crate::output;
use crate::output::human;

pub fn run(history: ShowTarget, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    match history {
        ShowTarget::Weights { last } => {
            let entries = db.list_weights(last)?;
            if human_flag {
                if entries.is_empty() {
                    println!("No weight samples logged.");
                }
                for w in &entries {
                    println!("{}", human::format_weight(w, &config.units));
                }
            } else {
                let out = output::success("show", json!({ "weights": entries }));
                println!("{}", serde_json::to_string(&out)?);
            }
        }
        ShowTarget::Workouts { last } => {
            let entries = db.list_workouts(last)?;
            if human_flag {
                if entries.is_empty() {
                    println!("No workouts logged.");
                }
                for w in &entries {
                    println!("{}", human::format_workout(w));
                }
            } else {
                let out = output::success("show", json!({ "workouts": entries }));
                println!("{}", serde_json::to_string(&out)?);
            }
        }
        ShowTarget::Meals { last } => {
            let entries = db.list_calories(last)?;
            if human_flag {
                if entries.is_empty() {
                    println!("No meals logged.");
                }
                for c in &entries {
                    println!("{}", human::format_calorie(c));
                }
            } else {
                let out = output::success("show", json!({ "meals": entries }));
                println!("{}", serde_json::to_string(&out)?);
            }
        }
    }
    Ok(())
}
