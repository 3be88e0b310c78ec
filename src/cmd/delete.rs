use anyhow::{bail, Result};
use serde_json::json;

use crate::cli::DeleteTarget;
use crate::db::Database;
use crate::models::config::Config;
use crate::output;

pub fn run(target: DeleteTarget, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;

    let (kind, id, removed) = match target {
        DeleteTarget::Weight { id } => {
            let removed = db.delete_weight(&id)?;
            ("weight", id, removed)
        }
        DeleteTarget::Workout { id } => {
            let removed = db.delete_workout(&id)?;
            ("workout", id, removed)
        }
        DeleteTarget::Meal { id } => {
            let removed = db.delete_calorie(&id)?;
            ("meal", id, removed)
        }
    };

    if !removed {
        bail!("no {} entry with id {}", kind, id);
    }

    if human_flag {
        println!("Deleted {} {}", kind, id);
    } else {
        let out = output::success("delete", json!({ "type": kind, "id": id }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
