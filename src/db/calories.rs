use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::params;
use std::str::FromStr;

use crate::models::record::Meal;
use crate::models::CalorieEntry;

use super::Database;

impl Database {
    pub fn insert_calorie(&self, c: &CalorieEntry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO calories (id, timestamp, meal, kcal, note)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                c.id,
                c.timestamp.to_rfc3339(),
                c.meal.to_string(),
                c.kcal,
                c.note,
            ],
        )?;
        Ok(())
    }

    pub fn list_calories(&self, limit: Option<u32>) -> Result<Vec<CalorieEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, timestamp, meal, kcal, note FROM calories
             ORDER BY timestamp DESC LIMIT ?1",
        )?;
        let limit = limit.map(i64::from).unwrap_or(-1);
        let rows = stmt.query_map(params![limit], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, Option<String>>(4)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, ts, meal, kcal, note) = row?;
            let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(&ts)?.with_timezone(&Utc);
            entries.push(CalorieEntry {
                id,
                timestamp,
                meal: Meal::from_str(&meal)?,
                kcal,
                note,
            });
        }
        Ok(entries)
    }

    /// Delete a calorie entry by id. Returns whether a row was removed.
    pub fn delete_calorie(&self, id: &str) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM calories WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }
}
