use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::models::WeightSample;

use super::Database;

impl Database {
    pub fn insert_weight(&self, w: &WeightSample) -> Result<()> {
        self.conn.execute(
            "INSERT INTO weights (id, timestamp, weight_kg) VALUES (?1, ?2, ?3)",
            params![w.id, w.timestamp.to_rfc3339(), w.weight_kg],
        )?;
        Ok(())
    }

    pub fn list_weights(&self, limit: Option<u32>) -> Result<Vec<WeightSample>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, timestamp, weight_kg FROM weights
             ORDER BY timestamp DESC LIMIT ?1",
        )?;
        let limit = limit.map(i64::from).unwrap_or(-1);
        let rows = stmt.query_map(params![limit], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
            ))
        })?;

        let mut samples = Vec::new();
        for row in rows {
            let (id, ts, weight_kg) = row?;
            let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(&ts)?.with_timezone(&Utc);
            samples.push(WeightSample {
                id,
                timestamp,
                weight_kg,
            });
        }
        Ok(samples)
    }

    /// Delete a weight sample by id. Returns whether a row was removed.
    pub fn delete_weight(&self, id: &str) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM weights WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }
}
