use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::params;
use std::str::FromStr;

use crate::models::record::Intensity;
use crate::models::WorkoutSession;

use super::Database;

struct WorkoutRow {
    id: String,
    timestamp: String,
    category: String,
    duration_min: f64,
    intensity: String,
    exercises: Option<String>,
    calories: Option<f64>,
    note: Option<String>,
}

fn row_to_workout(r: WorkoutRow) -> Result<WorkoutSession> {
    let exercises: Vec<String> = match r.exercises {
        Some(ref e) => serde_json::from_str(e).unwrap_or_default(),
        None => Vec::new(),
    };
    let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(&r.timestamp)?.with_timezone(&Utc);
    let intensity = Intensity::from_str(&r.intensity)?;
    Ok(WorkoutSession {
        id: r.id,
        timestamp,
        category: r.category,
        duration_min: r.duration_min,
        intensity,
        exercises,
        calories: r.calories,
        note: r.note,
    })
}

impl Database {
    pub fn insert_workout(&self, w: &WorkoutSession) -> Result<()> {
        let exercises_json = if w.exercises.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&w.exercises)?)
        };
        self.conn.execute(
            "INSERT INTO workouts (id, timestamp, category, duration_min, intensity, exercises, calories, note)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                w.id,
                w.timestamp.to_rfc3339(),
                w.category,
                w.duration_min,
                w.intensity.to_string(),
                exercises_json,
                w.calories,
                w.note,
            ],
        )?;
        Ok(())
    }

    pub fn list_workouts(&self, limit: Option<u32>) -> Result<Vec<WorkoutSession>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, timestamp, category, duration_min, intensity, exercises, calories, note
             FROM workouts ORDER BY timestamp DESC LIMIT ?1",
        )?;
        let limit = limit.map(i64::from).unwrap_or(-1);
        let rows = stmt.query_map(params![limit], |row| {
            Ok(WorkoutRow {
                id: row.get(0)?,
                timestamp: row.get(1)?,
                category: row.get(2)?,
                duration_min: row.get(3)?,
                intensity: row.get(4)?,
                exercises: row.get(5)?,
                calories: row.get(6)?,
                note: row.get(7)?,
            })
        })?;

        let mut workouts = Vec::new();
        for row in rows {
            workouts.push(row_to_workout(row?)?);
        }
        Ok(workouts)
    }

    /// Delete a workout session by id. Returns whether a row was removed.
    pub fn delete_workout(&self, id: &str) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM workouts WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }
}
