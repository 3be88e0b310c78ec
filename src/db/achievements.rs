use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::params;
use std::collections::HashMap;

use crate::models::achievement::AchievementState;

use super::Database;

impl Database {
    /// Load persisted achievement states. Only unlocked entries are stored;
    /// anything absent is locked.
    pub fn achievement_states(&self) -> Result<HashMap<String, AchievementState>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, unlocked_at FROM achievements")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut states = HashMap::new();
        for row in rows {
            let (id, at) = row?;
            let at: DateTime<Utc> = DateTime::parse_from_rfc3339(&at)?.with_timezone(&Utc);
            states.insert(id, AchievementState::Unlocked { at });
        }
        Ok(states)
    }

    /// Record a newly unlocked achievement. Idempotent: re-recording keeps
    /// the original unlock timestamp.
    pub fn record_unlock(&self, id: &str, at: DateTime<Utc>) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO achievements (id, unlocked_at) VALUES (?1, ?2)",
            params![id, at.to_rfc3339()],
        )?;
        Ok(())
    }
}
