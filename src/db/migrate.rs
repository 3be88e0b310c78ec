use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS weights (
            id         TEXT PRIMARY KEY,
            timestamp  TEXT NOT NULL,
            weight_kg  REAL NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_weights_ts ON weights(timestamp);

        CREATE TABLE IF NOT EXISTS workouts (
            id           TEXT PRIMARY KEY,
            timestamp    TEXT NOT NULL,
            category     TEXT NOT NULL,
            duration_min REAL NOT NULL,
            intensity    TEXT NOT NULL,
            exercises    TEXT,
            calories     REAL,
            note         TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_workouts_ts ON workouts(timestamp);

        CREATE TABLE IF NOT EXISTS calories (
            id         TEXT PRIMARY KEY,
            timestamp  TEXT NOT NULL,
            meal       TEXT NOT NULL,
            kcal       REAL NOT NULL,
            note       TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_calories_ts ON calories(timestamp);

        CREATE TABLE IF NOT EXISTS achievements (
            id          TEXT PRIMARY KEY,
            unlocked_at TEXT NOT NULL
        );",
    )?;
    Ok(())
}
