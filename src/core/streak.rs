use chrono::{Duration, NaiveDate};

use super::snapshot::Snapshot;

/// Consecutive-day activity streak ending at `today`: the largest N such
/// that each of today, today-1, ..., today-(N-1) has at least one record in
/// any history. Walks backward and stops at the first empty day.
pub fn current_streak(snapshot: &Snapshot, today: NaiveDate) -> u32 {
    let days = snapshot.activity_days();

    let mut streak = 0u32;
    let mut check_date = today;
    while days.contains(&check_date) {
        streak += 1;
        check_date -= Duration::days(1);
    }
    streak
}
