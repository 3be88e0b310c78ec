use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::models::{CalorieEntry, WeightSample, WorkoutSession};

/// Immutable copy of the three histories, taken by the storage layer and
/// handed to the pure calculators. Histories are append/delete-only, so a
/// snapshot is always internally consistent.
#[derive(Debug, Default, Clone)]
pub struct Snapshot {
    pub weights: Vec<WeightSample>,
    pub workouts: Vec<WorkoutSession>,
    pub calories: Vec<CalorieEntry>,
}

impl Snapshot {
    /// Most recent weight sample, if any.
    pub fn latest_weight(&self) -> Option<&WeightSample> {
        self.weights.iter().max_by_key(|w| w.timestamp)
    }

    /// Distinct UTC calendar days with at least one record in any history.
    /// "Activity on day D" is derived here, never stored.
    pub fn activity_days(&self) -> BTreeSet<NaiveDate> {
        let mut days = BTreeSet::new();
        for w in &self.weights {
            days.insert(w.timestamp.date_naive());
        }
        for w in &self.workouts {
            days.insert(w.timestamp.date_naive());
        }
        for c in &self.calories {
            days.insert(c.timestamp.date_naive());
        }
        days
    }

    /// Workouts whose calendar day falls within the trailing window of
    /// `days` days ending at `today` (inclusive).
    pub fn workouts_in_trailing_days(&self, today: NaiveDate, days: i64) -> usize {
        let cutoff = today - chrono::Duration::days(days - 1);
        self.workouts
            .iter()
            .filter(|w| {
                let d = w.timestamp.date_naive();
                d >= cutoff && d <= today
            })
            .count()
    }
}
