use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::models::achievement::{AchievementState, Category, Rule, CATALOG};

use super::snapshot::Snapshot;
use super::streak::current_streak;

/// Cumulative point totals at which each level begins. Level 1 starts at 0;
/// the table is strictly increasing.
pub const LEVEL_THRESHOLDS: &[u32] = &[0, 25, 60, 110, 180, 280];

#[derive(Debug, Serialize)]
pub struct AchievementProgress {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub points: u32,
    #[serde(flatten)]
    pub state: AchievementState,
    pub progress: f64,
}

#[derive(Debug, Serialize)]
pub struct Evaluation {
    pub streak_days: u32,
    pub achievements: Vec<AchievementProgress>,
    pub newly_unlocked: Vec<&'static str>,
    pub total_points: u32,
    pub level: u32,
    pub points_to_next: u32,
}

/// One evaluation pass over the full histories: recompute the streak, unlock
/// any locked achievement whose rule now holds, and re-derive points and
/// level from scratch. Already-unlocked entries are carried over untouched,
/// so the pass is idempotent and unlocking is a one-way ratchet.
pub fn evaluate(
    prior: &HashMap<String, AchievementState>,
    snapshot: &Snapshot,
    target_weight_kg: Option<f64>,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Evaluation {
    let streak = current_streak(snapshot, today);

    let mut achievements = Vec::with_capacity(CATALOG.len());
    let mut newly_unlocked = Vec::new();
    let mut total_points = 0u32;

    for def in CATALOG {
        let prior_state = prior
            .get(def.id)
            .copied()
            .unwrap_or(AchievementState::Locked);

        let (state, progress) = match prior_state {
            AchievementState::Unlocked { at } => (AchievementState::Unlocked { at }, 1.0),
            AchievementState::Locked => {
                let p = rule_progress(&def.rule, snapshot, streak, target_weight_kg, today);
                if p >= 1.0 {
                    newly_unlocked.push(def.id);
                    (AchievementState::Unlocked { at: now }, 1.0)
                } else {
                    (AchievementState::Locked, p)
                }
            }
        };

        if state.is_unlocked() {
            total_points += def.points;
        }

        achievements.push(AchievementProgress {
            id: def.id,
            title: def.title,
            description: def.description,
            category: def.category,
            points: def.points,
            state,
            progress,
        });
    }

    let (level, points_to_next) = level_for_points(total_points);

    Evaluation {
        streak_days: streak,
        achievements,
        newly_unlocked,
        total_points,
        level,
        points_to_next,
    }
}

/// Fraction of the rule satisfied, clamped to [0, 1]. Threshold rules report
/// partial progress; the goal-proximity rule is all or nothing.
fn rule_progress(
    rule: &Rule,
    snapshot: &Snapshot,
    streak: u32,
    target_weight_kg: Option<f64>,
    today: NaiveDate,
) -> f64 {
    match *rule {
        Rule::WeightEntries(n) => fraction(snapshot.weights.len(), n),
        Rule::WorkoutsTotal(n) => fraction(snapshot.workouts.len(), n),
        Rule::MealsTotal(n) => fraction(snapshot.calories.len(), n),
        Rule::StreakDays(n) => fraction(streak as usize, n),
        Rule::WorkoutsInTrailingDays { count, days } => {
            fraction(snapshot.workouts_in_trailing_days(today, days), count)
        }
        Rule::WithinOfGoalKg(tolerance) => {
            let latest = snapshot.latest_weight().map(|w| w.weight_kg);
            match (latest, target_weight_kg) {
                (Some(w), Some(t)) if (w - t).abs() <= tolerance => 1.0,
                _ => 0.0,
            }
        }
    }
}

fn fraction(have: usize, need: u32) -> f64 {
    if need == 0 {
        return 1.0;
    }
    (have as f64 / f64::from(need)).min(1.0)
}

/// Map total points to (level, points to the next level). The level is the
/// highest tier whose threshold is <= total; at the top tier the gap is 0.
pub fn level_for_points(total: u32) -> (u32, u32) {
    let mut level = 1u32;
    for (i, threshold) in LEVEL_THRESHOLDS.iter().enumerate() {
        if total >= *threshold {
            level = (i + 1) as u32;
        }
    }
    let points_to_next = LEVEL_THRESHOLDS
        .get(level as usize)
        .map(|next| next - total)
        .unwrap_or(0);
    (level, points_to_next)
}
