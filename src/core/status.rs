use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::achievement::{AchievementState, CATALOG};
use crate::models::config::Config;

use super::achievements::level_for_points;
use super::body;
use super::energy;
use super::snapshot::Snapshot;
use super::streak::current_streak;

#[derive(Serialize)]
pub struct StatusData {
    pub date: NaiveDate,
    pub profile: ProfileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyStatus>,
    pub today: TodayStatus,
    pub streak_days: u32,
    pub level: LevelStatus,
}

#[derive(Serialize)]
pub struct ProfileStatus {
    pub height_cm: Option<f64>,
    pub latest_weight_kg: Option<f64>,
    pub bmi: Option<f64>,
    pub bmi_category: Option<body::BmiCategory>,
}

#[derive(Serialize)]
pub struct EnergyStatus {
    pub bmr: f64,
    pub daily_target: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_target: Option<f64>,
}

#[derive(Serialize)]
pub struct TodayStatus {
    pub weights: usize,
    pub workouts: usize,
    pub meals: usize,
    pub kcal_in: f64,
}

#[derive(Serialize)]
pub struct LevelStatus {
    pub unlocked: usize,
    pub total: usize,
    pub total_points: u32,
    pub level: u32,
    pub points_to_next: u32,
}

/// Compute the daily status overview from a history snapshot and the
/// persisted achievement states. Read-only: this never unlocks anything.
pub fn compute(
    snapshot: &Snapshot,
    states: &HashMap<String, AchievementState>,
    config: &Config,
    today: NaiveDate,
) -> Result<StatusData> {
    let latest_weight = snapshot.latest_weight().map(|w| w.weight_kg);

    let bmi = match (config.profile.height_cm, latest_weight) {
        (Some(h), Some(w)) => Some(body::bmi(h, w)?),
        _ => None,
    };
    let bmi_category = bmi.map(body::category);

    let energy = match (config.profile.height_cm, config.profile.age_years, latest_weight) {
        (Some(h), Some(age), Some(w)) => {
            let bmr = energy::bmr(config.profile.sex, w, h, age)?;
            let daily = energy::daily_target(bmr, config.profile.activity);
            let goal_target = energy::goal_adjusted_target(daily, w, &config.goal)?;
            Some(EnergyStatus {
                bmr,
                daily_target: daily,
                goal_target,
            })
        }
        _ => None,
    };

    let today_status = TodayStatus {
        weights: snapshot
            .weights
            .iter()
            .filter(|w| w.timestamp.date_naive() == today)
            .count(),
        workouts: snapshot
            .workouts
            .iter()
            .filter(|w| w.timestamp.date_naive() == today)
            .count(),
        meals: snapshot
            .calories
            .iter()
            .filter(|c| c.timestamp.date_naive() == today)
            .count(),
        kcal_in: snapshot
            .calories
            .iter()
            .filter(|c| c.timestamp.date_naive() == today)
            .map(|c| c.kcal)
            .sum(),
    };

    let total_points: u32 = CATALOG
        .iter()
        .filter(|d| states.get(d.id).is_some_and(|s| s.is_unlocked()))
        .map(|d| d.points)
        .sum();
    let unlocked = states.values().filter(|s| s.is_unlocked()).count();
    let (level, points_to_next) = level_for_points(total_points);

    Ok(StatusData {
        date: today,
        profile: ProfileStatus {
            height_cm: config.profile.height_cm,
            latest_weight_kg: latest_weight,
            bmi,
            bmi_category,
        },
        energy,
        today: today_status,
        streak_days: current_streak(snapshot, today),
        level: LevelStatus {
            unlocked,
            total: CATALOG.len(),
            total_points,
            level,
            points_to_next,
        },
    })
}
