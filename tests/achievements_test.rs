mod common;

use chrono::{Duration, Utc};
use std::collections::HashMap;

use fitledger::core::achievements::{evaluate, level_for_points, LEVEL_THRESHOLDS};
use fitledger::core::snapshot::Snapshot;
use fitledger::models::achievement::{AchievementState, CATALOG};

use common::{date, meal_on, weight_on, workout_on};

fn states_of(eval: &fitledger::core::achievements::Evaluation) -> HashMap<String, AchievementState> {
    eval.achievements
        .iter()
        .map(|a| (a.id.to_string(), a.state))
        .collect()
}

// ── empty histories ──────────────────────────────────────────────────────────

#[test]
fn test_empty_history_yields_no_unlocks() {
    let eval = evaluate(
        &HashMap::new(),
        &Snapshot::default(),
        None,
        date(2026, 8, 25),
        Utc::now(),
    );
    assert_eq!(eval.streak_days, 0);
    assert!(eval.newly_unlocked.is_empty());
    assert_eq!(eval.total_points, 0);
    assert_eq!(eval.level, 1);
    assert_eq!(eval.points_to_next, LEVEL_THRESHOLDS[1]);
    assert!(eval.achievements.iter().all(|a| !a.state.is_unlocked()));
}

// ── unlocking ────────────────────────────────────────────────────────────────

#[test]
fn test_first_weigh_in_unlocks() {
    let today = date(2026, 8, 25);
    let snapshot = Snapshot {
        weights: vec![weight_on(today, 80.0)],
        ..Default::default()
    };
    let eval = evaluate(&HashMap::new(), &snapshot, None, today, Utc::now());

    assert!(eval.newly_unlocked.contains(&"first_weigh_in"));
    let a = eval
        .achievements
        .iter()
        .find(|a| a.id == "first_weigh_in")
        .unwrap();
    assert!(a.state.is_unlocked());
    assert!((a.progress - 1.0).abs() < f64::EPSILON);
    assert_eq!(eval.total_points, 10);
}

#[test]
fn test_week_warrior_needs_three_workouts_in_window() {
    let today = date(2026, 8, 25);

    // Two inside the window, one just outside: locked at 2/3.
    let snapshot = Snapshot {
        workouts: vec![
            workout_on(today, "run"),
            workout_on(today - Duration::days(6), "run"),
            workout_on(today - Duration::days(7), "run"),
        ],
        ..Default::default()
    };
    let eval = evaluate(&HashMap::new(), &snapshot, None, today, Utc::now());
    let a = eval
        .achievements
        .iter()
        .find(|a| a.id == "week_warrior")
        .unwrap();
    assert!(!a.state.is_unlocked());
    assert!((a.progress - 2.0 / 3.0).abs() < 1e-9);

    // Third workout inside the window unlocks.
    let snapshot = Snapshot {
        workouts: vec![
            workout_on(today, "run"),
            workout_on(today - Duration::days(3), "run"),
            workout_on(today - Duration::days(6), "run"),
        ],
        ..Default::default()
    };
    let eval = evaluate(&HashMap::new(), &snapshot, None, today, Utc::now());
    assert!(eval.newly_unlocked.contains(&"week_warrior"));
}

#[test]
fn test_streak_achievement_progress_fraction() {
    let today = date(2026, 8, 25);
    let snapshot = Snapshot {
        calories: vec![
            meal_on(today, 500.0),
            meal_on(today - Duration::days(1), 500.0),
            meal_on(today - Duration::days(2), 500.0),
        ],
        ..Default::default()
    };
    let eval = evaluate(&HashMap::new(), &snapshot, None, today, Utc::now());
    assert_eq!(eval.streak_days, 3);
    let a = eval
        .achievements
        .iter()
        .find(|a| a.id == "streak_7")
        .unwrap();
    assert!((a.progress - 3.0 / 7.0).abs() < 1e-9);
}

#[test]
fn test_goal_in_sight_requires_target_and_proximity() {
    let today = date(2026, 8, 25);
    let snapshot = Snapshot {
        weights: vec![weight_on(today, 70.4)],
        ..Default::default()
    };

    // No target set: locked.
    let eval = evaluate(&HashMap::new(), &snapshot, None, today, Utc::now());
    let a = eval
        .achievements
        .iter()
        .find(|a| a.id == "goal_in_sight")
        .unwrap();
    assert!(!a.state.is_unlocked());

    // Within 0.5 kg of target: unlocked.
    let eval = evaluate(&HashMap::new(), &snapshot, Some(70.0), today, Utc::now());
    assert!(eval.newly_unlocked.contains(&"goal_in_sight"));

    // Too far: locked.
    let far = Snapshot {
        weights: vec![weight_on(today, 71.0)],
        ..Default::default()
    };
    let eval = evaluate(&HashMap::new(), &far, Some(70.0), today, Utc::now());
    assert!(!eval.newly_unlocked.contains(&"goal_in_sight"));
}

// ── ratchet and idempotency ──────────────────────────────────────────────────

#[test]
fn test_unlock_is_one_way_ratchet() {
    let today = date(2026, 8, 25);
    let snapshot = Snapshot {
        weights: vec![weight_on(today, 80.0)],
        ..Default::default()
    };
    let first = evaluate(&HashMap::new(), &snapshot, None, today, Utc::now());
    let states = states_of(&first);

    // Re-evaluate with an empty (strict subset) history: stays unlocked.
    let second = evaluate(&states, &Snapshot::default(), None, today, Utc::now());
    let a = second
        .achievements
        .iter()
        .find(|a| a.id == "first_weigh_in")
        .unwrap();
    assert!(a.state.is_unlocked());
    assert!(second.newly_unlocked.is_empty());
    assert_eq!(second.total_points, first.total_points);
}

#[test]
fn test_evaluation_is_idempotent() {
    let today = date(2026, 8, 25);
    let snapshot = Snapshot {
        weights: vec![weight_on(today, 80.0)],
        workouts: vec![workout_on(today, "run")],
        ..Default::default()
    };
    let now = Utc::now();

    let first = evaluate(&HashMap::new(), &snapshot, None, today, now);
    let states = states_of(&first);
    let second = evaluate(&states, &snapshot, None, today, now + Duration::hours(1));

    // No double-awarding, no re-unlocking, identical totals.
    assert!(second.newly_unlocked.is_empty());
    assert_eq!(second.total_points, first.total_points);
    assert_eq!(second.level, first.level);

    // Unlock timestamps carry over from the first pass.
    for (a, b) in first.achievements.iter().zip(second.achievements.iter()) {
        assert_eq!(a.state, b.state);
    }
}

// ── leveling ─────────────────────────────────────────────────────────────────

#[test]
fn test_level_for_points_thresholds() {
    assert_eq!(level_for_points(0), (1, LEVEL_THRESHOLDS[1]));
    assert_eq!(level_for_points(LEVEL_THRESHOLDS[1]), (2, LEVEL_THRESHOLDS[2] - LEVEL_THRESHOLDS[1]));
    let max = *LEVEL_THRESHOLDS.last().unwrap();
    assert_eq!(level_for_points(max), (LEVEL_THRESHOLDS.len() as u32, 0));
    assert_eq!(level_for_points(max + 100), (LEVEL_THRESHOLDS.len() as u32, 0));
}

#[test]
fn test_level_is_non_decreasing_in_points() {
    let mut last = 0;
    for points in 0..=400 {
        let (level, _) = level_for_points(points);
        assert!(level >= last);
        last = level;
    }
}

#[test]
fn test_max_level_reachable_with_catalog_points() {
    let total: u32 = CATALOG.iter().map(|d| d.points).sum();
    assert!(total >= *LEVEL_THRESHOLDS.last().unwrap());
}
