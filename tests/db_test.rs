mod common;

use chrono::{Duration, Utc};
use fitledger::models::record::{CalorieEntry, Intensity, Meal, WorkoutSession};

use common::{date, meal_on, setup_db, weight_on, workout_on};

// ── weights ──────────────────────────────────────────────────────────────────

#[test]
fn test_insert_and_list_weights_newest_first() {
    let (_dir, db) = setup_db();
    let d = date(2026, 8, 25);

    db.insert_weight(&weight_on(d - Duration::days(2), 82.0)).unwrap();
    db.insert_weight(&weight_on(d, 80.0)).unwrap();
    db.insert_weight(&weight_on(d - Duration::days(1), 81.0)).unwrap();

    let all = db.list_weights(None).unwrap();
    assert_eq!(all.len(), 3);
    assert!((all[0].weight_kg - 80.0).abs() < f64::EPSILON);
    assert!((all[2].weight_kg - 82.0).abs() < f64::EPSILON);

    let last_two = db.list_weights(Some(2)).unwrap();
    assert_eq!(last_two.len(), 2);
}

#[test]
fn test_delete_weight_by_id() {
    let (_dir, db) = setup_db();
    let w = weight_on(date(2026, 8, 25), 80.0);
    db.insert_weight(&w).unwrap();

    assert!(db.delete_weight(&w.id).unwrap());
    assert!(!db.delete_weight(&w.id).unwrap());
    assert!(db.list_weights(None).unwrap().is_empty());
}

// ── workouts ─────────────────────────────────────────────────────────────────

#[test]
fn test_workout_round_trip_with_optional_fields() {
    let (_dir, db) = setup_db();

    let mut w = WorkoutSession::new("strength".to_string(), 45.0);
    w.intensity = Intensity::Vigorous;
    w.exercises = vec!["squat".to_string(), "deadlift".to_string()];
    w.calories = Some(320.0);
    w.note = Some("heavy day".to_string());
    db.insert_workout(&w).unwrap();

    let stored = db.list_workouts(None).unwrap();
    assert_eq!(stored.len(), 1);
    let s = &stored[0];
    assert_eq!(s.category, "strength");
    assert_eq!(s.intensity, Intensity::Vigorous);
    assert_eq!(s.exercises, vec!["squat", "deadlift"]);
    assert_eq!(s.calories, Some(320.0));
    assert_eq!(s.note.as_deref(), Some("heavy day"));
}

#[test]
fn test_workout_without_optional_fields() {
    let (_dir, db) = setup_db();
    db.insert_workout(&workout_on(date(2026, 8, 25), "run")).unwrap();

    let stored = db.list_workouts(None).unwrap();
    assert!(stored[0].exercises.is_empty());
    assert!(stored[0].calories.is_none());
    assert!(stored[0].note.is_none());
}

// ── calories ─────────────────────────────────────────────────────────────────

#[test]
fn test_calorie_round_trip() {
    let (_dir, db) = setup_db();

    let mut c = CalorieEntry::new(Meal::Breakfast, 450.0);
    c.note = Some("oatmeal".to_string());
    db.insert_calorie(&c).unwrap();

    let stored = db.list_calories(None).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].meal, Meal::Breakfast);
    assert!((stored[0].kcal - 450.0).abs() < f64::EPSILON);
    assert_eq!(stored[0].note.as_deref(), Some("oatmeal"));
}

#[test]
fn test_delete_calorie_by_id() {
    let (_dir, db) = setup_db();
    let c = meal_on(date(2026, 8, 25), 600.0);
    db.insert_calorie(&c).unwrap();

    assert!(db.delete_calorie(&c.id).unwrap());
    assert!(!db.delete_calorie(&c.id).unwrap());
}

// ── snapshot ─────────────────────────────────────────────────────────────────

#[test]
fn test_snapshot_contains_all_histories() {
    let (_dir, db) = setup_db();
    let d = date(2026, 8, 25);

    db.insert_weight(&weight_on(d, 80.0)).unwrap();
    db.insert_workout(&workout_on(d, "run")).unwrap();
    db.insert_calorie(&meal_on(d, 500.0)).unwrap();

    let snapshot = db.snapshot().unwrap();
    assert_eq!(snapshot.weights.len(), 1);
    assert_eq!(snapshot.workouts.len(), 1);
    assert_eq!(snapshot.calories.len(), 1);
}

// ── achievements ─────────────────────────────────────────────────────────────

#[test]
fn test_achievement_states_empty_by_default() {
    let (_dir, db) = setup_db();
    assert!(db.achievement_states().unwrap().is_empty());
}

#[test]
fn test_record_unlock_round_trip() {
    let (_dir, db) = setup_db();
    let now = Utc::now();

    db.record_unlock("first_weigh_in", now).unwrap();
    let states = db.achievement_states().unwrap();
    assert_eq!(states.len(), 1);
    assert!(states["first_weigh_in"].is_unlocked());
}

#[test]
fn test_record_unlock_keeps_original_timestamp() {
    let (_dir, db) = setup_db();
    let first = Utc::now();
    let later = first + Duration::hours(2);

    db.record_unlock("streak_7", first).unwrap();
    db.record_unlock("streak_7", later).unwrap();

    let states = db.achievement_states().unwrap();
    match states["streak_7"] {
        fitledger::models::achievement::AchievementState::Unlocked { at } => {
            // RFC 3339 round trip keeps sub-second precision.
            assert_eq!(at, first);
        }
        _ => panic!("expected unlocked state"),
    }
}
