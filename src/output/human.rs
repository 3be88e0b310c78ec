use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use crate::core::achievements::Evaluation;
use crate::core::status::StatusData;
use crate::core::units::{self, Quantity};
use crate::models::config::Units;
use crate::models::{CalorieEntry, WeightSample, WorkoutSession};

/// Pretty-print a weight sample in the user's unit system.
pub fn format_weight(w: &WeightSample, user_units: &Units) -> String {
    let ts = w.timestamp.format("%Y-%m-%d %H:%M");
    let (value, unit) = units::to_display(w.weight_kg, Quantity::Weight, user_units)
        .unwrap_or((w.weight_kg, "kg"));
    format!("{} | {} {} {}", ts, value, unit, dim_id(&w.id))
}

pub fn format_workout(w: &WorkoutSession) -> String {
    let ts = w.timestamp.format("%Y-%m-%d %H:%M");
    let mut line = format!(
        "{} | {} {} min ({})",
        ts, w.category, w.duration_min, w.intensity
    );
    if let Some(cal) = w.calories {
        line.push_str(&format!(" {} kcal", cal));
    }
    if !w.exercises.is_empty() {
        line.push_str(&format!("  [{}]", w.exercises.join(", ")));
    }
    if let Some(ref note) = w.note {
        line.push_str(&format!("  # {}", note));
    }
    line.push_str(&format!(" {}", dim_id(&w.id)));
    line
}

pub fn format_calorie(c: &CalorieEntry) -> String {
    let ts = c.timestamp.format("%Y-%m-%d %H:%M");
    let mut line = format!("{} | {} = {} kcal", ts, c.meal, c.kcal);
    if let Some(ref note) = c.note {
        line.push_str(&format!("  # {}", note));
    }
    line.push_str(&format!(" {}", dim_id(&c.id)));
    line
}

fn dim_id(id: &str) -> String {
    let short: String = id.chars().take(8).collect();
    format!("({})", short).dimmed().to_string()
}

/// Pretty-print the status overview.
pub fn format_status(s: &StatusData, user_units: &Units) -> String {
    let mut out = format!("=== fitledger — {} ===\n\n", s.date);

    if let (Some(w), Some(b)) = (s.profile.latest_weight_kg, s.profile.bmi) {
        let (display_w, unit) =
            units::to_display(w, Quantity::Weight, user_units).unwrap_or((w, "kg"));
        let category = s
            .profile
            .bmi_category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "?".to_string());
        out.push_str(&format!(
            "Weight: {} {} | BMI: {} ({})\n",
            display_w, unit, b, category
        ));
    }

    if let Some(ref e) = s.energy {
        out.push_str(&format!(
            "BMR: {:.0} kcal | Daily target: {:.0} kcal",
            e.bmr, e.daily_target
        ));
        if let Some(goal) = e.goal_target {
            out.push_str(&format!(" | Goal-adjusted: {:.0} kcal", goal));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Today: {} weigh-in(s), {} workout(s), {} meal(s) ({:.0} kcal in)\n",
        s.today.weights, s.today.workouts, s.today.meals, s.today.kcal_in
    ));

    if s.streak_days > 0 {
        out.push_str(&format!("Streak: {} day(s)\n", s.streak_days));
    }

    out.push_str(&format!(
        "Level {} — {} pts, {} achievement(s) of {} unlocked",
        s.level.level, s.level.total_points, s.level.unlocked, s.level.total
    ));
    if s.level.points_to_next > 0 {
        out.push_str(&format!(" ({} pts to next level)", s.level.points_to_next));
    }

    out
}

/// Render the achievements pass as a table plus a level summary line.
pub fn format_achievements(eval: &Evaluation) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Achievement", "Category", "Points", "Progress", "Status"]);

    for a in &eval.achievements {
        let (progress, status) = if a.state.is_unlocked() {
            ("100%".to_string(), "unlocked".green().to_string())
        } else {
            (
                format!("{:.0}%", a.progress * 100.0),
                "locked".dimmed().to_string(),
            )
        };
        table.add_row(vec![
            Cell::new(a.title),
            Cell::new(a.category),
            Cell::new(a.points),
            Cell::new(progress),
            Cell::new(status),
        ]);
    }

    let mut out = table.to_string();
    if !eval.newly_unlocked.is_empty() {
        out.push_str(&format!(
            "\n{} {}",
            "Newly unlocked:".bold(),
            eval.newly_unlocked.join(", ")
        ));
    }
    out.push_str(&format!(
        "\nStreak: {} day(s) | Level {} — {} pts",
        eval.streak_days, eval.level, eval.total_points
    ));
    if eval.points_to_next > 0 {
        out.push_str(&format!(" ({} to next)", eval.points_to_next));
    }
    out
}
