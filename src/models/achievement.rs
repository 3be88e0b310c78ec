use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Logging,
    Workout,
    Streak,
    Body,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging => write!(f, "logging"),
            Self::Workout => write!(f, "workout"),
            Self::Streak => write!(f, "streak"),
            Self::Body => write!(f, "body"),
        }
    }
}

/// Unlock rule, evaluated against a full history snapshot. Declarative so
/// the evaluator can derive a progress fraction for locked entries.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// At least N weight samples ever.
    WeightEntries(u32),
    /// At least N workout sessions ever.
    WorkoutsTotal(u32),
    /// At least N calorie entries ever.
    MealsTotal(u32),
    /// Current consecutive-day activity streak of at least N days.
    StreakDays(u32),
    /// At least `count` workouts within the trailing `days` days.
    WorkoutsInTrailingDays { count: u32, days: i64 },
    /// Latest weight within `tolerance_kg` of the configured goal weight.
    WithinOfGoalKg(f64),
}

/// Static catalog entry. The catalog is fixed at build time; per-user state
/// lives in `AchievementState`.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub points: u32,
    pub rule: Rule,
}

/// One-way ratchet: once unlocked an achievement never re-locks, even if
/// the underlying history stops satisfying the rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AchievementState {
    Locked,
    Unlocked { at: DateTime<Utc> },
}

impl AchievementState {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, Self::Unlocked { .. })
    }
}

pub const CATALOG: &[AchievementDef] = &[
    AchievementDef {
        id: "first_weigh_in",
        title: "First Weigh-In",
        description: "Log your first weight sample",
        category: Category::Logging,
        points: 10,
        rule: Rule::WeightEntries(1),
    },
    AchievementDef {
        id: "first_workout",
        title: "First Workout",
        description: "Log your first workout session",
        category: Category::Workout,
        points: 10,
        rule: Rule::WorkoutsTotal(1),
    },
    AchievementDef {
        id: "first_meal",
        title: "First Meal",
        description: "Log your first calorie entry",
        category: Category::Logging,
        points: 10,
        rule: Rule::MealsTotal(1),
    },
    AchievementDef {
        id: "streak_7",
        title: "One Week Strong",
        description: "Log something 7 days in a row",
        category: Category::Streak,
        points: 25,
        rule: Rule::StreakDays(7),
    },
    AchievementDef {
        id: "streak_30",
        title: "Habit Formed",
        description: "Log something 30 days in a row",
        category: Category::Streak,
        points: 100,
        rule: Rule::StreakDays(30),
    },
    AchievementDef {
        id: "workouts_10",
        title: "Ten Sessions",
        description: "Complete 10 workouts",
        category: Category::Workout,
        points: 25,
        rule: Rule::WorkoutsTotal(10),
    },
    AchievementDef {
        id: "week_warrior",
        title: "Week Warrior",
        description: "3 workouts within the last 7 days",
        category: Category::Workout,
        points: 20,
        rule: Rule::WorkoutsInTrailingDays { count: 3, days: 7 },
    },
    AchievementDef {
        id: "weigh_ins_30",
        title: "Scale Regular",
        description: "Log 30 weight samples",
        category: Category::Logging,
        points: 30,
        rule: Rule::WeightEntries(30),
    },
    AchievementDef {
        id: "goal_in_sight",
        title: "Goal In Sight",
        description: "Weigh in within 0.5 kg of your goal weight",
        category: Category::Body,
        points: 50,
        rule: Rule::WithinOfGoalKg(0.5),
    },
];

/// Look up a catalog entry by id.
pub fn find(id: &str) -> Option<&'static AchievementDef> {
    CATALOG.iter().find(|d| d.id == id)
}
