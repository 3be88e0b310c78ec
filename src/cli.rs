use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fitledger", version, about = "Agent-native fitness tracking CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize profile and data directory
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Log an entry
    Log {
        #[command(subcommand)]
        entry: LogEntry,
    },

    /// Show history
    Show {
        #[command(subcommand)]
        history: ShowTarget,
    },

    /// Delete an entry by id
    Delete {
        #[command(subcommand)]
        target: DeleteTarget,
    },

    /// Quick status overview
    Status,

    /// Evaluate and list achievements
    Achievements,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum LogEntry {
    /// Log a body-weight sample
    Weight {
        /// Weight in the configured unit system (kg or lbs)
        value: f64,
    },

    /// Log a workout session
    Workout {
        /// Workout category (e.g. run, strength, yoga)
        category: String,

        /// Duration in minutes
        minutes: f64,

        /// Intensity: light, moderate, or vigorous
        #[arg(long, default_value = "moderate")]
        intensity: String,

        /// Comma-separated exercise list
        #[arg(long)]
        exercises: Option<String>,

        /// Calories burned
        #[arg(long)]
        calories: Option<f64>,

        /// Free-text note
        #[arg(long)]
        note: Option<String>,
    },

    /// Log a calorie entry
    Meal {
        /// Meal: breakfast, lunch, dinner, or snack
        meal: String,

        /// Energy in kcal
        kcal: f64,

        /// Free-text note
        #[arg(long)]
        note: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ShowTarget {
    /// Weight samples
    Weights {
        /// Number of recent entries
        #[arg(long)]
        last: Option<u32>,
    },
    /// Workout sessions
    Workouts {
        /// Number of recent entries
        #[arg(long)]
        last: Option<u32>,
    },
    /// Calorie entries
    Meals {
        /// Number of recent entries
        #[arg(long)]
        last: Option<u32>,
    },
}

#[derive(Subcommand)]
pub enum DeleteTarget {
    /// Delete a weight sample
    Weight { id: String },
    /// Delete a workout session
    Workout { id: String },
    /// Delete a calorie entry
    Meal { id: String },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. height, age, sex, activity, target_weight)
        key: String,
        /// Config value
        value: String,
    },
}
