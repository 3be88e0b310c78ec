pub mod achievement;
pub mod config;
pub mod record;

pub use record::{CalorieEntry, WeightSample, WorkoutSession};
