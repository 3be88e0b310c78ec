pub mod achievements;
pub mod body;
pub mod energy;
pub mod snapshot;
pub mod status;
pub mod streak;
pub mod units;
