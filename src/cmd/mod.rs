pub mod achievements;
pub mod config;
pub mod delete;
pub mod init;
pub mod log;
pub mod show;
pub mod status;
