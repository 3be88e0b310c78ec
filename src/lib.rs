pub mod cli;
pub mod cmd;
pub mod core;
pub mod db;
pub mod models;
pub mod output;
