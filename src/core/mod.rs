pub mod config;
pub mod list;
pub mod log;
pub mod logic;
pub mod punch;
pub mod status;
pub mod tracker;
