pub mod bank;
pub mod config;
pub mod history;
pub mod play;
