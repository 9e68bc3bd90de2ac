pub mod checklist;
pub mod config;
pub mod error;
pub mod telemetry;
