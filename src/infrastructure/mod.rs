//! Infrastructure layer - Configuration and report output

pub mod config;
pub mod export;

pub use config::Config;
pub use export::export_report;
