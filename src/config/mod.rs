//! Configuration and path management for cashflow-cli

pub mod paths;
pub mod settings;

pub use paths::CashflowPaths;
pub use settings::Settings;
