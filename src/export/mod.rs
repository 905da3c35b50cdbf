//! Export functionality for cashflow-cli
//!
//! Supports CSV (statement + detail sheets), JSON, and YAML formats.

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_details_csv, export_statement_csv};
pub use json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;
