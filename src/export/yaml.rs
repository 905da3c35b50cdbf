//! YAML export functionality
//!
//! Same document as the JSON export, in YAML for humans and config-driven
//! pipelines.

use std::io::Write;

use super::json::ReportExport;
use crate::error::{CashflowError, CashflowResult};
use crate::reports::CashFlowReport;

/// Export a report to YAML
pub fn export_report_yaml<W: Write>(report: &CashFlowReport, writer: W) -> CashflowResult<()> {
    let export = ReportExport::from_report(report);

    serde_yaml::to_writer(writer, &export).map_err(|e| CashflowError::Export(e.to_string()))
}
