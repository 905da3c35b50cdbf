//! JSON export functionality
//!
//! Serializes a complete cash-flow report, with schema versioning and a
//! little metadata, for downstream tooling.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{CashflowError, CashflowResult};
use crate::reports::{CashFlowReport, ClassifiedRow, SectionTotals};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exportable report document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Start of the report window
    pub from_date: NaiveDate,

    /// End of the report window
    pub to_date: NaiveDate,

    /// Section totals and net change
    pub totals: SectionTotals,

    /// Classified cash movements
    pub rows: Vec<ClassifiedRow>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of classified movements
    pub row_count: usize,

    /// Currency code of the movements, if any were classified
    pub currency: Option<String>,
}

impl ReportExport {
    /// Build an export document from a generated report
    pub fn from_report(report: &CashFlowReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            from_date: report.from_date,
            to_date: report.to_date,
            totals: report.totals.clone(),
            rows: report.rows.clone(),
            metadata: ExportMetadata {
                row_count: report.rows.len(),
                currency: report.currency_hint().map(|c| c.to_string()),
            },
        }
    }
}

/// Export a report to JSON
pub fn export_report_json<W: Write>(
    report: &CashFlowReport,
    writer: &mut W,
    pretty: bool,
) -> CashflowResult<()> {
    let export = ReportExport::from_report(report);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| CashflowError::Export(e.to_string()))?;

    Ok(())
}
