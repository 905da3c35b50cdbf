//! CSV export functionality
//!
//! Writes the cash-flow statement as two CSV sheets: a summary statement
//! (section totals plus net change) and a detail sheet with one record per
//! classified movement.

use csv::WriterBuilder;
use std::io::Write;

use crate::display;
use crate::error::{CashflowError, CashflowResult};
use crate::reports::{CashFlowReport, Section};

/// Write the statement summary sheet
///
/// Layout mirrors the ERP's spreadsheet export: a title row, the period, a
/// spacer, then `Section,Amount` pairs and the net change.
pub fn export_statement_csv<W: Write>(report: &CashFlowReport, writer: W) -> CashflowResult<()> {
    let mut w = WriterBuilder::new().flexible(true).from_writer(writer);

    w.write_record(["Cash Flow Statement"])
        .map_err(export_err)?;
    w.write_record([format!("Period: {} to {}", report.from_date, report.to_date)])
        .map_err(export_err)?;
    w.write_record([""]).map_err(export_err)?;
    w.write_record(["Section", "Amount"]).map_err(export_err)?;

    for section in [Section::Operating, Section::Investing, Section::Financing] {
        w.write_record([
            section.heading().to_string(),
            report.totals.section(section).to_decimal_string(),
        ])
        .map_err(export_err)?;
    }
    w.write_record([
        "Net Change in Cash".to_string(),
        report.totals.net_change.to_decimal_string(),
    ])
    .map_err(export_err)?;

    w.flush().map_err(|e| CashflowError::Export(e.to_string()))
}

/// Write the detail sheet, one record per classified cash movement
pub fn export_details_csv<W: Write>(report: &CashFlowReport, writer: W) -> CashflowResult<()> {
    let mut w = WriterBuilder::new().from_writer(writer);

    w.write_record(["Date", "Reference", "Description", "Section", "Cash Impact", "Currency"])
        .map_err(export_err)?;

    for row in &report.rows {
        w.write_record([
            display::short_date(&row.date),
            row.reference.clone(),
            row.description.clone(),
            row.section.to_string(),
            row.cash_impact.to_decimal_string(),
            row.currency.clone(),
        ])
        .map_err(export_err)?;
    }

    w.flush().map_err(|e| CashflowError::Export(e.to_string()))
}

fn export_err(e: csv::Error) -> CashflowError {
    CashflowError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::{ClassifiedRow, SectionTotals};
    use chrono::NaiveDate;

    fn sample_report() -> CashFlowReport {
        CashFlowReport {
            from_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            rows: vec![ClassifiedRow {
                entry_id: "je-1".to_string(),
                date: "2025-01-15T00:00:00.000Z".to_string(),
                reference: "JE-0001".to_string(),
                description: "Office rent, January".to_string(),
                section: Section::Operating,
                cash_impact: Money::from_cents(-50000),
                currency: "USD".to_string(),
            }],
            totals: SectionTotals {
                operating: Money::from_cents(-50000),
                investing: Money::zero(),
                financing: Money::zero(),
                net_change: Money::from_cents(-50000),
            },
        }
    }

    #[test]
    fn test_statement_sheet_layout() {
        let mut out = Vec::new();
        export_statement_csv(&sample_report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Cash Flow Statement\n"));
        assert!(text.contains("Period: 2025-01-01 to 2025-01-31"));
        assert!(text.contains("Section,Amount"));
        assert!(text.contains("Operating Activities,-500.00"));
        assert!(text.contains("Investing Activities,0.00"));
        assert!(text.contains("Net Change in Cash,-500.00"));
    }

    #[test]
    fn test_details_sheet_rows() {
        let mut out = Vec::new();
        export_details_csv(&sample_report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Date,Reference,Description,Section,Cash Impact,Currency\n"));
        assert!(text.contains("Jan 15, 2025"));
        assert!(text.contains("JE-0001"));
        assert!(text.contains("Operating"));
        assert!(text.contains("-500.00,USD"));
    }

    #[test]
    fn test_quoting_of_commas_in_descriptions() {
        let mut out = Vec::new();
        export_details_csv(&sample_report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Office rent, January\""));
    }
}
