//! CLI command for the cash-flow report
//!
//! Generates the statement from a saved ledger payload and either renders it
//! to the terminal or exports it to CSV/JSON/YAML.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use super::{default_window, parse_date};
use crate::config::Settings;
use crate::error::{CashflowError, CashflowResult};
use crate::export;
use crate::import;
use crate::reports::CashFlowReport;

/// Export format for `--output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Two CSV sheets: <base>_statement.csv and <base>_details.csv
    Csv,
    /// Single JSON document
    Json,
    /// Single YAML document
    Yaml,
}

/// Arguments for `cashflow report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Journal entries JSON file (API payload or bare array); stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Start date (YYYY-MM-DD); defaults to the configured window ending today
    #[arg(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub to: Option<String>,

    /// Export to file instead of rendering to the terminal
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format used with --output
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,
}

/// Handle `cashflow report`
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> CashflowResult<()> {
    let (from_date, to_date) = resolve_window(settings, &args)?;

    let entries = match &args.input {
        Some(path) => import::read_entries_file(path)?,
        None => import::read_entries(std::io::stdin().lock())?,
    };

    let matcher = settings.cash_matcher();
    let report = CashFlowReport::generate(
        &entries,
        &matcher,
        from_date,
        to_date,
        &settings.currency_code,
    );

    match args.output {
        None => {
            println!("{}", report.format_terminal());
        }
        Some(base) => match args.format {
            ExportFormat::Csv => {
                let statement_path = sheet_path(&base, "statement");
                let details_path = sheet_path(&base, "details");

                export::export_statement_csv(&report, create(&statement_path)?)?;
                export::export_details_csv(&report, create(&details_path)?)?;

                println!("Statement exported to: {}", statement_path.display());
                println!("Details exported to:   {}", details_path.display());
            }
            ExportFormat::Json => {
                let mut writer = create(&base)?;
                export::export_report_json(&report, &mut writer, true)?;
                println!("Report exported to: {}", base.display());
            }
            ExportFormat::Yaml => {
                export::export_report_yaml(&report, create(&base)?)?;
                println!("Report exported to: {}", base.display());
            }
        },
    }

    Ok(())
}

/// Resolve the report window from arguments and settings defaults
fn resolve_window(
    settings: &Settings,
    args: &ReportArgs,
) -> CashflowResult<(chrono::NaiveDate, chrono::NaiveDate)> {
    let to_date = match &args.to {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let from_date = match &args.from {
        Some(s) => parse_date(s)?,
        None => default_window(to_date, settings.default_window_days),
    };

    if from_date > to_date {
        return Err(CashflowError::Validation(format!(
            "Start date {} is after end date {}",
            from_date, to_date
        )));
    }

    Ok((from_date, to_date))
}

/// Derive `<base>_<sheet>.csv` next to the requested output path
fn sheet_path(base: &Path, sheet: &str) -> PathBuf {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cash_flow");
    base.with_file_name(format!("{}_{}.csv", stem, sheet))
}

fn create(path: &Path) -> CashflowResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        CashflowError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_path() {
        assert_eq!(
            sheet_path(Path::new("/tmp/jan.csv"), "statement"),
            PathBuf::from("/tmp/jan_statement.csv")
        );
        assert_eq!(
            sheet_path(Path::new("report"), "details"),
            PathBuf::from("report_details.csv")
        );
    }

    #[test]
    fn test_resolve_window_rejects_inverted_range() {
        let settings = Settings::default();
        let args = ReportArgs {
            input: None,
            from: Some("2025-02-01".to_string()),
            to: Some("2025-01-01".to_string()),
            output: None,
            format: ExportFormat::Csv,
        };
        let err = resolve_window(&settings, &args).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_resolve_window_defaults_to_configured_days() {
        let settings = Settings::default();
        let args = ReportArgs {
            input: None,
            from: None,
            to: Some("2025-03-31".to_string()),
            output: None,
            format: ExportFormat::Csv,
        };
        let (from, to) = resolve_window(&settings, &args).unwrap();
        assert_eq!(to.to_string(), "2025-03-31");
        assert_eq!((to - from).num_days(), 30);
    }
}
