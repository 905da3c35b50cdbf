//! CLI command handlers for cashflow-cli

pub mod currency;
pub mod journal;
pub mod report;

pub use currency::{handle_currency_command, CurrencyCommands};
pub use journal::{handle_journal_command, JournalCommands};
pub use report::{handle_report_command, ExportFormat, ReportArgs};

use chrono::{Days, NaiveDate};

use crate::error::{CashflowError, CashflowResult};

/// Parse an operator-supplied date argument
pub fn parse_date(s: &str) -> CashflowResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        CashflowError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

/// Default window start: `days` days before the end date
pub fn default_window(to_date: NaiveDate, days: u32) -> NaiveDate {
    to_date
        .checked_sub_days(Days::new(days as u64))
        .unwrap_or(to_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(parse_date("15/01/2025").unwrap_err().is_validation());
        assert!(parse_date("").unwrap_err().is_validation());
    }

    #[test]
    fn test_default_window() {
        let to = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(
            default_window(to, 30),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }
}
