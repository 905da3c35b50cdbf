//! Journal-entry models
//!
//! A journal entry is one balanced accounting transaction made of debit and
//! credit lines. Entries arrive as JSON from the accounting API with amounts
//! encoded as strings and dates as ISO timestamps; both are kept verbatim on
//! the structs and interpreted through lenient accessors.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::account::ChartOfAccount;
use super::currency::Currency;
use super::money::Money;

/// One debit/credit leg of a journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryLine {
    /// Server-issued identifier
    #[serde(default)]
    pub id: String,

    /// Owning journal entry
    #[serde(default)]
    pub journal_entry_id: String,

    /// Linked chart-of-account id
    #[serde(default)]
    pub chart_of_account_id: String,

    /// Debit amount as a decimal string (may be malformed)
    #[serde(default)]
    pub debit_amount: String,

    /// Credit amount as a decimal string (may be malformed)
    #[serde(default)]
    pub credit_amount: String,

    /// Line description
    #[serde(default)]
    pub description: String,

    /// VAT portion as a decimal string
    #[serde(default)]
    pub vat_amount: String,

    /// Embedded account definition
    #[serde(default)]
    pub chart_of_account: ChartOfAccount,
}

impl JournalEntryLine {
    /// Debit amount, zero when missing or malformed
    pub fn debit(&self) -> Money {
        Money::parse_lenient(&self.debit_amount)
    }

    /// Credit amount, zero when missing or malformed
    pub fn credit(&self) -> Money {
        Money::parse_lenient(&self.credit_amount)
    }

    /// Larger of the two legs, used to pick the dominant counter-line
    pub fn magnitude(&self) -> Money {
        self.debit().max(self.credit())
    }
}

/// A balanced accounting transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Server-issued identifier
    pub id: String,

    /// Transaction date as an ISO timestamp string, kept verbatim
    #[serde(default)]
    pub transaction_date: String,

    /// Operator-facing reference number
    #[serde(default)]
    pub reference_number: String,

    /// Entry description
    #[serde(default)]
    pub description: String,

    /// Total amount as a decimal string
    #[serde(default)]
    pub total_amount: String,

    /// Currency id
    #[serde(default)]
    pub currency_id: String,

    /// Posting status, e.g. "POSTED"
    #[serde(default)]
    pub status: String,

    /// Ordered debit/credit legs
    #[serde(default)]
    pub journal_entry_lines: Vec<JournalEntryLine>,

    /// Embedded currency record
    #[serde(default)]
    pub currency: Option<Currency>,
}

impl JournalEntry {
    /// Transaction timestamp, if the date string parses
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.transaction_date)
    }

    /// Currency code from the embedded currency record, if present
    ///
    /// Callers substitute the configured fallback code when the payload
    /// omits the currency.
    pub fn currency_code(&self) -> Option<&str> {
        self.currency.as_ref().map(|c| c.code.as_str())
    }

    /// Total amount, zero when missing or malformed
    pub fn total(&self) -> Money {
        Money::parse_lenient(&self.total_amount)
    }
}

/// Parse an API timestamp string into a naive timestamp
///
/// Accepts RFC 3339 ("2025-01-15T08:30:00.000Z"), bare date-times, and bare
/// dates (taken as midnight). Returns `None` for anything else; callers
/// decide whether that means "fall back to the raw string" (display) or
/// "outside any window" (filtering).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let ts = parse_timestamp("2025-01-15T08:30:00.000Z").unwrap();
        assert_eq!(ts.date().year(), 2025);
        assert_eq!(ts.hour(), 8);
    }

    #[test]
    fn test_parse_timestamp_bare_date() {
        let ts = parse_timestamp("2025-01-15").unwrap();
        assert_eq!(ts.hour(), 0);
        assert_eq!(ts.date().day(), 15);
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_line_amounts_lenient() {
        let line = JournalEntryLine {
            id: String::new(),
            journal_entry_id: String::new(),
            chart_of_account_id: String::new(),
            debit_amount: "1000.00".to_string(),
            credit_amount: "garbage".to_string(),
            description: String::new(),
            vat_amount: String::new(),
            chart_of_account: ChartOfAccount::default(),
        };
        assert_eq!(line.debit(), Money::from_cents(100000));
        assert_eq!(line.credit(), Money::zero());
        assert_eq!(line.magnitude(), Money::from_cents(100000));
    }

    #[test]
    fn test_entry_deserialize() {
        let json = r#"{
            "id": "je-1",
            "transactionDate": "2025-01-15T00:00:00.000Z",
            "referenceNumber": "JE-0001",
            "description": "Opening sale",
            "totalAmount": "1000.00",
            "currencyId": "c1",
            "status": "POSTED",
            "journalEntryLines": [
                {
                    "id": "l1",
                    "journalEntryId": "je-1",
                    "chartOfAccountId": "a1",
                    "debitAmount": "1000.00",
                    "creditAmount": "0",
                    "description": "",
                    "vatAmount": "0",
                    "chartOfAccount": {
                        "accountNo": "1000",
                        "accountName": "Cash",
                        "accountType": "Current Asset",
                        "financialStatement": "Balance Sheet"
                    }
                }
            ],
            "currency": { "id": "c1", "code": "USD", "name": "US Dollar" }
        }"#;
        let e: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.journal_entry_lines.len(), 1);
        assert_eq!(e.currency_code(), Some("USD"));
        assert_eq!(e.total(), Money::from_cents(100000));
        assert!(e.timestamp().is_some());
    }

    #[test]
    fn test_entry_missing_currency() {
        let json = r#"{ "id": "je-2" }"#;
        let e: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.currency_code(), None);
        assert!(e.timestamp().is_none());
    }
}
