//! Chart-of-account model
//!
//! A ledger account definition as embedded in journal-entry lines. The
//! account type and financial-statement tag are free text on the API side,
//! so everything downstream (section classification in particular) treats
//! them as case-insensitive substrings rather than enums.

use serde::{Deserialize, Serialize};

/// A ledger account from the chart of accounts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOfAccount {
    /// Server-issued identifier
    #[serde(default)]
    pub id: String,

    /// Account number, e.g. "1000"
    #[serde(default)]
    pub account_no: String,

    /// Account name, e.g. "Cash and Cash Equivalents"
    #[serde(default)]
    pub account_name: String,

    /// Free-text classification, e.g. "Current Asset", "Equity"
    #[serde(default)]
    pub account_type: String,

    /// Financial-statement placement: "Income Statement" | "Balance Sheet"
    #[serde(default)]
    pub financial_statement: String,
}

impl ChartOfAccount {
    /// Convenience constructor used heavily in tests and fixtures
    pub fn new(
        account_no: impl Into<String>,
        account_name: impl Into<String>,
        account_type: impl Into<String>,
        financial_statement: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            account_no: account_no.into(),
            account_name: account_name.into(),
            account_type: account_type.into(),
            financial_statement: financial_statement.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "a1",
            "accountNo": "1000",
            "accountName": "Cash and Cash Equivalents",
            "accountType": "Current Asset",
            "financialStatement": "Balance Sheet"
        }"#;
        let a: ChartOfAccount = serde_json::from_str(json).unwrap();
        assert_eq!(a.account_no, "1000");
        assert_eq!(a.financial_statement, "Balance Sheet");
    }

    #[test]
    fn test_missing_fields_default_empty() {
        let a: ChartOfAccount = serde_json::from_str("{}").unwrap();
        assert_eq!(a.account_no, "");
        assert_eq!(a.account_type, "");
    }
}
