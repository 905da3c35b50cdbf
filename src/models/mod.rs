//! Core data models for cashflow-cli
//!
//! This module contains the data structures that mirror the accounting API's
//! ledger payloads: currencies, chart-of-account records, and journal entries
//! with their debit/credit lines.

pub mod account;
pub mod currency;
pub mod journal;
pub mod money;

pub use account::ChartOfAccount;
pub use currency::Currency;
pub use journal::{parse_timestamp, JournalEntry, JournalEntryLine};
pub use money::Money;
