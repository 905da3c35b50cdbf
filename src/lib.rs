//! cashflow-cli - Direct-method cash flow statements from the command line
//!
//! This library turns general-ledger JSON exports (journal entries with
//! debit/credit lines, as served by the accounting API) into a classified
//! cash-flow statement: every entry that touches a cash or bank account is
//! attributed to Operating, Investing, or Financing activities based on its
//! dominant counter-line.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Ledger data models (currencies, accounts, journal entries)
//! - `import`: JSON payload loading
//! - `reports`: The cash-flow classification pass
//! - `export`: CSV/JSON/YAML report export
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use cashflow_cli::import::read_entries_file;
//! use cashflow_cli::reports::{CashAccountMatcher, CashFlowReport};
//!
//! let entries = read_entries_file(path)?;
//! let report =
//!     CashFlowReport::generate(&entries, &CashAccountMatcher::default(), from, to, "USD");
//! println!("{}", report.format_terminal());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;

pub use error::CashflowError;
