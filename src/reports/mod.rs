//! Reports module for cashflow-cli
//!
//! Home of the cash-flow classification pass and its report type.

pub mod cash_flow;

pub use cash_flow::{
    classify_account, CashAccountMatcher, CashFlowReport, ClassifiedRow, Section, SectionTotals,
};
