//! Cash Flow Statement report
//!
//! Derives a direct-method cash-flow statement from raw journal entries.
//! The classification is heuristic: an entry contributes cash movement when
//! one of its lines touches a cash/bank account, and the whole movement is
//! attributed to the single largest non-cash counter-line to avoid
//! double-counting. The counter-line's account decides the section
//! (Operating / Investing / Financing).
//!
//! The pass is a pure function of its inputs: no I/O, nothing fails, and the
//! same entries and date window always produce the same rows and totals.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::display;
use crate::models::{parse_timestamp, ChartOfAccount, JournalEntry, Money};

/// Default account-name fragments that mark a line as cash-like
pub const DEFAULT_CASH_HINTS: [&str; 3] = ["cash and cash equivalents", "cash", "bank"];

/// Default sentinel account number treated as the cash account
pub const DEFAULT_CASH_ACCOUNT_NO: &str = "1000";

/// Cash-flow statement section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Day-to-day trading activity and working capital
    Operating,
    /// Acquisition and disposal of long-lived assets
    Investing,
    /// Equity and long-term debt movements
    Financing,
}

impl Section {
    /// Statement heading for this section
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Operating => "Operating Activities",
            Self::Investing => "Investing Activities",
            Self::Financing => "Financing Activities",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operating => write!(f, "Operating"),
            Self::Investing => write!(f, "Investing"),
            Self::Financing => write!(f, "Financing"),
        }
    }
}

/// Detects which journal-entry lines belong to a cash or bank account
///
/// The hint list and the sentinel account number encode assumptions about
/// one particular chart of accounts, so both are configurable; the defaults
/// match the ERP's sample data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashAccountMatcher {
    /// Lower-cased name fragments; a matching account name marks a cash line
    pub name_hints: Vec<String>,
    /// Exact account number that always counts as cash
    pub account_no: String,
}

impl Default for CashAccountMatcher {
    fn default() -> Self {
        Self {
            name_hints: DEFAULT_CASH_HINTS.iter().map(|h| h.to_string()).collect(),
            account_no: DEFAULT_CASH_ACCOUNT_NO.to_string(),
        }
    }
}

impl CashAccountMatcher {
    /// Build a matcher from configured hints and sentinel account number
    ///
    /// Hints are normalized to lower case; matching is case-insensitive.
    pub fn new(name_hints: Vec<String>, account_no: impl Into<String>) -> Self {
        Self {
            name_hints: name_hints.into_iter().map(|h| h.to_lowercase()).collect(),
            account_no: account_no.into(),
        }
    }

    /// Check whether an account is cash-like
    pub fn is_cash_account(&self, account: &ChartOfAccount) -> bool {
        let name = account.account_name.to_lowercase();
        self.name_hints.iter().any(|h| name.contains(h.as_str()))
            || account.account_no == self.account_no
    }
}

/// One classified cash movement, derived from a single journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedRow {
    /// Source journal entry id
    pub entry_id: String,
    /// Transaction date string, verbatim from the payload
    pub date: String,
    /// Entry reference number
    pub reference: String,
    /// Entry description
    pub description: String,
    /// Assigned statement section
    pub section: Section,
    /// Signed cash movement: positive = inflow, negative = outflow
    pub cash_impact: Money,
    /// Currency code of the entry
    pub currency: String,
}

/// Signed sums per section plus the resulting net change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTotals {
    pub operating: Money,
    pub investing: Money,
    pub financing: Money,
    pub net_change: Money,
}

impl SectionTotals {
    fn add(&mut self, section: Section, amount: Money) {
        match section {
            Section::Operating => self.operating += amount,
            Section::Investing => self.investing += amount,
            Section::Financing => self.financing += amount,
        }
        self.net_change += amount;
    }

    /// Total for one section
    pub fn section(&self, section: Section) -> Money {
        match section {
            Section::Operating => self.operating,
            Section::Investing => self.investing,
            Section::Financing => self.financing,
        }
    }
}

/// Cash Flow Statement over a date window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowReport {
    /// Start of the window (inclusive, from 00:00:00)
    pub from_date: NaiveDate,
    /// End of the window (inclusive, through 23:59:59)
    pub to_date: NaiveDate,
    /// Classified movements, ascending by transaction date
    pub rows: Vec<ClassifiedRow>,
    /// Per-section sums and net change
    pub totals: SectionTotals,
}

impl CashFlowReport {
    /// Classify journal entries into a cash-flow statement
    ///
    /// Entries outside the window, entries without a cash-like line, and
    /// entries whose only lines are cash-like are all skipped; each surviving
    /// entry contributes exactly one row. Rows from entries whose payload
    /// omits the currency are labelled with `fallback_currency`.
    pub fn generate(
        entries: &[JournalEntry],
        matcher: &CashAccountMatcher,
        from_date: NaiveDate,
        to_date: NaiveDate,
        fallback_currency: &str,
    ) -> Self {
        let start = from_date.and_time(NaiveTime::MIN);
        let end = to_date
            .and_hms_opt(23, 59, 59)
            .unwrap_or_else(|| to_date.and_time(NaiveTime::MIN));

        let mut rows: Vec<ClassifiedRow> = Vec::new();
        let mut totals = SectionTotals::default();

        for entry in entries {
            if !in_window(entry.timestamp(), start, end) {
                continue;
            }

            let cash = match entry
                .journal_entry_lines
                .iter()
                .find(|l| matcher.is_cash_account(&l.chart_of_account))
            {
                Some(line) => line,
                None => continue, // no cash movement
            };

            let cash_impact = cash.debit() - cash.credit();

            // Dominant counter-line: largest magnitude among the non-cash
            // lines, first one wins ties. The cash line itself is never a
            // candidate.
            let mut non_cash = entry
                .journal_entry_lines
                .iter()
                .filter(|l| !matcher.is_cash_account(&l.chart_of_account));
            let mut dominant = match non_cash.next() {
                Some(line) => line,
                None => continue, // nothing to attribute the movement to
            };
            for line in non_cash {
                if line.magnitude() > dominant.magnitude() {
                    dominant = line;
                }
            }

            let section = classify_account(&dominant.chart_of_account);

            rows.push(ClassifiedRow {
                entry_id: entry.id.clone(),
                date: entry.transaction_date.clone(),
                reference: entry.reference_number.clone(),
                description: entry.description.clone(),
                section,
                cash_impact,
                currency: entry
                    .currency_code()
                    .unwrap_or(fallback_currency)
                    .to_string(),
            });
        }

        rows.sort_by_key(|r| parse_timestamp(&r.date));

        for row in &rows {
            totals.add(row.section, row.cash_impact);
        }

        Self {
            from_date,
            to_date,
            rows,
            totals,
        }
    }

    /// Currency code used for headings, taken from the first row
    pub fn currency_hint(&self) -> Option<&str> {
        self.rows.first().map(|r| r.currency.as_str())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Cash Flow Statement: {} to {}\n",
            self.from_date, self.to_date
        ));
        output.push_str(&"=".repeat(90));
        output.push('\n');

        for section in [Section::Operating, Section::Investing, Section::Financing] {
            output.push_str(&format!(
                "{:<30} {:>15}\n",
                section.heading(),
                self.totals.section(section).to_string()
            ));
        }
        output.push_str(&"-".repeat(46));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>15}\n\n",
            "Net Change in Cash",
            self.totals.net_change.to_string()
        ));

        if self.rows.is_empty() {
            output.push_str("No cash movements in this period.\n");
            return output;
        }

        let currency = self.currency_hint().unwrap_or("—");
        output.push_str(&format!(
            "{:<13} {:<12} {:<35} {:<10} {:>15}\n",
            "Date",
            "Reference",
            "Description",
            "Section",
            format!("Impact ({})", currency)
        ));
        output.push_str(&"-".repeat(90));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<13} {:<12} {:<35} {:<10} {:>15}\n",
                display::short_date(&row.date),
                display::truncate(&row.reference, 12),
                display::truncate(&row.description, 35),
                row.section.to_string(),
                row.cash_impact.to_string()
            ));
        }

        output
    }
}

fn in_window(timestamp: Option<NaiveDateTime>, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    match timestamp {
        Some(t) => t >= start && t <= end,
        // Unparseable dates cannot be placed in the window
        None => false,
    }
}

/// Classify an account into a statement section
///
/// Rules are evaluated in order; the first match wins. Income-statement
/// accounts are operating, long-lived assets are investing, equity and
/// long-term debt are financing, working capital is operating, and anything
/// unrecognized defaults to operating.
pub fn classify_account(account: &ChartOfAccount) -> Section {
    let fs = account.financial_statement.to_lowercase();
    let account_type = account.account_type.to_lowercase();
    let no = account.account_no.trim();

    if fs.contains("income") {
        return Section::Operating;
    }

    if account_type.contains("non") && account_type.contains("asset") {
        return Section::Investing;
    }
    if account_type.contains("fixed")
        || account_type.contains("property")
        || account_type.contains("equipment")
        || account_type.contains("intangible")
    {
        return Section::Investing;
    }

    if account_type.contains("equity")
        || (account_type.contains("long") && account_type.contains("liability"))
        || (account_type.contains("non") && account_type.contains("liability"))
    {
        return Section::Financing;
    }

    // Account-number hints (typical charts: 1=Assets, 2=Liabilities,
    // 3=Equity, 4=Revenue, 5=Expense)
    if no.starts_with('3') {
        return Section::Financing;
    }
    if no.starts_with('2') && !account_type.contains("current") {
        return Section::Financing;
    }

    if account_type.contains("current asset") || account_type.contains("current liability") {
        return Section::Operating;
    }

    Section::Operating
}
