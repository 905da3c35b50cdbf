//! CLI commands for journal-entry listings
//!
//! Read-only views over a saved ledger payload: per-entry summaries with an
//! optional expansion of the debit/credit legs.

use clap::Subcommand;
use std::path::PathBuf;

use super::parse_date;
use crate::config::Settings;
use crate::display;
use crate::error::CashflowResult;
use crate::import;
use crate::models::{parse_timestamp, JournalEntry};
use chrono::NaiveTime;

/// Journal subcommands
#[derive(Subcommand, Debug)]
pub enum JournalCommands {
    /// List journal entries
    List {
        /// Journal entries JSON file (API payload or bare array); stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Only entries on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only entries on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Expand each entry's debit/credit lines
        #[arg(long)]
        lines: bool,
    },
}

/// Handle journal commands
pub fn handle_journal_command(settings: &Settings, cmd: JournalCommands) -> CashflowResult<()> {
    match cmd {
        JournalCommands::List {
            input,
            from,
            to,
            limit,
            lines,
        } => handle_list(settings, input, from, to, limit, lines),
    }
}

fn handle_list(
    settings: &Settings,
    input: Option<PathBuf>,
    from: Option<String>,
    to: Option<String>,
    limit: usize,
    show_lines: bool,
) -> CashflowResult<()> {
    let mut entries = match &input {
        Some(path) => import::read_entries_file(path)?,
        None => import::read_entries(std::io::stdin().lock())?,
    };

    if let Some(s) = &from {
        let start = parse_date(s)?.and_time(NaiveTime::MIN);
        entries.retain(|e| matches!(e.timestamp(), Some(t) if t >= start));
    }
    if let Some(s) = &to {
        let date = parse_date(s)?;
        let end = date
            .and_hms_opt(23, 59, 59)
            .unwrap_or_else(|| date.and_time(NaiveTime::MIN));
        entries.retain(|e| matches!(e.timestamp(), Some(t) if t <= end));
    }

    entries.sort_by_key(|e| parse_timestamp(&e.transaction_date));

    println!(
        "{:<13} {:<12} {:<35} {:<10} {:>12} {:>6}",
        "Date", "Reference", "Description", "Status", "Total", "Lines"
    );
    println!("{}", display::separator(94));

    for entry in entries.iter().take(limit) {
        print_entry(entry, &settings.currency_code, show_lines);
    }

    if entries.len() > limit {
        println!("\n... and {} more (use --limit to see them)", entries.len() - limit);
    }

    Ok(())
}

fn print_entry(entry: &JournalEntry, fallback_currency: &str, show_lines: bool) {
    println!(
        "{:<13} {:<12} {:<35} {:<10} {:>12} {:>6}",
        display::short_date(&entry.transaction_date),
        display::truncate(&entry.reference_number, 12),
        display::truncate(&entry.description, 35),
        display::truncate(&entry.status, 10),
        format!(
            "{} {}",
            entry.total(),
            entry.currency_code().unwrap_or(fallback_currency)
        ),
        entry.journal_entry_lines.len()
    );

    if show_lines {
        for line in &entry.journal_entry_lines {
            println!(
                "    {:<8} {:<33} Dr {:>12}  Cr {:>12}",
                line.chart_of_account.account_no,
                display::truncate(&line.chart_of_account.account_name, 33),
                display::format_money_colored(line.debit()),
                display::format_money_colored(line.credit())
            );
        }
    }
}
