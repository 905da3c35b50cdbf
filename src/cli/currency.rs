//! CLI commands for currency listings

use clap::Subcommand;
use std::path::PathBuf;

use crate::display;
use crate::error::CashflowResult;
use crate::import;
use crate::models::Currency;

/// Currency subcommands
#[derive(Subcommand, Debug)]
pub enum CurrencyCommands {
    /// List currencies
    List {
        /// Currencies JSON file (API payload or bare array); stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Include inactive currencies
        #[arg(short, long)]
        all: bool,
    },
}

/// Handle currency commands
pub fn handle_currency_command(cmd: CurrencyCommands) -> CashflowResult<()> {
    match cmd {
        CurrencyCommands::List { input, all } => handle_list(input, all),
    }
}

fn handle_list(input: Option<PathBuf>, include_inactive: bool) -> CashflowResult<()> {
    let currencies = match &input {
        Some(path) => import::read_currencies_file(path)?,
        None => import::read_currencies(std::io::stdin().lock())?,
    };

    let default_code = Currency::default_of(&currencies).map(|c| c.code.clone());

    println!("{:<6} {:<28} {:<8} {:<8}", "Code", "Name", "Symbol", "Status");
    println!("{}", display::separator(54));

    for currency in currencies
        .iter()
        .filter(|c| include_inactive || c.is_active)
    {
        let mut status = if currency.is_active { "active" } else { "inactive" }.to_string();
        if Some(&currency.code) == default_code.as_ref() {
            status.push_str(" *");
        }
        println!(
            "{:<6} {:<28} {:<8} {:<8}",
            currency.code,
            display::truncate(&currency.name, 28),
            currency.symbol,
            status
        );
    }

    if default_code.is_some() {
        println!("\n* default currency");
    }

    Ok(())
}
