use anyhow::Result;
use clap::{Parser, Subcommand};

use cashflow_cli::cli::{
    handle_currency_command, handle_journal_command, handle_report_command, CurrencyCommands,
    JournalCommands, ReportArgs,
};
use cashflow_cli::config::{CashflowPaths, Settings};

#[derive(Parser)]
#[command(
    name = "cashflow",
    version,
    about = "Direct-method cash flow statements from general-ledger JSON exports",
    long_about = "cashflow-cli reads journal entries saved off an accounting API and \
                  derives a classified cash-flow statement: entries touching a cash \
                  or bank account are attributed to Operating, Investing, or \
                  Financing activities and summed into a statement you can render \
                  or export."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the cash-flow statement
    Report(ReportArgs),

    /// Journal entry listings
    #[command(subcommand)]
    Journal(JournalCommands),

    /// Currency listings
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Write a default config file to edit
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CashflowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Report(args)) => {
            handle_report_command(&settings, args)?;
        }
        Some(Commands::Journal(cmd)) => {
            handle_journal_command(&settings, cmd)?;
        }
        Some(Commands::Currency(cmd)) => {
            handle_currency_command(cmd)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Wrote default config to: {}", paths.settings_file().display());
            println!();
            println!("Edit cash_account_hints / cash_account_number there if your chart");
            println!("of accounts names its cash accounts differently.");
        }
        Some(Commands::Config) => {
            println!("cashflow-cli Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Cash account hints:  {:?}", settings.cash_account_hints);
            println!("  Cash account number: {}", settings.cash_account_number);
            println!("  Default window:      {} days", settings.default_window_days);
            println!("  Fallback currency:   {}", settings.currency_code);
        }
        None => {
            println!("cashflow-cli - Cash flow statements from ledger exports");
            println!();
            println!("Run 'cashflow --help' for usage information.");
            println!("Run 'cashflow report --input entries.json' to get started.");
        }
    }

    Ok(())
}
