use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_budget_command, handle_goal_command, handle_recurring_command,
    handle_transaction_command, BudgetCommands, GoalCommands, RecurringCommands,
    TransactionCommands,
};
use fintrack::config::{FinancePaths, Settings};
use fintrack::display::format_dashboard;
use fintrack::reports::DashboardReport;
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker for budgets, goals and recurring payments",
    long_about = "fintrack keeps budgets with their transactions, savings goals and \
                  recurring income and expenses in a single local JSON file, and \
                  prints summaries from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Recurring income and expense commands
    #[command(subcommand)]
    Recurring(RecurringCommands),

    /// Show totals and recent activity
    Dashboard,

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    fintrack::init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::open(paths.clone(), settings.save_interval())?;

    match cli.command {
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Recurring(cmd)) => {
            handle_recurring_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Dashboard) => {
            let report =
                DashboardReport::generate(storage.state(), chrono::Utc::now(), settings.upcoming_days);
            print!(
                "{}",
                format_dashboard(&report, &settings.currency_symbol, &settings.date_format)
            );
        }
        Some(Commands::Audit { limit }) => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config { write }) => {
            if write {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("fintrack configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("State file:      {}", paths.state_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Save interval:   {} ms", settings.save_interval_ms);
            println!("  Upcoming window: {} days", settings.upcoming_days);
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
        }
    }

    storage.flush()?;
    Ok(())
}
