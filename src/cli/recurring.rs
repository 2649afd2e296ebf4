//! Recurring item CLI commands

use chrono::{Local, Utc};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::recurring::{format_processed, format_recurring_list};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Frequency, RecurringKind};
use crate::reports::RecurringSummary;
use crate::services::{parse_amount, parse_date, CreateRecurringInput, RecurringService};
use crate::storage::Storage;

/// Recurring subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Add a recurring expense or income
    Add {
        /// What the payment is for
        description: String,
        /// Amount per occurrence
        amount: String,
        /// weekly, monthly or yearly
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
        /// First due date (defaults to today)
        #[arg(short, long)]
        start: Option<String>,
        /// Record as income instead of an expense
        #[arg(long)]
        income: bool,
        /// Category tag
        #[arg(short, long)]
        category: Option<String>,
        /// Budget that receives a transaction each time the expense is due
        #[arg(short, long)]
        budget: Option<String>,
    },
    /// List recurring income and expenses with monthly totals
    List,
    /// Pause or resume an item
    Toggle {
        /// Description or ID
        item: String,
    },
    /// Delete an item
    Delete {
        /// Description or ID
        item: String,
    },
    /// Apply every item that has fallen due
    Process,
}

/// Handle a recurring command
pub fn handle_recurring_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: RecurringCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        RecurringCommands::Add {
            description,
            amount,
            frequency,
            start,
            income,
            category,
            budget,
        } => {
            let input = CreateRecurringInput {
                kind: if income {
                    RecurringKind::Income
                } else {
                    RecurringKind::Expense
                },
                description,
                amount: parse_amount(&amount)?,
                frequency: frequency
                    .parse::<Frequency>()
                    .map_err(FinanceError::Validation)?,
                start_date: match start {
                    Some(date) => parse_date(&date, date_format)?,
                    None => Local::now().date_naive(),
                },
                category,
                budget,
            };

            let item = RecurringService::new(storage).create(input)?;
            println!(
                "Added recurring {}: {} {} ({})",
                if income { "income" } else { "expense" },
                item.description,
                item.amount.format_with_symbol(symbol),
                item.frequency
            );
            println!("  Next due: {}", item.next_due.format(date_format));
            println!("  ID: {}", item.id);
        }

        RecurringCommands::List => {
            let state = storage.state();
            let summary = RecurringSummary::generate(state);
            print!(
                "{}",
                format_recurring_list(
                    &state.recurring.items,
                    &state.recurring.income,
                    &summary,
                    Utc::now(),
                    settings.upcoming_days,
                    symbol,
                    date_format,
                )
            );
        }

        RecurringCommands::Toggle { item } => {
            let updated = RecurringService::new(storage).toggle(&item)?;
            println!(
                "{} {}",
                if updated.is_active { "Resumed" } else { "Paused" },
                updated.description
            );
        }

        RecurringCommands::Delete { item } => {
            let removed = RecurringService::new(storage).delete(&item)?;
            println!("Deleted recurring item: {}", removed.description);
        }

        RecurringCommands::Process => {
            let processed = RecurringService::new(storage).process_due(Utc::now())?;
            println!("{}", format_processed(&processed, date_format));
        }
    }

    Ok(())
}
