//! Transaction CLI commands
//!
//! Transactions always belong to a budget; adding one counts it towards
//! the budget's spending.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::format_transaction_list;
use crate::error::FinanceResult;
use crate::reports::TransactionQuery;
use crate::services::{parse_amount, parse_date, BudgetService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an expense against a budget
    Add {
        /// Budget name or ID
        budget: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// What the money was spent on
        description: String,
    },
    /// Delete a transaction
    Delete {
        /// Budget name or ID
        budget: String,
        /// Transaction ID (or its first characters)
        transaction: String,
    },
    /// List transactions across all budgets, newest first
    List {
        /// Only descriptions containing this text
        #[arg(short, long)]
        search: Option<String>,
        /// Only this budget
        #[arg(short, long)]
        budget: Option<String>,
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,
        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,
        /// Maximum number of rows
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            budget,
            amount,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let mut service = BudgetService::new(storage);
            let txn = service.add_transaction(&budget, &description, amount)?;
            let updated = service.find(&budget)?;

            println!(
                "Added {} to {}: {}",
                txn.amount.format_with_symbol(symbol),
                updated.name,
                txn.description
            );
            println!(
                "  Spent: {} of {}",
                updated.spent.format_with_symbol(symbol),
                updated.amount.format_with_symbol(symbol)
            );
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::Delete {
            budget,
            transaction,
        } => {
            let removed = BudgetService::new(storage).delete_transaction(&budget, &transaction)?;
            println!(
                "Deleted transaction: {} ({})",
                removed.description,
                removed.amount.format_with_symbol(symbol)
            );
        }

        TransactionCommands::List {
            search,
            budget,
            from,
            to,
            limit,
        } => {
            let budget_id = match budget {
                Some(ref name) => Some(BudgetService::new(storage).find(name)?.id),
                None => None,
            };

            let query = TransactionQuery {
                search,
                budget_id,
                start_date: from
                    .as_deref()
                    .map(|d| parse_date(d, &settings.date_format))
                    .transpose()?,
                end_date: to
                    .as_deref()
                    .map(|d| parse_date(d, &settings.date_format))
                    .transpose()?,
                limit,
            };

            let rows = query.run(storage.state());
            println!(
                "{}",
                format_transaction_list(&rows, symbol, &settings.date_format)
            );
        }
    }

    Ok(())
}
