//! Budget CLI commands
//!
//! Implements CLI commands for creating, inspecting and changing budgets.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::budget::{format_budget_details, format_budget_list};
use crate::error::FinanceResult;
use crate::reports::BudgetProgress;
use crate::services::{parse_amount, BudgetChanges, BudgetService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a new budget
    Add {
        /// Budget name
        name: String,
        /// Target amount (e.g., "150" or "150.00")
        amount: String,
        /// Category tag (housing, food, entertainment, ...)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List budgets with their progress
    List,
    /// Show a budget and its transactions
    Show {
        /// Budget name or ID
        budget: String,
    },
    /// Edit a budget
    Edit {
        /// Budget name or ID
        budget: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New target amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category tag
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete a budget and all its transactions
    Delete {
        /// Budget name or ID
        budget: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Add {
            name,
            amount,
            category,
        } => {
            let amount = parse_amount(&amount)?;
            let budget = BudgetService::new(storage).create(&name, amount, category.as_deref())?;

            println!("Created budget: {}", budget.name);
            println!("  Amount: {}", budget.amount.format_with_symbol(symbol));
            println!("  Category: {}", budget.category);
            println!("  ID: {}", budget.id);
        }

        BudgetCommands::List => {
            let report = BudgetProgress::generate(storage.state());
            println!("{}", format_budget_list(&report, symbol));
        }

        BudgetCommands::Show { budget } => {
            let found = BudgetService::new(storage).find(&budget)?;
            print!(
                "{}",
                format_budget_details(&found, symbol, &settings.date_format)
            );
        }

        BudgetCommands::Edit {
            budget,
            name,
            amount,
            category,
        } => {
            if name.is_none() && amount.is_none() && category.is_none() {
                println!("No changes specified. Use --name, --amount or --category.");
                return Ok(());
            }

            let changes = BudgetChanges {
                name,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                icon: None,
            };
            let updated = BudgetService::new(storage).edit(&budget, changes)?;
            println!("Updated budget: {}", updated.name);
        }

        BudgetCommands::Delete { budget } => {
            let removed = BudgetService::new(storage).delete(&budget)?;
            println!(
                "Deleted budget: {} ({} transaction{})",
                removed.name,
                removed.transactions.len(),
                if removed.transactions.len() == 1 { "" } else { "s" }
            );
        }
    }

    Ok(())
}
