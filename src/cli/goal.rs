//! Goal CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::goal::{format_goal_details, format_goal_list};
use crate::error::{FinanceError, FinanceResult};
use crate::reports::{select_goals, GoalFilter, GoalSortKey, SortDirection};
use crate::services::{parse_amount, parse_date, GoalService};
use crate::state::GoalPatch;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// Deadline (YYYY-MM-DD)
        deadline: String,
        /// Category tag (defaults to savings)
        #[arg(short, long)]
        category: Option<String>,
        /// Longer description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List goals
    List {
        /// all, active, completed, or a category tag
        #[arg(short, long, default_value = "all")]
        filter: String,
        /// deadline, progress, amount or name
        #[arg(short, long, default_value = "deadline")]
        sort: String,
        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Show a goal's details
    Show {
        /// Goal name or ID
        goal: String,
    },
    /// Add money to a goal
    Contribute {
        /// Goal name or ID
        goal: String,
        /// Amount to add
        amount: String,
    },
    /// Edit a goal
    Edit {
        /// Goal name or ID
        goal: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        target: Option<String>,
        /// Overwrite the amount saved so far
        #[arg(long)]
        saved: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a goal
    Delete {
        /// Goal name or ID
        goal: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();
    let today = Local::now().date_naive();

    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
            category,
            description,
        } => {
            let target = parse_amount(&target)?;
            let deadline = parse_date(&deadline, date_format)?;
            let goal = GoalService::new(storage).create(
                &name,
                target,
                deadline,
                category.as_deref(),
                description.as_deref(),
            )?;

            println!("Created goal: {}", goal.name);
            println!("  Target: {}", goal.target_amount.format_with_symbol(symbol));
            println!("  Deadline: {}", goal.deadline.format(date_format));
            println!("  ID: {}", goal.id);
        }

        GoalCommands::List { filter, sort, desc } => {
            let filter: GoalFilter = filter.parse().unwrap_or_default();
            let key: GoalSortKey = sort.parse().map_err(FinanceError::Validation)?;
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };

            let goals = select_goals(&storage.state().goals.items, &filter, key, direction);
            println!("{}", format_goal_list(&goals, today, symbol, date_format));
        }

        GoalCommands::Show { goal } => {
            let found = GoalService::new(storage).find(&goal)?;
            print!("{}", format_goal_details(&found, today, symbol, date_format));
        }

        GoalCommands::Contribute { goal, amount } => {
            let amount = parse_amount(&amount)?;
            let updated = GoalService::new(storage).contribute(&goal, amount)?;

            println!(
                "Added {} to {}: {} of {} ({:.0}%)",
                amount.format_with_symbol(symbol),
                updated.name,
                updated.current_amount.format_with_symbol(symbol),
                updated.target_amount.format_with_symbol(symbol),
                updated.progress
            );
            if updated.is_completed {
                println!("Goal reached!");
            }
        }

        GoalCommands::Edit {
            goal,
            name,
            target,
            saved,
            deadline,
            category,
            description,
        } => {
            let patch = GoalPatch {
                name,
                description,
                target_amount: target.as_deref().map(parse_amount).transpose()?,
                current_amount: saved.as_deref().map(parse_amount).transpose()?,
                deadline: deadline
                    .as_deref()
                    .map(|d| parse_date(d, date_format))
                    .transpose()?,
                category,
            };
            if patch.is_empty() {
                println!("No changes specified.");
                return Ok(());
            }

            let updated = GoalService::new(storage).edit(&goal, patch)?;
            println!("Updated goal: {}", updated);
        }

        GoalCommands::Delete { goal } => {
            let removed = GoalService::new(storage).delete(&goal)?;
            println!("Deleted goal: {}", removed.name);
        }
    }

    Ok(())
}
