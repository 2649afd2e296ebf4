//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod goal;
pub mod recurring;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
