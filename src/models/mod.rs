//! Core data models for fintrack
//!
//! This module contains the data structures of the finance domain: budgets
//! with their transactions, savings goals, and recurring items.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod recurring;
pub mod transaction;

pub use budget::Budget;
pub use category::{category_label, normalize_category};
pub use goal::Goal;
pub use ids::{resolve, BudgetId, GoalId, IdMatch, Lookup, RecurringId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use recurring::{Frequency, RecurringItem, RecurringKind};
pub use transaction::Transaction;
