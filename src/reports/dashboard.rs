//! Dashboard report
//!
//! Headline numbers across budgets, goals and recurring items, plus the
//! most recent budgets and transactions.

use chrono::{DateTime, Utc};

use crate::models::{Budget, Money};
use crate::state::AppState;

use super::goals::GoalSummary;
use super::recurring::{upcoming, RecurringSummary};
use super::transactions::{all_transactions, TransactionRow};

/// Number of budgets shown as recent
pub const RECENT_BUDGETS: usize = 3;

/// Number of transactions shown as recent
pub const RECENT_TRANSACTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    /// Sum of all budget targets
    pub total_budget: Money,
    pub total_spent: Money,
    pub total_transactions: usize,
    pub total_budgets: usize,
    /// Budgets whose spending has reached the target
    pub completed_budgets: usize,
    /// Newest first
    pub recent_budgets: Vec<Budget>,
    /// Newest first, across all budgets
    pub recent_transactions: Vec<TransactionRow>,
    pub goals: GoalSummary,
    pub recurring: RecurringSummary,
    /// Active recurring items due within the upcoming window
    pub upcoming_count: usize,
}

impl DashboardReport {
    pub fn generate(state: &AppState, now: DateTime<Utc>, upcoming_days: i64) -> Self {
        let budgets = &state.budgets.items;

        let mut recent_budgets: Vec<Budget> = budgets.to_vec();
        recent_budgets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent_budgets.truncate(RECENT_BUDGETS);

        let mut recent_transactions = all_transactions(state);
        recent_transactions.truncate(RECENT_TRANSACTIONS);

        Self {
            total_budget: budgets.iter().map(|b| b.amount).sum(),
            total_spent: budgets.iter().map(|b| b.spent).sum(),
            total_transactions: budgets.iter().map(|b| b.transactions.len()).sum(),
            total_budgets: budgets.len(),
            completed_budgets: budgets.iter().filter(|b| b.is_complete()).count(),
            recent_budgets,
            recent_transactions,
            goals: GoalSummary::from_goals(&state.goals.items),
            recurring: RecurringSummary::generate(state),
            upcoming_count: upcoming(state, now, upcoming_days).len(),
        }
    }
}
