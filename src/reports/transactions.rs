//! Transaction search
//!
//! Flattens every budget's transactions into one list, newest first, and
//! filters it by description text, budget and date range.

use chrono::NaiveDate;

use crate::models::{Budget, BudgetId, Money, Transaction};
use crate::state::AppState;

/// A transaction together with the budget that owns it
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub budget_id: BudgetId,
    pub budget_name: String,
    pub transaction: Transaction,
}

impl TransactionRow {
    fn new(budget: &Budget, transaction: &Transaction) -> Self {
        Self {
            budget_id: budget.id,
            budget_name: budget.name.clone(),
            transaction: transaction.clone(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.transaction.created_at.date_naive()
    }
}

/// Filter options for transaction search
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Case-insensitive substring of the description
    pub search: Option<String>,
    pub budget_id: Option<BudgetId>,
    /// Inclusive
    pub start_date: Option<NaiveDate>,
    /// Inclusive
    pub end_date: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl TransactionQuery {
    pub fn matches(&self, row: &TransactionRow) -> bool {
        if let Some(ref search) = self.search {
            let needle = search.to_lowercase();
            if !row.transaction.description.to_lowercase().contains(&needle) {
                return false;
            }
        }

        if let Some(budget_id) = self.budget_id {
            if row.budget_id != budget_id {
                return false;
            }
        }

        let date = row.date();
        if let Some(start) = self.start_date {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if date > end {
                return false;
            }
        }

        true
    }

    /// Run the query against the current state
    pub fn run(&self, state: &AppState) -> Vec<TransactionRow> {
        let mut rows: Vec<TransactionRow> = all_transactions(state)
            .into_iter()
            .filter(|row| self.matches(row))
            .collect();

        if let Some(limit) = self.limit {
            rows.truncate(limit);
        }
        rows
    }
}

/// Every transaction across all budgets, newest first
pub fn all_transactions(state: &AppState) -> Vec<TransactionRow> {
    let mut rows: Vec<TransactionRow> = state
        .budgets
        .items
        .iter()
        .flat_map(|budget| {
            budget
                .transactions
                .iter()
                .map(move |txn| TransactionRow::new(budget, txn))
        })
        .collect();

    rows.sort_by(|a, b| b.transaction.created_at.cmp(&a.transaction.created_at));
    rows
}

/// Sum of the amounts in a result set
pub fn total(rows: &[TransactionRow]) -> Money {
    rows.iter().map(|r| r.transaction.amount).sum()
}
