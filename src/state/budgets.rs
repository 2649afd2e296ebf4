//! Budget slice
//!
//! Ordered budgets, each owning its transactions. Every operation keeps
//! `Budget::spent` equal to the sum of the budget's transaction amounts.
//! Lookup misses leave the state untouched and return `None`/`false`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{resolve, Budget, BudgetId, Lookup, Money, Transaction, TransactionId};

use super::action::NewBudget;

/// Persisted budget collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetState {
    #[serde(default)]
    pub items: Vec<Budget>,
}

impl BudgetState {
    /// Append a new budget and return it
    pub fn add(&mut self, input: NewBudget) -> &Budget {
        let mut budget = Budget::new(input.name, input.amount, input.category);
        budget.icon = input.icon;
        budget.transactions = input.transactions;
        budget.recompute_spent();

        self.items.push(budget);
        &self.items[self.items.len() - 1]
    }

    /// Replace the budget with the same id, returning the previous version
    ///
    /// `spent` is recomputed from the replacement's transactions.
    pub fn edit(&mut self, mut budget: Budget) -> Option<Budget> {
        let slot = self.items.iter_mut().find(|b| b.id == budget.id)?;
        budget.recompute_spent();
        Some(std::mem::replace(slot, budget))
    }

    /// Remove a budget together with its transactions
    pub fn delete(&mut self, id: BudgetId) -> Option<Budget> {
        let index = self.items.iter().position(|b| b.id == id)?;
        Some(self.items.remove(index))
    }

    /// Record a transaction against a budget and add it to `spent`
    pub fn add_transaction(
        &mut self,
        budget_id: BudgetId,
        amount: Money,
        description: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Option<Transaction> {
        let budget = self.get_mut(budget_id)?;
        let transaction = Transaction::at(description, amount, at);

        budget.transactions.push(transaction.clone());
        budget.spent += amount;
        Some(transaction)
    }

    /// Remove a transaction and subtract it from `spent`
    pub fn delete_transaction(
        &mut self,
        budget_id: BudgetId,
        transaction_id: TransactionId,
    ) -> Option<Transaction> {
        let budget = self.get_mut(budget_id)?;
        let index = budget
            .transactions
            .iter()
            .position(|t| t.id == transaction_id)?;

        let transaction = budget.transactions.remove(index);
        budget.spent -= transaction.amount;
        Some(transaction)
    }

    pub fn get(&self, id: BudgetId) -> Option<&Budget> {
        self.items.iter().find(|b| b.id == id)
    }

    fn get_mut(&mut self, id: BudgetId) -> Option<&mut Budget> {
        self.items.iter_mut().find(|b| b.id == id)
    }

    /// Find a budget by id (full or short form) or by exact name
    pub fn find(&self, input: &str) -> Lookup<'_, Budget> {
        let input = input.trim();
        resolve(&self.items, |b| {
            (b.id.match_input(input), b.name.eq_ignore_ascii_case(input))
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
