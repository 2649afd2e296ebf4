//! Budget model
//!
//! A budget is a named spending envelope with a target amount. It owns the
//! transactions recorded against it and keeps a running `spent` total that
//! always equals the sum of those transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::ids::{resolve, Lookup};
use super::money::Money;
use super::transaction::Transaction;

/// A spending envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    pub name: String,

    /// Target amount for this envelope
    pub amount: Money,

    /// Running total of `transactions`
    #[serde(default)]
    pub spent: Money,

    /// Category tag (see `models::category`)
    #[serde(default = "default_category")]
    pub category: String,

    /// Icon key chosen in the web UI, kept so snapshots round-trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default)]
    pub transactions: Vec<Transaction>,

    pub created_at: DateTime<Utc>,
}

fn default_category() -> String {
    super::category::DEFAULT_CATEGORY.to_string()
}

impl Budget {
    /// Create a new empty budget
    pub fn new(name: impl Into<String>, amount: Money, category: impl Into<String>) -> Self {
        Self {
            id: BudgetId::new(),
            name: name.into(),
            amount,
            spent: Money::zero(),
            category: category.into(),
            icon: None,
            transactions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Sum of all transaction amounts
    pub fn transactions_total(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Reset `spent` from the transaction list
    pub fn recompute_spent(&mut self) {
        self.spent = self.transactions_total();
    }

    /// Amount left before the target is reached (negative when overspent)
    pub fn remaining(&self) -> Money {
        self.amount - self.spent
    }

    /// Spent as a percentage of the target
    pub fn progress_percent(&self) -> f64 {
        self.spent.percent_of(self.amount)
    }

    /// A budget counts as complete once spending reaches the target
    pub fn is_complete(&self) -> bool {
        self.spent >= self.amount
    }

    pub fn is_overspent(&self) -> bool {
        self.spent > self.amount
    }

    /// Find a transaction by full or short id
    pub fn find_transaction(&self, input: &str) -> Lookup<'_, Transaction> {
        resolve(&self.transactions, |t| (t.id.match_input(input), false))
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} / {})", self.name, self.spent, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget_is_empty() {
        let budget = Budget::new("Groceries", Money::from_units(150), "food");
        assert_eq!(budget.spent, Money::zero());
        assert!(budget.transactions.is_empty());
        assert_eq!(budget.remaining(), Money::from_units(150));
        assert!(!budget.is_complete());
    }

    #[test]
    fn test_recompute_spent() {
        let mut budget = Budget::new("Groceries", Money::from_units(150), "food");
        budget.transactions.push(Transaction::new("Market", Money::from_units(40)));
        budget.transactions.push(Transaction::new("Bakery", Money::from_units(10)));
        budget.recompute_spent();

        assert_eq!(budget.spent, Money::from_units(50));
        assert!((budget.progress_percent() - 33.333).abs() < 0.01);
    }

    #[test]
    fn test_complete_and_overspent() {
        let mut budget = Budget::new("Fun", Money::from_units(100), "entertainment");
        budget.spent = Money::from_units(100);
        assert!(budget.is_complete());
        assert!(!budget.is_overspent());

        budget.spent = Money::from_units(120);
        assert!(budget.is_overspent());
        assert_eq!(budget.remaining(), Money::from_units(-20));
    }

    #[test]
    fn test_zero_target_progress() {
        let budget = Budget::new("Empty", Money::zero(), "other");
        assert_eq!(budget.progress_percent(), 0.0);
    }

    #[test]
    fn test_missing_optional_fields_deserialize() {
        let json = serde_json::json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Rent",
            "amount": 90000,
            "created_at": "2025-01-01T00:00:00Z"
        });
        let budget: Budget = serde_json::from_value(json).unwrap();
        assert_eq!(budget.category, "other");
        assert!(budget.transactions.is_empty());
        assert!(budget.icon.is_none());
    }
}
