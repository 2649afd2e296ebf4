//! Transaction model
//!
//! A single recorded expense against a budget. Transactions live inside the
//! budget that owns them and are never shared between budgets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// What the money was spent on
    pub description: String,

    pub amount: Money,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction stamped with the current time
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self::at(description, amount, Utc::now())
    }

    /// Create a transaction with an explicit timestamp
    pub fn at(description: impl Into<String>, amount: Money, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            created_at,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.description, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new("Coffee", Money::from_cents(350));
        assert_eq!(txn.description, "Coffee");
        assert_eq!(txn.amount.cents(), 350);
        assert!(txn.created_at <= Utc::now());
    }

    #[test]
    fn test_snapshot_field_names() {
        let txn = Transaction::new("Coffee", Money::from_cents(350));
        let json = serde_json::to_value(&txn).unwrap();
        assert!(json.get("created_at").is_some());
        assert_eq!(json["amount"], 350);
    }
}
