//! Savings goal model
//!
//! Goals are tracked independently of budgets. Progress is derived from the
//! saved amount and capped at the target.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub target_amount: Money,

    /// Amount saved so far
    #[serde(default)]
    pub current_amount: Money,

    /// `current_amount / target_amount * 100`
    #[serde(default)]
    pub progress: f64,

    pub deadline: NaiveDate,

    #[serde(default = "default_goal_category")]
    pub category: String,

    #[serde(default)]
    pub is_completed: bool,

    pub created_at: DateTime<Utc>,
}

fn default_goal_category() -> String {
    super::category::DEFAULT_GOAL_CATEGORY.to_string()
}

impl Goal {
    /// Create a new goal with nothing saved yet
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        deadline: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            description: String::new(),
            target_amount,
            current_amount: Money::zero(),
            progress: 0.0,
            deadline,
            category: category.into(),
            is_completed: false,
            created_at: Utc::now(),
        }
    }

    /// Add a contribution, never saving past the target
    pub fn contribute(&mut self, amount: Money) {
        self.current_amount = (self.current_amount + amount).min(self.target_amount);
        self.recompute_progress();
    }

    /// Derive `progress` and `is_completed` from the amounts
    pub fn recompute_progress(&mut self) {
        self.progress = self.current_amount.percent_of(self.target_amount);
        self.is_completed = self.progress >= 100.0;
    }

    /// Amount still to save
    pub fn remaining(&self) -> Money {
        (self.target_amount - self.current_amount).max(Money::zero())
    }

    /// Whole days from `today` until the deadline (negative once passed)
    pub fn days_until_deadline(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} / {}, {:.0}%)",
            self.name, self.current_amount, self.target_amount, self.progress
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deadline() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
    }

    #[test]
    fn test_new_goal() {
        let goal = Goal::new("Vacation", Money::from_units(1000), deadline(), "savings");
        assert_eq!(goal.current_amount, Money::zero());
        assert_eq!(goal.progress, 0.0);
        assert!(!goal.is_completed);
    }

    #[test]
    fn test_contribute_caps_at_target() {
        let mut goal = Goal::new("Vacation", Money::from_units(1000), deadline(), "savings");

        goal.contribute(Money::from_units(600));
        assert_eq!(goal.current_amount, Money::from_units(600));
        assert_eq!(goal.progress, 60.0);
        assert!(!goal.is_completed);

        goal.contribute(Money::from_units(500));
        assert_eq!(goal.current_amount, Money::from_units(1000));
        assert_eq!(goal.progress, 100.0);
        assert!(goal.is_completed);
        assert_eq!(goal.remaining(), Money::zero());
    }

    #[test]
    fn test_zero_target() {
        let mut goal = Goal::new("Nothing", Money::zero(), deadline(), "savings");
        goal.contribute(Money::from_units(10));
        assert_eq!(goal.current_amount, Money::zero());
        assert_eq!(goal.progress, 0.0);
        assert!(!goal.is_completed);
    }

    #[test]
    fn test_days_until_deadline() {
        let goal = Goal::new("Car", Money::from_units(5000), deadline(), "savings");
        let today = NaiveDate::from_ymd_opt(2026, 12, 24).unwrap();
        assert_eq!(goal.days_until_deadline(today), 7);

        let later = NaiveDate::from_ymd_opt(2027, 1, 2).unwrap();
        assert_eq!(goal.days_until_deadline(later), -2);
    }
}
