//! Recurring item model
//!
//! Templates for periodic income and expenses (rent, salary, subscriptions).
//! Each item knows when it is next due and how to step to the following date.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, RecurringId};
use super::money::Money;

/// How often a recurring item repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Frequency {
    /// The next due date after `from`
    ///
    /// Calendar steps clamp to the end of shorter months, so Jan 31 advances
    /// to the last day of February.
    pub fn advance(&self, from: DateTime<Utc>) -> DateTime<Utc> {
        let next = match self {
            Self::Weekly => from.checked_add_signed(Duration::days(7)),
            Self::Monthly => from.checked_add_months(Months::new(1)),
            Self::Yearly => from.checked_add_months(Months::new(12)),
        };
        next.unwrap_or(from)
    }

    /// Monthly-equivalent amount using the 4-weeks-per-month approximation
    pub fn monthly_equivalent(&self, amount: Money) -> Money {
        match self {
            Self::Weekly => amount.times(4),
            Self::Monthly => amount,
            Self::Yearly => amount.divided_by(12),
        }
    }

    /// Monthly-equivalent amount using 52 weeks per year
    pub fn monthly_equivalent_exact(&self, amount: Money) -> Money {
        match self {
            Self::Weekly => amount.times(52).divided_by(12),
            Self::Monthly => amount,
            Self::Yearly => amount.divided_by(12),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "yearly" | "year" | "annual" | "y" => Ok(Self::Yearly),
            other => Err(format!("Unknown frequency: {}", other)),
        }
    }
}

/// Which list a recurring item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecurringKind {
    #[default]
    Expense,
    Income,
}

impl fmt::Display for RecurringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
        }
    }
}

/// A periodic income or expense template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringItem {
    pub id: RecurringId,

    pub description: String,

    pub amount: Money,

    #[serde(default)]
    pub frequency: Frequency,

    /// When the next occurrence falls due
    pub next_due: DateTime<Utc>,

    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default)]
    pub kind: RecurringKind,

    #[serde(default)]
    pub category: String,

    /// Budget that receives the generated transactions (expenses only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_id: Option<BudgetId>,

    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl RecurringItem {
    /// Create an active item first due at midnight UTC on `start_date`
    pub fn new(
        kind: RecurringKind,
        description: impl Into<String>,
        amount: Money,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: RecurringId::new(),
            description: description.into(),
            amount,
            frequency,
            next_due: start_of_day(start_date),
            is_active: true,
            kind,
            category: String::new(),
            budget_id: None,
            created_at: Utc::now(),
        }
    }

    /// Active and due at or before `now`
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.next_due <= now
    }

    pub fn monthly_equivalent(&self) -> Money {
        self.frequency.monthly_equivalent(self.amount)
    }
}

impl fmt::Display for RecurringItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.description, self.amount, self.frequency)
    }
}

/// Midnight UTC at the start of `date`
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
