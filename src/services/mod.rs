//! Service layer for fintrack
//!
//! Services validate user input, resolve names and short ids to entities,
//! and turn requests into state actions dispatched through [`Storage`].
//! A lookup the reducer would ignore is reported as `NotFound` here.
//!
//! [`Storage`]: crate::storage::Storage

pub mod budget;
pub mod goal;
pub mod recurring;

pub use budget::{BudgetChanges, BudgetService};
pub use goal::GoalService;
pub use recurring::{plan_actions, plan_due, CreateRecurringInput, ProcessedItem, RecurringService};

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Lookup, Money};

/// Trim a required text field, rejecting blanks
pub(crate) fn require_text(field: &str, value: &str) -> FinanceResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FinanceError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(value.to_string())
}

/// Turn a lookup into the one record it names
pub(crate) fn expect_one<T: Clone>(
    lookup: Lookup<'_, T>,
    identifier: &str,
    not_found: impl FnOnce() -> FinanceError,
) -> FinanceResult<T> {
    match lookup {
        Lookup::Found(item) => Ok(item.clone()),
        Lookup::Missing => Err(not_found()),
        Lookup::Ambiguous(count) => Err(FinanceError::Validation(format!(
            "Ambiguous identifier '{}' matches {} records; use the full id",
            identifier.trim(),
            count
        ))),
    }
}

pub(crate) fn require_positive(field: &str, amount: Money) -> FinanceResult<()> {
    if !amount.is_positive() {
        return Err(FinanceError::Validation(format!(
            "{} must be greater than zero",
            field
        )));
    }
    if amount > Money::MAX_INPUT {
        return Err(FinanceError::Validation(format!(
            "{} cannot exceed {}",
            field,
            Money::MAX_INPUT
        )));
    }
    Ok(())
}

/// Parse a date in the given chrono format
pub fn parse_date(input: &str, format: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), format).map_err(|_| {
        FinanceError::Validation(format!(
            "Invalid date '{}'. Expected format {}",
            input, format
        ))
    })
}

/// Parse a money amount such as `12.50` or `€12.50`
pub fn parse_amount(input: &str) -> FinanceResult<Money> {
    Money::parse(input).map_err(|e| FinanceError::Validation(e.to_string()))
}
