//! Recurring slice
//!
//! Two ordered lists: recurring expenses (`items`) and recurring income
//! (`income`). Toggle, advance and delete look in both lists, expenses first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{resolve, Lookup, Money, RecurringId, RecurringItem, RecurringKind};

use super::action::NewRecurring;

/// Persisted recurring collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecurringState {
    /// Recurring expenses
    #[serde(default)]
    pub items: Vec<RecurringItem>,

    /// Recurring income
    #[serde(default)]
    pub income: Vec<RecurringItem>,
}

impl RecurringState {
    pub fn add_expense(&mut self, input: NewRecurring) -> &RecurringItem {
        let item = build_item(RecurringKind::Expense, input);
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    pub fn add_income(&mut self, input: NewRecurring) -> &RecurringItem {
        let item = build_item(RecurringKind::Income, input);
        self.income.push(item);
        &self.income[self.income.len() - 1]
    }

    /// Flip the active flag, returning the item before the change
    pub fn toggle_active(&mut self, id: RecurringId) -> Option<RecurringItem> {
        let item = self.get_mut(id)?;
        let before = item.clone();
        item.is_active = !item.is_active;
        Some(before)
    }

    /// Overwrite the next due date, returning the item before the change
    pub fn advance_next_due(
        &mut self,
        id: RecurringId,
        next_due: DateTime<Utc>,
    ) -> Option<RecurringItem> {
        let item = self.get_mut(id)?;
        let before = item.clone();
        item.next_due = next_due;
        Some(before)
    }

    pub fn delete(&mut self, id: RecurringId) -> Option<RecurringItem> {
        if let Some(index) = self.items.iter().position(|i| i.id == id) {
            return Some(self.items.remove(index));
        }
        let index = self.income.iter().position(|i| i.id == id)?;
        Some(self.income.remove(index))
    }

    pub fn get(&self, id: RecurringId) -> Option<&RecurringItem> {
        self.all().find(|i| i.id == id)
    }

    fn get_mut(&mut self, id: RecurringId) -> Option<&mut RecurringItem> {
        self.items
            .iter_mut()
            .chain(self.income.iter_mut())
            .find(|i| i.id == id)
    }

    /// Find an item by id (full or short form) or by exact description
    pub fn find(&self, input: &str) -> Lookup<'_, RecurringItem> {
        let input = input.trim();
        resolve(self.all(), |i| {
            (i.id.match_input(input), i.description.eq_ignore_ascii_case(input))
        })
    }

    /// Expenses followed by income
    pub fn all(&self) -> impl Iterator<Item = &RecurringItem> {
        self.items.iter().chain(self.income.iter())
    }

    pub fn len(&self) -> usize {
        self.items.len() + self.income.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.income.is_empty()
    }
}

fn build_item(kind: RecurringKind, input: NewRecurring) -> RecurringItem {
    let mut item = RecurringItem::new(
        kind,
        input.description,
        input.amount,
        input.frequency,
        input.start_date,
    );
    item.category = input.category;
    item.budget_id = input.budget_id;
    item
}

/// Sum of monthly-equivalent amounts over active items
///
/// Weekly amounts count four times, yearly amounts a twelfth, monthly as-is.
pub fn monthly_amount<'a, I>(items: I) -> Money
where
    I: IntoIterator<Item = &'a RecurringItem>,
{
    items
        .into_iter()
        .filter(|i| i.is_active)
        .map(RecurringItem::monthly_equivalent)
        .sum()
}

/// Like `monthly_amount`, with weekly items at 52/12 per month
pub fn monthly_amount_exact<'a, I>(items: I) -> Money
where
    I: IntoIterator<Item = &'a RecurringItem>,
{
    items
        .into_iter()
        .filter(|i| i.is_active)
        .map(|i| i.frequency.monthly_equivalent_exact(i.amount))
        .sum()
}
