//! Recurring item service
//!
//! Manages recurring income and expenses and applies the ones that have
//! fallen due: each missed occurrence of an expense linked to a budget adds
//! a transaction there, and every due item moves its next-due date forward.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{FinanceError, FinanceResult};
use crate::models::category::DEFAULT_CATEGORY;
use crate::models::{
    normalize_category, BudgetId, Frequency, Money, RecurringId, RecurringItem, RecurringKind,
};
use crate::state::{Action, AppState, Entity, NewRecurring};
use crate::storage::Storage;

use super::{expect_one, require_positive, require_text};

/// Upper bound on occurrences caught up per item in one run
pub const MAX_CATCH_UP: usize = 366;

/// Input for a new recurring item
#[derive(Debug, Clone)]
pub struct CreateRecurringInput {
    pub kind: RecurringKind,
    pub description: String,
    pub amount: Money,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub category: Option<String>,
    /// Budget name or id receiving generated transactions (expenses only)
    pub budget: Option<String>,
}

/// What processing did for one recurring item
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedItem {
    pub recurring_id: RecurringId,
    pub description: String,
    /// Due dates that were consumed
    pub occurrences: Vec<DateTime<Utc>>,
    /// Budget that received a transaction per occurrence, if any
    pub budget_id: Option<BudgetId>,
    pub next_due: DateTime<Utc>,
}

impl ProcessedItem {
    pub fn transactions_added(&self) -> usize {
        if self.budget_id.is_some() {
            self.occurrences.len()
        } else {
            0
        }
    }
}

/// Work out which recurring items are due at `now` without changing anything
pub fn plan_due(state: &AppState, now: DateTime<Utc>) -> Vec<ProcessedItem> {
    state
        .recurring
        .all()
        .filter(|item| item.is_due(now))
        .map(|item| plan_item(state, item, now))
        .collect()
}

fn plan_item(state: &AppState, item: &RecurringItem, now: DateTime<Utc>) -> ProcessedItem {
    let mut occurrences = Vec::new();
    let mut next_due = item.next_due;

    while next_due <= now && occurrences.len() < MAX_CATCH_UP {
        occurrences.push(next_due);
        let advanced = item.frequency.advance(next_due);
        if advanced <= next_due {
            break;
        }
        next_due = advanced;
    }

    let budget_id = match item.kind {
        RecurringKind::Expense => item
            .budget_id
            .filter(|id| state.budgets.get(*id).is_some()),
        RecurringKind::Income => None,
    };

    ProcessedItem {
        recurring_id: item.id,
        description: item.description.clone(),
        occurrences,
        budget_id,
        next_due,
    }
}

/// Actions that carry out a processing plan
pub fn plan_actions(plan: &[ProcessedItem], amount_of: impl Fn(RecurringId) -> Money) -> Vec<Action> {
    let mut actions = Vec::new();

    for item in plan {
        if let Some(budget_id) = item.budget_id {
            let amount = amount_of(item.recurring_id);
            for due in &item.occurrences {
                actions.push(Action::AddTransaction {
                    budget_id,
                    amount,
                    description: item.description.clone(),
                    at: Some(*due),
                });
            }
        }
        actions.push(Action::AdvanceRecurring {
            id: item.recurring_id,
            next_due: item.next_due,
        });
    }

    actions
}

/// Service for recurring items
pub struct RecurringService<'a> {
    storage: &'a mut Storage,
}

impl<'a> RecurringService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    pub fn create(&mut self, input: CreateRecurringInput) -> FinanceResult<RecurringItem> {
        let description = require_text("Description", &input.description)?;
        require_positive("Amount", input.amount)?;

        let budget_id = match (&input.kind, input.budget.as_deref()) {
            (_, None) => None,
            (RecurringKind::Income, Some(_)) => {
                return Err(FinanceError::Validation(
                    "Income items cannot be linked to a budget".into(),
                ))
            }
            (RecurringKind::Expense, Some(budget)) => Some(
                expect_one(self.storage.state().budgets.find(budget), budget, || {
                    FinanceError::budget_not_found(budget)
                })?
                .id,
            ),
        };

        let mut new_item =
            NewRecurring::new(description, input.amount, input.frequency, input.start_date);
        new_item.category = normalize_category(input.category.as_deref(), DEFAULT_CATEGORY);
        new_item.budget_id = budget_id;

        let action = match input.kind {
            RecurringKind::Expense => Action::AddRecurringExpense(new_item),
            RecurringKind::Income => Action::AddRecurringIncome(new_item),
        };

        let outcome = self.storage.dispatch(action)?;
        match outcome.entity() {
            Some(Entity::Recurring(item)) => Ok(item.clone()),
            _ => Err(FinanceError::Storage("Recurring item was not created".into())),
        }
    }

    pub fn find(&self, identifier: &str) -> FinanceResult<RecurringItem> {
        expect_one(self.storage.state().recurring.find(identifier), identifier, || {
            FinanceError::recurring_not_found(identifier)
        })
    }

    pub fn expenses(&self) -> &[RecurringItem] {
        &self.storage.state().recurring.items
    }

    pub fn income(&self) -> &[RecurringItem] {
        &self.storage.state().recurring.income
    }

    /// Pause or resume an item
    pub fn toggle(&mut self, identifier: &str) -> FinanceResult<RecurringItem> {
        let item = self.find(identifier)?;
        let outcome = self.storage.dispatch(Action::ToggleRecurring(item.id))?;

        match outcome.entity() {
            Some(Entity::Recurring(updated)) => Ok(updated.clone()),
            _ => Err(FinanceError::recurring_not_found(identifier)),
        }
    }

    pub fn delete(&mut self, identifier: &str) -> FinanceResult<RecurringItem> {
        let item = self.find(identifier)?;
        let outcome = self.storage.dispatch(Action::DeleteRecurring(item.id))?;

        match outcome.entity() {
            Some(Entity::Recurring(removed)) => Ok(removed.clone()),
            _ => Err(FinanceError::recurring_not_found(identifier)),
        }
    }

    /// Apply every item due at `now`
    pub fn process_due(&mut self, now: DateTime<Utc>) -> FinanceResult<Vec<ProcessedItem>> {
        let state = self.storage.state();
        let plan = plan_due(state, now);
        let actions = plan_actions(&plan, |id| {
            state.recurring.get(id).map(|i| i.amount).unwrap_or_default()
        });

        for action in actions {
            self.storage.dispatch(action)?;
        }

        tracing::info!(items = plan.len(), "processed due recurring items");
        Ok(plan)
    }
}
