//! Application state and reducer
//!
//! `AppState` is the whole persisted snapshot: budgets, goals and recurring
//! items. It is owned by the caller and mutated only through
//! [`AppState::dispatch`], which applies one [`Action`] synchronously and
//! reports what changed.
//!
//! # Example
//!
//! ```
//! use fintrack::models::Money;
//! use fintrack::state::{Action, AppState, NewBudget};
//!
//! let mut state = AppState::default();
//! let outcome = state.dispatch(Action::AddBudget(NewBudget::new(
//!     "Groceries",
//!     Money::from_units(150),
//!     "food",
//! )));
//! assert!(outcome.is_applied());
//! assert_eq!(state.budgets.len(), 1);
//! ```

pub mod action;
pub mod budgets;
pub mod goals;
pub mod recurring;

pub use action::{Action, Effect, Entity, GoalPatch, NewBudget, NewGoal, NewRecurring, Outcome};
pub use budgets::BudgetState;
pub use goals::GoalState;
pub use recurring::{monthly_amount, monthly_amount_exact, RecurringState};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Snapshot layout version written by this build
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

/// Full application state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub budgets: BudgetState,

    #[serde(default)]
    pub recurring: RecurringState,

    #[serde(default)]
    pub goals: GoalState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            budgets: BudgetState::default(),
            recurring: RecurringState::default(),
            goals: GoalState::default(),
        }
    }
}

impl AppState {
    /// Apply a single action
    ///
    /// Actions that reference an unknown id change nothing and return
    /// [`Outcome::Ignored`].
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let name = action.name();
        let outcome = self.reduce(action);

        match &outcome {
            Outcome::Applied(effect) => {
                let entity = effect.entity();
                tracing::debug!(action = name, id = %entity.id_string(), "applied");
            }
            Outcome::Ignored => tracing::debug!(action = name, "ignored: no matching record"),
        }

        outcome
    }

    fn reduce(&mut self, action: Action) -> Outcome {
        match action {
            Action::AddBudget(input) => {
                let budget = self.budgets.add(input).clone();
                created(Entity::Budget(budget))
            }
            Action::EditBudget(budget) => {
                let id = budget.id;
                match self.budgets.edit(budget) {
                    Some(before) => updated(
                        Entity::Budget(before),
                        self.budgets.get(id).cloned().map(Entity::Budget),
                    ),
                    None => Outcome::Ignored,
                }
            }
            Action::DeleteBudget(id) => match self.budgets.delete(id) {
                Some(budget) => deleted(Entity::Budget(budget)),
                None => Outcome::Ignored,
            },
            Action::AddTransaction {
                budget_id,
                amount,
                description,
                at,
            } => {
                let at = at.unwrap_or_else(Utc::now);
                match self
                    .budgets
                    .add_transaction(budget_id, amount, description, at)
                {
                    Some(transaction) => created(Entity::Transaction {
                        budget_id,
                        transaction,
                    }),
                    None => Outcome::Ignored,
                }
            }
            Action::DeleteTransaction {
                budget_id,
                transaction_id,
            } => match self.budgets.delete_transaction(budget_id, transaction_id) {
                Some(transaction) => deleted(Entity::Transaction {
                    budget_id,
                    transaction,
                }),
                None => Outcome::Ignored,
            },
            Action::AddGoal(input) => {
                let goal = self.goals.add(input).clone();
                created(Entity::Goal(goal))
            }
            Action::UpdateGoalProgress { id, amount } => {
                match self.goals.update_progress(id, amount) {
                    Some(before) => updated(
                        Entity::Goal(before),
                        self.goals.get(id).cloned().map(Entity::Goal),
                    ),
                    None => Outcome::Ignored,
                }
            }
            Action::EditGoal { id, patch } => match self.goals.edit(id, patch) {
                Some(before) => updated(
                    Entity::Goal(before),
                    self.goals.get(id).cloned().map(Entity::Goal),
                ),
                None => Outcome::Ignored,
            },
            Action::DeleteGoal(id) => match self.goals.delete(id) {
                Some(goal) => deleted(Entity::Goal(goal)),
                None => Outcome::Ignored,
            },
            Action::AddRecurringExpense(input) => {
                let item = self.recurring.add_expense(input).clone();
                created(Entity::Recurring(item))
            }
            Action::AddRecurringIncome(input) => {
                let item = self.recurring.add_income(input).clone();
                created(Entity::Recurring(item))
            }
            Action::ToggleRecurring(id) => match self.recurring.toggle_active(id) {
                Some(before) => updated(
                    Entity::Recurring(before),
                    self.recurring.get(id).cloned().map(Entity::Recurring),
                ),
                None => Outcome::Ignored,
            },
            Action::AdvanceRecurring { id, next_due } => {
                match self.recurring.advance_next_due(id, next_due) {
                    Some(before) => updated(
                        Entity::Recurring(before),
                        self.recurring.get(id).cloned().map(Entity::Recurring),
                    ),
                    None => Outcome::Ignored,
                }
            }
            Action::DeleteRecurring(id) => match self.recurring.delete(id) {
                Some(item) => deleted(Entity::Recurring(item)),
                None => Outcome::Ignored,
            },
        }
    }
}

fn created(entity: Entity) -> Outcome {
    Outcome::Applied(Effect::Created(entity))
}

fn deleted(entity: Entity) -> Outcome {
    Outcome::Applied(Effect::Deleted(entity))
}

fn updated(before: Entity, after: Option<Entity>) -> Outcome {
    match after {
        Some(after) => Outcome::Applied(Effect::Updated { before, after }),
        None => Outcome::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, Frequency, GoalId, Money, RecurringId, TransactionId};
    use chrono::NaiveDate;

    fn add_budget(state: &mut AppState, amount: i64) -> BudgetId {
        let outcome = state.dispatch(Action::AddBudget(NewBudget::new(
            "Groceries",
            Money::from_units(amount),
            "food",
        )));
        match outcome.entity() {
            Some(Entity::Budget(b)) => b.id,
            other => panic!("unexpected entity: {:?}", other),
        }
    }

    #[test]
    fn test_budget_transaction_example() {
        let mut state = AppState::default();
        let budget_id = add_budget(&mut state, 150);

        let outcome = state.dispatch(Action::AddTransaction {
            budget_id,
            amount: Money::from_units(50),
            description: "Market".into(),
            at: None,
        });
        let transaction_id = match outcome.entity() {
            Some(Entity::Transaction { transaction, .. }) => transaction.id,
            other => panic!("unexpected entity: {:?}", other),
        };

        let budget = state.budgets.get(budget_id).unwrap();
        assert_eq!(budget.spent, Money::from_units(50));
        assert_eq!(budget.transactions.len(), 1);

        let outcome = state.dispatch(Action::DeleteTransaction {
            budget_id,
            transaction_id,
        });
        assert!(matches!(outcome, Outcome::Applied(Effect::Deleted(_))));

        let budget = state.budgets.get(budget_id).unwrap();
        assert_eq!(budget.spent, Money::zero());
        assert!(budget.transactions.is_empty());
    }

    #[test]
    fn test_goal_progress_example() {
        let mut state = AppState::default();
        let deadline = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let outcome = state.dispatch(Action::AddGoal(NewGoal::new(
            "Emergency fund",
            Money::from_units(1000),
            deadline,
            "savings",
        )));
        let id = match outcome.entity() {
            Some(Entity::Goal(g)) => g.id,
            other => panic!("unexpected entity: {:?}", other),
        };

        state.dispatch(Action::UpdateGoalProgress {
            id,
            amount: Money::from_units(600),
        });
        let outcome = state.dispatch(Action::UpdateGoalProgress {
            id,
            amount: Money::from_units(500),
        });

        match outcome {
            Outcome::Applied(Effect::Updated { before, after }) => {
                let (Entity::Goal(before), Entity::Goal(after)) = (before, after) else {
                    panic!("expected goal entities");
                };
                assert_eq!(before.current_amount, Money::from_units(600));
                assert_eq!(after.current_amount, Money::from_units(1000));
                assert!(after.is_completed);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_misses_are_ignored() {
        let mut state = AppState::default();
        add_budget(&mut state, 100);
        let before = state.clone();

        let actions = vec![
            Action::DeleteBudget(BudgetId::new()),
            Action::AddTransaction {
                budget_id: BudgetId::new(),
                amount: Money::from_units(1),
                description: "x".into(),
                at: None,
            },
            Action::DeleteTransaction {
                budget_id: BudgetId::new(),
                transaction_id: TransactionId::new(),
            },
            Action::UpdateGoalProgress {
                id: GoalId::new(),
                amount: Money::from_units(1),
            },
            Action::EditGoal {
                id: GoalId::new(),
                patch: GoalPatch::default(),
            },
            Action::DeleteGoal(GoalId::new()),
            Action::ToggleRecurring(RecurringId::new()),
            Action::AdvanceRecurring {
                id: RecurringId::new(),
                next_due: Utc::now(),
            },
            Action::DeleteRecurring(RecurringId::new()),
        ];

        for action in actions {
            assert_eq!(state.dispatch(action), Outcome::Ignored);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_delete_then_read_is_not_found() {
        let mut state = AppState::default();
        let budget_id = add_budget(&mut state, 100);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let recurring_id = match state
            .dispatch(Action::AddRecurringIncome(NewRecurring::new(
                "Salary",
                Money::from_units(2500),
                Frequency::Monthly,
                start,
            )))
            .entity()
        {
            Some(Entity::Recurring(r)) => r.id,
            other => panic!("unexpected entity: {:?}", other),
        };

        assert!(state.dispatch(Action::DeleteBudget(budget_id)).is_applied());
        assert!(state.dispatch(Action::DeleteRecurring(recurring_id)).is_applied());

        assert!(state.budgets.get(budget_id).is_none());
        assert!(state.recurring.get(recurring_id).is_none());
    }

    #[test]
    fn test_action_names_are_namespaced() {
        assert_eq!(Action::DeleteGoal(GoalId::new()).name(), "goals/deleteGoal");
        assert_eq!(
            Action::ToggleRecurring(RecurringId::new()).name(),
            "recurring/toggleRecurring"
        );
    }

    #[test]
    fn test_snapshot_shape() {
        let state = AppState::default();
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["schema_version"], 1);
        assert!(json["budgets"]["items"].is_array());
        assert!(json["recurring"]["items"].is_array());
        assert!(json["recurring"]["income"].is_array());
        assert!(json["goals"]["items"].is_array());
    }

    #[test]
    fn test_snapshot_without_version_reads_as_current() {
        let state: AppState = serde_json::from_str(r#"{"budgets": {"items": []}}"#).unwrap();
        assert_eq!(state.schema_version, CURRENT_SCHEMA_VERSION);
        assert!(state.goals.is_empty());
    }
}
