//! Goal service
//!
//! Validates goal input and dispatches goal actions.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::category::DEFAULT_GOAL_CATEGORY;
use crate::models::{normalize_category, Goal, Money};
use crate::state::{Action, Entity, GoalPatch, NewGoal};
use crate::storage::Storage;

use super::{expect_one, require_positive, require_text};

/// Service for savings goals
pub struct GoalService<'a> {
    storage: &'a mut Storage,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    pub fn create(
        &mut self,
        name: &str,
        target_amount: Money,
        deadline: NaiveDate,
        category: Option<&str>,
        description: Option<&str>,
    ) -> FinanceResult<Goal> {
        let name = require_text("Goal name", name)?;
        require_positive("Target amount", target_amount)?;

        let mut input = NewGoal::new(
            name,
            target_amount,
            deadline,
            normalize_category(category, DEFAULT_GOAL_CATEGORY),
        );
        input.description = description.map(|d| d.trim().to_string()).unwrap_or_default();

        let outcome = self.storage.dispatch(Action::AddGoal(input))?;
        match outcome.entity() {
            Some(Entity::Goal(goal)) => Ok(goal.clone()),
            _ => Err(FinanceError::Storage("Goal was not created".into())),
        }
    }

    pub fn find(&self, identifier: &str) -> FinanceResult<Goal> {
        expect_one(self.storage.state().goals.find(identifier), identifier, || {
            FinanceError::goal_not_found(identifier)
        })
    }

    pub fn list(&self) -> &[Goal] {
        &self.storage.state().goals.items
    }

    /// Add money to a goal
    pub fn contribute(&mut self, identifier: &str, amount: Money) -> FinanceResult<Goal> {
        require_positive("Contribution", amount)?;
        let goal = self.find(identifier)?;

        let outcome = self
            .storage
            .dispatch(Action::UpdateGoalProgress { id: goal.id, amount })?;
        self.updated_goal(&outcome, identifier)
    }

    pub fn edit(&mut self, identifier: &str, mut patch: GoalPatch) -> FinanceResult<Goal> {
        if patch.is_empty() {
            return Err(FinanceError::Validation("Nothing to change".into()));
        }
        if let Some(name) = patch.name.take() {
            patch.name = Some(require_text("Goal name", &name)?);
        }
        if let Some(target) = patch.target_amount {
            require_positive("Target amount", target)?;
        }
        if let Some(current) = patch.current_amount {
            if current.is_negative() {
                return Err(FinanceError::Validation(
                    "Current amount cannot be negative".into(),
                ));
            }
        }
        if let Some(category) = patch.category.take() {
            patch.category = Some(normalize_category(Some(&category), DEFAULT_GOAL_CATEGORY));
        }

        let goal = self.find(identifier)?;
        let outcome = self.storage.dispatch(Action::EditGoal { id: goal.id, patch })?;
        self.updated_goal(&outcome, identifier)
    }

    pub fn delete(&mut self, identifier: &str) -> FinanceResult<Goal> {
        let goal = self.find(identifier)?;
        let outcome = self.storage.dispatch(Action::DeleteGoal(goal.id))?;

        match outcome.entity() {
            Some(Entity::Goal(removed)) => Ok(removed.clone()),
            _ => Err(FinanceError::goal_not_found(identifier)),
        }
    }

    fn updated_goal(
        &self,
        outcome: &crate::state::Outcome,
        identifier: &str,
    ) -> FinanceResult<Goal> {
        match outcome.entity() {
            Some(Entity::Goal(goal)) => Ok(goal.clone()),
            _ => Err(FinanceError::goal_not_found(identifier)),
        }
    }
}
