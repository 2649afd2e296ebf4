//! Goal slice
//!
//! Savings goals with progress tracking. Contributions through
//! `update_progress` only move the saved amount up, capped at the target;
//! `edit` can overwrite any field.

use serde::{Deserialize, Serialize};

use crate::models::{resolve, Goal, GoalId, Lookup, Money};

use super::action::{GoalPatch, NewGoal};

/// Persisted goal collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalState {
    #[serde(default)]
    pub items: Vec<Goal>,
}

impl GoalState {
    /// Append a new goal with nothing saved
    pub fn add(&mut self, input: NewGoal) -> &Goal {
        let mut goal = Goal::new(
            input.name,
            input.target_amount,
            input.deadline,
            input.category,
        );
        goal.description = input.description;

        self.items.push(goal);
        &self.items[self.items.len() - 1]
    }

    /// Add `amount` to a goal's saved amount, returning the goal before the change
    pub fn update_progress(&mut self, id: GoalId, amount: Money) -> Option<Goal> {
        let goal = self.get_mut(id)?;
        let before = goal.clone();
        goal.contribute(amount);
        Some(before)
    }

    /// Merge the set fields of `patch` into a goal, returning the previous version
    pub fn edit(&mut self, id: GoalId, patch: GoalPatch) -> Option<Goal> {
        let goal = self.get_mut(id)?;
        let before = goal.clone();

        if let Some(name) = patch.name {
            goal.name = name;
        }
        if let Some(description) = patch.description {
            goal.description = description;
        }
        if let Some(target) = patch.target_amount {
            goal.target_amount = target;
        }
        if let Some(current) = patch.current_amount {
            goal.current_amount = current;
        }
        if let Some(deadline) = patch.deadline {
            goal.deadline = deadline;
        }
        if let Some(category) = patch.category {
            goal.category = category;
        }
        goal.recompute_progress();

        Some(before)
    }

    pub fn delete(&mut self, id: GoalId) -> Option<Goal> {
        let index = self.items.iter().position(|g| g.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.items.iter().find(|g| g.id == id)
    }

    fn get_mut(&mut self, id: GoalId) -> Option<&mut Goal> {
        self.items.iter_mut().find(|g| g.id == id)
    }

    /// Find a goal by id (full or short form) or by exact name
    pub fn find(&self, input: &str) -> Lookup<'_, Goal> {
        let input = input.trim();
        resolve(&self.items, |g| {
            (g.id.match_input(input), g.name.eq_ignore_ascii_case(input))
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn state_with_goal(target: i64) -> (GoalState, GoalId) {
        let mut state = GoalState::default();
        let deadline = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        let id = state
            .add(NewGoal::new("Vacation", Money::from_units(target), deadline, "savings"))
            .id;
        (state, id)
    }

    #[test]
    fn test_add_starts_at_zero() {
        let (state, id) = state_with_goal(1000);
        let goal = state.get(id).unwrap();
        assert_eq!(goal.current_amount, Money::zero());
        assert_eq!(goal.progress, 0.0);
        assert!(!goal.is_completed);
    }

    #[test]
    fn test_update_progress_example() {
        let (mut state, id) = state_with_goal(1000);

        state.update_progress(id, Money::from_units(600)).unwrap();
        let goal = state.get(id).unwrap();
        assert_eq!(goal.current_amount, Money::from_units(600));
        assert_eq!(goal.progress, 60.0);
        assert!(!goal.is_completed);

        state.update_progress(id, Money::from_units(500)).unwrap();
        let goal = state.get(id).unwrap();
        assert_eq!(goal.current_amount, Money::from_units(1000));
        assert_eq!(goal.progress, 100.0);
        assert!(goal.is_completed);
    }

    #[test]
    fn test_update_progress_is_monotonic() {
        let (mut state, id) = state_with_goal(300);
        let mut last = Money::zero();

        for cents in [2500, 0, 17, 9000, 40000, 1] {
            state.update_progress(id, Money::from_cents(cents)).unwrap();
            let goal = state.get(id).unwrap();
            assert!(goal.current_amount >= last);
            assert!(goal.current_amount <= goal.target_amount);
            assert!(goal.progress <= 100.0);
            last = goal.current_amount;
        }
    }

    #[test]
    fn test_update_progress_unknown_is_noop() {
        let (mut state, _) = state_with_goal(300);
        let before = state.clone();
        assert!(state.update_progress(GoalId::new(), Money::from_units(5)).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_edit_merges_fields() {
        let (mut state, id) = state_with_goal(1000);
        state.update_progress(id, Money::from_units(500)).unwrap();

        let patch = GoalPatch {
            name: Some("Trip".into()),
            target_amount: Some(Money::from_units(500)),
            ..GoalPatch::default()
        };
        let before = state.edit(id, patch).unwrap();
        assert_eq!(before.name, "Vacation");

        let goal = state.get(id).unwrap();
        assert_eq!(goal.name, "Trip");
        assert_eq!(goal.category, "savings");
        assert_eq!(goal.progress, 100.0);
        assert!(goal.is_completed);
    }

    #[test]
    fn test_edit_can_lower_current_amount() {
        let (mut state, id) = state_with_goal(1000);
        state.update_progress(id, Money::from_units(800)).unwrap();

        let patch = GoalPatch {
            current_amount: Some(Money::from_units(100)),
            ..GoalPatch::default()
        };
        state.edit(id, patch).unwrap();
        assert_eq!(state.get(id).unwrap().progress, 10.0);
    }

    #[test]
    fn test_delete() {
        let (mut state, id) = state_with_goal(1000);
        assert!(state.delete(id).is_some());
        assert!(state.get(id).is_none());
        assert!(matches!(state.find("Vacation"), Lookup::Missing));
        assert!(state.delete(id).is_none());
    }
}
