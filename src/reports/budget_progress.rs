//! Budget progress report
//!
//! Spending against target for every budget, with grand totals.

use crate::models::{Budget, BudgetId, Money};
use crate::state::AppState;

/// Progress of a single budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgressRow {
    pub budget_id: BudgetId,
    pub name: String,
    pub category: String,
    pub amount: Money,
    pub spent: Money,
    /// Negative once overspent
    pub remaining: Money,
    pub percent: f64,
    pub transaction_count: usize,
}

impl BudgetProgressRow {
    pub fn from_budget(budget: &Budget) -> Self {
        Self {
            budget_id: budget.id,
            name: budget.name.clone(),
            category: budget.category.clone(),
            amount: budget.amount,
            spent: budget.spent,
            remaining: budget.remaining(),
            percent: budget.progress_percent(),
            transaction_count: budget.transactions.len(),
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    pub rows: Vec<BudgetProgressRow>,
    pub total_amount: Money,
    pub total_spent: Money,
}

impl BudgetProgress {
    pub fn generate(state: &AppState) -> Self {
        let rows: Vec<BudgetProgressRow> = state
            .budgets
            .items
            .iter()
            .map(BudgetProgressRow::from_budget)
            .collect();

        Self {
            total_amount: rows.iter().map(|r| r.amount).sum(),
            total_spent: rows.iter().map(|r| r.spent).sum(),
            rows,
        }
    }

    pub fn total_remaining(&self) -> Money {
        self.total_amount - self.total_spent
    }

    pub fn overspent(&self) -> impl Iterator<Item = &BudgetProgressRow> {
        self.rows.iter().filter(|r| r.is_overspent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Action, NewBudget};

    #[test]
    fn test_progress_rows_and_totals() {
        let mut state = AppState::default();
        state.dispatch(Action::AddBudget(NewBudget::new("Food", Money::from_units(200), "food")));
        state.dispatch(Action::AddBudget(NewBudget::new("Fun", Money::from_units(50), "entertainment")));
        let food = state.budgets.items[0].id;
        let fun = state.budgets.items[1].id;

        for (budget_id, units) in [(food, 50), (fun, 60)] {
            state.dispatch(Action::AddTransaction {
                budget_id,
                amount: Money::from_units(units),
                description: "Spend".into(),
                at: None,
            });
        }

        let report = BudgetProgress::generate(&state);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].percent, 25.0);
        assert_eq!(report.rows[0].remaining, Money::from_units(150));
        assert_eq!(report.total_amount, Money::from_units(250));
        assert_eq!(report.total_spent, Money::from_units(110));
        assert_eq!(report.total_remaining(), Money::from_units(140));

        let overspent: Vec<_> = report.overspent().map(|r| r.name.as_str()).collect();
        assert_eq!(overspent, vec!["Fun"]);
    }
}
