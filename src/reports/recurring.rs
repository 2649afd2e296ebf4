//! Recurring totals
//!
//! Monthly income and expenses implied by the active recurring items, and
//! the items coming due soon.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Money, RecurringItem};
use crate::state::{monthly_amount, monthly_amount_exact, AppState};

#[derive(Debug, Clone, PartialEq)]
pub struct RecurringSummary {
    /// Weekly items counted four times a month
    pub monthly_income: Money,
    pub monthly_expenses: Money,
    /// Weekly items counted 52/12 times a month
    pub monthly_income_exact: Money,
    pub monthly_expenses_exact: Money,
    pub income_count: usize,
    pub expense_count: usize,
    pub active_count: usize,
}

impl RecurringSummary {
    pub fn generate(state: &AppState) -> Self {
        let recurring = &state.recurring;

        Self {
            monthly_income: monthly_amount(&recurring.income),
            monthly_expenses: monthly_amount(&recurring.items),
            monthly_income_exact: monthly_amount_exact(&recurring.income),
            monthly_expenses_exact: monthly_amount_exact(&recurring.items),
            income_count: recurring.income.len(),
            expense_count: recurring.items.len(),
            active_count: recurring.all().filter(|i| i.is_active).count(),
        }
    }

    pub fn net(&self) -> Money {
        self.monthly_income - self.monthly_expenses
    }

    pub fn net_exact(&self) -> Money {
        self.monthly_income_exact - self.monthly_expenses_exact
    }
}

/// Active items due within `days` of `now`, soonest first
///
/// Items already past due are included.
pub fn upcoming(state: &AppState, now: DateTime<Utc>, days: i64) -> Vec<&RecurringItem> {
    let horizon = now + Duration::days(days);
    let mut items: Vec<&RecurringItem> = state
        .recurring
        .all()
        .filter(|i| i.is_active && i.next_due <= horizon)
        .collect();
    items.sort_by_key(|i| i.next_due);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recurring::start_of_day;
    use crate::models::Frequency;
    use crate::state::{Action, NewRecurring};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> AppState {
        let mut state = AppState::default();
        let new = |desc: &str, units, freq, start| {
            NewRecurring::new(desc, Money::from_units(units), freq, start)
        };

        state.dispatch(Action::AddRecurringIncome(new("Salary", 2000, Frequency::Monthly, date(2025, 1, 25))));
        state.dispatch(Action::AddRecurringExpense(new("Cleaner", 100, Frequency::Weekly, date(2025, 1, 3))));
        state.dispatch(Action::AddRecurringExpense(new("Insurance", 1200, Frequency::Yearly, date(2025, 6, 1))));
        state.dispatch(Action::AddRecurringExpense(new("Gym", 500, Frequency::Monthly, date(2025, 1, 2))));
        let gym = state.recurring.items[2].id;
        state.dispatch(Action::ToggleRecurring(gym));
        state
    }

    #[test]
    fn test_monthly_totals() {
        let summary = RecurringSummary::generate(&setup());

        assert_eq!(summary.monthly_income, Money::from_units(2000));
        // 100 * 4 + 1200 / 12, the paused gym does not count
        assert_eq!(summary.monthly_expenses, Money::from_units(500));
        assert_eq!(summary.net(), Money::from_units(1500));
        assert_eq!(summary.monthly_expenses_exact, Money::from_cents(53333));
        assert_eq!(summary.income_count, 1);
        assert_eq!(summary.expense_count, 3);
        assert_eq!(summary.active_count, 3);
    }

    #[test]
    fn test_upcoming_window() {
        let state = setup();
        let items = upcoming(&state, start_of_day(date(2025, 1, 1)), 7);
        let names: Vec<_> = items.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(names, vec!["Cleaner"]);

        let items = upcoming(&state, start_of_day(date(2025, 1, 1)), 30);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].description, "Salary");
    }
}
