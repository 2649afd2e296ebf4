//! Dashboard display formatting

use crate::reports::DashboardReport;

/// Format the dashboard for terminal display
pub fn format_dashboard(report: &DashboardReport, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str("Dashboard\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "Total budget:      {}\n",
        report.total_budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total spent:       {}\n",
        report.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Transactions:      {}\n", report.total_transactions));
    output.push_str(&format!(
        "Completed budgets: {}/{}\n",
        report.completed_budgets, report.total_budgets
    ));
    output.push_str(&format!(
        "Goals:             {} saved of {} ({}% avg)\n",
        report.goals.total_saved.format_with_symbol(symbol),
        report.goals.total_target.format_with_symbol(symbol),
        report.goals.average_progress
    ));
    output.push_str(&format!(
        "Recurring net:     {} per month ({} upcoming)\n",
        report.recurring.net().format_with_symbol(symbol),
        report.upcoming_count
    ));

    output.push_str("\nRecent budgets\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    if report.recent_budgets.is_empty() {
        output.push_str("  No budgets yet.\n");
    }
    for budget in &report.recent_budgets {
        output.push_str(&format!(
            "  {:<28} {:>12} / {:>12}  {:>4.0}%\n",
            budget.name,
            budget.spent.format_with_symbol(symbol),
            budget.amount.format_with_symbol(symbol),
            budget.progress_percent()
        ));
    }

    output.push_str("\nRecent transactions\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    if report.recent_transactions.is_empty() {
        output.push_str("  No transactions yet.\n");
    }
    for row in &report.recent_transactions {
        output.push_str(&format!(
            "  {}  {:<24} {:<16} {:>12}\n",
            row.transaction.created_at.format(date_format),
            row.transaction.description,
            row.budget_name,
            row.transaction.amount.format_with_symbol(symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recurring::start_of_day;
    use crate::models::Money;
    use crate::state::{Action, AppState, NewBudget};
    use chrono::NaiveDate;

    #[test]
    fn test_format_dashboard() {
        let mut state = AppState::default();
        state.dispatch(Action::AddBudget(NewBudget::new("Groceries", Money::from_units(150), "food")));
        let budget_id = state.budgets.items[0].id;
        state.dispatch(Action::AddTransaction {
            budget_id,
            amount: Money::from_units(50),
            description: "Market".into(),
            at: None,
        });

        let now = start_of_day(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let report = DashboardReport::generate(&state, now, 7);
        let output = format_dashboard(&report, "€", "%Y-%m-%d");

        assert!(output.contains("Total budget:      €150.00"));
        assert!(output.contains("Completed budgets: 0/1"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("Market"));
    }

    #[test]
    fn test_format_empty_dashboard() {
        let now = start_of_day(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let report = DashboardReport::generate(&AppState::default(), now, 7);
        let output = format_dashboard(&report, "€", "%Y-%m-%d");

        assert!(output.contains("No budgets yet."));
        assert!(output.contains("No transactions yet."));
    }
}
