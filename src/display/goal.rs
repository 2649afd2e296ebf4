//! Goal display formatting
//!
//! Goal tables show progress, the time left and a deadline status.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{category_label, Goal};
use crate::reports::{remaining_time, GoalStatus, GoalSummary};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format goals as a table followed by their summary
pub fn format_goal_list(
    goals: &[&Goal],
    today: NaiveDate,
    symbol: &str,
    date_format: &str,
) -> String {
    if goals.is_empty() {
        return "No goals found.".to_string();
    }

    let rows = goals.iter().map(|goal| {
        let status = GoalStatus::of(goal, today);
        let status = match status {
            GoalStatus::Completed => status.to_string(),
            _ => format!("{} ({})", status, remaining_time(goal.deadline, today)),
        };

        GoalRow {
            id: goal.id.to_string(),
            name: goal.name.clone(),
            category: category_label(&goal.category).to_string(),
            saved: goal.current_amount.format_with_symbol(symbol),
            target: goal.target_amount.format_with_symbol(symbol),
            progress: format!("{:.0}%", goal.progress),
            deadline: goal.deadline.format(date_format).to_string(),
            status,
        }
    });

    let summary = GoalSummary::from_goals(goals.iter().copied());
    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push_str(&format!(
        "\n{} goal{}, {} of {} saved, {}% avg progress, {} completed\n",
        summary.count,
        if summary.count == 1 { "" } else { "s" },
        summary.total_saved.format_with_symbol(symbol),
        summary.total_target.format_with_symbol(symbol),
        summary.average_progress,
        summary.completed,
    ));
    output
}

/// Format a single goal's details
pub fn format_goal_details(goal: &Goal, today: NaiveDate, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Goal: {}\n", goal.name));
    output.push_str(&format!("  ID:        {}\n", goal.id));
    if !goal.description.is_empty() {
        output.push_str(&format!("  About:     {}\n", goal.description));
    }
    output.push_str(&format!("  Category:  {}\n", category_label(&goal.category)));
    output.push_str(&format!(
        "  Saved:     {} of {} ({:.0}%)\n",
        goal.current_amount.format_with_symbol(symbol),
        goal.target_amount.format_with_symbol(symbol),
        goal.progress
    ));
    output.push_str(&format!("  Remaining: {}\n", goal.remaining().format_with_symbol(symbol)));
    output.push_str(&format!(
        "  Deadline:  {} ({})\n",
        goal.deadline.format(date_format),
        remaining_time(goal.deadline, today)
    ));
    output.push_str(&format!("  Status:    {}\n", GoalStatus::of(goal, today)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_goal_list() {
        let mut car = Goal::new("Car", Money::from_units(5000), date(2026, 3, 1), "transportation");
        car.contribute(Money::from_units(1000));
        let mut trip = Goal::new("Trip", Money::from_units(500), date(2026, 1, 3), "savings");
        trip.contribute(Money::from_units(500));

        let output = format_goal_list(&[&car, &trip], date(2026, 1, 1), "€", "%Y-%m-%d");

        assert!(output.contains("Transportation"));
        assert!(output.contains("20%"));
        assert!(output.contains("On track (1 month left)"));
        assert!(output.contains("Completed"));
        assert!(output.contains("2 goals, €1500.00 of €5500.00 saved, 60% avg progress, 1 completed"));
    }

    #[test]
    fn test_format_goal_details() {
        let mut goal = Goal::new("Laptop", Money::from_units(1200), date(2026, 1, 5), "other");
        goal.description = "For work".into();
        let output = format_goal_details(&goal, date(2026, 1, 1), "€", "%d.%m.%Y");

        assert!(output.contains("Goal: Laptop"));
        assert!(output.contains("For work"));
        assert!(output.contains("05.01.2026 (4 days left)"));
        assert!(output.contains("Status:    Urgent"));
    }
}
