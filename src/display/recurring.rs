//! Recurring item display formatting

use chrono::{DateTime, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{category_label, RecurringItem};
use crate::reports::RecurringSummary;
use crate::services::ProcessedItem;

#[derive(Tabled)]
struct RecurringRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Next due")]
    next_due: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn section(
    title: &str,
    items: &[RecurringItem],
    now: DateTime<Utc>,
    upcoming_days: i64,
    symbol: &str,
    date_format: &str,
) -> String {
    if items.is_empty() {
        return format!("{}: none\n", title);
    }

    let rows = items.iter().map(|item| {
        let status = if !item.is_active {
            "Paused"
        } else if item.is_due(now) {
            "Due"
        } else if (item.next_due - now).num_days() < upcoming_days {
            "Upcoming"
        } else {
            "Active"
        };

        RecurringRow {
            id: item.id.to_string(),
            description: item.description.clone(),
            category: if item.category.is_empty() {
                String::new()
            } else {
                category_label(&item.category).to_string()
            },
            amount: item.amount.format_with_symbol(symbol),
            frequency: item.frequency.to_string(),
            next_due: item.next_due.format(date_format).to_string(),
            status: status.to_string(),
        }
    });

    format!("{}:\n{}\n", title, Table::new(rows).with(Style::rounded()))
}

/// Format both recurring lists and the monthly totals
pub fn format_recurring_list(
    expenses: &[RecurringItem],
    income: &[RecurringItem],
    summary: &RecurringSummary,
    now: DateTime<Utc>,
    upcoming_days: i64,
    symbol: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&section("Income", income, now, upcoming_days, symbol, date_format));
    output.push('\n');
    output.push_str(&section("Expenses", expenses, now, upcoming_days, symbol, date_format));
    output.push('\n');
    output.push_str(&format_recurring_summary(summary, symbol));
    output
}

pub fn format_recurring_summary(summary: &RecurringSummary, symbol: &str) -> String {
    let mut output = format!(
        "Monthly income:   {}\nMonthly expenses: {}\nNet per month:    {}",
        summary.monthly_income.format_with_symbol(symbol),
        summary.monthly_expenses.format_with_symbol(symbol),
        summary.net().format_with_symbol(symbol),
    );
    // Weekly items count four times a month above
    if summary.net_exact() != summary.net() {
        output.push_str(&format!(
            " ({} at 52 weeks a year)",
            summary.net_exact().format_with_symbol(symbol)
        ));
    }
    output.push('\n');
    output
}

/// Format the result of processing due items
pub fn format_processed(processed: &[ProcessedItem], date_format: &str) -> String {
    if processed.is_empty() {
        return "Nothing due.".to_string();
    }

    let mut output = String::new();
    for item in processed {
        output.push_str(&format!(
            "{}: {} occurrence{}, {} transaction{} added, next due {}\n",
            item.description,
            item.occurrences.len(),
            if item.occurrences.len() == 1 { "" } else { "s" },
            item.transactions_added(),
            if item.transactions_added() == 1 { "" } else { "s" },
            item.next_due.format(date_format),
        ));
    }
    output
}
