//! Budget display formatting
//!
//! Formats budgets for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{category_label, Budget};
use crate::reports::BudgetProgress;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    amount: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

/// Format the budget progress report as a table with a total line
pub fn format_budget_list(report: &BudgetProgress, symbol: &str) -> String {
    if report.rows.is_empty() {
        return "No budgets found.".to_string();
    }

    let rows = report.rows.iter().map(|row| {
        let marker = if row.is_overspent() { " *" } else { "" };
        BudgetRow {
            id: row.budget_id.to_string(),
            name: row.name.clone(),
            category: category_label(&row.category).to_string(),
            amount: row.amount.format_with_symbol(symbol),
            spent: row.spent.format_with_symbol(symbol),
            remaining: format!("{}{}", row.remaining.format_with_symbol(symbol), marker),
            progress: format!("{:.0}%", row.percent),
        }
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push_str(&format!(
        "\nTotal: {} budgeted, {} spent, {} remaining\n",
        report.total_amount.format_with_symbol(symbol),
        report.total_spent.format_with_symbol(symbol),
        report.total_remaining().format_with_symbol(symbol),
    ));
    if report.overspent().next().is_some() {
        output.push_str("* = Overspent\n");
    }
    output
}

/// Format a single budget with its transactions
pub fn format_budget_details(budget: &Budget, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget: {}\n", budget.name));
    output.push_str(&format!("  ID:         {}\n", budget.id));
    output.push_str(&format!("  Category:   {}\n", category_label(&budget.category)));
    output.push_str(&format!("  Amount:     {}\n", budget.amount.format_with_symbol(symbol)));
    output.push_str(&format!("  Spent:      {}\n", budget.spent.format_with_symbol(symbol)));
    output.push_str(&format!(
        "  Remaining:  {}\n",
        budget.remaining().format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Progress:   {:.0}%\n", budget.progress_percent()));
    output.push_str(&format!(
        "  Created:    {}\n",
        budget.created_at.format(date_format)
    ));

    output.push('\n');
    if budget.transactions.is_empty() {
        output.push_str("  No transactions yet.\n");
        return output;
    }

    output.push_str(&format!("  Transactions ({}):\n", budget.transactions.len()));
    let mut transactions: Vec<_> = budget.transactions.iter().collect();
    transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    for txn in transactions {
        output.push_str(&format!(
            "    {}  {}  {:<30} {:>12}\n",
            txn.id,
            txn.created_at.format(date_format),
            txn.description,
            txn.amount.format_with_symbol(symbol),
        ));
    }

    output
}
