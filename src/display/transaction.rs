//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::transactions::total;
use crate::reports::TransactionRow;

#[derive(Tabled)]
struct TransactionLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format search results as a table, newest first, with their total
pub fn format_transaction_list(rows: &[TransactionRow], symbol: &str, date_format: &str) -> String {
    if rows.is_empty() {
        return "No transactions found.".to_string();
    }

    let lines = rows.iter().map(|row| TransactionLine {
        id: row.transaction.id.to_string(),
        date: row.transaction.created_at.format(date_format).to_string(),
        budget: row.budget_name.clone(),
        description: row.transaction.description.clone(),
        amount: row.transaction.amount.format_with_symbol(symbol),
    });

    let mut output = Table::new(lines).with(Style::rounded()).to_string();
    output.push_str(&format!(
        "\n{} transaction{}, {} total\n",
        rows.len(),
        if rows.len() == 1 { "" } else { "s" },
        total(rows).format_with_symbol(symbol)
    ));
    output
}
