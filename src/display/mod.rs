//! Display formatting for terminal output
//!
//! Lists are rendered as tables; single entities and the dashboard as
//! aligned text blocks. Amounts use the configured currency symbol.

pub mod budget;
pub mod dashboard;
pub mod goal;
pub mod recurring;
pub mod transaction;

pub use budget::{format_budget_details, format_budget_list};
pub use dashboard::format_dashboard;
pub use goal::{format_goal_details, format_goal_list};
pub use recurring::{format_processed, format_recurring_list, format_recurring_summary};
pub use transaction::format_transaction_list;
