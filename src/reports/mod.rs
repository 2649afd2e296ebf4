//! Reports module for fintrack
//!
//! Derived views computed from the application state: the dashboard,
//! transaction search, goal filtering and status, recurring totals and
//! budget progress. Nothing here mutates state.

pub mod budget_progress;
pub mod dashboard;
pub mod goals;
pub mod recurring;
pub mod transactions;

pub use budget_progress::{BudgetProgress, BudgetProgressRow};
pub use dashboard::DashboardReport;
pub use goals::{
    remaining_time, select_goals, GoalFilter, GoalSortKey, GoalStatus, GoalSummary, SortDirection,
};
pub use recurring::{upcoming, RecurringSummary};
pub use transactions::{all_transactions, TransactionQuery, TransactionRow};
