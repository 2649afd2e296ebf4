//! Goal views
//!
//! Filtering, sorting, totals and deadline status for savings goals.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::models::{Goal, Money};

/// Which goals to show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GoalFilter {
    #[default]
    All,
    /// Progress below 100%
    Active,
    Completed,
    /// Goals tagged with this category
    Category(String),
}

impl GoalFilter {
    pub fn matches(&self, goal: &Goal) -> bool {
        match self {
            Self::All => true,
            Self::Active => goal.progress < 100.0,
            Self::Completed => goal.progress >= 100.0,
            Self::Category(tag) => goal.category.eq_ignore_ascii_case(tag),
        }
    }
}

impl FromStr for GoalFilter {
    type Err = std::convert::Infallible;

    /// Anything other than `all`, `active` or `completed` is a category tag
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "all" => Self::All,
            "active" => Self::Active,
            "completed" => Self::Completed,
            other => Self::Category(other.to_string()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalSortKey {
    #[default]
    Deadline,
    Progress,
    /// Target amount
    Amount,
    Name,
}

impl FromStr for GoalSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deadline" => Ok(Self::Deadline),
            "progress" => Ok(Self::Progress),
            "amount" => Ok(Self::Amount),
            "name" => Ok(Self::Name),
            other => Err(format!(
                "Unknown sort key '{}'. Use deadline, progress, amount or name",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

fn compare(a: &Goal, b: &Goal, key: GoalSortKey) -> Ordering {
    match key {
        GoalSortKey::Deadline => a.deadline.cmp(&b.deadline),
        GoalSortKey::Progress => a.progress.total_cmp(&b.progress),
        GoalSortKey::Amount => a.target_amount.cmp(&b.target_amount),
        GoalSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}

/// Filter then sort goals; ties keep their stored order
pub fn select_goals<'a>(
    goals: &'a [Goal],
    filter: &GoalFilter,
    key: GoalSortKey,
    direction: SortDirection,
) -> Vec<&'a Goal> {
    let mut selected: Vec<&Goal> = goals.iter().filter(|g| filter.matches(g)).collect();
    selected.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    selected
}

/// Totals across a set of goals
#[derive(Debug, Clone, PartialEq)]
pub struct GoalSummary {
    pub count: usize,
    pub total_target: Money,
    pub total_saved: Money,
    /// Mean progress rounded to a whole percent
    pub average_progress: u32,
    pub completed: usize,
}

impl GoalSummary {
    pub fn from_goals<'a>(goals: impl IntoIterator<Item = &'a Goal>) -> Self {
        let goals: Vec<&Goal> = goals.into_iter().collect();
        let count = goals.len();

        let average_progress = if count == 0 {
            0
        } else {
            let sum: f64 = goals.iter().map(|g| g.progress).sum();
            (sum / count as f64).round().max(0.0) as u32
        };

        Self {
            count,
            total_target: goals.iter().map(|g| g.target_amount).sum(),
            total_saved: goals.iter().map(|g| g.current_amount).sum(),
            average_progress,
            completed: goals.iter().filter(|g| g.is_completed).count(),
        }
    }
}

/// How close a goal is to its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    Completed,
    Overdue,
    /// Less than a week left
    Urgent,
    /// Less than 30 days left
    Soon,
    OnTrack,
}

impl GoalStatus {
    pub fn of(goal: &Goal, today: NaiveDate) -> Self {
        if goal.progress >= 100.0 {
            return Self::Completed;
        }
        match goal.days_until_deadline(today) {
            d if d < 0 => Self::Overdue,
            d if d < 7 => Self::Urgent,
            d if d < 30 => Self::Soon,
            _ => Self::OnTrack,
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
            Self::Urgent => "Urgent",
            Self::Soon => "Soon",
            Self::OnTrack => "On track",
        };
        write!(f, "{}", label)
    }
}

/// Human description of the time left until a deadline
pub fn remaining_time(deadline: NaiveDate, today: NaiveDate) -> String {
    let days = (deadline - today).num_days();
    match days {
        d if d < 0 => "Overdue".to_string(),
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        d if d < 30 => format!("{} days left", d),
        d => {
            let months = d / 30;
            format!("{} month{} left", months, if months > 1 { "s" } else { "" })
        }
    }
}
