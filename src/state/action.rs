//! Mutation intents and their outcomes
//!
//! Every change to the application state goes through an `Action`. Applying
//! one yields an `Outcome`: either the change that was made, or `Ignored`
//! when the action referred to an id that does not exist.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    Budget, BudgetId, Frequency, Goal, GoalId, Money, RecurringId, RecurringItem, Transaction,
    TransactionId,
};

/// Input for creating a budget
#[derive(Debug, Clone)]
pub struct NewBudget {
    pub name: String,
    pub amount: Money,
    pub category: String,
    pub icon: Option<String>,
    /// Transactions to seed the budget with; `spent` becomes their sum
    pub transactions: Vec<Transaction>,
}

impl NewBudget {
    pub fn new(name: impl Into<String>, amount: Money, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            category: category.into(),
            icon: None,
            transactions: Vec::new(),
        }
    }
}

/// Input for creating a goal
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub name: String,
    pub description: String,
    pub target_amount: Money,
    pub deadline: NaiveDate,
    pub category: String,
}

impl NewGoal {
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        deadline: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            target_amount,
            deadline,
            category: category.into(),
        }
    }
}

/// Partial update for a goal; only `Some` fields are written
#[derive(Debug, Clone, Default)]
pub struct GoalPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub target_amount: Option<Money>,
    pub current_amount: Option<Money>,
    pub deadline: Option<NaiveDate>,
    pub category: Option<String>,
}

impl GoalPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.target_amount.is_none()
            && self.current_amount.is_none()
            && self.deadline.is_none()
            && self.category.is_none()
    }
}

/// Input for creating a recurring income or expense
#[derive(Debug, Clone)]
pub struct NewRecurring {
    pub description: String,
    pub amount: Money,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub category: String,
    pub budget_id: Option<BudgetId>,
}

impl NewRecurring {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            frequency,
            start_date,
            category: String::new(),
            budget_id: None,
        }
    }
}

/// A mutation intent
#[derive(Debug, Clone)]
pub enum Action {
    AddBudget(NewBudget),
    EditBudget(Budget),
    DeleteBudget(BudgetId),
    AddTransaction {
        budget_id: BudgetId,
        amount: Money,
        description: String,
        /// Defaults to the time of dispatch
        at: Option<DateTime<Utc>>,
    },
    DeleteTransaction {
        budget_id: BudgetId,
        transaction_id: TransactionId,
    },
    AddGoal(NewGoal),
    UpdateGoalProgress {
        id: GoalId,
        amount: Money,
    },
    EditGoal {
        id: GoalId,
        patch: GoalPatch,
    },
    DeleteGoal(GoalId),
    AddRecurringExpense(NewRecurring),
    AddRecurringIncome(NewRecurring),
    ToggleRecurring(RecurringId),
    AdvanceRecurring {
        id: RecurringId,
        next_due: DateTime<Utc>,
    },
    DeleteRecurring(RecurringId),
}

impl Action {
    /// Stable action name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddBudget(_) => "budgets/addBudget",
            Self::EditBudget(_) => "budgets/editBudget",
            Self::DeleteBudget(_) => "budgets/deleteBudget",
            Self::AddTransaction { .. } => "budgets/addTransaction",
            Self::DeleteTransaction { .. } => "budgets/deleteTransaction",
            Self::AddGoal(_) => "goals/addGoal",
            Self::UpdateGoalProgress { .. } => "goals/updateGoalProgress",
            Self::EditGoal { .. } => "goals/updateGoal",
            Self::DeleteGoal(_) => "goals/deleteGoal",
            Self::AddRecurringExpense(_) => "recurring/addRecurring",
            Self::AddRecurringIncome(_) => "recurring/addIncome",
            Self::ToggleRecurring(_) => "recurring/toggleRecurring",
            Self::AdvanceRecurring { .. } => "recurring/updateNextDue",
            Self::DeleteRecurring(_) => "recurring/deleteRecurring",
        }
    }
}

/// A snapshot of the entity an action touched
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Budget(Budget),
    Transaction {
        budget_id: BudgetId,
        transaction: Transaction,
    },
    Goal(Goal),
    Recurring(RecurringItem),
}

impl Entity {
    /// Display form of the entity id
    pub fn id_string(&self) -> String {
        match self {
            Self::Budget(b) => b.id.to_string(),
            Self::Transaction { transaction, .. } => transaction.id.to_string(),
            Self::Goal(g) => g.id.to_string(),
            Self::Recurring(r) => r.id.to_string(),
        }
    }

    /// Human-readable name of the entity
    pub fn label(&self) -> &str {
        match self {
            Self::Budget(b) => &b.name,
            Self::Transaction { transaction, .. } => &transaction.description,
            Self::Goal(g) => &g.name,
            Self::Recurring(r) => &r.description,
        }
    }
}

/// The change an applied action made
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Created(Entity),
    Updated { before: Entity, after: Entity },
    Deleted(Entity),
}

impl Effect {
    /// The entity as it is after the action (or was, for deletes)
    pub fn entity(&self) -> &Entity {
        match self {
            Self::Created(e) | Self::Deleted(e) => e,
            Self::Updated { after, .. } => after,
        }
    }
}

/// Result of dispatching an action
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied(Effect),
    /// The action referenced an id that was not found; nothing changed
    Ignored,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn effect(&self) -> Option<&Effect> {
        match self {
            Self::Applied(effect) => Some(effect),
            Self::Ignored => None,
        }
    }

    pub fn entity(&self) -> Option<&Entity> {
        self.effect().map(Effect::entity)
    }
}
