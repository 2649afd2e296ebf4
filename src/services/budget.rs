//! Budget service
//!
//! Validates user input, resolves budgets by name or id, and dispatches
//! budget and transaction actions.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{normalize_category, Budget, Money, Transaction};
use crate::models::category::DEFAULT_CATEGORY;
use crate::state::{Action, Entity, NewBudget};
use crate::storage::Storage;

use super::{expect_one, require_positive, require_text};

/// Fields that can be changed on an existing budget
#[derive(Debug, Clone, Default)]
pub struct BudgetChanges {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub icon: Option<String>,
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create a new budget
    pub fn create(
        &mut self,
        name: &str,
        amount: Money,
        category: Option<&str>,
    ) -> FinanceResult<Budget> {
        let name = require_text("Budget name", name)?;
        require_positive("Budget amount", amount)?;

        let input = NewBudget::new(name, amount, normalize_category(category, DEFAULT_CATEGORY));
        let outcome = self.storage.dispatch(Action::AddBudget(input))?;

        match outcome.entity() {
            Some(Entity::Budget(budget)) => Ok(budget.clone()),
            _ => Err(FinanceError::Storage("Budget was not created".into())),
        }
    }

    /// Look up a budget by id or name
    pub fn find(&self, identifier: &str) -> FinanceResult<Budget> {
        expect_one(self.storage.state().budgets.find(identifier), identifier, || {
            FinanceError::budget_not_found(identifier)
        })
    }

    pub fn list(&self) -> &[Budget] {
        &self.storage.state().budgets.items
    }

    /// Apply changes to a budget, replacing it as a whole
    pub fn edit(&mut self, identifier: &str, changes: BudgetChanges) -> FinanceResult<Budget> {
        let mut budget = self.find(identifier)?;

        if let Some(name) = changes.name {
            budget.name = require_text("Budget name", &name)?;
        }
        if let Some(amount) = changes.amount {
            require_positive("Budget amount", amount)?;
            budget.amount = amount;
        }
        if let Some(category) = changes.category {
            budget.category = normalize_category(Some(&category), DEFAULT_CATEGORY);
        }
        if let Some(icon) = changes.icon {
            budget.icon = Some(icon);
        }

        let id = budget.id;
        let outcome = self.storage.dispatch(Action::EditBudget(budget))?;
        match outcome.entity() {
            Some(Entity::Budget(updated)) => Ok(updated.clone()),
            _ => Err(FinanceError::budget_not_found(id.to_string())),
        }
    }

    /// Delete a budget and all its transactions
    pub fn delete(&mut self, identifier: &str) -> FinanceResult<Budget> {
        let budget = self.find(identifier)?;
        let outcome = self.storage.dispatch(Action::DeleteBudget(budget.id))?;

        match outcome.entity() {
            Some(Entity::Budget(removed)) => Ok(removed.clone()),
            _ => Err(FinanceError::budget_not_found(identifier)),
        }
    }

    /// Record an expense against a budget
    pub fn add_transaction(
        &mut self,
        budget: &str,
        description: &str,
        amount: Money,
    ) -> FinanceResult<Transaction> {
        let description = require_text("Description", description)?;
        require_positive("Amount", amount)?;
        let budget = self.find(budget)?;

        let outcome = self.storage.dispatch(Action::AddTransaction {
            budget_id: budget.id,
            amount,
            description,
            at: None,
        })?;

        match outcome.entity() {
            Some(Entity::Transaction { transaction, .. }) => Ok(transaction.clone()),
            _ => Err(FinanceError::budget_not_found(budget.id.to_string())),
        }
    }

    /// Remove a transaction from a budget
    pub fn delete_transaction(
        &mut self,
        budget: &str,
        transaction: &str,
    ) -> FinanceResult<Transaction> {
        let budget = self.find(budget)?;
        let transaction_id = expect_one(budget.find_transaction(transaction), transaction, || {
            FinanceError::transaction_not_found(transaction)
        })?
        .id;

        let outcome = self.storage.dispatch(Action::DeleteTransaction {
            budget_id: budget.id,
            transaction_id,
        })?;

        match outcome.entity() {
            Some(Entity::Transaction { transaction, .. }) => Ok(transaction.clone()),
            _ => Err(FinanceError::transaction_not_found(transaction_id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use crate::storage::DEFAULT_SAVE_INTERVAL;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths, DEFAULT_SAVE_INTERVAL).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_and_find() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = BudgetService::new(&mut storage);

        let budget = service
            .create("Groceries", Money::from_units(150), Some("Food"))
            .unwrap();
        assert_eq!(budget.category, "food");

        let found = service.find("groceries").unwrap();
        assert_eq!(found.id, budget.id);
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = BudgetService::new(&mut storage);

        let err = service.create("  ", Money::from_units(10), None).unwrap_err();
        assert!(err.is_validation());

        let err = service.create("Rent", Money::zero(), None).unwrap_err();
        assert!(err.is_validation());

        assert!(service.list().is_empty());
    }

    #[test]
    fn test_transaction_lifecycle() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = BudgetService::new(&mut storage);
        service
            .create("Groceries", Money::from_units(150), None)
            .unwrap();

        let txn = service
            .add_transaction("Groceries", "Market", Money::from_units(50))
            .unwrap();
        assert_eq!(service.find("Groceries").unwrap().spent, Money::from_units(50));

        let removed = service
            .delete_transaction("Groceries", &txn.id.to_string())
            .unwrap();
        assert_eq!(removed.id, txn.id);
        assert_eq!(service.find("Groceries").unwrap().spent, Money::zero());
    }

    #[test]
    fn test_unknown_budget_is_not_found() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = BudgetService::new(&mut storage);

        let err = service
            .add_transaction("Nope", "Market", Money::from_units(5))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(service.delete("Nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_edit_keeps_transactions() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = BudgetService::new(&mut storage);
        service.create("Fun", Money::from_units(100), None).unwrap();
        service
            .add_transaction("Fun", "Cinema", Money::from_units(12))
            .unwrap();

        let changes = BudgetChanges {
            name: Some("Entertainment".into()),
            amount: Some(Money::from_units(120)),
            ..BudgetChanges::default()
        };
        let updated = service.edit("Fun", changes).unwrap();

        assert_eq!(updated.name, "Entertainment");
        assert_eq!(updated.amount, Money::from_units(120));
        assert_eq!(updated.transactions.len(), 1);
        assert_eq!(updated.spent, Money::from_units(12));
    }

    #[test]
    fn test_find_prefers_name_over_id_prefix() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = BudgetService::new(&mut storage);
        let rent = service.create("Rent", Money::from_units(900), None).unwrap();
        let short = rent.id.to_string()["bud-".len()..].to_string();
        let lookalike = service.create(&short, Money::from_units(10), None).unwrap();

        assert_eq!(service.find(&short).unwrap().id, lookalike.id);
        assert_eq!(service.find(&rent.id.to_string()).unwrap().id, rent.id);
    }

    #[test]
    fn test_ambiguous_name_is_rejected() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = BudgetService::new(&mut storage);
        service.create("Rent", Money::from_units(900), None).unwrap();
        service.create("rent", Money::from_units(50), None).unwrap();

        let err = service.delete("Rent").unwrap_err();
        assert!(matches!(err, FinanceError::Validation(_)));
        assert_eq!(service.list().len(), 2);
    }
}
