//! State snapshot persistence
//!
//! The whole application state is stored as one JSON document under a fixed
//! namespace. Loading never fails: a missing, unreadable or incompatible
//! snapshot yields an empty state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::paths::FinancePaths;
use crate::error::FinanceResult;
use crate::state::{AppState, CURRENT_SCHEMA_VERSION};

use super::file_io::{read_json, write_json_atomic};

/// Loads and saves the application state snapshot
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the standard state file location
    pub fn from_paths(paths: &FinancePaths) -> Self {
        Self::new(paths.state_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, falling back to an empty state
    ///
    /// An unparseable file is moved aside to `<name>.corrupt` so the next
    /// save does not destroy it.
    pub fn load(&self) -> AppState {
        match read_json::<AppState, _>(&self.path) {
            Ok(None) => AppState::default(),
            Ok(Some(state)) if state.schema_version > CURRENT_SCHEMA_VERSION => {
                tracing::warn!(
                    path = %self.path.display(),
                    found = state.schema_version,
                    supported = CURRENT_SCHEMA_VERSION,
                    "snapshot written by a newer version; starting empty"
                );
                AppState::default()
            }
            Ok(Some(state)) => state,
            Err(e) => {
                tracing::warn!(error = %e, "could not load snapshot; starting empty");
                self.quarantine();
                AppState::default()
            }
        }
    }

    /// Write the snapshot atomically
    pub fn save(&self, state: &AppState) -> FinanceResult<()> {
        write_json_atomic(&self.path, state)?;
        tracing::trace!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }

    fn quarantine(&self) {
        if !self.path.exists() {
            return;
        }
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".corrupt");
        let target = self.path.with_file_name(name);

        if let Err(e) = fs::rename(&self.path, &target) {
            tracing::warn!(error = %e, "could not move unreadable snapshot aside");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::state::{Action, NewBudget};
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, SnapshotStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("fintrack_state.json"));
        (temp_dir, store)
    }

    fn sample_state() -> AppState {
        let mut state = AppState::default();
        let outcome = state.dispatch(Action::AddBudget(NewBudget::new(
            "Rent",
            Money::from_units(900),
            "housing",
        )));
        let id = match outcome.entity() {
            Some(crate::state::Entity::Budget(b)) => b.id,
            _ => unreachable!(),
        };
        state.dispatch(Action::AddTransaction {
            budget_id: id,
            amount: Money::from_units(900),
            description: "January".into(),
            at: None,
        });
        state
    }

    #[test]
    fn test_load_missing_is_default() {
        let (_temp_dir, store) = create_test_store();
        assert_eq!(store.load(), AppState::default());
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, store) = create_test_store();
        let state = sample_state();

        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_save_of_load_is_byte_identical() {
        let (_temp_dir, store) = create_test_store();
        store.save(&sample_state()).unwrap();
        let first = fs::read(store.path()).unwrap();

        let loaded = store.load();
        store.save(&loaded).unwrap();
        let second = fs::read(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_and_is_kept() {
        let (temp_dir, store) = create_test_store();
        fs::write(store.path(), "{ definitely not json").unwrap();

        assert_eq!(store.load(), AppState::default());
        assert!(!store.path().exists());
        assert!(temp_dir.path().join("fintrack_state.json.corrupt").exists());
    }

    #[test]
    fn test_newer_schema_falls_back() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), r#"{"schema_version": 99, "budgets": {"items": []}}"#).unwrap();

        assert_eq!(store.load(), AppState::default());
        // Left in place for the newer build that wrote it
        assert!(store.path().exists());
    }
}
