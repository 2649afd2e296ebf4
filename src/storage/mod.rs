//! Storage layer for fintrack
//!
//! Persists the application state as a single JSON snapshot with atomic
//! writes, soft-failing loads and throttled saves. [`Storage`] ties the
//! in-memory state to its snapshot file and the audit log.

pub mod file_io;
pub mod snapshot;
pub mod throttle;

pub use file_io::{read_json, write_json_atomic};
pub use snapshot::SnapshotStore;
pub use throttle::{ThrottledSaver, DEFAULT_SAVE_INTERVAL};

use std::time::Duration;

use crate::audit::AuditLogger;
use crate::config::paths::FinancePaths;
use crate::error::FinanceResult;
use crate::state::{Action, AppState, Outcome};

/// Owns the application state and everything that persists it
pub struct Storage {
    paths: FinancePaths,
    state: AppState,
    saver: ThrottledSaver,
    audit: AuditLogger,
}

impl Storage {
    /// Open storage, loading the current snapshot
    pub fn open(paths: FinancePaths, save_interval: Duration) -> FinanceResult<Self> {
        paths.ensure_directories()?;

        let store = SnapshotStore::from_paths(&paths);
        let state = store.load();
        tracing::debug!(
            budgets = state.budgets.len(),
            goals = state.goals.len(),
            recurring = state.recurring.len(),
            "state loaded"
        );

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            saver: ThrottledSaver::new(store, save_interval),
            state,
            paths,
        })
    }

    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Apply an action, record it, and schedule a save
    ///
    /// Ignored actions are neither audited nor saved.
    pub fn dispatch(&mut self, action: Action) -> FinanceResult<Outcome> {
        let name = action.name();
        let outcome = self.state.dispatch(action);

        if outcome.is_applied() {
            self.audit.log_outcome(name, &outcome)?;
            self.saver.request_save(&self.state)?;
        }

        Ok(outcome)
    }

    /// Write any pending snapshot now
    pub fn flush(&mut self) -> FinanceResult<()> {
        self.saver.flush()?;
        Ok(())
    }
}
