//! Throttled snapshot writes
//!
//! Bursts of mutations should not each hit the disk. `ThrottledSaver` writes
//! at most once per interval; a save requested inside the interval replaces
//! the pending snapshot and is written on the next eligible request, on
//! `flush`, or when the saver is dropped. Writes are never reordered.

use std::time::{Duration, Instant};

use crate::error::FinanceResult;
use crate::state::AppState;

use super::snapshot::SnapshotStore;

/// Default minimum time between writes
pub const DEFAULT_SAVE_INTERVAL: Duration = Duration::from_millis(1000);

pub struct ThrottledSaver {
    store: SnapshotStore,
    interval: Duration,
    last_write: Option<Instant>,
    pending: Option<AppState>,
}

impl ThrottledSaver {
    pub fn new(store: SnapshotStore, interval: Duration) -> Self {
        Self {
            store,
            interval,
            last_write: None,
            pending: None,
        }
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Ask for `state` to be persisted
    ///
    /// Returns `true` if it was written now, `false` if it is pending.
    pub fn request_save(&mut self, state: &AppState) -> FinanceResult<bool> {
        self.request_save_at(state, Instant::now())
    }

    fn request_save_at(&mut self, state: &AppState, now: Instant) -> FinanceResult<bool> {
        match self.last_write {
            Some(last) if now.saturating_duration_since(last) < self.interval => {
                self.pending = Some(state.clone());
                Ok(false)
            }
            _ => {
                self.write(state, now)?;
                Ok(true)
            }
        }
    }

    /// Write the pending snapshot, if any
    pub fn flush(&mut self) -> FinanceResult<bool> {
        match self.pending.take() {
            Some(state) => {
                self.write(&state, Instant::now())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn write(&mut self, state: &AppState, now: Instant) -> FinanceResult<()> {
        self.store.save(state)?;
        self.last_write = Some(now);
        // Anything older than what was just written is superseded
        self.pending = None;
        Ok(())
    }
}

impl Drop for ThrottledSaver {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::error!(error = %e, "failed to write pending snapshot");
        }
    }
}
