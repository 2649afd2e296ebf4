//! Audit logger for append-only audit log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{FinanceError, FinanceResult};
use crate::state::Outcome;

use super::entry::AuditEntry;

/// Writes audit entries to a JSONL log file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry and flush it
    pub fn log(&self, entry: &AuditEntry) -> FinanceResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| FinanceError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| FinanceError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| FinanceError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| FinanceError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Log a dispatch outcome; ignored outcomes are not recorded
    pub fn log_outcome(&self, action: &str, outcome: &Outcome) -> FinanceResult<()> {
        match outcome.effect() {
            Some(effect) => self.log(&AuditEntry::from_effect(action, effect)),
            None => Ok(()),
        }
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> FinanceResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| FinanceError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                FinanceError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                FinanceError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> FinanceResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use crate::models::Money;
    use crate::state::{Action, AppState, NewBudget};
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn add_budget(state: &mut AppState, name: &str) -> (Action, Outcome) {
        let action = Action::AddBudget(NewBudget::new(name, Money::from_units(10), "other"));
        let outcome = state.dispatch(action.clone());
        (action, outcome)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let mut state = AppState::default();
        let (action, outcome) = add_budget(&mut state, "Rent");

        logger.log_outcome(action.name(), &outcome).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Budget);
        assert_eq!(entries[0].action, "budgets/addBudget");
    }

    #[test]
    fn test_ignored_outcome_not_logged() {
        let (logger, _temp) = create_test_logger();
        logger.log_outcome("goals/deleteGoal", &Outcome::Ignored).unwrap();
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        let mut state = AppState::default();

        for i in 0..5 {
            let (action, outcome) = add_budget(&mut state, &format!("Budget {}", i));
            logger.log_outcome(action.name(), &outcome).unwrap();
        }

        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].entity_name.as_deref(), Some("Budget 3"));
        assert_eq!(recent[1].entity_name.as_deref(), Some("Budget 4"));
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let (logger, _temp) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
        assert!(!logger.path().exists());
    }
}
