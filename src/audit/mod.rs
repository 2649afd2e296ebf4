//! Audit logging system for fintrack
//!
//! Records every applied create, update and delete in an append-only JSONL
//! log, with before/after values and a short change summary.
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::audit::AuditLogger;
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let name = action.name();
//! let outcome = state.dispatch(action);
//! logger.log_outcome(name, &outcome)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
