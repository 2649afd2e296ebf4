//! fintrack - personal finance tracker
//!
//! This library provides the core of the fintrack application: budgets with
//! their transactions, savings goals, and recurring income and expenses,
//! kept as one JSON snapshot on local disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (budgets, transactions, goals, recurring items)
//! - `state`: Application state, actions and the reducer that applies them
//! - `storage`: Snapshot persistence with atomic and throttled writes
//! - `services`: Input validation and name lookup on top of the state
//! - `reports`: Derived views (dashboard, search, goal status, totals)
//! - `audit`: Audit logging of every applied change
//! - `config`: Configuration and path management
//! - `display` / `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{FinancePaths, Settings};
//! use fintrack::storage::Storage;
//!
//! let paths = FinancePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::open(paths, settings.save_interval())?;
//! ```

use std::sync::Once;

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod state;
pub mod storage;

pub use error::{FinanceError, FinanceResult};

static TRACING_INIT: Once = Once::new();

/// Install the stderr tracing subscriber once
///
/// `RUST_LOG` overrides the default of warnings only.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("fintrack=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
