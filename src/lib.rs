#![doc(test(attr(deny(warnings))))]

//! Budget Tracker records a monthly income, categorized dated expenses and
//! per-category spending limits, and renders expense and budget summaries.
//!
//! ```
//! use budget_tracker::{core::services::ReportService, ledger::Ledger};
//!
//! let mut ledger = Ledger::new();
//! ledger.set_monthly_income(300_000)?;
//! ledger.set_budget_limit("Food", 40_000)?;
//! ledger.add_expense("Food", "2025-11-01", 10_000)?;
//!
//! let summary = ReportService::budget_summary(&ledger);
//! assert!(summary.contains("Income: $3000.00"));
//! # Ok::<(), budget_tracker::errors::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
///
/// `log_filter` adds directives on top of `RUST_LOG`.
pub fn init(log_filter: Option<&str>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(log_filter);
        tracing::info!("Budget Tracker tracing initialized.");
    });
}
