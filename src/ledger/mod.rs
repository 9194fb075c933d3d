//! Ledger state for the budget tracker: income, dated expenses, and per-category limits.

pub mod budget;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod validation;

pub use budget::BudgetLimit;
pub use ledger::Ledger;
pub use validation::{validate_category, validate_date, DATE_LENGTH};
