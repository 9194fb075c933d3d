//! Line-oriented shell that drives an in-memory [`Ledger`](crate::ledger::Ledger).

pub mod context;
pub mod handlers;
pub mod output;
mod shell;

pub use context::{CliError, CliMode, CommandError, ShellContext};
pub use handlers::load_sample_month;
pub use shell::run_cli;
