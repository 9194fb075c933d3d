//! Read-only services layered over the ledger.

pub mod services;
