//! Stateful stores and their change-notification plumbing.

pub mod category_registry;
pub mod signal;
pub mod transaction_ledger;

pub use category_registry::CategoryRegistry;
pub use signal::{ChangeSignal, Subscription};
pub use transaction_ledger::{TransactionFilter, TransactionLedger};

#[cfg(test)]
mod tests;
