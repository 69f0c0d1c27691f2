#![doc(test(attr(deny(warnings))))]

//! Finance Core offers the in-memory category and transaction stores that
//! power a personal finance tracker's presentation layer.
//!
//! The crate has no network, file, or wire surface. A host constructs a
//! [`CategoryRegistry`] and a [`TransactionLedger`], mutates them through
//! their CRUD methods, and subscribes to their change signals to know when
//! to re-render. All state is process-lifetime only.

pub mod core;
pub mod domain;
pub mod errors;
pub mod validation;

pub use crate::core::{
    CategoryRegistry, ChangeSignal, Subscription, TransactionFilter, TransactionLedger,
};
pub use crate::domain::{Category, LedgerTotals, RecordId, Transaction, TransactionKind};
pub use crate::errors::CoreError;
pub use crate::validation::{validate_category, validate_transaction, ValidationError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("finance_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();

        tracing::info!("Finance Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
