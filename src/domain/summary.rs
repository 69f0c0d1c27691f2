//! Ledger-level reporting structures.

use serde::{Deserialize, Serialize};

/// Aggregated money totals for the whole ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerTotals {
    pub balance: f64,
    pub income: f64,
    pub expenses: f64,
}

impl LedgerTotals {
    /// Builds totals from the two directional sums; the balance is derived.
    pub fn from_parts(income: f64, expenses: f64) -> Self {
        Self {
            balance: income - expenses,
            income,
            expenses,
        }
    }
}
