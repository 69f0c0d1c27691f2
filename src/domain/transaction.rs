//! Domain models for ledger transactions.

use std::fmt;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::common::*;

/// A single financial event recorded by the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: RecordId,
    pub amount: f64,
    pub category_id: RecordId,
    pub description: String,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    /// Display-only snapshot of the linked category. Never maintained by
    /// the ledger and never consulted by filtering or aggregation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Transaction {
    /// Creates an unassigned expense dated today (UTC).
    pub fn new(amount: f64, category_id: RecordId, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            amount,
            category_id,
            description: description.into(),
            date: Utc::now().date_naive(),
            kind: TransactionKind::Expense,
            category: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Attaches a display snapshot of the linked category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Returns the amount signed by direction: positive income, negative
    /// expense.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} {:.2} [{}]", self.description, self.amount, self.kind)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
/// Direction of a transaction.
pub enum TransactionKind {
    /// Money going out (default).
    #[default]
    Expense,
    /// Money coming in.
    Income,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Expense => "Expense",
            TransactionKind::Income => "Income",
        };
        f.write_str(label)
    }
}
