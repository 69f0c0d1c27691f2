//! In-memory store and aggregation layer for transactions.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::core::signal::{ChangeSignal, Subscription};
use crate::domain::{LedgerTotals, RecordId, Transaction, TransactionKind};

/// Optional predicates combined with AND by [`TransactionLedger::filtered`].
///
/// An absent predicate imposes no constraint; the default filter matches
/// every transaction. Date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub category_id: Option<RecordId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category_id: RecordId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Tests whether `transaction` satisfies every present predicate.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(category_id) = self.category_id {
            if transaction.category_id != category_id {
                return false;
            }
        }
        if let Some(start_date) = self.start_date {
            if transaction.date < start_date {
                return false;
            }
        }
        if let Some(end_date) = self.end_date {
            if transaction.date > end_date {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if transaction.kind != kind {
                return false;
            }
        }
        true
    }
}

/// Owns the transaction collection; starts empty.
///
/// CRUD semantics mirror [`crate::core::CategoryRegistry`]: monotonic ids
/// assigned on add, wholesale replacement on update, silent no-op against
/// unknown ids, change notification only after an applied mutation. Queries
/// and aggregations never mutate. Category linkage is by id only; no
/// referential integrity against the registry is enforced.
#[derive(Debug)]
pub struct TransactionLedger {
    transactions: Vec<Transaction>,
    next_id: RecordId,
    changed: ChangeSignal,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
            changed: ChangeSignal::new(),
        }
    }

    /// Read-only view of the live collection, insertion-ordered.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Finds a transaction by id.
    pub fn get(&self, id: RecordId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Assigns the next id, appends, and notifies subscribers.
    ///
    /// Any caller-supplied id is overwritten and ignored. Returns the
    /// assigned id.
    pub fn add(&mut self, mut transaction: Transaction) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        transaction.id = id;
        self.transactions.push(transaction);
        debug!(id, "transaction added");
        self.changed.emit();
        id
    }

    /// Replaces the transaction whose id matches `transaction.id` wholesale.
    ///
    /// Keeps the entry's position. Returns `false` (and stays silent) when
    /// no entry holds that id.
    pub fn update(&mut self, transaction: Transaction) -> bool {
        match self
            .transactions
            .iter()
            .position(|existing| existing.id == transaction.id)
        {
            Some(index) => {
                debug!(id = transaction.id, "transaction updated");
                self.transactions[index] = transaction;
                self.changed.emit();
                true
            }
            None => false,
        }
    }

    /// Removes the transaction under `id`, notifying only if one was present.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        if self.transactions.len() == before {
            return false;
        }
        debug!(id, "transaction removed");
        self.changed.emit();
        true
    }

    /// Registers a handler fired after every applied mutation.
    pub fn subscribe(&mut self, handler: impl Fn() + 'static) -> Subscription {
        self.changed.subscribe(handler)
    }

    /// Removes a previously registered handler.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.changed.unsubscribe(subscription)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions satisfying every predicate in `filter`, insertion-ordered.
    pub fn filtered(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| filter.matches(txn))
            .collect()
    }

    /// Income minus expenses over the whole ledger.
    pub fn total_balance(&self) -> f64 {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    /// Sum of all income amounts.
    pub fn total_income(&self) -> f64 {
        self.sum_of(TransactionKind::Income)
    }

    /// Sum of all expense amounts.
    pub fn total_expenses(&self) -> f64 {
        self.sum_of(TransactionKind::Expense)
    }

    fn sum_of(&self, kind: TransactionKind) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(|txn| txn.amount)
            .sum()
    }

    /// Total activity per category id. Income and expense amounts are added
    /// together, not netted by sign; categories without transactions are
    /// absent from the map.
    pub fn category_totals(&self) -> BTreeMap<RecordId, f64> {
        let mut totals = BTreeMap::new();
        for txn in &self.transactions {
            *totals.entry(txn.category_id).or_insert(0.0) += txn.amount;
        }
        totals
    }

    /// One-call snapshot of the three ledger-wide totals.
    pub fn totals(&self) -> LedgerTotals {
        LedgerTotals::from_parts(self.total_income(), self.total_expenses())
    }
}

impl Default for TransactionLedger {
    fn default() -> Self {
        Self::new()
    }
}
