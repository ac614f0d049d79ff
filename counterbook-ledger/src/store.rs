use counterbook_core::Transaction;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::TransactionDraft;

/// Authoritative in-memory sequence of transactions, newest first.
///
/// The store is the single source of truth for one dashboard session.
/// Entries are never mutated or removed; the sequence only grows. Ids are
/// random v4 uuids, never reused within a run.
#[derive(Debug, Default)]
pub struct LedgerStore {
    entries: RwLock<Vec<Transaction>>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with existing records, preserving their
    /// order (first element stays newest).
    pub fn with_entries(entries: Vec<Transaction>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Assign a fresh id to the draft and prepend the resulting record.
    /// Always succeeds; returns the fully-formed record.
    pub fn append(&self, draft: TransactionDraft) -> Transaction {
        let record = draft.into_record(Uuid::new_v4());
        self.entries.write().insert(0, record.clone());
        record
    }

    /// Snapshot of the full sequence, most-recent-first. The caller owns
    /// the copy; the internal sequence cannot be reached through it.
    pub fn all(&self) -> Vec<Transaction> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
