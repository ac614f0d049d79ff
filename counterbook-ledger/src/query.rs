use chrono::NaiveDate;
use counterbook_core::{Transaction, TransactionStatus};

/// Read-side filter over a ledger snapshot, used by the dashboard views
/// (recent transactions, payments, sales returns).
#[derive(Clone, Copy, Debug, Default)]
pub struct LedgerQuery {
    pub status: Option<TransactionStatus>,
    pub date: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LedgerQuery {
    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Apply the filter to a snapshot, preserving relative order.
    pub fn apply(&self, entries: &[Transaction]) -> Vec<Transaction> {
        let filtered = entries.iter().filter(|tx| {
            self.status.map_or(true, |status| tx.status == status)
                && self.date.map_or(true, |date| tx.date == date)
        });
        match self.limit {
            Some(limit) => filtered.take(limit).cloned().collect(),
            None => filtered.cloned().collect(),
        }
    }
}
