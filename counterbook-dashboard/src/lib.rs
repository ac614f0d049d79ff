//! One dashboard session: the ledger store, the statistics engine and the
//! insight refresher behind a single object that a presentation layer can
//! hold and query. Constructed once per session, injected where needed;
//! there is no global singleton.

use std::sync::Arc;

use chrono::NaiveDate;
use counterbook_core::{DashboardStats, Insight, Transaction};
use counterbook_insight::{InsightAdvisor, InsightRefresher};
use counterbook_ledger::{LedgerStore, TransactionDraft};
use counterbook_stats::StatsEngine;
use tracing::info;

pub struct DashboardSession {
    ledger: Arc<LedgerStore>,
    engine: StatsEngine,
    refresher: Arc<InsightRefresher>,
    reference_date: NaiveDate,
}

impl DashboardSession {
    pub fn new(
        ledger: Arc<LedgerStore>,
        engine: StatsEngine,
        refresher: Arc<InsightRefresher>,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            ledger,
            engine,
            refresher,
            reference_date,
        }
    }

    /// Convenience constructor for a fresh session over an empty ledger.
    pub fn with_advisor(
        advisor: Arc<dyn InsightAdvisor>,
        engine: StatsEngine,
        reference_date: NaiveDate,
    ) -> Self {
        Self::new(
            Arc::new(LedgerStore::new()),
            engine,
            Arc::new(InsightRefresher::new(advisor)),
            reference_date,
        )
    }

    pub fn ledger(&self) -> &Arc<LedgerStore> {
        &self.ledger
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Append an entry to the ledger. Synchronous; the single logical
    /// writer is the presentation layer.
    pub fn append(&self, draft: TransactionDraft) -> Transaction {
        let record = self.ledger.append(draft);
        info!(bill_no = %record.bill_no, amount = %record.amount, "recorded transaction");
        record
    }

    /// KPIs recomputed in full from the current ledger contents.
    pub fn stats(&self) -> DashboardStats {
        self.engine.compute(&self.ledger.all(), self.reference_date)
    }

    /// Append, then refresh the advisory board with the new stats and the
    /// full transaction list, waiting for the refresh to settle.
    pub async fn record(&self, draft: TransactionDraft) -> Transaction {
        let record = self.append(draft);
        self.refresher
            .refresh(self.stats(), self.transactions())
            .await;
        record
    }

    /// Fire-and-forget advisory refresh for presentation layers that must
    /// not block on the network. Overlapping refreshes resolve by ticket
    /// order inside the refresher.
    pub fn spawn_refresh(&self) -> tokio::task::JoinHandle<()> {
        let refresher = Arc::clone(&self.refresher);
        let stats = self.stats();
        let transactions = self.transactions();
        tokio::spawn(async move { refresher.refresh(stats, transactions).await })
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.ledger.all()
    }

    pub fn insights(&self) -> Vec<Insight> {
        self.refresher.insights()
    }

    pub fn insights_loading(&self) -> bool {
        self.refresher.loading()
    }
}
