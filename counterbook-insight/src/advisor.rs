use async_trait::async_trait;
use counterbook_core::{DashboardStats, Insight, Transaction};

use crate::InsightResult;

/// Boundary to the external advisory service.
///
/// Implementations take the current stats and the full transaction list
/// and return a small ordered set of advisory messages. They have no
/// effect on ledger state; failures are absorbed by the caller.
#[async_trait]
pub trait InsightAdvisor: Send + Sync {
    async fn generate(
        &self,
        stats: &DashboardStats,
        transactions: &[Transaction],
    ) -> InsightResult<Vec<Insight>>;
}
