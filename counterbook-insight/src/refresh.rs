use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use counterbook_core::{DashboardStats, Insight, Transaction};
use parking_lot::Mutex;
use tracing::warn;

use crate::InsightAdvisor;

/// Default deadline for a single advisory call.
pub const DEFAULT_REFRESH_TIMEOUT: Duration = Duration::from_secs(10);

/// Coordinates advisory refreshes against a shared result board.
///
/// Each refresh is issued a monotonic ticket. A completion only lands if
/// no newer completion has landed before it, so a slow stale response can
/// never overwrite a fresher one. Advisor failures, malformed payloads and
/// timeouts all collapse to an empty list; nothing propagates to the
/// ledger or statistics path.
pub struct InsightRefresher {
    advisor: Arc<dyn InsightAdvisor>,
    timeout: Duration,
    tickets: AtomicU64,
    board: Mutex<Board>,
}

#[derive(Default)]
struct Board {
    insights: Vec<Insight>,
    latest_issued: u64,
    latest_applied: u64,
}

impl InsightRefresher {
    pub fn new(advisor: Arc<dyn InsightAdvisor>) -> Self {
        Self::with_timeout(advisor, DEFAULT_REFRESH_TIMEOUT)
    }

    pub fn with_timeout(advisor: Arc<dyn InsightAdvisor>, timeout: Duration) -> Self {
        Self {
            advisor,
            timeout,
            tickets: AtomicU64::new(0),
            board: Mutex::new(Board::default()),
        }
    }

    /// Run one advisory refresh to completion and apply its result unless
    /// a newer refresh has already landed.
    pub async fn refresh(&self, stats: DashboardStats, transactions: Vec<Transaction>) {
        let ticket = self.tickets.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut board = self.board.lock();
            board.latest_issued = board.latest_issued.max(ticket);
        }

        let outcome = tokio::time::timeout(
            self.timeout,
            self.advisor.generate(&stats, &transactions),
        )
        .await;

        let insights = match outcome {
            Ok(Ok(insights)) => insights,
            Ok(Err(err)) => {
                warn!(error = %err, ticket, "insight advisor failed");
                Vec::new()
            }
            Err(_) => {
                warn!(ticket, timeout_ms = self.timeout.as_millis() as u64, "insight advisor timed out");
                Vec::new()
            }
        };

        let mut board = self.board.lock();
        if ticket >= board.latest_applied {
            board.latest_applied = ticket;
            board.insights = insights;
        }
    }

    /// Current advisory messages. Replaced wholesale by each applied
    /// refresh; never merged.
    pub fn insights(&self) -> Vec<Insight> {
        self.board.lock().insights.clone()
    }

    /// True while the most recently issued refresh has not completed.
    pub fn loading(&self) -> bool {
        let board = self.board.lock();
        board.latest_issued > board.latest_applied
    }
}
