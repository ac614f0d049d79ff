//! Domain types shared by the Counterbook dashboard crates.

mod insight;
mod stats;
mod transaction;

pub use insight::{Insight, InsightKind};
pub use stats::DashboardStats;
pub use transaction::{Transaction, TransactionStatus};
