//! Pure derivation of the three dashboard KPIs from a ledger snapshot.

use chrono::NaiveDate;
use counterbook_core::{DashboardStats, Transaction, TransactionStatus};
use rust_decimal::Decimal;

/// Opening balance used when no configuration overrides it.
pub const DEFAULT_OPENING_BALANCE: Decimal = Decimal::from_parts(11_250_000, 0, 0, false, 2);

/// Stateless statistics engine. Holds only the configured opening balance;
/// every call recomputes over the whole snapshot.
#[derive(Clone, Copy, Debug)]
pub struct StatsEngine {
    opening_balance: Decimal,
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::new(DEFAULT_OPENING_BALANCE)
    }
}

impl StatsEngine {
    pub fn new(opening_balance: Decimal) -> Self {
        Self { opening_balance }
    }

    pub fn opening_balance(&self) -> Decimal {
        self.opening_balance
    }

    /// Compute the dashboard KPIs for the given reference date.
    ///
    /// `daily_sales` counts only positive amounts dated on the reference
    /// date. `sales_returns` is the absolute sum of `Returned` amounts over
    /// the entire history, regardless of date; the dashboard labels it
    /// "This Month" but the figure is intentionally all-time. `total_cash`
    /// is a running-balance simulation over the opening balance, ignoring
    /// pending amounts.
    pub fn compute(&self, transactions: &[Transaction], reference_date: NaiveDate) -> DashboardStats {
        let daily_sales: Decimal = transactions
            .iter()
            .filter(|tx| tx.date == reference_date && tx.amount > Decimal::ZERO)
            .map(|tx| tx.amount)
            .sum();

        let returned_total: Decimal = transactions
            .iter()
            .filter(|tx| tx.status == TransactionStatus::Returned)
            .map(|tx| tx.amount)
            .sum();
        let sales_returns = returned_total.abs();

        DashboardStats {
            daily_sales,
            total_cash: self.opening_balance + daily_sales - sales_returns,
            sales_returns,
        }
    }
}
