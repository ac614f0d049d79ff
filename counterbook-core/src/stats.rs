use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three dashboard KPIs. Derived from the ledger, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of positive amounts dated on the reference date.
    pub daily_sales: Decimal,
    /// Opening balance plus daily sales minus returns. A simplified
    /// running-balance simulation, not a cash reconciliation.
    pub total_cash: Decimal,
    /// Absolute sum of `Returned` amounts across all history.
    pub sales_returns: Decimal,
}
