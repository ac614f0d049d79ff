use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// One recorded sale, refund, or pending sale event. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub bill_no: String,
    pub customer: String,
    /// Signed currency value. Positive = sale, negative = refund/return.
    pub amount: Decimal,
    pub status: TransactionStatus,
}

impl Transaction {
    /// True when the amount counts toward sales rather than refunds.
    pub fn is_sale(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

/// Settlement state of a transaction, fixed at creation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    Paid,
    Pending,
    Returned,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionStatus::Paid => "Paid",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Returned => "Returned",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Paid" => Ok(TransactionStatus::Paid),
            "Pending" => Ok(TransactionStatus::Pending),
            "Returned" => Ok(TransactionStatus::Returned),
            other => Err(format!("unknown transaction status: {other}")),
        }
    }
}
