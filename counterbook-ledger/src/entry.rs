use chrono::NaiveDate;
use counterbook_core::{Transaction, TransactionStatus};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Transaction payload as supplied by the caller, before an id is assigned.
///
/// No validation is performed here: amount sign, bill number format and
/// customer text are stored exactly as given.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub bill_no: String,
    pub customer: String,
    pub amount: Decimal,
    pub status: TransactionStatus,
}

impl TransactionDraft {
    pub fn new(
        date: NaiveDate,
        bill_no: impl Into<String>,
        customer: impl Into<String>,
        amount: Decimal,
        status: TransactionStatus,
    ) -> Self {
        Self {
            date,
            bill_no: bill_no.into(),
            customer: customer.into(),
            amount,
            status,
        }
    }

    /// Materialize the draft into a full record under the given id.
    pub(crate) fn into_record(self, id: Uuid) -> Transaction {
        Transaction {
            id,
            date: self.date,
            bill_no: self.bill_no,
            customer: self.customer,
            amount: self.amount,
            status: self.status,
        }
    }
}
