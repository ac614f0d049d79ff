use chrono::NaiveDate;
use counterbook_core::TransactionStatus;
use counterbook_ledger::{LedgerStore, TransactionDraft};
use rust_decimal::Decimal;

/// Seed the demo ledger used by the dashboard walkthrough. Entries are
/// appended oldest-first so the store lists them newest-first.
pub fn seed_demo_ledger(ledger: &LedgerStore) {
    let rows = [
        ("2024-10-25", "#B1043", "Priya Verma", "8000.00", TransactionStatus::Paid),
        ("2024-10-25", "#R1002", "Mukesh Sharma", "-450.00", TransactionStatus::Returned),
        ("2024-10-26", "#B1044", "Anita Singh", "1200.00", TransactionStatus::Pending),
        ("2024-10-26", "#B1045", "Rajesh Kumar", "5500.00", TransactionStatus::Paid),
    ];
    for (date, bill_no, customer, amount, status) in rows {
        let date: NaiveDate = date.parse().unwrap_or_default();
        let amount: Decimal = amount.parse().unwrap_or_default();
        ledger.append(TransactionDraft::new(date, bill_no, customer, amount, status));
    }
}

/// Reference date matching the demo fixture rows.
pub fn demo_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 26).unwrap_or_default()
}
