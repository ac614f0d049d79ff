//! In-memory transaction ledger used by the Counterbook dashboard.

mod entry;
mod query;
mod store;

pub use entry::TransactionDraft;
pub use query::LedgerQuery;
pub use store::LedgerStore;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use counterbook_core::TransactionStatus;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    fn draft(bill: &str, amount: Decimal, status: TransactionStatus) -> TransactionDraft {
        TransactionDraft::new(day(26), bill, "Walk-in", amount, status)
    }

    #[test]
    fn append_assigns_distinct_ids() {
        let store = LedgerStore::new();
        for i in 0..50 {
            store.append(draft(&format!("#B{i:04}"), dec!(100), TransactionStatus::Paid));
        }
        let ids: HashSet<_> = store.all().into_iter().map(|tx| tx.id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn append_prepends_and_leaves_tail_untouched() {
        let store = LedgerStore::new();
        let first = store.append(draft("#B0001", dec!(10), TransactionStatus::Paid));
        let second = store.append(draft("#B0002", dec!(20), TransactionStatus::Pending));
        let third = store.append(draft("#B0003", dec!(30), TransactionStatus::Paid));

        let all = store.all();
        assert_eq!(all[0], third);
        assert_eq!(all[1], second);
        assert_eq!(all[2], first);
    }

    #[test]
    fn snapshots_are_stable_between_appends() {
        let store = LedgerStore::new();
        store.append(draft("#B0001", dec!(10), TransactionStatus::Paid));

        let mut first = store.all();
        let second = store.all();
        assert_eq!(first, second);

        // Mutating a snapshot must not leak back into the store.
        first.clear();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn stores_unvalidated_input_verbatim() {
        let store = LedgerStore::new();
        let record = store.append(TransactionDraft::new(
            day(26),
            "",
            "",
            Decimal::ZERO,
            TransactionStatus::Pending,
        ));
        assert_eq!(record.customer, "");
        assert_eq!(record.amount, Decimal::ZERO);
        assert_eq!(store.all()[0], record);
    }

    #[test]
    fn append_returns_record_with_supplied_fields() {
        let store = LedgerStore::new();
        let record = store.append(TransactionDraft::new(
            day(26),
            "#B9999",
            "Test",
            dec!(100),
            TransactionStatus::Pending,
        ));
        assert!(!record.id.is_nil());
        assert_eq!(record.bill_no, "#B9999");
        assert_eq!(record.customer, "Test");
        assert_eq!(record.amount, dec!(100));
        assert_eq!(record.status, TransactionStatus::Pending);
        assert_eq!(store.all(), vec![record]);
    }

    #[test]
    fn query_filters_by_status_and_date() {
        let store = LedgerStore::new();
        store.append(TransactionDraft::new(
            day(25),
            "#R1002",
            "Mukesh Sharma",
            dec!(-450),
            TransactionStatus::Returned,
        ));
        store.append(draft("#B1044", dec!(1200), TransactionStatus::Pending));
        store.append(draft("#B1045", dec!(5500), TransactionStatus::Paid));

        let snapshot = store.all();
        let returned = LedgerQuery::default()
            .with_status(TransactionStatus::Returned)
            .apply(&snapshot);
        assert_eq!(returned.len(), 1);
        assert_eq!(returned[0].bill_no, "#R1002");

        let today = LedgerQuery::default().with_date(day(26)).apply(&snapshot);
        assert_eq!(today.len(), 2);
        // Relative order of the snapshot is preserved.
        assert_eq!(today[0].bill_no, "#B1045");
        assert_eq!(today[1].bill_no, "#B1044");
    }

    #[test]
    fn query_limit_takes_newest_entries() {
        let store = LedgerStore::new();
        for i in 0..8 {
            store.append(draft(&format!("#B{i:04}"), dec!(50), TransactionStatus::Paid));
        }
        let recent = LedgerQuery::default().with_limit(5).apply(&store.all());
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].bill_no, "#B0007");
    }
}
