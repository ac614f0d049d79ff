use counterbook_core::{DashboardStats, Insight, Transaction};

/// Render the three KPI cards as a plain-text block.
pub fn stats_block(stats: &DashboardStats) -> String {
    format!(
        "Daily Sales          ₹ {}\n\
         Total Cash in Hand   ₹ {}\n\
         Sales Returns        ₹ {}",
        stats.daily_sales, stats.total_cash, stats.sales_returns
    )
}

/// Render a transaction listing, one row per entry, newest first.
pub fn transaction_table(transactions: &[Transaction]) -> String {
    let mut out = String::from("DATE        BILL NO   CUSTOMER              AMOUNT      STATUS\n");
    for tx in transactions {
        out.push_str(&format!(
            "{}  {:<8}  {:<20}  {:>10}  {}\n",
            tx.date, tx.bill_no, tx.customer, tx.amount, tx.status
        ));
    }
    out
}

pub fn insight_block(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return "No insights available yet.".into();
    }
    let mut out = String::new();
    for insight in insights {
        out.push_str(&format!(
            "[{}] {}\n    {}\n",
            insight.kind, insight.title, insight.description
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use counterbook_core::InsightKind;
    use rust_decimal_macros::dec;

    #[test]
    fn stats_block_formats_all_three_kpis() {
        let block = stats_block(&DashboardStats {
            daily_sales: dec!(6700.00),
            total_cash: dec!(118750.00),
            sales_returns: dec!(450.00),
        });
        assert!(block.contains("₹ 6700.00"));
        assert!(block.contains("₹ 118750.00"));
        assert!(block.contains("₹ 450.00"));
    }

    #[test]
    fn empty_insights_show_placeholder() {
        assert_eq!(insight_block(&[]), "No insights available yet.");
        let block = insight_block(&[Insight {
            title: "t".into(),
            description: "d".into(),
            kind: InsightKind::Info,
        }]);
        assert!(block.starts_with("[info] t"));
    }
}
