use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use counterbook_config::DashboardConfig;
use counterbook_core::{DashboardStats, Insight, Transaction, TransactionStatus};
use counterbook_dashboard::DashboardSession;
use counterbook_insight::{
    GeminiAdvisor, InsightAdvisor, InsightRefresher, InsightResult,
};
use counterbook_ledger::{LedgerQuery, LedgerStore, TransactionDraft};
use counterbook_stats::StatsEngine;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::fixtures;
use crate::render;

#[derive(Parser)]
#[command(name = "counterbook", about = "Service-center dashboard", version)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Start from an empty ledger instead of the demo fixtures.
    #[arg(long, global = true)]
    empty: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the KPI cards, recent transactions and advisory messages.
    Show,
    /// Record a new sale or return, then print the refreshed dashboard.
    Add {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        bill_no: String,
        /// Paid, Pending or Returned.
        #[arg(long, default_value = "Paid")]
        status: TransactionStatus,
        /// Defaults to the configured reference date.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Advisor used when no API key is configured: advisory stays empty.
struct DisabledAdvisor;

#[async_trait]
impl InsightAdvisor for DisabledAdvisor {
    async fn generate(
        &self,
        _stats: &DashboardStats,
        _transactions: &[Transaction],
    ) -> InsightResult<Vec<Insight>> {
        Ok(Vec::new())
    }
}

pub async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = DashboardConfig::load(cli.config.as_deref())?;

    let reference_date = if cli.empty {
        config.reference_date_or_today()
    } else {
        // The demo rows are pinned to their original business day.
        config.reference_date.unwrap_or_else(fixtures::demo_reference_date)
    };

    let ledger = Arc::new(LedgerStore::new());
    if !cli.empty {
        fixtures::seed_demo_ledger(&ledger);
    }

    let advisor: Arc<dyn InsightAdvisor> = match &config.insight.api_key {
        Some(key) => Arc::new(GeminiAdvisor::with_endpoint(
            key.as_str(),
            config.insight.endpoint.as_str(),
            config.insight.model.as_str(),
        )),
        None => {
            info!("no insight API key configured; advisory disabled");
            Arc::new(DisabledAdvisor)
        }
    };
    let advisory_enabled = config.insight.api_key.is_some();
    let refresher = Arc::new(InsightRefresher::with_timeout(
        advisor,
        Duration::from_secs(config.insight.timeout_secs),
    ));
    let session = DashboardSession::new(
        ledger,
        StatsEngine::new(config.opening_balance),
        refresher,
        reference_date,
    );

    match cli.command {
        Command::Show => {}
        Command::Add {
            customer,
            amount,
            bill_no,
            status,
            date,
        } => {
            let draft = TransactionDraft::new(
                date.unwrap_or(reference_date),
                bill_no,
                customer,
                amount,
                status,
            );
            session.append(draft);
        }
    }

    if advisory_enabled {
        session.spawn_refresh().await?;
    }
    print_dashboard(&session);
    Ok(())
}

fn print_dashboard(session: &DashboardSession) {
    println!("== Dashboard ({}) ==\n", session.reference_date());
    println!("{}\n", render::stats_block(&session.stats()));

    let snapshot = session.transactions();
    let recent = LedgerQuery::default().with_limit(5).apply(&snapshot);
    println!("Recent Transactions");
    println!("{}", render::transaction_table(&recent));

    let returns = LedgerQuery::default()
        .with_status(TransactionStatus::Returned)
        .apply(&snapshot);
    if !returns.is_empty() {
        println!("Sales Returns");
        println!("{}", render::transaction_table(&returns));
    }

    println!("Business Insights");
    println!("{}", render::insight_block(&session.insights()));
}
