mod dashboard;
mod engine;
mod models;
mod storage;
mod types;

use std::io::{stderr, stdin, stdout, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::dashboard::Dashboard;
use crate::storage::{load_csv, mock_transactions, Storage, TransactionLog};

/// Personal finance dashboard: reads commands from stdin, writes CSV views to stdout.
#[derive(Debug, Parser)]
#[command(name = "finance-dashboard", version, about)]
struct Cli {
    /// Seed the dashboard from a CSV file (id,date,description,amount,type,category)
    #[arg(long, value_name = "PATH", conflicts_with = "empty")]
    transactions: Option<PathBuf>,

    /// Start without any transactions instead of the built-in sample data
    #[arg(long)]
    empty: bool,

    /// One of: error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", default_value = "error")]
    log_level: String
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let transactions = match (&cli.transactions, cli.empty) {
        (Some(path), _) => load_csv(path).context("Could not seed the dashboard")?,
        (None, true) => Vec::new(),
        (None, false) => mock_transactions()
    };

    let mut dashboard = Dashboard::new(TransactionLog::from(transactions));

    if dashboard.storage().is_empty() {
        info!("Dashboard starts without transactions");
    } else {
        info!("Seeded dashboard with {} transactions", dashboard.storage().len());
    }

    dashboard::run(&mut dashboard, stdin().lock(), BufWriter::new(stdout().lock()))?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the CSV views, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
