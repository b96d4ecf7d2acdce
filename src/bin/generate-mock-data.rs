use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use market_share_dashboard::cli_helper::init_tracing;
use market_share_dashboard::transactions::generator::{
    MockDataConfig, MockDataGenerator, write_transactions_csv,
};

#[derive(Parser, Debug)]
#[command(
    name = "generate-mock-data",
    about = "Write a synthetic transaction table for the dashboard"
)]
struct CliArgs {
    /// Number of transactions
    #[arg(long, default_value_t = 9_999)]
    rows: usize,

    /// Output CSV path
    #[arg(long, env = "DATA_PATH", default_value = "./data.csv")]
    out: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// First day of the generated period (YYYY-MM-DD)
    #[arg(long, default_value = "2024-01-01")]
    start: NaiveDate,

    /// Length of the period in days
    #[arg(long, default_value_t = 365)]
    days: i64,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = CliArgs::parse();

    let mut generator = MockDataGenerator::new(MockDataConfig {
        rows: args.rows,
        start_date: args.start,
        span_days: args.days,
        seed: args.seed,
    });
    let transactions = generator.generate()?;

    let file = File::create(&args.out)
        .with_context(|| format!("Failed to create {}", args.out.display()))?;
    write_transactions_csv(&transactions, BufWriter::new(file))?;

    tracing::info!("Wrote {} transactions", transactions.len());
    eprintln!(
        "{}",
        format!("✓ Mock data written to {}", args.out.display()).green()
    );

    Ok(())
}
