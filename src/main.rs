use std::fs;
use std::path::{Path, PathBuf};

use analytics::StatsEngine;
use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use core_types::{Account, Trade};
use serde::Deserialize;
use tracing::info;

/// The main entry point for the journal application.
///
/// This binary loads the JSON journal file and renders tables; all
/// statistics live in the `analytics` crate.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Stats(args) => handle_stats(args),
        Commands::Curve(args) => handle_curve(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A personal trading journal: log trades, measure performance.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the performance report for a journal file.
    Stats(JournalArgs),
    /// Print the equity curve for a journal file.
    Curve(JournalArgs),
}

#[derive(Parser)]
struct JournalArgs {
    /// Path to the JSON journal file.
    #[arg(long, default_value = "journal.json")]
    file: PathBuf,
}

// ==============================================================================
// Journal File Loading
// ==============================================================================

/// The on-disk journal document: the account settings plus the trade list.
#[derive(Debug, Deserialize)]
struct JournalFile {
    account: Account,
    trades: Vec<Trade>,
}

/// Loads a journal file and restores the canonical storage order:
/// descending by date, ties kept in file order (the sort is stable).
fn load_journal(path: &Path) -> anyhow::Result<JournalFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file '{}'", path.display()))?;
    let mut journal: JournalFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse journal file '{}'", path.display()))?;

    journal.trades.sort_by(|a, b| b.date.cmp(&a.date));

    info!(
        trades = journal.trades.len(),
        %journal.account.starting_balance,
        "loaded journal"
    );
    Ok(journal)
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Computes the statistics report and renders it as a two-column table.
fn handle_stats(args: JournalArgs) -> anyhow::Result<()> {
    let journal = load_journal(&args.file)?;
    let stats = StatsEngine::new().compute(journal.account.starting_balance, &journal.trades);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        "Current Balance".to_string(),
        format!("${}", stats.current_balance.round_dp(2)),
    ]);
    table.add_row(vec![
        "Total Profit".to_string(),
        format!("${}", stats.total_profit.round_dp(2)),
    ]);
    table.add_row(vec!["ROI".to_string(), format!("{}%", stats.roi_pct.round_dp(2))]);
    table.add_row(vec![
        "Win Rate".to_string(),
        format!(
            "{}% ({}W - {}L - {}BE)",
            stats.win_rate_pct.round_dp(1),
            stats.wins,
            stats.losses,
            stats.break_even
        ),
    ]);
    table.add_row(vec![
        "Profit Factor".to_string(),
        format!("{}", stats.profit_factor.round_dp(2)),
    ]);
    table.add_row(vec![
        "Max Drawdown".to_string(),
        format!("{}%", stats.max_drawdown_pct.round_dp(2)),
    ]);
    table.add_row(vec!["Total Trades".to_string(), stats.total_trades.to_string()]);

    println!("{table}");
    Ok(())
}

/// Derives the equity curve and renders it as one row per point.
fn handle_curve(args: JournalArgs) -> anyhow::Result<()> {
    let journal = load_journal(&args.file)?;
    let curve = StatsEngine::new().equity_curve(journal.account.starting_balance, &journal.trades);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Date", "Balance", "P/L"]);
    for point in &curve {
        table.add_row(vec![
            point.label.clone(),
            format!("${}", point.balance.round_dp(2)),
            format!("{}", point.pnl.round_dp(2)),
        ]);
    }

    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn loading_restores_descending_date_order() {
        let raw = r#"{
            "account": { "starting_balance": "1000" },
            "trades": [
                { "id": "11111111-1111-1111-1111-111111111111", "date": "2026-01-01T10:00:00Z",
                  "pair": "EURUSD", "type": "BUY", "lot": "0.1", "pnl": "100" },
                { "id": "22222222-2222-2222-2222-222222222222", "date": "2026-01-03T10:00:00Z",
                  "pair": "EURUSD", "type": "SELL", "lot": "0.1", "pnl": "-50" },
                { "id": "33333333-3333-3333-3333-333333333333", "date": "2026-01-02T10:00:00Z",
                  "pair": "GBPUSD", "type": "BUY", "lot": "0.2", "pnl": "25" }
            ]
        }"#;

        let mut journal: JournalFile = serde_json::from_str(raw).unwrap();
        journal.trades.sort_by(|a, b| b.date.cmp(&a.date));

        let pnls: Vec<_> = journal.trades.iter().map(|t| t.pnl).collect();
        assert_eq!(pnls, vec![dec!(-50), dec!(25), dec!(100)]);
        assert_eq!(journal.account.starting_balance, dec!(1000));
    }
}
