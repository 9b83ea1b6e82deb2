use core_types::Trade;
use rust_decimal::Decimal;
use tracing::debug;

use crate::report::Statistics;

/// A stateless calculator for deriving performance metrics from a journal.
#[derive(Debug, Default)]
pub struct StatsEngine {}

impl StatsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating journal statistics.
    ///
    /// # Arguments
    ///
    /// * `starting_balance` - The account's capital before the first trade.
    ///   Taken at face value; validation belongs to the caller.
    /// * `trades` - The journal in **descending** date order (most recent
    ///   first), the canonical order the storage layer returns. Ordering only
    ///   matters for the drawdown walk, which iterates in reverse.
    ///
    /// # Returns
    ///
    /// A complete `Statistics` report. This function cannot fail: every edge
    /// case (empty journal, zero peak balance, no losing trades) resolves to
    /// a defined fallback value rather than an error or a non-finite number.
    pub fn compute(&self, starting_balance: Decimal, trades: &[Trade]) -> Statistics {
        let mut report = Statistics::new();
        report.total_trades = trades.len();

        for trade in trades {
            report.total_profit += trade.pnl;

            // Strict sign partition: zero is break-even, not a win or a loss.
            if trade.pnl > Decimal::ZERO {
                report.wins += 1;
                report.gross_profit += trade.pnl;
            } else if trade.pnl < Decimal::ZERO {
                report.losses += 1;
                report.gross_loss += trade.pnl.abs();
            } else {
                report.break_even += 1;
            }
        }

        report.current_balance = starting_balance + report.total_profit;

        if report.total_trades > 0 {
            report.win_rate_pct = (Decimal::from(report.wins)
                / Decimal::from(report.total_trades))
                * Decimal::ONE_HUNDRED;
        }

        // With no losing trades the conventional ratio is unbounded; the
        // journal instead reports the gross profit itself. This is a
        // deliberate, tested quirk of the product, not an accident. With no
        // trades at all both terms are zero and so is the result.
        report.profit_factor = if report.gross_loss.is_zero() {
            report.gross_profit
        } else {
            report.gross_profit / report.gross_loss
        };

        if !starting_balance.is_zero() {
            report.roi_pct = (report.total_profit / starting_balance) * Decimal::ONE_HUNDRED;
        }

        report.max_drawdown_pct = self.max_drawdown(starting_balance, trades);

        debug!(
            total_trades = report.total_trades,
            %report.current_balance,
            "computed journal statistics"
        );
        report
    }

    /// Largest peak-to-trough percentage decline of the running balance.
    ///
    /// Walks the journal oldest-to-newest. `peak` starts at the starting
    /// balance and never decreases; after each trade is applied the decline
    /// from the peak is measured and the worst one kept.
    fn max_drawdown(&self, starting_balance: Decimal, trades: &[Trade]) -> Decimal {
        let mut max_drawdown = Decimal::ZERO;
        let mut peak = starting_balance;

        for (balance, _) in balance_walk(starting_balance, trades) {
            if balance > peak {
                peak = balance;
            }
            // A zero peak (zero starting balance, first trades non-positive)
            // makes the percentage undefined; that stretch contributes no
            // drawdown instead of a division by zero.
            if peak.is_zero() {
                continue;
            }
            let drawdown = ((peak - balance) / peak) * Decimal::ONE_HUNDRED;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }

        max_drawdown
    }
}

/// Walks a descending-ordered journal in chronological (oldest-first) order,
/// yielding the running balance after each trade together with the trade.
///
/// Both the drawdown calculation and the equity curve are built on this one
/// walk, so the curve's final balance and `Statistics::current_balance` can
/// never disagree.
pub(crate) fn balance_walk<'a>(
    starting_balance: Decimal,
    trades: &'a [Trade],
) -> impl Iterator<Item = (Decimal, &'a Trade)> {
    trades.iter().rev().scan(starting_balance, |balance, trade| {
        *balance += trade.pnl;
        Some((*balance, trade))
    })
}
