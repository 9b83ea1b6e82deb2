use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The standardized performance report of a trading journal.
///
/// This struct is the final output of the `StatsEngine` and is the data
/// transfer object the rendering layer consumes for the dashboard's stat
/// cards. It is recomputed fresh from the trade list on every request and
/// never persisted.
///
/// Ratios that would divide by zero fall back to defined values instead of
/// an `Option` or a sentinel: `win_rate_pct` is `0` for an empty journal,
/// and `profit_factor` equals `gross_profit` when there are no losing
/// trades. The fallbacks are part of the contract and are tested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    // I. Trade Counts
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub break_even: usize,
    pub win_rate_pct: Decimal,

    // II. Profitability
    pub total_profit: Decimal,
    pub current_balance: Decimal,
    pub gross_profit: Decimal,
    /// Stored as an absolute (non-negative) value.
    pub gross_loss: Decimal,
    pub profit_factor: Decimal,
    pub roi_pct: Decimal,

    // III. Risk
    pub max_drawdown_pct: Decimal,
}

impl Statistics {
    /// Creates a zeroed-out report: the correct result for an empty journal
    /// with a starting balance of zero, and the starting point for every
    /// calculation.
    pub fn new() -> Self {
        Self {
            total_trades: 0,
            wins: 0,
            losses: 0,
            break_even: 0,
            win_rate_pct: Decimal::ZERO,
            total_profit: Decimal::ZERO,
            current_balance: Decimal::ZERO,
            gross_profit: Decimal::ZERO,
            gross_loss: Decimal::ZERO,
            profit_factor: Decimal::ZERO,
            roi_pct: Decimal::ZERO,
            max_drawdown_pct: Decimal::ZERO,
        }
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}
