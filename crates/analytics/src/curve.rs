use core_types::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::{StatsEngine, balance_walk};

/// One chartable point of the account's equity curve.
///
/// `balance` drives the cumulative-balance area chart; `pnl` drives the
/// secondary per-trade P/L chart. Points are in chronological order, led by
/// a synthetic `"Start"` point at the starting balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// Short display date, e.g. `"03 Feb"`; `"Start"` for the lead point.
    pub label: String,
    pub balance: Decimal,
    pub pnl: Decimal,
}

impl StatsEngine {
    /// Derives the equity curve from a journal.
    ///
    /// Takes the same inputs as [`StatsEngine::compute`], with `trades` in
    /// the same descending storage order, and shares its running-balance
    /// walk: the final point's balance always equals the report's
    /// `current_balance`.
    pub fn equity_curve(&self, starting_balance: Decimal, trades: &[Trade]) -> Vec<EquityPoint> {
        let mut points = Vec::with_capacity(trades.len() + 1);
        points.push(EquityPoint {
            label: "Start".to_string(),
            balance: starting_balance,
            pnl: Decimal::ZERO,
        });

        for (balance, trade) in balance_walk(starting_balance, trades) {
            points.push(EquityPoint {
                label: trade.date.format("%d %b").to_string(),
                balance,
                pnl: trade.pnl,
            });
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use core_types::TradeDirection;
    use rust_decimal_macros::dec;

    fn journal(pnls_chronological: &[Decimal]) -> Vec<Trade> {
        let start = Utc.with_ymd_and_hms(2026, 2, 3, 9, 0, 0).unwrap();
        let mut trades: Vec<Trade> = pnls_chronological
            .iter()
            .enumerate()
            .map(|(i, &pnl)| {
                Trade::new(
                    start + Duration::days(i as i64),
                    "GBPJPY",
                    TradeDirection::Short,
                    dec!(0.5),
                    pnl,
                )
            })
            .collect();
        trades.reverse();
        trades
    }

    #[test]
    fn curve_leads_with_the_synthetic_start_point() {
        let curve = StatsEngine::new().equity_curve(dec!(1000), &[]);

        assert_eq!(curve.len(), 1);
        assert_eq!(curve[0].label, "Start");
        assert_eq!(curve[0].balance, dec!(1000));
        assert_eq!(curve[0].pnl, dec!(0));
    }

    #[test]
    fn curve_accumulates_in_chronological_order() {
        let trades = journal(&[dec!(100), dec!(-50), dec!(200)]);
        let curve = StatsEngine::new().equity_curve(dec!(1000), &trades);

        let balances: Vec<Decimal> = curve.iter().map(|p| p.balance).collect();
        assert_eq!(balances, vec![dec!(1000), dec!(1100), dec!(1050), dec!(1250)]);

        let pnls: Vec<Decimal> = curve.iter().map(|p| p.pnl).collect();
        assert_eq!(pnls, vec![dec!(0), dec!(100), dec!(-50), dec!(200)]);

        // Labels come from the trade dates, oldest first.
        assert_eq!(curve[1].label, "03 Feb");
        assert_eq!(curve[2].label, "04 Feb");
        assert_eq!(curve[3].label, "05 Feb");
    }

    #[test]
    fn curve_ends_where_the_report_ends() {
        let engine = StatsEngine::new();
        let trades = journal(&[dec!(-120), dec!(80), dec!(0), dec!(45.25)]);

        let stats = engine.compute(dec!(750), &trades);
        let curve = engine.equity_curve(dec!(750), &trades);

        assert_eq!(curve.last().unwrap().balance, stats.current_balance);
    }
}
