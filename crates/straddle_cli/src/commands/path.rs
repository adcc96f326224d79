//! Single-path command implementation
//!
//! Simulates one asset path, prints its straddle return and the first
//! rows of the daily factor and price series.

use std::io::Write;

use serde::Serialize;
use straddle_pricing::mc::simulate_asset_path;
use straddle_pricing::rng::PricerRng;
use tracing::info;

use super::Market;
use crate::config::OutputFormat;
use crate::output::{emit, Report};
use crate::Result;

/// One day of a simulated path
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathRow {
    pub day: usize,
    /// `1 + r` for the day
    #[serde(rename = "return")]
    pub factor: f64,
    /// Running product of factors
    pub price: f64,
}

/// Single simulated path with its leading rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub volatility: f64,
    pub time: f64,
    pub seed: u64,
    pub n_days: usize,
    pub straddle_return: f64,
    pub terminal_price: f64,
    pub head: Vec<PathRow>,
}

impl Report for PathReport {
    fn write_table(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Straddle return from single path: {:.4}",
            self.straddle_return
        )?;
        writeln!(out, "{:>5} {:>10} {:>10}", "day", "return", "price")?;
        for row in &self.head {
            writeln!(out, "{:>5} {:>10.6} {:>10.6}", row.day, row.factor, row.price)?;
        }
        Ok(())
    }

    fn write_csv(&self, writer: &mut csv::Writer<&mut dyn Write>) -> Result<()> {
        for row in &self.head {
            writer.serialize(row)?;
        }
        Ok(())
    }
}

/// Simulate one path and keep its first `head` rows
pub fn report(market: Market, head: usize, rng: &mut PricerRng) -> Result<PathReport> {
    let seed = rng.seed();
    let path = simulate_asset_path(market.volatility, market.time, rng)?;

    Ok(PathReport {
        volatility: market.volatility,
        time: market.time,
        seed,
        n_days: path.n_days(),
        straddle_return: path.straddle_return(),
        terminal_price: path.terminal_price(),
        head: path
            .head(head)
            .map(|(day, factor, price)| PathRow { day, factor, price })
            .collect(),
    })
}

/// Run the path command
pub fn run(
    market: Market,
    head: usize,
    seed: Option<u64>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let mut rng = PricerRng::from_optional_seed(seed);
    info!(
        volatility = market.volatility,
        time = market.time,
        seed = rng.seed(),
        "Simulating single asset path"
    );

    let report = report(market, head, &mut rng)?;
    emit(&report, format, out)?;

    info!(
        straddle_return = report.straddle_return,
        "Path simulation complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKET: Market = Market {
        volatility: 0.2,
        time: 1.0,
    };

    #[test]
    fn test_head_rows() {
        let report = report(MARKET, 5, &mut PricerRng::from_seed(42)).unwrap();
        assert_eq!(report.n_days, 252);
        assert_eq!(report.head.len(), 5);
        assert_eq!(report.head[0].factor, report.head[0].price);
        assert_eq!(
            report.straddle_return,
            (report.terminal_price - 1.0).abs()
        );
    }

    #[test]
    fn test_head_longer_than_path() {
        let market = Market {
            volatility: 0.2,
            time: 3.0 / 252.0,
        };
        let report = report(market, 10, &mut PricerRng::from_seed(1)).unwrap();
        assert_eq!(report.head.len(), report.n_days);
    }

    #[test]
    fn test_table_layout() {
        let mut out = Vec::new();
        run(MARKET, 3, Some(9), OutputFormat::Table, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Straddle return from single path: "));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_csv_header() {
        let mut out = Vec::new();
        run(MARKET, 2, Some(9), OutputFormat::Csv, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().next(), Some("day,return,price"));
        assert_eq!(text.lines().count(), 3);
    }
}
