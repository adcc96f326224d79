//! Multi-path command implementation
//!
//! Simulates a table of price multiplier paths and writes it as CSV with
//! one row per day and one column per path, ready for plotting.

use std::io::Write;

use serde::Serialize;
use straddle_pricing::mc::{simulate_price_paths, PriceTable};
use straddle_pricing::rng::PricerRng;
use tracing::info;

use super::Market;
use crate::config::OutputFormat;
use crate::output::{emit, Report};
use crate::Result;

/// Simulated multiplier paths
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathsReport {
    pub volatility: f64,
    pub time: f64,
    pub seed: u64,
    /// Day-major `n_days × n_paths` multipliers
    pub table: PriceTable,
}

impl PathsReport {
    /// Smallest and largest terminal multiplier
    pub fn terminal_range(&self) -> (f64, f64) {
        self.table
            .terminal_row()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

impl Report for PathsReport {
    // The table rendering is the CSV table itself.
    fn write_table(&self, out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        self.write_csv(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn write_csv(&self, writer: &mut csv::Writer<&mut dyn Write>) -> Result<()> {
        let mut header = Vec::with_capacity(self.table.n_paths() + 1);
        header.push("day".to_string());
        header.extend((0..self.table.n_paths()).map(|p| format!("path_{}", p)));
        writer.write_record(&header)?;

        for (day, row) in self.table.rows().enumerate() {
            let mut record = Vec::with_capacity(row.len() + 1);
            record.push(day.to_string());
            record.extend(row.iter().map(f64::to_string));
            writer.write_record(&record)?;
        }
        Ok(())
    }
}

/// Simulate `n_paths` multiplier paths
pub fn report(market: Market, n_paths: usize, rng: &mut PricerRng) -> Result<PathsReport> {
    let seed = rng.seed();
    let table = simulate_price_paths(market.volatility, market.time, n_paths, rng)?;

    Ok(PathsReport {
        volatility: market.volatility,
        time: market.time,
        seed,
        table,
    })
}

/// Run the paths command
pub fn run(
    market: Market,
    n_paths: usize,
    seed: Option<u64>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let mut rng = PricerRng::from_optional_seed(seed);
    info!(
        volatility = market.volatility,
        time = market.time,
        n_paths,
        seed = rng.seed(),
        "Simulating multiplier paths"
    );

    let report = report(market, n_paths, &mut rng)?;
    emit(&report, format, out)?;

    let (lo, hi) = report.terminal_range();
    info!(
        n_days = report.table.n_days(),
        terminal_min = lo,
        terminal_max = hi,
        "Path table complete"
    );
    Ok(())
}
