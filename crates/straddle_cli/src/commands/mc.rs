//! Monte Carlo command implementation
//!
//! Runs the path-loop estimator and reports the price with its standard
//! error.

use std::io::Write;

use serde::Serialize;
use straddle_core::SimulationParameters;
use straddle_pricing::analytical::straddle_price;
use straddle_pricing::mc::{estimate_mc, McEstimate};
use straddle_pricing::rng::PricerRng;
use tracing::info;

use super::Market;
use crate::config::OutputFormat;
use crate::output::{emit, Report};
use crate::Result;

/// Loop-estimator result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct McReport {
    pub volatility: f64,
    pub time: f64,
    pub seed: u64,
    #[serde(flatten)]
    pub estimate: McEstimate,
    /// Closed-form value for comparison
    pub analytical: f64,
}

impl Report for McReport {
    fn write_table(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "MC estimated straddle price: {:.4}", self.estimate.price)?;
        writeln!(
            out,
            "  std error {:.4}, 95% half-width {:.4}, 99% half-width {:.4}, {} paths, seed {}",
            self.estimate.std_error,
            self.estimate.confidence_95(),
            self.estimate.confidence_99(),
            self.estimate.n_paths,
            self.seed
        )?;
        writeln!(out, "  analytical {:.4}", self.analytical)?;
        Ok(())
    }

    fn write_csv(&self, writer: &mut csv::Writer<&mut dyn Write>) -> Result<()> {
        writer.write_record([
            "volatility",
            "time",
            "n_paths",
            "seed",
            "price",
            "std_error",
            "analytical",
        ])?;
        writer.write_record([
            self.volatility.to_string(),
            self.time.to_string(),
            self.estimate.n_paths.to_string(),
            self.seed.to_string(),
            self.estimate.price.to_string(),
            self.estimate.std_error.to_string(),
            self.analytical.to_string(),
        ])?;
        Ok(())
    }
}

/// Run the loop estimator over `n_paths` paths
pub fn report(market: Market, n_paths: usize, rng: &mut PricerRng) -> Result<McReport> {
    let params = SimulationParameters::new(market.volatility, market.time, n_paths)?;
    let seed = rng.seed();
    let estimate = estimate_mc(&params, rng)?;

    Ok(McReport {
        volatility: market.volatility,
        time: market.time,
        seed,
        estimate,
        analytical: straddle_price(market.volatility, market.time)?,
    })
}

/// Run the mc command
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
        "Starting Monte Carlo pricing"
    );

    let report = report(market, n_paths, &mut rng)?;
    emit(&report, format, out)?;

    info!(price = report.estimate.price, "Monte Carlo pricing complete");
    Ok(())
}
