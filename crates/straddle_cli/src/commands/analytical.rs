//! Analytical command implementation
//!
//! Prints the closed-form ATMF straddle approximation alongside the
//! lognormal reference value.

use std::io::Write;

use serde::Serialize;
use straddle_pricing::analytical::{lognormal_straddle_price, straddle_price};
use tracing::info;

use super::Market;
use crate::config::OutputFormat;
use crate::output::{emit, Report};
use crate::Result;

/// Analytical straddle prices for one volatility and horizon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticalReport {
    pub volatility: f64,
    pub time: f64,
    /// `2/√(2π) · σ · √t`
    pub price: f64,
    /// Exact value under a driftless lognormal terminal price
    pub lognormal_price: f64,
}

impl Report for AnalyticalReport {
    fn write_table(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Analytical straddle price: {:.4}", self.price)?;
        writeln!(out, "Lognormal reference price: {:.4}", self.lognormal_price)?;
        Ok(())
    }

    fn write_csv(&self, writer: &mut csv::Writer<&mut dyn Write>) -> Result<()> {
        writer.write_record(["volatility", "time", "price", "lognormal_price"])?;
        writer.write_record([
            self.volatility.to_string(),
            self.time.to_string(),
            self.price.to_string(),
            self.lognormal_price.to_string(),
        ])?;
        Ok(())
    }
}

/// Compute the analytical report
pub fn report(market: Market) -> Result<AnalyticalReport> {
    Ok(AnalyticalReport {
        volatility: market.volatility,
        time: market.time,
        price: straddle_price(market.volatility, market.time)?,
        lognormal_price: lognormal_straddle_price(market.volatility, market.time)?,
    })
}

/// Run the analytical command
pub fn run(market: Market, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    info!(
        volatility = market.volatility,
        time = market.time,
        "Pricing straddle analytically"
    );
    emit(&report(market)?, format, out)
}
