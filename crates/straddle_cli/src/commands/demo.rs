//! Demo command implementation
//!
//! Runs the full pricing walk-through on one random stream:
//! 1. Analytical approximation
//! 2. Loop Monte Carlo estimate
//! 3. Five vectorised batch estimates
//! 4. A single simulated path with its first rows
//! 5. A small table of multiplier paths, summarised by terminal value

use std::io::Write;

use serde::Serialize;
use straddle_pricing::rng::PricerRng;
use tracing::info;

use super::analytical::{self, AnalyticalReport};
use super::five::{self, FiveReport};
use super::mc::{self, McReport};
use super::path::{self, PathReport};
use super::paths;
use super::Market;
use crate::config::{OutputFormat, StraddleConfig};
use crate::output::{emit, Report};
use crate::{CliError, Result};

/// Terminal multipliers of the simulated path table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub n_days: usize,
    pub n_paths: usize,
    pub terminal: Vec<f64>,
    pub terminal_min: f64,
    pub terminal_max: f64,
}

/// Every step of the walk-through
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub seed: u64,
    pub analytical: AnalyticalReport,
    pub mc: McReport,
    pub five: FiveReport,
    pub path: PathReport,
    pub paths: TableSummary,
}

impl Report for DemoReport {
    fn write_table(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "========================================")?;
        writeln!(out, "Straddle Pricing Demo (seed {})", self.seed)?;
        writeln!(out, "========================================")?;
        writeln!(out)?;

        writeln!(out, "[1] Closed-form approximation")?;
        self.analytical.write_table(out)?;
        writeln!(out)?;

        writeln!(out, "[2] Monte Carlo, one path at a time")?;
        self.mc.write_table(out)?;
        writeln!(out)?;

        writeln!(out, "[3] Five vectorised estimates")?;
        self.five.write_table(out)?;
        writeln!(out)?;

        writeln!(out, "[4] Single simulated path")?;
        self.path.write_table(out)?;
        writeln!(out)?;

        writeln!(out, "[5] Simulated straddle paths")?;
        writeln!(
            out,
            "{} paths over {} days, terminal multipliers in [{:.4}, {:.4}]",
            self.paths.n_paths, self.paths.n_days, self.paths.terminal_min, self.paths.terminal_max
        )?;
        Ok(())
    }

    fn write_csv(&self, _writer: &mut csv::Writer<&mut dyn Write>) -> Result<()> {
        Err(CliError::UnsupportedFormat {
            command: "demo",
            format: OutputFormat::Csv,
        })
    }
}

/// Run the walk-through on `rng`
pub fn report(config: &StraddleConfig, rng: &mut PricerRng) -> Result<DemoReport> {
    let market = Market::from(config);
    let seed = rng.seed();

    let analytical = analytical::report(market)?;
    let mc = mc::report(market, config.mc_paths, rng)?;
    let five = five::report(market, config.batch_paths, rng)?;
    let path = path::report(market, config.head_rows, rng)?;

    let table = paths::report(market, config.table_paths, rng)?;
    let (terminal_min, terminal_max) = table.terminal_range();
    let paths = TableSummary {
        n_days: table.table.n_days(),
        n_paths: table.table.n_paths(),
        terminal: table.table.terminal_row().to_vec(),
        terminal_min,
        terminal_max,
    };

    Ok(DemoReport {
        seed,
        analytical,
        mc,
        five,
        path,
        paths,
    })
}

/// Run the demo command
pub fn run(config: &StraddleConfig, out: &mut dyn Write) -> Result<()> {
    if config.format == OutputFormat::Csv {
        return Err(CliError::UnsupportedFormat {
            command: "demo",
            format: config.format,
        });
    }

    let mut rng = PricerRng::from_optional_seed(config.seed);
    info!(seed = rng.seed(), "Starting straddle pricing demo");

    let report = report(config, &mut rng)?;
    emit(&report, config.format, out)?;

    info!("Demo complete");
    Ok(())
}
