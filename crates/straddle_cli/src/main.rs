//! Straddle CLI - Command Line Operations for Straddle Pricing
//!
//! # Commands
//!
//! - `straddle analytical` - Closed-form ATMF straddle approximation
//! - `straddle mc` - Path-loop Monte Carlo estimate
//! - `straddle five` - Five vectorised batch estimates
//! - `straddle path` - One simulated path with its straddle return
//! - `straddle paths` - CSV table of simulated multiplier paths
//! - `straddle demo` - Full walk-through on one random stream
//!
//! Results go to stdout; logs go to stderr.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use straddle_cli::commands::{self, Market};
use straddle_cli::config::{build_config, CliArgs, LogLevel, StraddleConfig};
use straddle_cli::Result;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ATMF straddle pricer
#[derive(Parser)]
#[command(name = "straddle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: straddle.toml, if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// RNG seed for reproducible runs
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Volatility and horizon overrides shared by every pricing command
#[derive(Args)]
struct MarketArgs {
    /// Annualised volatility
    #[arg(long)]
    vol: Option<f64>,

    /// Horizon in years
    #[arg(long)]
    time: Option<f64>,
}

impl MarketArgs {
    fn resolve(&self, config: &StraddleConfig) -> Market {
        Market::resolve(self.vol, self.time, config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Closed-form ATMF straddle approximation
    Analytical {
        #[command(flatten)]
        market: MarketArgs,
    },

    /// Monte Carlo estimate, one path at a time
    Mc {
        #[command(flatten)]
        market: MarketArgs,

        /// Number of Monte Carlo paths [default: 100]
        #[arg(short, long)]
        paths: Option<usize>,
    },

    /// Five vectorised Monte Carlo estimates
    Five {
        #[command(flatten)]
        market: MarketArgs,

        /// Paths per batch [default: 10000]
        #[arg(short, long)]
        paths: Option<usize>,
    },

    /// Simulate one asset path and its straddle return
    Path {
        #[command(flatten)]
        market: MarketArgs,

        /// Number of leading rows to print [default: 5]
        #[arg(long)]
        head: Option<usize>,
    },

    /// Simulate a table of multiplier paths as CSV
    Paths {
        #[command(flatten)]
        market: MarketArgs,

        /// Number of paths [default: 4]
        #[arg(short, long)]
        paths: Option<usize>,
    },

    /// Run the full pricing walk-through
    Demo,
}

/// Install the fmt subscriber on stderr.
///
/// `--verbose` forces debug; otherwise `RUST_LOG` takes precedence over the
/// configured level.
fn init_tracing(level: LogLevel, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(LogLevel::Debug.as_filter_str())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        seed: cli.seed,
        format: cli.format.clone(),
        verbose: cli.verbose,
    })?;

    init_tracing(config.log_level, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Analytical { market } => {
            commands::analytical::run(market.resolve(&config), config.format, &mut out)
        }
        Commands::Mc { market, paths } => commands::mc::run(
            market.resolve(&config),
            paths.unwrap_or(config.mc_paths),
            config.seed,
            config.format,
            &mut out,
        ),
        Commands::Five { market, paths } => commands::five::run(
            market.resolve(&config),
            paths.unwrap_or(config.batch_paths),
            config.seed,
            config.format,
            &mut out,
        ),
        Commands::Path { market, head } => commands::path::run(
            market.resolve(&config),
            head.unwrap_or(config.head_rows),
            config.seed,
            config.format,
            &mut out,
        ),
        Commands::Paths { market, paths } => commands::paths::run(
            market.resolve(&config),
            paths.unwrap_or(config.table_paths),
            config.seed,
            config.format,
            &mut out,
        ),
        Commands::Demo => commands::demo::run(&config, &mut out),
    }
}
