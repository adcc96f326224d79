//! End-to-end tests for the command layer.
//!
//! Commands are driven through the library with in-memory sinks, the way
//! the binary drives them with stdout.

use std::io::Write;

use approx::assert_relative_eq;
use straddle_cli::commands::{self, Market};
use straddle_cli::config::{OutputFormat, StraddleConfig};
use straddle_cli::CliError;

const MARKET: Market = Market {
    volatility: 0.2,
    time: 1.0,
};

fn json(run: impl FnOnce(&mut dyn Write) -> straddle_cli::Result<()>) -> serde_json::Value {
    let mut out = Vec::new();
    run(&mut out).unwrap();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn test_single_path_mc_matches_path_command() {
    for seed in [1u64, 42, 2024] {
        let mc = json(|out| commands::mc::run(MARKET, 1, Some(seed), OutputFormat::Json, out));
        let path = json(|out| commands::path::run(MARKET, 5, Some(seed), OutputFormat::Json, out));

        assert_eq!(mc["price"], path["straddle_return"], "seed {}", seed);
        assert_eq!(mc["std_error"], 0.0);
    }
}

#[test]
fn test_analytical_json() {
    let value = json(|out| commands::analytical::run(MARKET, OutputFormat::Json, out));
    assert_relative_eq!(value["price"].as_f64().unwrap(), 0.159_576_912, epsilon = 1e-8);
    assert_eq!(value["volatility"], 0.2);
}

#[test]
fn test_zero_volatility_prices_zero() {
    let market = Market {
        volatility: 0.0,
        time: 1.0,
    };
    let analytical = json(|out| commands::analytical::run(market, OutputFormat::Json, out));
    let mc = json(|out| commands::mc::run(market, 10, Some(1), OutputFormat::Json, out));

    assert_eq!(analytical["price"], 0.0);
    assert_eq!(mc["price"], 0.0);
}

#[test]
fn test_mc_close_to_analytical() {
    let value = json(|out| commands::mc::run(MARKET, 10_000, Some(7), OutputFormat::Json, out));
    let price = value["price"].as_f64().unwrap();
    let std_error = value["std_error"].as_f64().unwrap();
    let analytical = value["analytical"].as_f64().unwrap();

    assert!((price - analytical).abs() < 4.0 * std_error + 0.004);
}

#[test]
fn test_invalid_horizon_reported() {
    let market = Market {
        volatility: 0.2,
        time: 0.001,
    };
    let mut out = Vec::new();
    let err = commands::path::run(market, 5, Some(1), OutputFormat::Table, &mut out).unwrap_err();

    assert!(matches!(err, CliError::Pricing(_)));
    assert!(err.to_string().contains("time"));
    assert!(out.is_empty());
}

#[test]
fn test_paths_csv_columns_are_positive() {
    let mut out = Vec::new();
    commands::paths::run(MARKET, 3, Some(11), OutputFormat::Csv, &mut out).unwrap();

    let mut reader = csv::Reader::from_reader(out.as_slice());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 4);

    let mut rows = 0;
    for record in reader.records() {
        let record = record.unwrap();
        assert_eq!(record[0].parse::<usize>().unwrap(), rows);
        for value in record.iter().skip(1) {
            assert!(value.parse::<f64>().unwrap() > 0.0);
        }
        rows += 1;
    }
    assert_eq!(rows, 252);
}

#[test]
fn test_demo_json_sections() {
    let config = StraddleConfig {
        seed: Some(5),
        mc_paths: 20,
        batch_paths: 100,
        format: OutputFormat::Json,
        ..Default::default()
    };
    let value = json(|out| commands::demo::run(&config, out));

    assert_eq!(value["seed"], 5);
    assert_eq!(value["mc"]["n_paths"], 20);
    assert_eq!(value["five"]["prices"].as_array().unwrap().len(), 5);
    assert_eq!(value["path"]["head"].as_array().unwrap().len(), 5);
    assert_eq!(value["paths"]["terminal"].as_array().unwrap().len(), 4);
}
