//! Straddle CLI - command-line operations for straddle pricing
//!
//! Library half of the `straddle` binary: configuration loading, command
//! implementations and output rendering. Commands write to any
//! [`std::io::Write`] sink so they can be driven from tests.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};
