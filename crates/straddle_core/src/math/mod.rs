//! Mathematical utilities.
//!
//! - `stats`: Sample mean and standard deviation for summarising repeated estimates

pub mod stats;
