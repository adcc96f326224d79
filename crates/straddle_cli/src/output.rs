//! Result rendering
//!
//! Every command builds a report and hands it to [`emit`], which writes it
//! to the given sink in the configured [`OutputFormat`].

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// A command result that can be rendered in every output format
pub trait Report: Serialize {
    /// Write human-readable lines
    fn write_table(&self, out: &mut dyn Write) -> Result<()>;

    /// Write records, including the header row
    fn write_csv(&self, writer: &mut csv::Writer<&mut dyn Write>) -> Result<()>;
}

/// Render a report in the requested format
pub fn emit<R: Report>(report: &R, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Table => report.write_table(out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            report.write_csv(&mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
