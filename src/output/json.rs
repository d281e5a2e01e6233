//! JSON output formatting

use std::io;

use crate::tree::SizeReport;

/// Print the full size report as pretty-printed JSON to stdout.
pub fn print_json(report: &SizeReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
