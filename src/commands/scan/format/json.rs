//! JSON output formatting for scan command

use reposim_core::error::Result;
use reposim_core::scan::ScanReport;

/// Output in JSON format
pub fn output(report: &ScanReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
