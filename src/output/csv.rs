//! CSV report output
//!
//! One row per vendor, suitable for spreadsheets or pandas. Percentages are
//! written with two decimal places to match the text report.

use anyhow::Context;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::sim::DistributionReport;
use crate::Result;

/// CSV header row
pub const CSV_HEADER: &str = "vendor,weight,expected_pct,hits,actual_pct,diff_pct";

/// Render a report as CSV (header plus one row per vendor)
pub fn to_csv_string(report: &DistributionReport) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for vendor in &report.vendors {
        out.push_str(&format!(
            "{},{},{:.2},{},{:.2},{:.2}\n",
            vendor.vendor_slug,
            vendor.weight,
            vendor.expected_pct,
            vendor.hits,
            vendor.actual_pct,
            vendor.diff_pct
        ));
    }
    out
}

/// Write a report to a CSV file
pub fn write_csv(path: &Path, report: &DistributionReport) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create CSV output file: {}", path.display()))?;
    file.write_all(to_csv_string(report).as_bytes())
        .with_context(|| format!("Failed to write CSV output file: {}", path.display()))?;
    Ok(())
}
