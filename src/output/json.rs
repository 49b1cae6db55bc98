//! JSON report output

use anyhow::Context;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::sim::DistributionReport;
use crate::Result;

/// Serialize a report as pretty-printed JSON
pub fn to_json_string(report: &DistributionReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
}

/// Write a report to a JSON file
pub fn write_json(path: &Path, report: &DistributionReport) -> Result<()> {
    let json = to_json_string(report)?;
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create JSON output file: {}", path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write JSON output file: {}", path.display()))?;
    file.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;
    use crate::sim::VendorOutcome;

    fn sample_report() -> DistributionReport {
        DistributionReport {
            position: Position::Feed,
            trials: 1000,
            pool_size: 3,
            total_weight: 3,
            vendors: vec![VendorOutcome {
                vendor_slug: "acme".to_string(),
                weight: 2,
                expected_pct: 66.67,
                hits: 670,
                actual_pct: 67.0,
                diff_pct: 0.33,
            }],
        }
    }

    #[test]
    fn test_json_structure() {
        let json = to_json_string(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["position"], "FEED");
        assert_eq!(value["trials"], 1000);
        assert_eq!(value["vendors"][0]["vendor_slug"], "acme");
        assert_eq!(value["vendors"][0]["hits"], 670);
    }

    #[test]
    fn test_write_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_json(&path, &sample_report()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["pool_size"], 3);
    }
}
