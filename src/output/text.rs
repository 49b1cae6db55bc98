//! Human-readable text output

use crate::sim::DistributionReport;

/// Width of the bar chart at 100%
const BAR_WIDTH: usize = 40;

/// Print a simulation report to the console
///
/// Displays the run parameters, a per-vendor expected-vs-actual table, and
/// a paired bar chart so distribution drift is visible at a glance.
pub fn print_report(report: &DistributionReport) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                 DISTRIBUTION REPORT");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    println!("Position:     {}", report.position);
    println!("Trials:       {}", format_number(report.trials));
    println!("Pool size:    {}", report.pool_size);
    println!("Total weight: {}", report.total_weight);
    println!();

    if report.vendors.is_empty() {
        println!("Pool is empty - nothing to display.");
        println!("═══════════════════════════════════════════════════════════");
        return;
    }

    // Table
    println!(
        "{:<20} {:>6} {:>10} {:>10} {:>9} {:>8}",
        "Vendor", "Weight", "Expected%", "Hits", "Actual%", "Diff"
    );
    println!("{}", "-".repeat(68));
    for vendor in &report.vendors {
        println!(
            "{:<20} {:>6} {:>9.2}% {:>10} {:>8.2}% {:>+7.2}",
            vendor.vendor_slug,
            vendor.weight,
            vendor.expected_pct,
            format_number(vendor.hits),
            vendor.actual_pct,
            vendor.diff_pct
        );
    }
    println!();

    // Bar chart: expected and actual side by side per vendor
    for vendor in &report.vendors {
        println!("{} (weight {})", vendor.vendor_slug, vendor.weight);
        println!("  expected │{}│ {:.2}%", bar(vendor.expected_pct), vendor.expected_pct);
        println!("  actual   │{}│ {:.2}%", bar(vendor.actual_pct), vendor.actual_pct);
        println!();
    }

    println!("═══════════════════════════════════════════════════════════");
}

/// Render a percentage as a fixed-width bar
fn bar(pct: f64) -> String {
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;

    for c in s.chars().rev() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}
