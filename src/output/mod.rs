//! Report output formatting
//!
//! Renders a [`crate::sim::DistributionReport`] as a human-readable table
//! with a bar chart (text), a JSON document, or CSV rows.

pub mod csv;
pub mod json;
pub mod text;
