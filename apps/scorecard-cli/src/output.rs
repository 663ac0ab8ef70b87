//! Report rendering.
//!
//! ## JSON Envelope
//! ```json
//! {
//!   "generated_at": "2024-07-05T12:00:00Z",
//!   "seller_count": 5,
//!   "sellers": [ { "seller_id": "seller_1", "revenue": 231.93, ... } ]
//! }
//! ```

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use scorecard_core::SellerReport;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::CliResult;

/// Column widths for the text table.
const NAME_WIDTH: usize = 24;
const MONEY_WIDTH: usize = 12;

/// Serialized wrapper around the ranked reports.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope<'a> {
    pub generated_at: DateTime<Utc>,
    pub seller_count: usize,
    pub sellers: &'a [SellerReport],
}

impl<'a> ReportEnvelope<'a> {
    pub fn new(sellers: &'a [SellerReport], generated_at: DateTime<Utc>) -> Self {
        ReportEnvelope {
            generated_at,
            seller_count: sellers.len(),
            sellers,
        }
    }
}

/// Renders reports in the requested format.
pub fn render(
    reports: &[SellerReport],
    format: OutputFormat,
    pretty: bool,
    generated_at: DateTime<Utc>,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => render_json(reports, pretty, generated_at),
        OutputFormat::Table => Ok(render_table(reports)),
    }
}

/// Renders the JSON envelope.
pub fn render_json(
    reports: &[SellerReport],
    pretty: bool,
    generated_at: DateTime<Utc>,
) -> CliResult<String> {
    let envelope = ReportEnvelope::new(reports, generated_at);
    let mut json = if pretty {
        serde_json::to_string_pretty(&envelope)?
    } else {
        serde_json::to_string(&envelope)?
    };
    json.push('\n');
    Ok(json)
}

/// Renders a fixed-width table, one row per seller, in report order.
///
/// ```text
///  #  Seller                        Revenue       Profit  Sales        Bonus  Top product
///  1  Alexey Petrov                  231.93       110.73      3        16.61  SKU_008 x10
/// ```
pub fn render_table(reports: &[SellerReport]) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "{:>3}  {:<name$}  {:>money$}  {:>money$}  {:>5}  {:>money$}  {}",
        "#",
        "Seller",
        "Revenue",
        "Profit",
        "Sales",
        "Bonus",
        "Top product",
        name = NAME_WIDTH,
        money = MONEY_WIDTH,
    );

    for (rank, report) in reports.iter().enumerate() {
        let top = report
            .top_products
            .first()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .unwrap_or_else(|| "-".to_string());

        let _ = writeln!(
            out,
            "{:>3}  {:<name$}  {:>money$.2}  {:>money$.2}  {:>5}  {:>money$.2}  {}",
            rank + 1,
            truncate(&report.name, NAME_WIDTH),
            report.revenue,
            report.profit,
            report.sales_count,
            report.bonus,
            top,
            name = NAME_WIDTH,
            money = MONEY_WIDTH,
        );
    }

    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}
