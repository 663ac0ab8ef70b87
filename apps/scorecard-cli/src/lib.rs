//! # scorecard-cli
//!
//! File-based front end for `scorecard-core`: loads a dataset, wires the
//! configured policies into the pipeline and renders the reports.
//!
//! ## Run Flow
//! ```text
//! ScorecardConfig ──► load_dataset ──► run_analysis ──► render ──► writer
//!      │                                   ▲
//!      └── bonus tiers ──► ProfitRankBonus ┘
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod output;

use std::io::Write;

use chrono::Utc;
use scorecard_core::{run_analysis, AnalysisOptions, ProfitRankBonus, SalesDataset, SimpleRevenue};
use tracing::{info, instrument};

pub use config::{OutputFormat, ScorecardConfig};
pub use error::{CliError, CliResult};

/// Runs the analysis over an in-memory dataset and renders the result.
pub fn analyze(dataset: &SalesDataset, config: &ScorecardConfig) -> CliResult<String> {
    let options = AnalysisOptions::new()
        .with_revenue(SimpleRevenue)
        .with_bonus(ProfitRankBonus::new(config.bonus));

    let analysis = run_analysis(Some(dataset), Some(&options))?;
    if analysis.summary.skipped_records > 0 {
        info!(
            skipped = analysis.summary.skipped_records,
            "Some receipts named sellers outside the dataset"
        );
    }

    output::render(
        &analysis.reports,
        config.output.format,
        config.output.pretty,
        Utc::now(),
    )
}

/// Loads the configured dataset, analyzes it, and writes the rendered
/// report to `writer`.
#[instrument(skip_all, fields(format = %config.output.format))]
pub fn run(config: &ScorecardConfig, writer: &mut impl Write) -> CliResult<()> {
    let data_path = config
        .input
        .data_path
        .as_deref()
        .ok_or(CliError::MissingDataPath)?;

    let dataset = loader::load_dataset(data_path)?;
    let rendered = analyze(&dataset, config)?;

    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;

    info!(bytes = rendered.len(), "Report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_core::{CoreError, SellerReport};

    const SAMPLE: &str = include_str!("../../../demos/sample_data.json");

    fn sample() -> SalesDataset {
        SalesDataset::from_json_str(SAMPLE).unwrap()
    }

    fn json_reports(rendered: &str) -> Vec<SellerReport> {
        let value: serde_json::Value = serde_json::from_str(rendered).unwrap();
        serde_json::from_value(value["sellers"].clone()).unwrap()
    }

    #[test]
    fn test_sample_dataset_ranking() {
        let mut config = ScorecardConfig::default();
        config.output.pretty = false;

        let reports = json_reports(&analyze(&sample(), &config).unwrap());
        let ids: Vec<&str> = reports.iter().map(|r| r.seller_id.as_str()).collect();
        assert_eq!(ids, ["seller_1", "seller_3", "seller_5", "seller_2", "seller_4"]);

        let leader = &reports[0];
        assert_eq!(leader.name, "Alexey Petrov");
        assert_eq!(leader.revenue, 231.93);
        assert_eq!(leader.profit, 110.73);
        assert_eq!(leader.sales_count, 3);
        assert_eq!(leader.bonus, 16.61);
        assert_eq!(leader.top_products[0].sku, "SKU_008");
        assert_eq!(leader.top_products[0].quantity, 10);

        let bonuses: Vec<f64> = reports.iter().map(|r| r.bonus).collect();
        assert_eq!(bonuses, [16.61, 10.43, 4.46, 2.2, 0.0]);
    }

    #[test]
    fn test_sample_dataset_tied_quantities_keep_first_seen_order() {
        let reports = json_reports(&analyze(&sample(), &ScorecardConfig::default()).unwrap());
        let maria = reports.iter().find(|r| r.seller_id == "seller_3").unwrap();
        let skus: Vec<&str> = maria.top_products.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, ["SKU_004", "SKU_001", "SKU_003", "SKU_006"]);
        assert_eq!(maria.revenue, 231.53);
    }

    #[test]
    fn test_custom_bonus_tiers_are_applied() {
        let mut config = ScorecardConfig::default();
        config.bonus.last = 10.0;

        let reports = json_reports(&analyze(&sample(), &config).unwrap());
        assert_eq!(reports[4].seller_id, "seller_4");
        assert_eq!(reports[4].bonus, 1.38);
    }

    #[test]
    fn test_table_format() {
        let mut config = ScorecardConfig::default();
        config.output.format = OutputFormat::Table;

        let rendered = analyze(&sample(), &config).unwrap();
        assert_eq!(rendered.lines().count(), 6);
        assert!(rendered.lines().nth(1).unwrap().contains("Alexey Petrov"));
    }

    #[test]
    fn test_run_without_data_path() {
        let mut sink = Vec::new();
        let err = run(&ScorecardConfig::default(), &mut sink).unwrap_err();
        assert!(matches!(err, CliError::MissingDataPath));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_run_writes_report() {
        let path = std::env::temp_dir().join(format!("scorecard-run-{}.json", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();

        let mut config = ScorecardConfig::default();
        config.input.data_path = Some(path.clone());

        let mut sink = Vec::new();
        let result = run(&config, &mut sink);
        std::fs::remove_file(&path).ok();
        result.unwrap();

        let rendered = String::from_utf8(sink).unwrap();
        assert_eq!(json_reports(&rendered).len(), 5);
    }

    #[test]
    fn test_unknown_sku_aborts() {
        let mut dataset = sample();
        dataset.purchase_records[0].items[0].sku = "SKU_404".to_string();

        let err = analyze(&dataset, &ScorecardConfig::default()).unwrap_err();
        match err {
            CliError::Analysis(CoreError::ProductNotFound { sku, .. }) => assert_eq!(sku, "SKU_404"),
            other => panic!("Expected ProductNotFound, got {:?}", other),
        }
    }
}
