//! Dataset loading from disk.

use std::path::Path;

use scorecard_core::SalesDataset;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Reads a JSON dataset file and parses it into a [`SalesDataset`].
///
/// Shape problems surface as [`CliError::Analysis`] carrying the
/// offending field; a missing or unreadable file as [`CliError::Io`].
pub fn load_dataset(path: &Path) -> CliResult<SalesDataset> {
    debug!(?path, "Reading sales dataset");
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = SalesDataset::from_json_str(&contents)?;
    info!(
        sellers = dataset.sellers.len(),
        products = dataset.products.len(),
        records = dataset.purchase_records.len(),
        items = dataset.item_count(),
        "Loaded sales dataset"
    );
    Ok(dataset)
}
