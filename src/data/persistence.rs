use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::Result;
use crate::models::CalculationResult;
use crate::scoring::StandardsTable;

/// Load a standards table from a JSON file.
///
/// The table is validated before it is returned.
pub fn load_standards<P: AsRef<Path>>(path: P) -> Result<StandardsTable> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let table: StandardsTable = serde_json::from_str(&content)?;
    table.validate()?;

    info!("Loaded standards table from {}", path.display());
    Ok(table)
}

/// Save a standards table to a JSON file.
pub fn save_standards<P: AsRef<Path>>(path: P, table: &StandardsTable) -> Result<()> {
    let json = serde_json::to_string_pretty(table)?;
    fs::write(path.as_ref(), json)?;
    debug!("Wrote standards table to {}", path.as_ref().display());
    Ok(())
}

/// Save a single result as pretty JSON.
pub fn save_result_json<P: AsRef<Path>>(path: P, result: &CalculationResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path.as_ref(), json)?;
    debug!("Wrote result to {}", path.as_ref().display());
    Ok(())
}
