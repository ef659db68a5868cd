//! JSON files backing the order and pack-size stores.
//!
//! Both files hold a pretty-printed JSON array. A missing or blank file reads as "nothing
//! stored yet"; anything else that fails to parse is a [`PlannerError::Json`].

use crate::catalog::PackSizeRecord;
use crate::error::Result;
use crate::orders::Order;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Reads the order ledger at `path`; a missing file is an empty ledger.
pub fn load_orders(path: &Path) -> Result<Vec<Order>> {
    Ok(read_array(path)?.unwrap_or_default())
}

pub fn save_orders(path: &Path, orders: &[Order]) -> Result<()> {
    write_array(path, orders)?;
    info!(?path, orders = orders.len(), "ledger written");
    Ok(())
}

/// Reads stored pack sizes. `Ok(None)` when the file does not exist yet, so callers can
/// seed it from configuration.
pub fn load_pack_sizes(path: &Path) -> Result<Option<Vec<PackSizeRecord>>> {
    read_array(path)
}

pub fn save_pack_sizes(path: &Path, records: &[PackSizeRecord]) -> Result<()> {
    write_array(path, records)?;
    info!(?path, sizes = records.len(), "pack sizes written");
    Ok(())
}

fn read_array<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>> {
    if !path.exists() {
        debug!(?path, "file missing, nothing stored yet");
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Ok(Some(Vec::new()));
    }
    Ok(Some(serde_json::from_str(&text)?))
}

fn write_array<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(items)?)?;
    Ok(())
}
