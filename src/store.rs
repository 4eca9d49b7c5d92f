//! Persisted custom weights.
//!
//! Custom weights live behind the [`WeightStore`] trait so generation never
//! touches ambient global state: callers hand a store to
//! [`load_weight_table`] and get back an immutable [`WeightTable`].
//!
//! # Storage
//!
//! [`JsonWeightStore`] keeps the mapping as a flat JSON object, by default at
//! `config/weights.json`:
//!
//! ```json
//! {
//!   "Book": "350",
//!   "Heavy": "850",
//!   "ExtraBlack": "950"
//! }
//! ```
//!
//! Key order is kept on read and on write. Values may also be written as bare
//! integers (`"Book": 350`); they are read back as strings. Writes go to a sibling temp file that is then renamed
//! over the target, so a reader never observes a half-written file.
//!
//! # Fallback
//!
//! A broken store must never break CSS generation. [`load_weight_table`]
//! turns every load failure (unreadable file, bad JSON, non-numeric value)
//! into a warning and the stock table.

use crate::weights::{self, CustomWeights, WeightError, WeightTable};
use serde_json::{Map, Value};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Default location of the custom weights file, relative to the working directory.
pub const DEFAULT_WEIGHTS_FILE: &str = "config/weights.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Weight(#[from] WeightError),
    #[error("Weight name must not be empty")]
    InvalidName,
}

/// Read/write access to the custom weight mapping.
pub trait WeightStore {
    /// The stored mapping, or `None` if nothing has been stored yet.
    fn read(&self) -> Result<Option<CustomWeights>, StoreError>;

    /// Replace the stored mapping.
    fn write(&mut self, weights: &CustomWeights) -> Result<(), StoreError>;
}

/// Custom weights persisted as a JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonWeightStore {
    path: PathBuf,
}

impl JsonWeightStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for JsonWeightStore {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHTS_FILE)
    }
}

/// A stored value as text: strings as-is, anything else as its JSON form.
///
/// Integers keep every digit (`350`, or one wider than `u64`); floats,
/// negatives and non-numbers come back in a form weight validation rejects.
fn stored_weight(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl WeightStore for JsonWeightStore {
    fn read(&self) -> Result<Option<CustomWeights>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let raw: Map<String, Value> = serde_json::from_str(&content)?;
        Ok(Some(
            raw.into_iter()
                .map(|(name, value)| (name, stored_weight(value)))
                .collect(),
        ))
    }

    fn write(&mut self, weights: &CustomWeights) -> Result<(), StoreError> {
        validate_values(weights)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(weights)?;
        let tmp = self.temp_path();
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn validate_values(weights: &CustomWeights) -> Result<(), WeightError> {
    match weights.values().find(|v| !weights::is_weight_value(v)) {
        Some(bad) => Err(WeightError::InvalidWeightValue(bad.clone())),
        None => Ok(()),
    }
}

// =============================================================================
// Table loading
// =============================================================================

/// Build the weight table for one generation run.
///
/// With `use_custom` unset this is simply the stock table and the store is
/// not touched. Otherwise the stored overrides are merged in; if that fails
/// for any reason the failure is logged and the stock table is returned.
pub fn load_weight_table(store: &mut dyn WeightStore, use_custom: bool) -> WeightTable {
    if !use_custom {
        return WeightTable::defaults();
    }
    match load_custom_table(store) {
        Ok(table) => table,
        Err(e) => {
            warn!("Error loading custom weights: {e}. Using default weights.");
            WeightTable::defaults()
        }
    }
}

/// Stock table merged with the stored overrides, seeding the store with the
/// default custom set when it is empty.
pub fn load_custom_table(store: &mut dyn WeightStore) -> Result<WeightTable, StoreError> {
    let custom = match store.read()? {
        Some(custom) => custom,
        None => {
            let seeded = weights::default_custom_weights();
            store.write(&seeded)?;
            info!("Created default custom weights configuration");
            seeded
        }
    };
    Ok(WeightTable::build(&custom)?)
}

// =============================================================================
// Editing
// =============================================================================

/// Stored custom weights, or an empty mapping if nothing is stored.
pub fn custom_weights(store: &dyn WeightStore) -> Result<CustomWeights, StoreError> {
    Ok(store.read()?.unwrap_or_default())
}

/// Add or replace one custom weight.
pub fn set_custom_weight(
    store: &mut dyn WeightStore,
    name: &str,
    weight: &str,
) -> Result<(), StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::InvalidName);
    }
    let weight = weight.trim();
    if !weights::is_weight_value(weight) {
        return Err(WeightError::InvalidWeightValue(weight.to_string()).into());
    }
    let mut custom = custom_weights(store)?;
    custom.insert(name.to_string(), weight.to_string());
    store.write(&custom)
}

/// Remove one custom weight. Returns whether it was present.
pub fn remove_custom_weight(store: &mut dyn WeightStore, name: &str) -> Result<bool, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::InvalidName);
    }
    let mut custom = custom_weights(store)?;
    if custom.shift_remove(name).is_none() {
        return Ok(false);
    }
    store.write(&custom)?;
    Ok(true)
}

/// Replace the stored mapping with the default custom set.
pub fn reset_custom_weights(store: &mut dyn WeightStore) -> Result<CustomWeights, StoreError> {
    let seeded = weights::default_custom_weights();
    store.write(&seeded)?;
    Ok(seeded)
}
