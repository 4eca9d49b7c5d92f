//! Generator configuration.
//!
//! Handles loading, merging, and validating `fontface.toml`. The file is
//! optional and lives next to the fonts it describes:
//!
//! ```text
//! fonts/
//! ├── fontface.toml
//! ├── Roboto-Regular.woff2
//! └── Roboto-Bold.woff2
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! font_family = ""                      # Required here or via --family
//! base_url = ""                         # Prefix for every src url
//! use_custom_weights = false            # Merge the custom weights file
//! weights_file = "config/weights.json"  # Custom weights store
//! ```
//!
//! Stock defaults are the base layer, the file is merged on top, and command
//! line flags win over both. Unknown keys are rejected to catch typos early.

use crate::store::DEFAULT_WEIGHTS_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the font directory.
pub const CONFIG_FILENAME: &str = "fontface.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontFaceConfig {
    /// Family name written into every `font-family` declaration.
    pub font_family: String,
    /// URL prefix for font sources. Trailing slashes are ignored.
    pub base_url: String,
    /// Merge custom weights from `weights_file` into the stock table.
    pub use_custom_weights: bool,
    /// Path of the JSON custom weights store.
    pub weights_file: String,
}

impl Default for FontFaceConfig {
    fn default() -> Self {
        Self {
            font_family: String::new(),
            base_url: String::new(),
            use_custom_weights: false,
            weights_file: DEFAULT_WEIGHTS_FILE.to_string(),
        }
    }
}

impl FontFaceConfig {
    /// Validate values that would otherwise produce broken CSS.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_family.trim().is_empty() {
            return Err(ConfigError::Validation(
                "font_family must be set (in fontface.toml or with --family)".into(),
            ));
        }
        if self.font_family.contains('\'') {
            return Err(ConfigError::Validation(
                "font_family must not contain a single quote".into(),
            ));
        }
        if self.weights_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "weights_file must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Apply command line overrides on top of file values.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(family) = &overrides.font_family {
            self.font_family = family.clone();
        }
        if let Some(base_url) = &overrides.base_url {
            self.base_url = base_url.clone();
        }
        if overrides.use_custom_weights {
            self.use_custom_weights = true;
        }
        if let Some(weights_file) = &overrides.weights_file {
            self.weights_file = weights_file.clone();
        }
    }
}

/// Values supplied on the command line. `None`/`false` leaves the file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub font_family: Option<String>,
    pub base_url: Option<String>,
    pub use_custom_weights: bool,
    pub weights_file: Option<String>,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(FontFaceConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `fontface.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no config file.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults and deserialize.
///
/// Does not validate: a file may legitimately leave `font_family` to the
/// command line.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<FontFaceConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: FontFaceConfig = merged.try_into()?;
    Ok(config)
}

/// Load the config for a font directory, apply overrides, and validate.
pub fn load_config(dir: &Path, overrides: &Overrides) -> Result<FontFaceConfig, ConfigError> {
    let mut config = resolve_config(load_raw_config(dir)?)?;
    config.apply(overrides);
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `fontface.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# fontface-gen configuration
# ==========================
# Place this file next to your font files as fontface.toml.
# All settings are optional; command line flags override them.
# Unknown keys will cause an error.

# Family name used in every @font-face block. Required here or via --family.
font_family = ""

# URL prefix for font sources, e.g. "/fonts" or "https://cdn.example.com/fonts".
# Trailing slashes are ignored. Empty means bare filenames (relative URLs).
base_url = ""

# Merge custom weight names (e.g. Book = 350) from weights_file into the
# stock table (Thin = 100 ... Black = 900).
use_custom_weights = false

# JSON file holding custom weights. Created with Book, Heavy and ExtraBlack
# the first time custom weights are used.
weights_file = "config/weights.json"
"##
}
