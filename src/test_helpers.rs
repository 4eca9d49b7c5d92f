//! Shared test utilities for the fontface-gen test suite.
//!
//! Provides an in-memory weight store, fixture file creation, and small
//! extractors that read the structure back out of generated CSS.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let css = generator.generate_css("Roboto");
//! assert_eq!(block_heads(&css)[0], ("400".into(), "normal".into()));
//! assert_eq!(src_formats(&css)[0], vec!["woff2", "truetype"]);
//! ```

use std::path::Path;

use crate::store::{StoreError, WeightStore};
use crate::weights::CustomWeights;

// =========================================================================
// Weight store
// =========================================================================

/// `WeightStore` backed by a field, counting writes.
#[derive(Debug, Default)]
pub struct MemoryWeightStore {
    pub weights: Option<CustomWeights>,
    pub writes: usize,
}

impl MemoryWeightStore {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            weights: Some(
                pairs
                    .iter()
                    .map(|&(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            writes: 0,
        }
    }
}

impl WeightStore for MemoryWeightStore {
    fn read(&self) -> Result<Option<CustomWeights>, StoreError> {
        Ok(self.weights.clone())
    }

    fn write(&mut self, weights: &CustomWeights) -> Result<(), StoreError> {
        self.weights = Some(weights.clone());
        self.writes += 1;
        Ok(())
    }
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Create empty files with the given names inside `dir`.
///
/// Contents are irrelevant: only extensions are ever inspected.
pub fn write_files(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), b"").unwrap();
    }
}

// =========================================================================
// CSS extractors
// =========================================================================

fn declaration_values<'a>(css: &'a str, property: &str) -> Vec<&'a str> {
    let prefix = format!("{}: ", property);
    css.lines()
        .filter_map(|line| line.trim().strip_prefix(prefix.as_str()))
        .map(|value| value.trim_end_matches(';'))
        .collect()
}

/// `(font-weight, font-style)` of every block, in output order.
pub fn block_heads(css: &str) -> Vec<(String, String)> {
    let weights = declaration_values(css, "font-weight");
    let styles = declaration_values(css, "font-style");
    assert_eq!(weights.len(), styles.len(), "malformed block in:\n{css}");
    weights
        .into_iter()
        .zip(styles)
        .map(|(w, s)| (w.to_string(), s.to_string()))
        .collect()
}

/// The `format(...)` tokens of every block's `src`, in output order.
pub fn src_formats(css: &str) -> Vec<Vec<String>> {
    declaration_values(css, "src")
        .into_iter()
        .map(|src| {
            src.split("format('")
                .skip(1)
                .filter_map(|rest| rest.split('\'').next())
                .map(str::to_string)
                .collect()
        })
        .collect()
}
