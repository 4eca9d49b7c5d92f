//! Named weight → numeric CSS weight mapping.
//!
//! A [`WeightTable`] starts from nine stock entries (`Thin` = 100 through
//! `Black` = 900) and optionally layers user overrides on top:
//!
//! ```text
//! stock defaults          Thin=100 … Bold=700 … Black=900
//! + overrides             Bold=701, Book=350
//! = table                 Thin=100 … Bold=701 … Black=900, Book=350
//! ```
//!
//! An override whose name matches a stock name **exactly** replaces the value
//! in place, keeping the stock position. Any other override is appended.
//! Lookups, on the other hand, ignore case. So `bold=650` as an override adds
//! a second entry rather than replacing `Bold`, and a lookup for `"BOLD"`
//! still finds `Bold` first.
//!
//! Tables are immutable once built; each generation run builds its own.

use indexmap::IndexMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WeightError {
    #[error("Invalid weight value: {0:?} (expected decimal digits)")]
    InvalidWeightValue(String),
}

/// Override mapping as persisted by a weight store: name → digit string.
///
/// Keeps insertion order, which is the order of the stored file. Appended
/// table entries and listing rows follow it.
pub type CustomWeights = IndexMap<String, String>;

/// Stock weight names in their canonical order.
pub const DEFAULT_WEIGHTS: [(&str, &str); 9] = [
    ("Thin", "100"),
    ("ExtraLight", "200"),
    ("Light", "300"),
    ("Regular", "400"),
    ("Medium", "500"),
    ("SemiBold", "600"),
    ("Bold", "700"),
    ("ExtraBold", "800"),
    ("Black", "900"),
];

/// Custom weights written to a store the first time custom weights are
/// requested and nothing has been saved yet.
pub const DEFAULT_CUSTOM_WEIGHTS: [(&str, &str); 3] =
    [("Book", "350"), ("Heavy", "850"), ("ExtraBlack", "950")];

/// Weight used when no filename token matches a table entry.
pub const FALLBACK_WEIGHT: &str = "400";

/// A single named weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightEntry {
    pub name: String,
    /// Always non-empty ASCII digits.
    pub weight: String,
}

/// Ordered, immutable weight table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    entries: Vec<WeightEntry>,
}

impl WeightTable {
    /// The nine stock weights, nothing else.
    pub fn defaults() -> Self {
        Self {
            entries: DEFAULT_WEIGHTS
                .iter()
                .map(|&(name, weight)| WeightEntry {
                    name: name.to_string(),
                    weight: weight.to_string(),
                })
                .collect(),
        }
    }

    /// Stock weights with `overrides` merged on top.
    ///
    /// Every override value is validated before anything is merged, so a
    /// failed build never yields a partially merged table.
    pub fn build(overrides: &CustomWeights) -> Result<Self, WeightError> {
        if let Some(bad) = overrides.values().find(|v| !is_weight_value(v)) {
            return Err(WeightError::InvalidWeightValue(bad.clone()));
        }

        let mut table = Self::defaults();
        for (name, weight) in overrides {
            match table.entries.iter_mut().find(|e| e.name == *name) {
                Some(entry) => entry.weight = weight.clone(),
                None => table.entries.push(WeightEntry {
                    name: name.clone(),
                    weight: weight.clone(),
                }),
            }
        }
        Ok(table)
    }

    /// Case-insensitive exact match on entry names; first entry wins.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let wanted = name.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.name.to_lowercase() == wanted)
            .map(|e| e.weight.as_str())
    }

    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::defaults()
    }
}

/// True when `value` is a non-empty run of ASCII digits.
pub fn is_weight_value(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// The documented default custom set as an owned mapping.
pub fn default_custom_weights() -> CustomWeights {
    DEFAULT_CUSTOM_WEIGHTS
        .iter()
        .map(|&(name, weight)| (name.to_string(), weight.to_string()))
        .collect()
}

/// One row of a human-facing weight listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightRow {
    pub name: String,
    pub weight: String,
    pub custom: bool,
}

/// Stock weights in canonical order (with any same-named custom value
/// applied), followed by the remaining custom names.
///
/// Unlike [`WeightTable::build`] this does not validate: it shows what is
/// stored, including values that would make a build fall back to defaults.
pub fn weight_listing(custom: &CustomWeights) -> Vec<WeightRow> {
    let mut rows: Vec<WeightRow> = DEFAULT_WEIGHTS
        .iter()
        .map(|&(name, weight)| match custom.get(name) {
            Some(value) => WeightRow {
                name: name.to_string(),
                weight: value.clone(),
                custom: true,
            },
            None => WeightRow {
                name: name.to_string(),
                weight: weight.to_string(),
                custom: false,
            },
        })
        .collect();

    rows.extend(
        custom
            .iter()
            .filter(|(name, _)| !DEFAULT_WEIGHTS.iter().any(|(d, _)| d == name))
            .map(|(name, weight)| WeightRow {
                name: name.clone(),
                weight: weight.clone(),
                custom: true,
            }),
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(pairs: &[(&str, &str)]) -> CustomWeights {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // =========================================================================
    // Defaults
    // =========================================================================

    #[test]
    fn defaults_have_nine_entries_in_order() {
        let table = WeightTable::defaults();
        let names: Vec<&str> = table.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Thin",
                "ExtraLight",
                "Light",
                "Regular",
                "Medium",
                "SemiBold",
                "Bold",
                "ExtraBold",
                "Black"
            ]
        );
        assert_eq!(table.lookup("Thin"), Some("100"));
        assert_eq!(table.lookup("Black"), Some("900"));
    }

    #[test]
    fn default_trait_matches_defaults() {
        assert_eq!(WeightTable::default(), WeightTable::defaults());
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    #[test]
    fn lookup_ignores_case() {
        let table = WeightTable::defaults();
        assert_eq!(table.lookup("bold"), Some("700"));
        assert_eq!(table.lookup("SEMIBOLD"), Some("600"));
        assert_eq!(table.lookup("extralight"), Some("200"));
    }

    #[test]
    fn lookup_is_exact_not_substring() {
        let table = WeightTable::defaults();
        assert_eq!(table.lookup("Bol"), None);
        assert_eq!(table.lookup("Bolder"), None);
        assert_eq!(table.lookup(""), None);
    }

    // =========================================================================
    // Build / merge
    // =========================================================================

    #[test]
    fn build_with_no_overrides_is_defaults() {
        let table = WeightTable::build(&CustomWeights::new()).unwrap();
        assert_eq!(table, WeightTable::defaults());
    }

    #[test]
    fn override_replaces_in_place() {
        let table = WeightTable::build(&overrides(&[("Bold", "701")])).unwrap();
        assert_eq!(table.len(), 9);
        assert_eq!(table.entries()[6].name, "Bold");
        assert_eq!(table.lookup("bold"), Some("701"));
    }

    #[test]
    fn new_names_are_appended() {
        let table = WeightTable::build(&default_custom_weights()).unwrap();
        assert_eq!(table.len(), 12);
        assert_eq!(table.lookup("Book"), Some("350"));
        assert_eq!(table.lookup("heavy"), Some("850"));
        assert_eq!(table.lookup("ExtraBlack"), Some("950"));
        assert_eq!(table.entries()[9].name, "Book");
    }

    #[test]
    fn merge_key_is_case_sensitive() {
        let table = WeightTable::build(&overrides(&[("bold", "650")])).unwrap();
        // Stock "Bold" untouched, lower-case override appended after it
        assert_eq!(table.len(), 10);
        assert_eq!(table.entries()[6].weight, "700");
        assert_eq!(table.lookup("BOLD"), Some("700"));
    }

    #[test]
    fn appended_names_keep_mapping_order() {
        let table =
            WeightTable::build(&overrides(&[("Zeta", "10"), ("Alpha", "20"), ("Mid", "30")]))
                .unwrap();
        let names: Vec<&str> = table.entries()[9..].iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn case_variant_overrides_resolve_to_first_in_mapping() {
        let table = WeightTable::build(&overrides(&[("book", "350"), ("BOOK", "360")])).unwrap();
        assert_eq!(table.lookup("Book"), Some("350"));

        let table = WeightTable::build(&overrides(&[("BOOK", "360"), ("book", "350")])).unwrap();
        assert_eq!(table.lookup("Book"), Some("360"));
    }

    #[test]
    fn non_digit_value_is_rejected() {
        let err = WeightTable::build(&overrides(&[("X", "abc")])).unwrap_err();
        assert_eq!(err, WeightError::InvalidWeightValue("abc".into()));
    }

    #[test]
    fn empty_and_signed_values_are_rejected() {
        assert!(WeightTable::build(&overrides(&[("X", "")])).is_err());
        assert!(WeightTable::build(&overrides(&[("X", "-100")])).is_err());
        assert!(WeightTable::build(&overrides(&[("X", "4.5")])).is_err());
        assert!(WeightTable::build(&overrides(&[("X", " 400")])).is_err());
    }

    #[test]
    fn one_bad_value_rejects_the_whole_build() {
        let result = WeightTable::build(&overrides(&[("Book", "350"), ("Wide", "wide")]));
        assert!(matches!(result, Err(WeightError::InvalidWeightValue(v)) if v == "wide"));
    }

    #[test]
    fn is_weight_value_accepts_digits_only() {
        assert!(is_weight_value("0"));
        assert!(is_weight_value("950"));
        assert!(is_weight_value("0100"));
        assert!(!is_weight_value("９００"));
        assert!(!is_weight_value("700a"));
    }

    // =========================================================================
    // Listing
    // =========================================================================

    #[test]
    fn listing_without_custom_is_stock() {
        let rows = weight_listing(&CustomWeights::new());
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|r| !r.custom));
        assert_eq!(rows[0].name, "Thin");
    }

    #[test]
    fn listing_applies_overrides_and_appends_extras() {
        let rows = weight_listing(&overrides(&[("Bold", "701"), ("Book", "350")]));
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[6].weight, "701");
        assert!(rows[6].custom);
        assert_eq!(rows[9].name, "Book");
        assert!(rows[9].custom);
    }

    #[test]
    fn listing_extras_follow_mapping_order() {
        let rows = weight_listing(&overrides(&[("Zeta", "10"), ("Bold", "701"), ("Alpha", "20")]));
        let extras: Vec<&str> = rows[9..].iter().map(|r| r.name.as_str()).collect();
        assert_eq!(extras, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn listing_shows_invalid_values_verbatim() {
        let rows = weight_listing(&overrides(&[("Odd", "abc")]));
        assert_eq!(rows.last().unwrap().weight, "abc");
    }
}
