//! # fontface-gen
//!
//! Generates `@font-face` CSS for a directory of web fonts. Weight and style
//! come from the filenames alone, so a folder like
//!
//! ```text
//! fonts/
//! ├── Roboto-Regular.woff2
//! ├── Roboto-Regular.ttf
//! ├── Roboto-Bold.woff2
//! └── Roboto-BoldItalic.woff2
//! ```
//!
//! becomes three `@font-face` blocks (400 normal, 700 normal, 700 italic),
//! each listing its sources in browser preference order.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      fonts/           →  filenames        (scan)
//! 2. Weights   store + flag     →  WeightTable      (store, weights)
//! 3. Classify  filenames        →  grouped files    (naming, generate)
//! 4. Render    groups + family  →  CSS text         (generate)
//! ```
//!
//! Steps 3 and 4 are pure: given the same filenames, base URL, family and
//! table they always produce byte-identical CSS.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`weights`] | Stock weight names, override merging, case-insensitive lookup |
//! | [`naming`] | Filename tokenization, weight/style inference, extension → format |
//! | [`generate`] | Grouping, ordering and `@font-face` rendering |
//! | [`store`] | `WeightStore` trait, JSON store, resilient table loading, custom weight editing |
//! | [`scan`] | Flat listing of a font directory |
//! | [`config`] | `fontface.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Library Use
//!
//! ```
//! use fontface_gen::generate::FontFaceGenerator;
//! use fontface_gen::weights::WeightTable;
//!
//! let mut generator = FontFaceGenerator::new(WeightTable::defaults());
//! generator.process_files(&["Roboto-Regular.ttf", "Roboto-Bold.woff2"], "/fonts");
//! let css = generator.generate_css("Roboto");
//! assert!(css.starts_with("@font-face {"));
//! assert!(css.contains("font-weight: 700;"));
//! ```

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;
pub mod store;
pub mod weights;

#[cfg(test)]
pub(crate) mod test_helpers;
