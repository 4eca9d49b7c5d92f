//! `@font-face` CSS generation.
//!
//! A [`FontFaceGenerator`] collects filenames, classifies each one through
//! [`naming`](crate::naming), groups files that share a weight and style, and
//! renders one `@font-face` block per group:
//!
//! ```css
//! @font-face {
//!     font-family: 'Roboto';
//!     font-style: normal;
//!     font-weight: 700;
//!     font-display: swap;
//!     src: url('/fonts/Roboto-Bold.woff2') format('woff2'),url('/fonts/Roboto-Bold.ttf') format('truetype');
//! }
//! ```
//!
//! ## Ordering
//!
//! Output is deterministic for a given input order:
//!
//! - Blocks ascend by numeric weight; at equal weight `normal` precedes `italic`.
//! - Inside a block, sources run woff2, woff, truetype, embedded-opentype.
//! - Ties (same weight string and style, or same format) keep input order.
//!
//! EOT sources carry the `?#iefix` suffix old IE needs to parse the rule.

use crate::naming::{self, FontFormat, FontStyle};
use crate::weights::WeightTable;
use std::cmp::Ordering;
use tracing::debug;

/// One classified font file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    pub filename: String,
    pub format: FontFormat,
    pub weight: String,
    pub style: FontStyle,
    pub url: String,
}

/// Files sharing a weight and style; becomes one `@font-face` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontGroup {
    pub weight: String,
    pub style: FontStyle,
    pub files: Vec<FontFile>,
}

impl FontGroup {
    /// Grouping key in `weight-style` form, e.g. `700-italic`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.weight, self.style)
    }
}

/// Accumulates classified files and renders them as CSS.
#[derive(Debug, Clone)]
pub struct FontFaceGenerator {
    table: WeightTable,
    groups: Vec<FontGroup>,
    skipped: Vec<String>,
}

impl FontFaceGenerator {
    pub fn new(table: WeightTable) -> Self {
        Self {
            table,
            groups: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Classify and group every font file in `filenames`.
    ///
    /// Filenames without a `.ttf`, `.woff`, `.woff2` or `.eot` extension are
    /// not an error; they are recorded in [`skipped`](Self::skipped).
    pub fn process_files<S: AsRef<str>>(&mut self, filenames: &[S], base_url: &str) {
        let base = base_url.trim_end_matches('/');

        for filename in filenames {
            let filename: &str = filename.as_ref();
            let format = match naming::font_format(filename) {
                Some(format) if naming::is_font_file(filename) => format,
                _ => {
                    debug!(filename, "skipping non-font file");
                    self.skipped.push(filename.to_string());
                    continue;
                }
            };

            let (weight, style) = naming::classify_filename(filename, &self.table);
            debug!(filename, %weight, %style, %format, "classified");

            let file = FontFile {
                filename: filename.to_string(),
                format,
                weight,
                style,
                url: join_url(base, filename),
            };
            self.push(file);
        }
    }

    fn push(&mut self, file: FontFile) {
        match self
            .groups
            .iter_mut()
            .find(|g| g.weight == file.weight && g.style == file.style)
        {
            Some(group) => group.files.push(file),
            None => self.groups.push(FontGroup {
                weight: file.weight.clone(),
                style: file.style,
                files: vec![file],
            }),
        }
    }

    /// Filenames dropped by [`process_files`](Self::process_files).
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Number of font files accepted so far.
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(|g| g.files.len()).sum()
    }

    /// Groups in output order, each with its files in `src` order.
    pub fn sorted_groups(&self) -> Vec<FontGroup> {
        let mut groups = self.groups.clone();
        groups.sort_by(|a, b| {
            compare_weights(&a.weight, &b.weight).then_with(|| a.style.cmp(&b.style))
        });
        for group in &mut groups {
            group.files.sort_by_key(|f| f.format.priority());
        }
        groups
    }

    /// Render all groups as `@font-face` blocks separated by newlines.
    ///
    /// Returns an empty string when no font files were processed.
    pub fn generate_css(&self, font_family: &str) -> String {
        self.sorted_groups()
            .iter()
            .map(|group| render_block(group, font_family))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Suggested stylesheet filename: `Open Sans` → `open-sans.css`.
pub fn css_filename(font_family: &str) -> String {
    format!("{}.css", font_family.to_lowercase().replace(' ', "-"))
}

/// Join a base URL (trailing slashes already stripped) and a filename.
///
/// An empty base yields the bare filename, so `""` and `"/"` both produce
/// relative URLs.
fn join_url(base: &str, filename: &str) -> String {
    if base.is_empty() {
        filename.to_string()
    } else {
        format!("{}/{}", base, filename)
    }
}

/// Compare two digit strings by numeric value, independent of length.
fn compare_weights(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn render_source(file: &FontFile) -> String {
    match file.format {
        FontFormat::EmbeddedOpenType => {
            format!("url('{}?#iefix') format('{}')", file.url, file.format)
        }
        _ => format!("url('{}') format('{}')", file.url, file.format),
    }
}

fn render_block(group: &FontGroup, font_family: &str) -> String {
    let sources = group
        .files
        .iter()
        .map(render_source)
        .collect::<Vec<_>>()
        .join(",");

    format!(
        r#"@font-face {{
    font-family: '{family}';
    font-style: {style};
    font-weight: {weight};
    font-display: swap;
    src: {sources};
}}"#,
        family = font_family,
        style = group.style,
        weight = group.weight,
        sources = sources,
    )
}
