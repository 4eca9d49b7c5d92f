//! Filename conventions for font files.
//!
//! Weight and style are read from the filename alone; file contents are never
//! opened. The base name (extension stripped) is split on `-` and `_`:
//!
//! - `Roboto-Bold.woff2` → tokens `Roboto`, `Bold` → weight 700, normal
//! - `Roboto_BoldItalic.ttf` → tokens `Roboto`, `BoldItalic` → weight 700, italic
//! - `Roboto.ttf` → token `Roboto` → weight 400, normal
//!
//! ## Style
//!
//! A file is italic when any token contains `italic`, ignoring case.
//!
//! ## Weight
//!
//! Each token, lower-cased and with every `italic` removed, is looked up in
//! the [`WeightTable`]. Tokens are scanned left to right and every match
//! overwrites the previous one, so the **last** matching token wins:
//! `Bold-Thin.ttf` is 100, not 700.
//!
//! TODO: decide whether the first match should win instead. Changing it
//! alters the CSS generated for existing font sets, so it needs a release
//! note rather than a silent fix.

use crate::weights::{FALLBACK_WEIGHT, WeightTable};
use std::fmt;

/// Extensions accepted for processing, lower-case, with the leading dot.
pub const FONT_EXTENSIONS: &[&str] = &[".ttf", ".woff", ".woff2", ".eot"];

/// Web font container formats, in `src` preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFormat {
    Woff2,
    Woff,
    TrueType,
    EmbeddedOpenType,
}

impl FontFormat {
    /// Map a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "ttf" => Some(FontFormat::TrueType),
            "woff" => Some(FontFormat::Woff),
            "woff2" => Some(FontFormat::Woff2),
            "eot" => Some(FontFormat::EmbeddedOpenType),
            _ => None,
        }
    }

    /// Token used inside CSS `format(...)`.
    pub fn css_name(self) -> &'static str {
        match self {
            FontFormat::TrueType => "truetype",
            FontFormat::Woff => "woff",
            FontFormat::Woff2 => "woff2",
            FontFormat::EmbeddedOpenType => "embedded-opentype",
        }
    }

    /// Position within a `src` list; lower loads first.
    pub fn priority(self) -> u8 {
        match self {
            FontFormat::Woff2 => 0,
            FontFormat::Woff => 1,
            FontFormat::TrueType => 2,
            FontFormat::EmbeddedOpenType => 3,
        }
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontStyle {
    Normal,
    Italic,
}

impl FontStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filename with its extension removed.
///
/// Only the last extension is stripped. A name whose only dots are leading
/// (`.ttf`, `..woff`) is treated as having no extension.
pub fn base_name(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) if filename[..pos].chars().any(|c| c != '.') => &filename[..pos],
        _ => filename,
    }
}

/// Format implied by the text after the last `.`, if recognized.
pub fn font_format(filename: &str) -> Option<FontFormat> {
    let ext = filename.rsplit('.').next().unwrap_or(filename);
    FontFormat::from_extension(ext)
}

/// True when the filename ends with a recognized font extension.
pub fn is_font_file(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    FONT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Split a base name on `-` and `_`. Empty tokens are kept.
pub fn split_tokens(base: &str) -> Vec<&str> {
    base.split(['-', '_']).collect()
}

/// Infer `(weight, style)` from a filename.
pub fn classify_filename(filename: &str, table: &WeightTable) -> (String, FontStyle) {
    let tokens = split_tokens(base_name(filename));

    let style = if tokens.iter().any(|t| t.to_lowercase().contains("italic")) {
        FontStyle::Italic
    } else {
        FontStyle::Normal
    };

    let mut weight = FALLBACK_WEIGHT;
    for token in &tokens {
        let cleaned = token.to_lowercase().replace("italic", "");
        // No early exit: a later match overrides an earlier one
        if let Some(w) = table.lookup(&cleaned) {
            weight = w;
        }
    }

    (weight.to_string(), style)
}
