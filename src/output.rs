//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Generate / Check
//!
//! One header per `@font-face` block in CSS order, then the files feeding its
//! `src` list in source order:
//!
//! ```text
//! 400 normal
//!     001 Roboto-Regular.woff2 (woff2)
//!     002 Roboto-Regular.ttf (truetype)
//! 700 italic
//!     001 Roboto-BoldItalic.woff2 (woff2)
//!
//! Skipped
//!     LICENSE.txt
//!
//! 2 @font-face blocks from 3 files → dist/roboto.css
//! ```
//!
//! ## Weights
//!
//! ```text
//! Thin 100
//! ...
//! Black 900
//! Book 350 (custom)
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::FontGroup;
use crate::weights::WeightRow;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

// ============================================================================
// Generate / check
// ============================================================================

/// Format the grouped result of a generation run.
///
/// `written` is the stylesheet path when CSS was written to disk.
pub fn format_generate_output(
    groups: &[FontGroup],
    skipped: &[String],
    written: Option<&Path>,
) -> Vec<String> {
    let mut lines = Vec::new();

    for group in groups {
        lines.push(format!("{} {}", group.weight, group.style));
        for (i, file) in group.files.iter().enumerate() {
            lines.push(format!(
                "{}{} {} ({})",
                indent(1),
                format_index(i + 1),
                file.filename,
                file.format
            ));
        }
    }

    if !skipped.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Skipped".to_string());
        for name in skipped {
            lines.push(format!("{}{}", indent(1), name));
        }
    }

    let file_count: usize = groups.iter().map(|g| g.files.len()).sum();
    let summary = format!(
        "{} from {}",
        plural(groups.len(), "@font-face block", "@font-face blocks"),
        plural(file_count, "file", "files")
    );
    if !lines.is_empty() {
        lines.push(String::new());
    }
    match written {
        Some(path) => lines.push(format!("{} \u{2192} {}", summary, path.display())),
        None => lines.push(summary),
    }

    lines
}

/// Print generate/check output to stdout.
pub fn print_generate_output(groups: &[FontGroup], skipped: &[String], written: Option<&Path>) {
    for line in format_generate_output(groups, skipped, written) {
        println!("{}", line);
    }
}

// ============================================================================
// Weights
// ============================================================================

/// Format a weight listing, marking stored custom values.
pub fn format_weights_output(rows: &[WeightRow]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            if row.custom {
                format!("{} {} (custom)", row.name, row.weight)
            } else {
                format!("{} {}", row.name, row.weight)
            }
        })
        .collect()
}

/// Print a weight listing to stdout.
pub fn print_weights_output(rows: &[WeightRow]) {
    for line in format_weights_output(rows) {
        println!("{}", line);
    }
}
