//! Font directory scanning.
//!
//! Lists the files a generation run should consider. The scan is flat (no
//! recursion) because every font in a family is served from the same base
//! URL:
//!
//! ```text
//! fonts/
//! ├── fontface.toml            # Generator config (optional, never listed)
//! ├── .DS_Store                # Hidden, never listed
//! ├── Roboto-Regular.ttf
//! ├── Roboto-Regular.woff2
//! ├── Roboto-BoldItalic.woff2
//! ├── LICENSE.txt              # Listed; the generator skips and reports it
//! └── specimens/               # Directories are ignored
//! ```
//!
//! Names come back sorted so output does not depend on directory order.

use crate::config::CONFIG_FILENAME;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Sorted names of the regular, non-hidden files directly inside `dir`.
pub fn scan_fonts(dir: &Path) -> Result<Vec<String>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.') && name != CONFIG_FILENAME)
        .collect();

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_files;
    use tempfile::TempDir;

    #[test]
    fn lists_files_sorted() {
        let tmp = TempDir::new().unwrap();
        write_files(tmp.path(), &["b.ttf", "a.woff2", "LICENSE.txt"]);
        assert_eq!(
            scan_fonts(tmp.path()).unwrap(),
            vec!["LICENSE.txt", "a.woff2", "b.ttf"]
        );
    }

    #[test]
    fn skips_hidden_config_and_directories() {
        let tmp = TempDir::new().unwrap();
        write_files(tmp.path(), &[".DS_Store", "fontface.toml", "a.ttf"]);
        fs::create_dir(tmp.path().join("specimens.ttf")).unwrap();
        assert_eq!(scan_fonts(tmp.path()).unwrap(), vec!["a.ttf"]);
    }

    #[test]
    fn does_not_recurse() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        write_files(&tmp.path().join("nested"), &["a.ttf"]);
        assert!(scan_fonts(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(matches!(
            scan_fonts(&missing),
            Err(ScanError::NotADirectory(p)) if p == missing
        ));
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        write_files(tmp.path(), &["a.ttf"]);
        assert!(scan_fonts(&tmp.path().join("a.ttf")).is_err());
    }
}
