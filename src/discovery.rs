//! Discovers legacy source files and loads them into source units.
//!
//! The pipeline itself never touches the filesystem; this module is the
//! enumeration collaborator that feeds it. Files are sorted so the
//! processing order is deterministic for a given tree.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::MigrationError;
use crate::source::SourceUnit;

pub struct UnitDiscoverer;

impl UnitDiscoverer {
    /// Recursively scans a directory for `.js` files. A plain file path is
    /// accepted as a single-unit corpus.
    pub fn discover_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, MigrationError> {
        let root = root.as_ref();
        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }
        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| MigrationError::InputUnavailable {
                path: root.display().to_string(),
                reason: e.to_string(),
            })?;
            if entry.file_type().is_file() && Self::is_legacy_file(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Loads every discovered file into a unit, in discovery order.
    pub fn load_units<P: AsRef<Path>>(root: P) -> Result<Vec<SourceUnit>, MigrationError> {
        Self::discover_files(root)?
            .iter()
            .map(|path| Self::load_unit(path))
            .collect()
    }

    /// Reads a single file. The logical name is the file stem.
    pub fn load_unit(path: &Path) -> Result<SourceUnit, MigrationError> {
        let text = std::fs::read_to_string(path).map_err(|e| MigrationError::InputUnavailable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| MigrationError::InputUnavailable {
                path: path.display().to_string(),
                reason: "path has no usable file stem".to_string(),
            })?;
        Ok(SourceUnit::new(name, text))
    }

    fn is_legacy_file(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "js")
    }
}
