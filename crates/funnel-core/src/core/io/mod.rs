//! Provides input/output functionality for restraint definitions, structures, and reports.
//!
//! - [`restraint`] parses the `KEY=value` restraint-definition file into a funnel spec.
//! - [`pdb`] and [`bgf`] read reference structures through the [`traits::StructureFile`] trait.
//! - [`report`] writes per-structure projection results as CSV.

pub mod bgf;
pub mod pdb;
pub mod report;
pub mod restraint;
pub mod traits;

use crate::core::models::structure::Structure;
use bgf::{BgfError, BgfFile};
use pdb::{PdbError, PdbFile};
use std::path::{Path, PathBuf};
use thiserror::Error;
use traits::StructureFile;

#[derive(Debug, Error)]
pub enum StructureError {
    #[error("Failed to read PDB file '{path}': {source}", path = path.display())]
    Pdb {
        path: PathBuf,
        #[source]
        source: PdbError,
    },
    #[error("Failed to read BGF file '{path}': {source}", path = path.display())]
    Bgf {
        path: PathBuf,
        #[source]
        source: BgfError,
    },
    #[error("Unsupported structure format for '{path}' (expected .pdb, .ent or .bgf)", path = path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Loads a structure file, choosing the reader from the file extension.
///
/// # Errors
///
/// Returns [`StructureError::UnsupportedFormat`] for unknown extensions, or the
/// format-specific error wrapped with the offending path.
pub fn load_structure(path: &Path) -> Result<Structure, StructureError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdb") | Some("ent") => {
            PdbFile::read_from_path(path).map_err(|source| StructureError::Pdb {
                path: path.to_path_buf(),
                source,
            })
        }
        Some("bgf") => BgfFile::read_from_path(path).map_err(|source| StructureError::Bgf {
            path: path.to_path_buf(),
            source,
        }),
        _ => Err(StructureError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_structure_dispatches_on_extension() {
        let dir = tempdir().unwrap();

        let pdb_path = dir.path().join("ref.PDB");
        let pdb_text = pdb::tests::pdb_line("HETATM", 1, "C1", ' ', "LIG", 'A', 1, [1.0; 3], "C");
        fs::write(&pdb_path, pdb_text).unwrap();
        assert_eq!(load_structure(&pdb_path).unwrap().len(), 1);

        let bgf_path = dir.path().join("ref.bgf");
        let bgf_text = bgf::tests::bgf_line("HETATM", 1, "C1", "LIG", 1, [1.0; 3], "C_3");
        fs::write(&bgf_path, bgf_text).unwrap();
        assert_eq!(load_structure(&bgf_path).unwrap().len(), 1);
    }

    #[test]
    fn load_structure_rejects_unknown_extensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ref.gro");
        fs::write(&path, "not read").unwrap();
        assert!(matches!(
            load_structure(&path),
            Err(StructureError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            load_structure(&dir.path().join("no_extension")),
            Err(StructureError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn load_structure_wraps_missing_file_error_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.pdb");
        let err = load_structure(&path).unwrap_err();
        assert!(matches!(err, StructureError::Pdb { source: PdbError::Io(_), .. }));
        assert!(err.to_string().contains("missing.pdb"));
    }
}
