use thiserror::Error;

use crate::core::funnel::GeometryError;
use crate::core::io::StructureError;
use crate::core::io::report::ReportError;
use crate::core::io::restraint::RestraintError;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Restraint definition error: {source}")]
    Restraint {
        #[from]
        source: RestraintError,
    },

    #[error("Funnel geometry error: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },

    #[error("Structure loading failed: {source}")]
    Structure {
        #[from]
        source: StructureError,
    },

    #[error("Report writing failed: {source}")]
    Report {
        #[from]
        source: ReportError,
    },

    #[error(
        "Ligand '{ligand}' not found in '{path}' (residue names present: {available})",
        path = path.display()
    )]
    LigandNotFound {
        ligand: String,
        path: PathBuf,
        available: String,
    },
}
