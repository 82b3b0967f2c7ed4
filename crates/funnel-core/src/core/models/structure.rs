use crate::core::utils::elements;
use crate::core::utils::geometry::weighted_centroid;
use nalgebra::Point3;
use std::collections::BTreeSet;

/// Mass assigned to atoms whose element has no tabulated mass (carbon).
pub const FALLBACK_ATOM_MASS: f64 = 12.011;

/// A single atom read from a structure file.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Serial number from the source file.
    pub serial: usize,
    /// The atom name (e.g., "CA", "C12").
    pub name: String,
    /// Name of the residue this atom belongs to (e.g., "ALA", "LIG").
    pub residue_name: String,
    /// Single-character chain identifier.
    pub chain_id: char,
    /// Residue sequence number from the source file.
    pub residue_number: isize,
    /// Element symbol, upper-cased (e.g., "C", "CL").
    pub element: String,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(name: &str, residue_name: &str, element: &str, position: Point3<f64>) -> Self {
        Self {
            serial: 0,
            name: name.to_string(),
            residue_name: residue_name.to_string(),
            chain_id: 'A',
            residue_number: 1,
            element: element.trim().to_ascii_uppercase(),
            position,
        }
    }

    /// Tabulated atomic mass of this atom's element, if known.
    pub fn mass(&self) -> Option<f64> {
        elements::atomic_mass(&self.element)
    }
}

/// Identifies the atom the way residue viewers do, e.g. `LIG B900 C12 #2031`.
impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}{} {} #{}",
            self.residue_name.trim(),
            self.chain_id,
            self.residue_number,
            self.name,
            self.serial
        )
    }
}

/// A flat list of atoms loaded from a reference structure.
///
/// Lighter than a full molecular topology: funnel analysis only needs residue-name
/// selections and coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    atoms: Vec<Atom>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_atom(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Selects every atom whose residue name equals `residue_name`.
    ///
    /// Matching is exact and case-sensitive after trimming surrounding whitespace,
    /// the same way residue names are written in PDB and BGF files.
    pub fn select_residue_name(&self, residue_name: &str) -> Vec<&Atom> {
        let wanted = residue_name.trim();
        self.atoms
            .iter()
            .filter(|atom| atom.residue_name.trim() == wanted)
            .collect()
    }

    /// Distinct residue names present in the structure, sorted.
    pub fn residue_names(&self) -> BTreeSet<&str> {
        self.atoms
            .iter()
            .map(|atom| atom.residue_name.trim())
            .collect()
    }

    /// Mass-weighted center of a selection.
    ///
    /// Atoms with an unknown element contribute [`FALLBACK_ATOM_MASS`].
    /// Returns `None` for an empty selection.
    pub fn center_of_mass(atoms: &[&Atom]) -> Option<Point3<f64>> {
        weighted_centroid(
            atoms
                .iter()
                .map(|atom| (atom.position, atom.mass().unwrap_or(FALLBACK_ATOM_MASS))),
        )
    }
}

impl FromIterator<Atom> for Structure {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Self {
            atoms: iter.into_iter().collect(),
        }
    }
}
