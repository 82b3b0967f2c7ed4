use crate::core::io::traits::StructureFile;
use crate::core::models::structure::{Atom, Structure};
use crate::core::utils::elements;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

// Coordinates end at column 54; anything shorter cannot carry a position.
const MIN_ATOM_LINE_LEN: usize = 54;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 54 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("").trim()
}

fn char_at(line: &str, index: usize) -> char {
    line.get(index..index + 1)
        .and_then(|s| s.chars().next())
        .unwrap_or(' ')
}

fn parse_coordinate(line: &str, line_num: usize, start: usize) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, start + 8);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, start + 8),
            value: value.into(),
        },
    })
}

/// Reader for the first model of a PDB file.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut structure = Structure::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            match slice_and_trim(&line, 0, 6) {
                "ATOM" | "HETATM" => {
                    if line.len() < MIN_ATOM_LINE_LEN {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::LineTooShort,
                        });
                    }

                    let alt_loc = char_at(&line, 16);
                    if !matches!(alt_loc, ' ' | 'A' | '1') {
                        continue;
                    }

                    let name = slice_and_trim(&line, 12, 16);
                    if name.is_empty() {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::MissingRequiredField {
                                columns: "13-16".into(),
                            },
                        });
                    }
                    let res_seq_str = slice_and_trim(&line, 22, 26);
                    let residue_number: isize =
                        res_seq_str.parse().map_err(|_| PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::InvalidInt {
                                columns: "23-26".into(),
                                value: res_seq_str.into(),
                            },
                        })?;

                    let x = parse_coordinate(&line, line_num, 30)?;
                    let y = parse_coordinate(&line, line_num, 38)?;
                    let z = parse_coordinate(&line, line_num, 46)?;

                    let element = match slice_and_trim(&line, 76, 78) {
                        "" => elements::element_from_atom_name(name),
                        symbol => symbol.to_ascii_uppercase(),
                    };

                    // Serials overflow the 5-column field in large systems; fall back to order.
                    let serial = slice_and_trim(&line, 6, 11)
                        .parse()
                        .unwrap_or(structure.len() + 1);

                    structure.push_atom(Atom {
                        serial,
                        name: name.to_string(),
                        residue_name: slice_and_trim(&line, 17, 20).to_string(),
                        chain_id: char_at(&line, 21),
                        residue_number,
                        element,
                        position: Point3::new(x, y, z),
                    });
                }
                "ENDMDL" | "END" => break,
                _ => {}
            }
        }

        if structure.is_empty() {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok(structure)
    }
}
