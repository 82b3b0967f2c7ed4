use crate::core::io::traits::StructureFile;
use crate::core::models::structure::{Atom, Structure};
use crate::core::utils::elements;
use nalgebra::Point3;
use std::collections::HashSet;
use std::io::{self, BufRead};
use thiserror::Error;

// The force-field type (columns 62-66) is the last field needed here.
const MIN_ATOM_LINE_LEN: usize = 66;

#[derive(Debug, Error)]
pub enum BgfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: BgfParseErrorKind,
    },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum BgfParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 66 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_float_field(
    line: &str,
    line_num: usize,
    start: usize,
    end: usize,
) -> Result<f64, BgfError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| BgfError::Parse {
        line: line_num,
        kind: BgfParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

/// Reader for BioGraf (BGF) structure files.
pub struct BgfFile;

impl StructureFile for BgfFile {
    type Error = BgfError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut structure = Structure::new();
        let mut seen_serials = HashSet::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            match slice_and_trim(&line, 0, 6) {
                "ATOM" | "HETATM" => {
                    if line.len() < MIN_ATOM_LINE_LEN {
                        return Err(BgfError::Parse {
                            line: line_num,
                            kind: BgfParseErrorKind::LineTooShort,
                        });
                    }

                    let serial_str = slice_and_trim(&line, 7, 12);
                    let name_str = slice_and_trim(&line, 13, 18);
                    let res_name_str = slice_and_trim(&line, 19, 22);
                    let chain_id_str = slice_and_trim(&line, 23, 24);
                    let res_id_str = slice_and_trim(&line, 25, 30);
                    let ff_type_str = slice_and_trim(&line, 61, 66);

                    if name_str.is_empty() {
                        return Err(BgfError::Parse {
                            line: line_num,
                            kind: BgfParseErrorKind::MissingRequiredField {
                                columns: "14-18".into(),
                            },
                        });
                    }
                    let serial: usize = serial_str.parse().map_err(|_| BgfError::Parse {
                        line: line_num,
                        kind: BgfParseErrorKind::InvalidInt {
                            columns: "8-12".into(),
                            value: serial_str.into(),
                        },
                    })?;
                    if !seen_serials.insert(serial) {
                        return Err(BgfError::Inconsistency(format!(
                            "Duplicate atom serial: {}",
                            serial
                        )));
                    }
                    let residue_number: isize =
                        res_id_str.parse().map_err(|_| BgfError::Parse {
                            line: line_num,
                            kind: BgfParseErrorKind::InvalidInt {
                                columns: "26-30".into(),
                                value: res_id_str.into(),
                            },
                        })?;

                    let x = parse_float_field(&line, line_num, 30, 40)?;
                    let y = parse_float_field(&line, line_num, 40, 50)?;
                    let z = parse_float_field(&line, line_num, 50, 60)?;

                    let element = match elements::element_from_force_field_type(ff_type_str) {
                        symbol if symbol.is_empty() => elements::element_from_atom_name(name_str),
                        symbol => symbol,
                    };

                    structure.push_atom(Atom {
                        serial,
                        name: name_str.to_string(),
                        residue_name: res_name_str.to_string(),
                        chain_id: chain_id_str.chars().next().unwrap_or('A'),
                        residue_number,
                        element,
                        position: Point3::new(x, y, z),
                    });
                }
                "END" => break,
                _ => {}
            }
        }

        if structure.is_empty() {
            return Err(BgfError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok(structure)
    }
}
