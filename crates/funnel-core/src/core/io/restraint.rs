use crate::core::models::funnel::FunnelSpec;
use nalgebra::Point3;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Conversion factor from the restraint file's nanometers to Angstroms.
pub const NM_TO_ANGSTROM: f64 = 10.0;

const COMMENT_MARKER: char = '#';
const SEPARATOR: char = '=';
const POINTS_COUNT: usize = 6;

/// The four keys recognised in a restraint-definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestraintKey {
    Zcc,
    Alpha,
    Rcyl,
    Points,
}

impl RestraintKey {
    const ALL: [RestraintKey; 4] = [
        RestraintKey::Zcc,
        RestraintKey::Alpha,
        RestraintKey::Rcyl,
        RestraintKey::Points,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RestraintKey::Zcc => "ZCC",
            RestraintKey::Alpha => "ALPHA",
            RestraintKey::Rcyl => "RCYL",
            RestraintKey::Points => "POINTS",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl std::fmt::Display for RestraintKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum RestraintError {
    #[error("Failed to read restraint file '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed restraint definition: required key '{0}' is missing")]
    MissingKey(RestraintKey),
    #[error("Invalid value for '{key}' on line {line}: {kind}")]
    InvalidValue {
        line: usize,
        key: RestraintKey,
        kind: InvalidValueKind,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidValueKind {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' does not give a finite distance")]
    NonFinite(String),
    #[error("expected {expected} comma-separated values, found {found}")]
    WrongCount { expected: usize, found: usize },
}

/// Parses the text of a restraint-definition file into a [`FunnelSpec`].
///
/// Lines are trimmed; blank lines, `#` comments and lines without `=` are skipped. Each
/// remaining line is split on its first `=` into a key and a value. Only `ZCC`, `ALPHA`,
/// `RCYL` and `POINTS` are recognised (exact, case-sensitive); other keys are ignored.
///
/// When a key appears more than once, the last occurrence wins.
///
/// Distances (`ZCC`, `RCYL`, every `POINTS` coordinate) are converted from nanometers to
/// Angstroms; `ALPHA` is taken as radians unchanged.
///
/// # Errors
///
/// * [`RestraintError::MissingKey`] if a required key never appears.
/// * [`RestraintError::InvalidValue`] if the last value given for a key is not numeric, is not
///   finite once converted, or `POINTS` does not hold exactly six values.
pub fn parse(text: &str) -> Result<FunnelSpec, RestraintError> {
    let mut last_seen: HashMap<RestraintKey, (usize, &str)> = HashMap::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }
        let Some((key, value)) = line.split_once(SEPARATOR) else {
            continue;
        };
        if let Some(key) = RestraintKey::from_key(key.trim()) {
            last_seen.insert(key, (index + 1, value.trim()));
        }
    }

    let lookup = |key: RestraintKey| {
        last_seen
            .get(&key)
            .copied()
            .ok_or(RestraintError::MissingKey(key))
    };

    let (zcc_line, zcc_value) = lookup(RestraintKey::Zcc)?;
    let (alpha_line, alpha_value) = lookup(RestraintKey::Alpha)?;
    let (rcyl_line, rcyl_value) = lookup(RestraintKey::Rcyl)?;
    let (points_line, points_value) = lookup(RestraintKey::Points)?;

    let zcc = parse_float(zcc_value, zcc_line, RestraintKey::Zcc, NM_TO_ANGSTROM)?;
    let alpha = parse_float(alpha_value, alpha_line, RestraintKey::Alpha, 1.0)?;
    let cylinder_radius = parse_float(rcyl_value, rcyl_line, RestraintKey::Rcyl, NM_TO_ANGSTROM)?;
    let (axis_point1, axis_point2) = parse_points(points_value, points_line)?;

    Ok(FunnelSpec::new(
        zcc,
        alpha,
        cylinder_radius,
        axis_point1,
        axis_point2,
    ))
}

/// Reads and parses a restraint-definition file.
///
/// # Errors
///
/// Returns [`RestraintError::Io`] if the file cannot be read, otherwise the errors of [`parse`].
pub fn parse_path<P: AsRef<Path>>(path: P) -> Result<FunnelSpec, RestraintError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| RestraintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Parses a numeric value and scales it into internal units.
///
/// The scaled value must be finite: `inf`, `NaN` and magnitudes that overflow once converted
/// are rejected.
fn parse_float(
    value: &str,
    line: usize,
    key: RestraintKey,
    scale: f64,
) -> Result<f64, RestraintError> {
    let value = value.trim();
    let invalid = |kind| RestraintError::InvalidValue { line, key, kind };

    let scaled = value
        .parse::<f64>()
        .map_err(|_| invalid(InvalidValueKind::NotANumber(value.to_string())))?
        * scale;
    if !scaled.is_finite() {
        return Err(invalid(InvalidValueKind::NonFinite(value.to_string())));
    }
    Ok(scaled)
}

fn parse_points(value: &str, line: usize) -> Result<(Point3<f64>, Point3<f64>), RestraintError> {
    let tokens: Vec<&str> = value.split(',').collect();
    if tokens.len() != POINTS_COUNT {
        return Err(RestraintError::InvalidValue {
            line,
            key: RestraintKey::Points,
            kind: InvalidValueKind::WrongCount {
                expected: POINTS_COUNT,
                found: tokens.len(),
            },
        });
    }

    let coords = tokens
        .iter()
        .map(|token| parse_float(token, line, RestraintKey::Points, NM_TO_ANGSTROM))
        .collect::<Result<Vec<f64>, _>>()?;

    Ok((
        Point3::new(coords[0], coords[1], coords[2]),
        Point3::new(coords[3], coords[4], coords[5]),
    ))
}
