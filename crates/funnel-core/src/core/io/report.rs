use crate::core::models::funnel::{FunnelGeometry, Projection};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("CSV error: {0}")]
    Writer(#[from] csv::Error),
}

/// One row of the projection report: a ligand center of mass and where it projects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionRecord {
    pub structure: String,
    pub com_x: f64,
    pub com_y: f64,
    pub com_z: f64,
    pub projection: f64,
    pub radial_distance: f64,
    pub region: String,
}

impl ProjectionRecord {
    pub fn new(label: &str, geometry: &FunnelGeometry, projection: &Projection) -> Self {
        Self {
            structure: label.to_string(),
            com_x: projection.point.x,
            com_y: projection.point.y,
            com_z: projection.point.z,
            projection: projection.scalar_offset,
            radial_distance: projection.radial_distance(),
            region: geometry.region_of(projection).to_string(),
        }
    }
}

pub fn write_records(
    records: &[ProjectionRecord],
    writer: impl Write,
) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_records_to_path(
    records: &[ProjectionRecord],
    path: &Path,
) -> Result<(), ReportError> {
    let csv_error = |source: csv::Error| ReportError::Csv {
        path: path.to_string_lossy().to_string(),
        source,
    };
    let mut csv_writer = csv::Writer::from_path(path).map_err(csv_error)?;
    for record in records {
        csv_writer.serialize(record).map_err(csv_error)?;
    }
    csv_writer
        .flush()
        .map_err(|e| csv_error(csv::Error::from(e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::funnel::{GeometryConfig, derive_geometry, project};
    use crate::core::models::funnel::FunnelSpec;
    use nalgebra::Point3;
    use tempfile::tempdir;

    fn sample_records() -> Vec<ProjectionRecord> {
        let spec = FunnelSpec::new(
            15.0,
            0.3,
            2.0,
            Point3::origin(),
            Point3::new(0.0, 0.0, 10.0),
        );
        let geometry = derive_geometry(spec, &GeometryConfig::default()).unwrap();
        vec![
            ProjectionRecord::new(
                "ref.pdb",
                &geometry,
                &project(&geometry, Point3::new(3.0, 4.0, 5.0)),
            ),
            ProjectionRecord::new(
                "pose_2.pdb",
                &geometry,
                &project(&geometry, Point3::new(0.0, 0.0, -1.5)),
            ),
        ]
    }

    #[test]
    fn record_captures_projection_and_region() {
        let records = sample_records();
        assert_eq!(records[0].projection, 5.0);
        assert_eq!(records[0].radial_distance, 5.0);
        assert_eq!(records[0].region, "cone");
        assert_eq!(records[1].region, "before-apex");
    }

    #[test]
    fn write_records_emits_header_and_rows() {
        let mut buffer = Vec::new();
        write_records(&sample_records(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "structure,com_x,com_y,com_z,projection,radial_distance,region"
        );
        assert_eq!(lines[1], "ref.pdb,3.0,4.0,5.0,5.0,5.0,cone");
        assert!(lines[2].starts_with("pose_2.pdb,"));
        assert!(lines[2].ends_with(",before-apex"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn write_records_to_path_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("projections.csv");
        write_records_to_path(&sample_records(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("pose_2.pdb"));
    }

    #[test]
    fn write_records_to_path_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("projections.csv");
        let result = write_records_to_path(&sample_records(), &path);
        assert!(matches!(result, Err(ReportError::Csv { .. })));
    }
}
