use crate::core::funnel::{derive_geometry, project};
use crate::core::io::load_structure;
use crate::core::io::report::ProjectionRecord;
use crate::core::io::restraint;
use crate::core::models::funnel::{FunnelGeometry, FunnelSpec, Projection};
use crate::core::models::structure::{FALLBACK_ATOM_MASS, Structure};
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::render::scene::Scene;
use nalgebra::Point3;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Everything one analysis run produces.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub spec: FunnelSpec,
    pub geometry: FunnelGeometry,
    /// Projection of the ligand center of mass in the reference structure.
    pub projection: Projection,
    /// Number of atoms selected as the ligand in the reference structure.
    pub ligand_atom_count: usize,
    pub scene: Scene,
    /// One record per structure, the reference first and then each pose in input order.
    pub records: Vec<ProjectionRecord>,
}

#[instrument(skip_all, name = "analysis_workflow")]
pub fn run(
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<AnalysisReport, EngineError> {
    let input = &config.input;

    // === Phase 1: Restraint definition and derived geometry ===
    let (spec, geometry) = reporter.phase("Funnel geometry", || -> Result<_, EngineError> {
        let spec = restraint::parse_path(&input.restraint_path)?;
        info!(
            zcc = spec.zcc,
            alpha = spec.alpha,
            rcyl = spec.cylinder_radius,
            "Parsed restraint definition."
        );
        let geometry = derive_geometry(spec, &config.geometry)?;
        debug!(
            bottom_radius = geometry.bottom_radius(),
            "Derived funnel geometry."
        );
        Ok((spec, geometry))
    })?;

    // === Phase 2: Reference structure and ligand projection ===
    let (center, ligand_atom_count) =
        reporter.phase("Reference structure", || -> Result<_, EngineError> {
            let structure = load_structure(&input.reference_path)?;
            info!(
                atoms = structure.len(),
                path = %input.reference_path.display(),
                "Loaded reference structure."
            );
            ligand_center(&structure, &input.ligand_name, &input.reference_path, reporter)
        })?;

    let projection = project(&geometry, center);
    info!(
        offset = projection.scalar_offset,
        region = %geometry.region_of(&projection),
        "Projected ligand center of mass onto the funnel axis."
    );

    let mut records = vec![ProjectionRecord::new(
        &input.reference_path.display().to_string(),
        &geometry,
        &projection,
    )];

    // === Phase 3: Additional poses ===
    if !input.pose_paths.is_empty() {
        let pose_records = reporter.phase("Poses", || -> Result<_, EngineError> {
            reporter.report(Progress::TaskStart {
                total_steps: input.pose_paths.len() as u64,
            });
            let mut pose_records = Vec::with_capacity(input.pose_paths.len());
            for path in &input.pose_paths {
                let structure = load_structure(path)?;
                let (pose_center, _) =
                    ligand_center(&structure, &input.ligand_name, path, reporter)?;
                let pose_projection = project(&geometry, pose_center);
                debug!(
                    path = %path.display(),
                    offset = pose_projection.scalar_offset,
                    "Projected pose."
                );
                pose_records.push(ProjectionRecord::new(
                    &path.display().to_string(),
                    &geometry,
                    &pose_projection,
                ));
                reporter.report(Progress::TaskIncrement);
            }
            reporter.report(Progress::TaskFinish);
            Ok(pose_records)
        })?;
        records.extend(pose_records);
    }

    let scene = Scene::build(&geometry, Some(&projection), &config.visual);

    info!(structures = records.len(), "Funnel analysis complete.");

    Ok(AnalysisReport {
        spec,
        geometry,
        projection,
        ligand_atom_count,
        scene,
        records,
    })
}

fn ligand_center(
    structure: &Structure,
    ligand: &str,
    path: &Path,
    reporter: &ProgressReporter,
) -> Result<(Point3<f64>, usize), EngineError> {
    let atoms = structure.select_residue_name(ligand);

    let unknown_mass: Vec<String> = atoms
        .iter()
        .filter(|atom| atom.mass().is_none())
        .map(|atom| atom.to_string())
        .collect();
    if !unknown_mass.is_empty() {
        warn!(
            ligand,
            path = %path.display(),
            atoms = ?unknown_mass,
            fallback = FALLBACK_ATOM_MASS,
            "Ligand atoms with unknown element; using the fallback mass."
        );
        reporter.report(Progress::Message(format!(
            "{}: no tabulated mass for {}; using {} for these atoms",
            path.display(),
            unknown_mass.join(", "),
            FALLBACK_ATOM_MASS
        )));
    }

    match Structure::center_of_mass(&atoms) {
        Some(center) => Ok((center, atoms.len())),
        None => Err(EngineError::LigandNotFound {
            ligand: ligand.to_string(),
            path: path.to_path_buf(),
            available: structure
                .residue_names()
                .into_iter()
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}
