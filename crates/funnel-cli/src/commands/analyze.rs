use crate::cli::Cli;
use crate::config::{AppConfig, build_config};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use funnelview::core::io::report;
use funnelview::core::models::funnel::FunnelSpec;
use funnelview::engine::error::EngineError;
use funnelview::engine::progress::ProgressReporter;
use funnelview::render::pymol;
use funnelview::workflows::analyze::{self, AnalysisReport};
use nalgebra::Point3;
use tracing::info;

pub fn run(args: &Cli) -> Result<()> {
    let AppConfig {
        core_config,
        pymol_script,
        csv_path,
    } = build_config(args)?;

    let progress_handler = if args.quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the funnel analysis workflow...");
    let analysis = analyze::run(&core_config, &reporter)?;

    println!("{}", format_parameters(&analysis.spec));
    println!("{}", format_geometry(&analysis));
    println!("{}", format_projection(analysis.projection.scalar_offset));

    if analysis.records.len() > 1 {
        for record in &analysis.records[1..] {
            println!(
                "  {:<30} projection = {:10.3} Angstrom ({})",
                record.structure, record.projection, record.region
            );
        }
    }

    if let Some(path) = &pymol_script {
        pymol::write_script_to_path(
            &analysis.scene,
            Some(core_config.input.reference_path.as_path()),
            path,
        )?;
        info!("PyMOL script written to {:?}", path);
        println!("✓ PyMOL script written to: {}", path.display());
    }

    if let Some(path) = &csv_path {
        report::write_records_to_path(&analysis.records, path).map_err(EngineError::from)?;
        info!("Projection report written to {:?}", path);
        println!("✓ Projection report written to: {}", path.display());
    }

    Ok(())
}

fn format_point(p: &Point3<f64>) -> String {
    format!("[{:.3}, {:.3}, {:.3}]", p.x, p.y, p.z)
}

fn format_parameters(spec: &FunnelSpec) -> String {
    format!(
        "Zcc = {}, alpha = {}, Rcyl = {}, Point1 = {}, Point 2 = {}",
        spec.zcc,
        spec.alpha,
        spec.cylinder_radius,
        format_point(&spec.axis_point1),
        format_point(&spec.axis_point2)
    )
}

fn format_geometry(analysis: &AnalysisReport) -> String {
    let geometry = &analysis.geometry;
    let axis = geometry.unit_axis();
    format!(
        "Axis = [{:.4}, {:.4}, {:.4}], bottom radius = {:.3} Angstrom, truncation point = {}, cylinder end = {}",
        axis.x,
        axis.y,
        axis.z,
        geometry.bottom_radius(),
        format_point(&geometry.truncation_point()),
        format_point(&geometry.cylinder_end_point())
    )
}

fn format_projection(offset: f64) -> String {
    format!("Projection along the axis = {:10.3} Angstrom", offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn pdb_atom(serial: usize, name: &str, res_name: &str, pos: [f64; 3], element: &str) -> String {
        format!(
            "HETATM{:>5} {:<4} {:>3} A{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}",
            serial, name, res_name, 1, pos[0], pos[1], pos[2], 1.0, 0.0, element
        )
    }

    #[test]
    fn parameters_line_lists_converted_values() {
        let spec = FunnelSpec::new(
            15.0,
            0.3,
            2.0,
            Point3::origin(),
            Point3::new(0.0, 0.0, 10.0),
        );
        assert_eq!(
            format_parameters(&spec),
            "Zcc = 15, alpha = 0.3, Rcyl = 2, Point1 = [0.000, 0.000, 0.000], Point 2 = [0.000, 0.000, 10.000]"
        );
    }

    #[test]
    fn projection_line_is_right_aligned_with_three_decimals() {
        assert_eq!(
            format_projection(6.0),
            "Projection along the axis =      6.000 Angstrom"
        );
        assert_eq!(
            format_projection(-12.3456),
            "Projection along the axis =    -12.346 Angstrom"
        );
    }

    #[test]
    fn run_writes_requested_outputs() {
        let dir = tempdir().unwrap();
        let reference = dir.path().join("ref.pdb");
        let restraint = dir.path().join("funnel.dat");
        let script = dir.path().join("funnel.py");
        let csv = dir.path().join("projections.csv");

        fs::write(
            &reference,
            [
                pdb_atom(1, "C1", "LIG", [2.0, 4.0, 5.0], "C"),
                pdb_atom(2, "C2", "LIG", [4.0, 4.0, 7.0], "C"),
                "END".to_string(),
            ]
            .join("\n"),
        )
        .unwrap();
        fs::write(&restraint, "ZCC=1.5\nALPHA=0.3\nRCYL=0.2\nPOINTS=0,0,0,0,0,1\n").unwrap();

        let args = Cli::parse_from([
            "funnelview",
            reference.to_str().unwrap(),
            restraint.to_str().unwrap(),
            "LIG",
            "-q",
            "--pymol-script",
            script.to_str().unwrap(),
            "--csv",
            csv.to_str().unwrap(),
        ]);
        run(&args).unwrap();

        let script_text = fs::read_to_string(&script).unwrap();
        assert!(script_text.contains("cmd.pseudoatom(\"plig\", pos=[3.0000, 4.0000, 6.0000])"));
        assert!(script_text.contains("ref.pdb"));

        let csv_text = fs::read_to_string(&csv).unwrap();
        assert_eq!(csv_text.lines().count(), 2);
        assert!(csv_text.lines().nth(1).unwrap().ends_with(",cone"));
    }

    #[test]
    fn run_surfaces_missing_ligand_as_core_error() {
        let dir = tempdir().unwrap();
        let reference = dir.path().join("ref.pdb");
        let restraint = dir.path().join("funnel.dat");
        fs::write(&reference, pdb_atom(1, "CA", "ALA", [0.0; 3], "C")).unwrap();
        fs::write(&restraint, "ZCC=1.5\nALPHA=0.3\nRCYL=0.2\nPOINTS=0,0,0,0,0,1\n").unwrap();

        let args = Cli::parse_from([
            "funnelview",
            reference.to_str().unwrap(),
            restraint.to_str().unwrap(),
            "LIG",
            "-q",
        ]);
        assert!(matches!(run(&args), Err(CliError::Core(_))));
    }

    #[test]
    fn run_reports_csv_write_failure_as_report_error() {
        let dir = tempdir().unwrap();
        let reference = dir.path().join("ref.pdb");
        let restraint = dir.path().join("funnel.dat");
        let csv = dir.path().join("missing_dir").join("projections.csv");
        fs::write(&reference, pdb_atom(1, "C1", "LIG", [0.0, 0.0, 1.0], "C")).unwrap();
        fs::write(&restraint, "ZCC=1.5\nALPHA=0.3\nRCYL=0.2\nPOINTS=0,0,0,0,0,1\n").unwrap();

        let args = Cli::parse_from([
            "funnelview",
            reference.to_str().unwrap(),
            restraint.to_str().unwrap(),
            "LIG",
            "-q",
            "--csv",
            csv.to_str().unwrap(),
        ]);

        match run(&args) {
            Err(err @ CliError::Core(EngineError::Report { .. })) => {
                let message = err.to_string();
                assert!(message.starts_with("Report writing failed"), "{}", message);
                assert!(message.contains("projections.csv"), "{}", message);
            }
            other => panic!("expected report error, got {:?}", other),
        }
    }
}
