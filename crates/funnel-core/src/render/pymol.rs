use super::scene::{Primitive, Rgb, Scene};
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

// CGO cone caps are left open at both ends.
const CAPS: [f64; 2] = [0.0, 0.0];

fn python_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            // Every other control character is below U+0100.
            c if c.is_control() => quoted.push_str(&format!("\\x{:02x}", c as u32)),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn xyz(p: &Point3<f64>) -> String {
    format!("{:.4}, {:.4}, {:.4}", p.x, p.y, p.z)
}

fn rgb(c: &Rgb) -> String {
    format!("{:.3}, {:.3}, {:.3}", c[0], c[1], c[2])
}

#[allow(clippy::too_many_arguments)]
fn write_cone(
    writer: &mut impl Write,
    name: &str,
    start: &Point3<f64>,
    end: &Point3<f64>,
    start_radius: f64,
    end_radius: f64,
    color: &Rgb,
    transparency: f64,
) -> io::Result<()> {
    writeln!(
        writer,
        "cmd.load_cgo([cgo.CONE, {}, {}, {:.4}, {:.4}, {}, {}, {:.1}, {:.1}], {})",
        xyz(start),
        xyz(end),
        start_radius,
        end_radius,
        rgb(color),
        rgb(color),
        CAPS[0],
        CAPS[1],
        python_string(name)
    )?;
    writeln!(
        writer,
        "cmd.set(\"cgo_transparency\", {:.2}, {})",
        transparency,
        python_string(name)
    )
}

/// Writes a PyMOL Python script that draws `scene`.
///
/// When `reference` is given, the script loads that structure first so the funnel is shown
/// in its frame. Run the result with `pymol script.py`.
pub fn write_script(
    scene: &Scene,
    reference: Option<&Path>,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer, "from pymol import cgo, cmd")?;
    writeln!(writer)?;

    if let Some(path) = reference {
        writeln!(
            writer,
            "cmd.load({})",
            python_string(&path.to_string_lossy())
        )?;
    }

    for primitive in scene.primitives() {
        match primitive {
            Primitive::Cone {
                name,
                start,
                end,
                start_radius,
                end_radius,
                color,
                transparency,
            } => write_cone(
                writer,
                name,
                start,
                end,
                *start_radius,
                *end_radius,
                color,
                *transparency,
            )?,
            Primitive::Line {
                name,
                start,
                end,
                radius,
                color,
            } => write_cone(writer, name, start, end, *radius, *radius, color, 0.0)?,
            Primitive::Marker { name, position } => writeln!(
                writer,
                "cmd.pseudoatom({}, pos=[{}])",
                python_string(name),
                xyz(position)
            )?,
            Primitive::Distance { name, from, to } => writeln!(
                writer,
                "cmd.distance({}, {}, {})",
                python_string(name),
                python_string(from),
                python_string(to)
            )?,
        }
    }

    Ok(())
}

pub fn write_script_to_path(
    scene: &Scene,
    reference: Option<&Path>,
    path: &Path,
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_script(scene, reference, &mut writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::funnel::{GeometryConfig, derive_geometry, project};
    use crate::core::models::funnel::FunnelSpec;
    use crate::render::scene::VisualConfig;
    use tempfile::tempdir;

    fn render(scene: &Scene, reference: Option<&Path>) -> String {
        let mut buffer = Vec::new();
        write_script(scene, reference, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn example_scene(with_ligand: bool) -> Scene {
        let spec = FunnelSpec::new(
            15.0,
            0.3,
            2.0,
            Point3::origin(),
            Point3::new(0.0, 0.0, 10.0),
        );
        let geometry = derive_geometry(spec, &GeometryConfig::default()).unwrap();
        let projection = project(&geometry, Point3::new(3.0, 4.0, 6.0));
        Scene::build(
            &geometry,
            with_ligand.then_some(&projection),
            &VisualConfig::default(),
        )
    }

    #[test]
    fn python_string_escapes_quotes_and_backslashes() {
        assert_eq!(python_string("a\"b"), "\"a\\\"b\"");
        assert_eq!(python_string("C:\\ref.pdb"), "\"C:\\\\ref.pdb\"");
    }

    #[test]
    fn python_string_escapes_control_characters() {
        assert_eq!(python_string("a\r\nb"), "\"a\\r\\nb\"");
        assert_eq!(python_string("tab\there"), "\"tab\\there\"");
        assert_eq!(python_string("bell\u{7}"), "\"bell\\x07\"");
        assert_eq!(python_string("del\u{7f}"), "\"del\\x7f\"");
        assert_eq!(python_string("café"), "\"café\"");
    }

    #[test]
    fn script_draws_cone_and_cylinder_with_transparency() {
        let script = render(&example_scene(false), None);
        let lines: Vec<&str> = script.lines().collect();

        assert_eq!(lines[0], "from pymol import cgo, cmd");
        assert_eq!(
            lines[2],
            "cmd.load_cgo([cgo.CONE, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 15.0000, 6.6400, \
             2.0000, 1.000, 1.000, 0.000, 1.000, 1.000, 0.000, 0.0, 0.0], \"cone\")"
        );
        assert_eq!(lines[3], "cmd.set(\"cgo_transparency\", 0.50, \"cone\")");
        assert!(lines[4].ends_with("], \"cylinder\")"));
        assert!(lines[4].contains("0.0000, 0.0000, 25.0000, 2.0000, 2.0000"));
        assert!(!script.contains("pseudoatom"));
    }

    #[test]
    fn script_includes_reference_load_and_ligand_annotations() {
        let script = render(&example_scene(true), Some(Path::new("ref.pdb")));

        assert!(script.contains("cmd.load(\"ref.pdb\")"));
        assert!(script.contains("cmd.pseudoatom(\"plig\", pos=[3.0000, 4.0000, 6.0000])"));
        assert!(script.contains("cmd.pseudoatom(\"pp\", pos=[0.0000, 0.0000, 6.0000])"));
        assert!(script.contains("cmd.pseudoatom(\"p1\", pos=[0.0000, 0.0000, 0.0000])"));
        assert!(script.contains("cmd.set(\"cgo_transparency\", 0.00, \"proj\")"));
        assert!(script.contains("cmd.distance(\"lp\", \"plig\", \"pp\")"));
        assert!(script.contains("cmd.distance(\"ld\", \"p1\", \"pp\")"));
    }

    #[test]
    fn write_script_to_path_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("funnel.py");
        write_script_to_path(&example_scene(true), None, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("cgo.CONE"));
    }
}
