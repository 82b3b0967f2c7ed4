use crate::core::models::funnel::{FunnelGeometry, Projection};
use crate::core::utils::geometry::point_along;
use nalgebra::Point3;
use serde::Deserialize;

pub type Rgb = [f64; 3];

/// Object names used for the generated primitives.
pub mod names {
    pub const CONE: &str = "cone";
    pub const CYLINDER: &str = "cylinder";
    pub const PROJECTION_LINE: &str = "proj";
    pub const AXIS_LINE: &str = "axis";
    pub const LIGAND_MARKER: &str = "plig";
    pub const PROJECTED_MARKER: &str = "pp";
    pub const ORIGIN_MARKER: &str = "p1";
    pub const LIGAND_TO_AXIS: &str = "lp";
    pub const ALONG_AXIS: &str = "ld";
}

/// Appearance settings for the rendered funnel and annotations.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct VisualConfig {
    pub funnel_color: Rgb,
    pub line_color: Rgb,
    /// Transparency of the cone and cylinder surfaces, 0.0 (opaque) to 1.0.
    pub funnel_transparency: f64,
    /// Radius of the thin cones used to draw line segments, in Angstroms.
    pub line_radius: f64,
    /// The axis line is drawn to this multiple of the ligand's axial projection.
    pub axis_extension_factor: f64,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            funnel_color: [1.0, 1.0, 0.0],
            line_color: [1.0, 1.0, 1.0],
            funnel_transparency: 0.5,
            line_radius: 0.1,
            axis_extension_factor: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A truncated cone between two points; equal radii give a cylinder.
    Cone {
        name: String,
        start: Point3<f64>,
        end: Point3<f64>,
        start_radius: f64,
        end_radius: f64,
        color: Rgb,
        transparency: f64,
    },
    /// A thin opaque segment.
    Line {
        name: String,
        start: Point3<f64>,
        end: Point3<f64>,
        radius: f64,
        color: Rgb,
    },
    /// A labelled point.
    Marker { name: String, position: Point3<f64> },
    /// A distance annotation between two markers.
    Distance {
        name: String,
        from: String,
        to: String,
    },
}

impl Primitive {
    pub fn name(&self) -> &str {
        match self {
            Primitive::Cone { name, .. }
            | Primitive::Line { name, .. }
            | Primitive::Marker { name, .. }
            | Primitive::Distance { name, .. } => name,
        }
    }
}

/// An ordered list of primitives describing one funnel and, optionally, one ligand marker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Builds the scene for a funnel geometry.
    ///
    /// The funnel is drawn as a cone from the apex (`axis_point1`, wide end) to the truncation
    /// point, followed by a cylinder up to the cylinder end point. With a ligand projection,
    /// markers for the ligand center, its projection and the apex are added, together with the
    /// projection segment, an axis segment, and the two distance annotations.
    pub fn build(
        geometry: &FunnelGeometry,
        ligand: Option<&Projection>,
        config: &VisualConfig,
    ) -> Self {
        let spec = geometry.spec();
        let mut primitives = vec![
            Primitive::Cone {
                name: names::CONE.to_string(),
                start: spec.axis_point1,
                end: geometry.truncation_point(),
                start_radius: geometry.bottom_radius(),
                end_radius: spec.cylinder_radius,
                color: config.funnel_color,
                transparency: config.funnel_transparency,
            },
            Primitive::Cone {
                name: names::CYLINDER.to_string(),
                start: geometry.truncation_point(),
                end: geometry.cylinder_end_point(),
                start_radius: spec.cylinder_radius,
                end_radius: spec.cylinder_radius,
                color: config.funnel_color,
                transparency: config.funnel_transparency,
            },
        ];

        if let Some(projection) = ligand {
            let axis_end = point_along(
                &spec.axis_point1,
                geometry.unit_axis(),
                config.axis_extension_factor * projection.scalar_offset,
            );

            primitives.extend([
                Primitive::Marker {
                    name: names::LIGAND_MARKER.to_string(),
                    position: projection.point,
                },
                Primitive::Marker {
                    name: names::PROJECTED_MARKER.to_string(),
                    position: projection.projected_point,
                },
                Primitive::Marker {
                    name: names::ORIGIN_MARKER.to_string(),
                    position: spec.axis_point1,
                },
                Primitive::Line {
                    name: names::PROJECTION_LINE.to_string(),
                    start: projection.point,
                    end: projection.projected_point,
                    radius: config.line_radius,
                    color: config.line_color,
                },
                Primitive::Line {
                    name: names::AXIS_LINE.to_string(),
                    start: spec.axis_point1,
                    end: axis_end,
                    radius: config.line_radius,
                    color: config.line_color,
                },
                Primitive::Distance {
                    name: names::LIGAND_TO_AXIS.to_string(),
                    from: names::LIGAND_MARKER.to_string(),
                    to: names::PROJECTED_MARKER.to_string(),
                },
                Primitive::Distance {
                    name: names::ALONG_AXIS.to_string(),
                    from: names::ORIGIN_MARKER.to_string(),
                    to: names::PROJECTED_MARKER.to_string(),
                },
            ]);
        }

        Self { primitives }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn get(&self, name: &str) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.name() == name)
    }
}
