use crate::core::models::funnel::{FunnelGeometry, FunnelSpec};
use crate::core::utils::geometry::{point_along, unit_direction};
use serde::Deserialize;
use thiserror::Error;

/// Axis points closer than this (in Angstroms) cannot define a direction.
pub const AXIS_EPSILON: f64 = 1e-9;

/// Default axial length of the drawn cylinder section, in Angstroms.
pub const DEFAULT_CYLINDER_EXTENSION: f64 = 10.0;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error(
        "Degenerate funnel axis: axis points are {distance:.3e} Angstrom apart (must be finite and at least {minimum:.1e})"
    )]
    DegenerateAxis { distance: f64, minimum: f64 },
}

/// Tunables of the derived geometry that are not physical restraint parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct GeometryConfig {
    /// Axial length `L` of the cylinder drawn past the truncation point.
    pub cylinder_extension: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            cylinder_extension: DEFAULT_CYLINDER_EXTENSION,
        }
    }
}

/// Derives the funnel geometry from a spec.
///
/// # Arguments
///
/// * `spec` - The funnel parameters, in Angstroms and radians.
/// * `config` - Non-physical settings such as the drawn cylinder length.
///
/// # Return
///
/// The unit axis, the bottom (wide-end) radius of the cone, the truncation point where the
/// cone meets the cylinder, and the end point of the drawn cylinder.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateAxis`] if the two axis points coincide or their
/// separation is not finite, so that no NaN axis is ever produced. `alpha` is not range-checked: as it approaches π/2 the bottom
/// radius grows without bound.
pub fn derive_geometry(
    spec: FunnelSpec,
    config: &GeometryConfig,
) -> Result<FunnelGeometry, GeometryError> {
    let unit_axis = unit_direction(&spec.axis_point1, &spec.axis_point2, AXIS_EPSILON)
        .ok_or_else(|| GeometryError::DegenerateAxis {
            distance: (spec.axis_point2 - spec.axis_point1).norm(),
            minimum: AXIS_EPSILON,
        })?;

    let bottom_radius = spec.zcc * spec.alpha.tan() + spec.cylinder_radius;
    let truncation_point = point_along(&spec.axis_point1, &unit_axis, spec.zcc);
    let cylinder_end_point = point_along(&truncation_point, &unit_axis, config.cylinder_extension);

    Ok(FunnelGeometry {
        spec,
        unit_axis,
        bottom_radius,
        truncation_point,
        cylinder_end_point,
        cylinder_extension: config.cylinder_extension,
    })
}
