use nalgebra::{Point3, Unit, Vector3};

/// Parameters of a single funnel restraint, expressed in Angstroms and radians.
///
/// A `FunnelSpec` is the raw parameter set read from a restraint-definition file.
/// It is a plain value: nothing about it is validated at construction time, and the
/// expected ranges (`zcc > 0`, `0 < alpha < π/2`, `cylinder_radius > 0`, distinct axis
/// points) are the responsibility of whoever writes the restraint file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunnelSpec {
    /// Axial distance from `axis_point1` to the cone/cylinder transition, in Angstroms.
    pub zcc: f64,
    /// Half-angle of the cone measured from the symmetry axis, in radians.
    pub alpha: f64,
    /// Radius of the cylindrical section, in Angstroms.
    pub cylinder_radius: f64,
    /// First point of the symmetry axis; the cone apex sits here.
    pub axis_point1: Point3<f64>,
    /// Second point of the symmetry axis; only its direction from `axis_point1` matters.
    pub axis_point2: Point3<f64>,
}

impl FunnelSpec {
    pub fn new(
        zcc: f64,
        alpha: f64,
        cylinder_radius: f64,
        axis_point1: Point3<f64>,
        axis_point2: Point3<f64>,
    ) -> Self {
        Self {
            zcc,
            alpha,
            cylinder_radius,
            axis_point1,
            axis_point2,
        }
    }
}

/// Cone and cylinder geometry derived from exactly one [`FunnelSpec`].
///
/// Instances are produced by [`derive_geometry`](crate::core::funnel::derive_geometry) and are
/// immutable afterwards. A changed spec requires deriving a fresh geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunnelGeometry {
    pub(crate) spec: FunnelSpec,
    pub(crate) unit_axis: Unit<Vector3<f64>>,
    pub(crate) bottom_radius: f64,
    pub(crate) truncation_point: Point3<f64>,
    pub(crate) cylinder_end_point: Point3<f64>,
    pub(crate) cylinder_extension: f64,
}

impl FunnelGeometry {
    /// The funnel parameters this geometry was derived from.
    pub fn spec(&self) -> &FunnelSpec {
        &self.spec
    }

    /// Unit vector pointing from `axis_point1` towards `axis_point2`.
    pub fn unit_axis(&self) -> &Unit<Vector3<f64>> {
        &self.unit_axis
    }

    /// Radius of the wide end of the cone: `zcc * tan(alpha) + cylinder_radius`.
    pub fn bottom_radius(&self) -> f64 {
        self.bottom_radius
    }

    /// Point on the axis where the cone turns into the cylinder.
    pub fn truncation_point(&self) -> Point3<f64> {
        self.truncation_point
    }

    /// End of the drawn cylinder, `cylinder_extension` past the truncation point.
    pub fn cylinder_end_point(&self) -> Point3<f64> {
        self.cylinder_end_point
    }

    /// Axial length of the drawn cylinder section.
    pub fn cylinder_extension(&self) -> f64 {
        self.cylinder_extension
    }

    /// Origin of the axis parametrization (the cone apex).
    pub fn origin(&self) -> Point3<f64> {
        self.spec.axis_point1
    }
}

/// Where an axial offset falls relative to the drawn funnel sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunnelRegion {
    /// Negative offset: the point lies behind the cone apex.
    BeforeApex,
    /// Between the apex and the truncation point.
    Cone,
    /// Between the truncation point and the end of the drawn cylinder.
    Cylinder,
    /// Past the end of the drawn cylinder.
    Beyond,
}

impl std::fmt::Display for FunnelRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FunnelRegion::BeforeApex => "before-apex",
            FunnelRegion::Cone => "cone",
            FunnelRegion::Cylinder => "cylinder",
            FunnelRegion::Beyond => "beyond",
        };
        f.write_str(label)
    }
}

/// Projection of a query point onto the funnel axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// The query point, e.g. a ligand center of mass.
    pub point: Point3<f64>,
    /// Signed distance from `axis_point1` along the unit axis.
    pub scalar_offset: f64,
    /// Foot of the perpendicular from `point` onto the axis line.
    pub projected_point: Point3<f64>,
}

impl Projection {
    /// Perpendicular distance between the query point and the axis line.
    pub fn radial_distance(&self) -> f64 {
        (self.point - self.projected_point).norm()
    }
}
