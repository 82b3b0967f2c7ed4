use crate::core::models::funnel::{FunnelGeometry, FunnelRegion, Projection};
use crate::core::utils::geometry::{point_along, scalar_projection};
use nalgebra::Point3;

/// Projects `point` onto the funnel axis.
///
/// The scalar offset is signed and measured from `axis_point1` along the unit axis. No bounds
/// check is made against the drawn funnel: negative offsets and offsets past the cylinder end
/// are valid results that callers interpret themselves.
pub fn project(geometry: &FunnelGeometry, point: Point3<f64>) -> Projection {
    let origin = geometry.origin();
    let scalar_offset = scalar_projection(&origin, geometry.unit_axis(), &point);
    let projected_point = point_along(&origin, geometry.unit_axis(), scalar_offset);

    Projection {
        point,
        scalar_offset,
        projected_point,
    }
}

impl FunnelGeometry {
    /// Classifies a projection by the drawn section its axial offset falls into.
    ///
    /// Boundaries belong to the section nearer the apex: an offset of exactly `zcc`
    /// is reported as [`FunnelRegion::Cone`].
    pub fn region_of(&self, projection: &Projection) -> FunnelRegion {
        let offset = projection.scalar_offset;
        let zcc = self.spec.zcc;
        if offset < 0.0 {
            FunnelRegion::BeforeApex
        } else if offset <= zcc {
            FunnelRegion::Cone
        } else if offset <= zcc + self.cylinder_extension {
            FunnelRegion::Cylinder
        } else {
            FunnelRegion::Beyond
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::funnel::geometry::{GeometryConfig, derive_geometry};
    use crate::core::models::funnel::FunnelSpec;
    use nalgebra::Vector3;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn tilted_geometry() -> FunnelGeometry {
        let spec = FunnelSpec::new(
            18.0,
            0.6,
            1.5,
            Point3::new(-3.0, 7.5, 2.0),
            Point3::new(4.0, -1.0, 9.0),
        );
        derive_geometry(spec, &GeometryConfig::default()).unwrap()
    }

    #[test]
    fn projection_of_axis_origin_is_zero() {
        let geometry = tilted_geometry();
        let projection = project(&geometry, geometry.spec().axis_point1);
        assert!(f64_approx_equal(projection.scalar_offset, 0.0));
        assert!((projection.projected_point - geometry.spec().axis_point1).norm() < TOLERANCE);
    }

    #[test]
    fn projection_of_truncation_point_equals_zcc() {
        let geometry = tilted_geometry();
        let projection = project(&geometry, geometry.truncation_point());
        assert!(f64_approx_equal(projection.scalar_offset, geometry.spec().zcc));
    }

    #[test]
    fn projected_point_lies_on_the_axis_line() {
        let geometry = tilted_geometry();
        let queries = [
            Point3::new(10.0, 10.0, 10.0),
            Point3::new(-50.0, 3.0, 0.25),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1e3, -2e3, 5e2),
        ];
        for point in queries {
            let projection = project(&geometry, point);
            let along = projection.projected_point - geometry.spec().axis_point1;
            let cross = along.cross(&geometry.unit_axis().into_inner());
            assert!(cross.norm() < 1e-9 * along.norm().max(1.0));
        }
    }

    #[test]
    fn residual_is_perpendicular_to_the_axis() {
        let geometry = tilted_geometry();
        let projection = project(&geometry, Point3::new(5.0, 5.0, -5.0));
        let residual = projection.point - projection.projected_point;
        assert!(residual.dot(&geometry.unit_axis().into_inner()).abs() < 1e-9);
    }

    #[test]
    fn projection_offset_is_negative_behind_the_apex() {
        let spec = FunnelSpec::new(
            15.0,
            0.3,
            2.0,
            Point3::origin(),
            Point3::new(0.0, 0.0, 10.0),
        );
        let geometry = derive_geometry(spec, &GeometryConfig::default()).unwrap();
        let projection = project(&geometry, Point3::new(3.0, -4.0, -2.0));

        assert!(f64_approx_equal(projection.scalar_offset, -2.0));
        assert_eq!(projection.projected_point, Point3::new(0.0, 0.0, -2.0));
        assert!(f64_approx_equal(projection.radial_distance(), 5.0));
    }

    #[test]
    fn region_of_classifies_each_section() {
        let spec = FunnelSpec::new(
            15.0,
            0.3,
            2.0,
            Point3::origin(),
            Point3::new(0.0, 0.0, 1.0),
        );
        let geometry = derive_geometry(spec, &GeometryConfig::default()).unwrap();
        let region_at = |z: f64| geometry.region_of(&project(&geometry, Point3::new(1.0, 0.0, z)));

        assert_eq!(region_at(-0.5), FunnelRegion::BeforeApex);
        assert_eq!(region_at(0.0), FunnelRegion::Cone);
        assert_eq!(region_at(15.0), FunnelRegion::Cone);
        assert_eq!(region_at(20.0), FunnelRegion::Cylinder);
        assert_eq!(region_at(25.0), FunnelRegion::Cylinder);
        assert_eq!(region_at(25.5), FunnelRegion::Beyond);
    }

    #[test]
    fn projection_follows_axis_direction_not_point2_distance() {
        let near = FunnelSpec::new(5.0, 0.2, 1.0, Point3::origin(), Point3::new(0.0, 1.0, 0.0));
        let far = FunnelSpec {
            axis_point2: Point3::new(0.0, 100.0, 0.0),
            ..near
        };
        let config = GeometryConfig::default();
        let p = Point3::new(2.0, 7.0, -1.0);
        let a = project(&derive_geometry(near, &config).unwrap(), p);
        let b = project(&derive_geometry(far, &config).unwrap(), p);
        assert!(f64_approx_equal(a.scalar_offset, b.scalar_offset));
        assert!(f64_approx_equal(a.scalar_offset, 7.0));
        assert_eq!(Vector3::new(0.0, 7.0, 0.0), b.projected_point.coords);
    }
}
