use nalgebra::{Point3, Unit, Vector3};

/// Unit direction from `from` to `to`.
///
/// Returns `None` when the two points are closer than `min_norm`, or when their separation is
/// not finite and cannot be normalized.
pub fn unit_direction(
    from: &Point3<f64>,
    to: &Point3<f64>,
    min_norm: f64,
) -> Option<Unit<Vector3<f64>>> {
    let difference = to - from;
    if !difference.norm().is_finite() {
        return None;
    }
    Unit::try_new(difference, min_norm)
}

/// Point reached by walking `distance` along `axis` starting at `origin`.
#[inline]
pub fn point_along(origin: &Point3<f64>, axis: &Unit<Vector3<f64>>, distance: f64) -> Point3<f64> {
    origin + axis.into_inner() * distance
}

/// Signed length of the component of `point - origin` along `axis`.
#[inline]
pub fn scalar_projection(
    origin: &Point3<f64>,
    axis: &Unit<Vector3<f64>>,
    point: &Point3<f64>,
) -> f64 {
    axis.dot(&(point - origin))
}

/// Weighted average of a set of points.
///
/// Returns `None` when the iterator is empty or the total weight is not positive.
pub fn weighted_centroid<I>(weighted_points: I) -> Option<Point3<f64>>
where
    I: IntoIterator<Item = (Point3<f64>, f64)>,
{
    let (weighted_sum, total_weight) = weighted_points.into_iter().fold(
        (Vector3::zeros(), 0.0),
        |(sum, total), (point, weight)| (sum + point.coords * weight, total + weight),
    );

    if total_weight > 0.0 {
        Some(Point3::from(weighted_sum / total_weight))
    } else {
        None
    }
}
