use crate::rotation::rotate_point;
use crate::scalar::Scalar;
use crate::vector::Vector2;

use super::Placement;

/// Rotate every point about `pivot`; no-op for `degrees == 0.0`.
pub(crate) fn rotate_all<T: Scalar>(points: &mut [Vector2<T>], pivot: Vector2<T>, degrees: f64) {
    if degrees == 0.0 {
        return;
    }
    for p in points.iter_mut() {
        *p = rotate_point(*p, pivot, degrees);
    }
}

/// `count` points on the circle of `radius` around `placement.position`.
///
/// Start at `position + (0, radius)` and step by `-360/count` degrees, then
/// apply the shape's own rotation to the whole list.
pub(crate) fn radial_vertices<T: Scalar>(
    placement: &Placement<T>,
    radius: T,
    count: usize,
) -> Vec<Vector2<T>> {
    let center = placement.position;
    let start = Vector2::new(center.x, center.y + radius);
    let step = -360.0 / count as f64;
    let mut points: Vec<Vector2<T>> = (0..count)
        .map(|k| rotate_point(start, center, step * k as f64))
        .collect();
    rotate_all(&mut points, center, placement.rotation);
    points
}
