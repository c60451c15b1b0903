//! Degree/radian conversion and point rotation.
//!
//! Every shape funnels its orientation math through `rotate_point`, so the
//! sign convention lives in exactly one place: the standard matrix
//! `[cos -sin; sin cos]` applied to `point - origin`. With a y-down screen
//! frame a positive angle turns clockwise.

use nalgebra::Rotation2;

use crate::scalar::Scalar;
use crate::vector::Vector2;

/// Rotation in degrees. Accumulated additively; never reduced into `[0, 360)`.
pub type Angle = f64;

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    (radians * 180.0) / std::f64::consts::PI
}

/// Rotate `point` by `degrees` around `origin`.
///
/// The offset `point - origin` is taken in `f64`, rotated, truncated the way the
/// element type's cast would, and re-anchored at `origin`. Unsigned points may
/// therefore pivot around larger origins. `degrees == 0.0` (exact) returns
/// `point` untouched.
pub fn rotate_point<T: Scalar>(point: Vector2<T>, origin: Vector2<T>, degrees: Angle) -> Vector2<T> {
    if degrees == 0.0 {
        return point;
    }
    let anchor = origin.to_f64();
    let diff = point.to_f64() - anchor;
    let rotated = Rotation2::new(to_radians(degrees)) * nalgebra::Vector2::new(diff.x, diff.y);
    let offset = Vector2::from(rotated).map(T::truncate_f64);
    Vector2::<T>::from_f64(offset + anchor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn degree_radian_round_trip() {
        assert!((to_radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
        assert!((to_degrees(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert!((to_degrees(to_radians(-725.5)) + 725.5).abs() < 1e-9);
    }

    #[test]
    fn quarter_turn_about_origin() {
        let p = rotate_point(Vector2::new(1.0_f64, 0.0), Vector2::default(), 90.0);
        assert!((p.x - 0.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_about_offset_pivot() {
        // (5,5) around (10,10) by 30°
        let p = rotate_point(Vector2::new(5.0_f64, 5.0), Vector2::new(10.0, 10.0), 30.0);
        let (s, c) = to_radians(30.0).sin_cos();
        assert!((p.x - (10.0 + (-5.0 * c + 5.0 * s))).abs() < 1e-12);
        assert!((p.y - (10.0 + (-5.0 * s - 5.0 * c))).abs() < 1e-12);
        assert!((p.distance(Vector2::new(10.0, 10.0)) - 50f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn integer_points_truncate_offset_before_reanchoring() {
        // offset (-5,-5) rotated 30° is (-1.83.., -6.83..), truncated to (-1,-6)
        let p = rotate_point(Vector2::new(5, 5), Vector2::new(10, 10), 30.0);
        assert_eq!(p, Vector2::new(9, 4));
    }

    #[test]
    fn unsigned_points_pivot_around_larger_origins() {
        let p = rotate_point(Vector2::new(5u32, 5), Vector2::new(10, 10), 30.0);
        assert_eq!(p, Vector2::new(9, 4));
        // offset (-8,-1) rotated 30° is (-6.43.., -4.87..), truncated to (-6,-4)
        let q = rotate_point(Vector2::new(2u8, 9), Vector2::new(10, 10), 30.0);
        assert_eq!(q, Vector2::new(4, 6));
    }

    #[test]
    fn full_turns_are_not_normalized_but_land_home() {
        let p = rotate_point(Vector2::new(2.0_f64, -3.0), Vector2::new(1.0, 1.0), 720.0);
        assert!((p.x - 2.0).abs() < 1e-9 && (p.y + 3.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn zero_degrees_is_exact_identity(
            px in -1e6f64..1e6, py in -1e6f64..1e6,
            ox in -1e6f64..1e6, oy in -1e6f64..1e6,
        ) {
            let p = Vector2::new(px, py);
            prop_assert_eq!(rotate_point(p, Vector2::new(ox, oy), 0.0), p);
        }

        #[test]
        fn rotation_preserves_distance_to_pivot(
            px in -1e3f64..1e3, py in -1e3f64..1e3,
            ox in -1e3f64..1e3, oy in -1e3f64..1e3,
            deg in -1080f64..1080.0,
        ) {
            let p = Vector2::new(px, py);
            let o = Vector2::new(ox, oy);
            let q = rotate_point(p, o, deg);
            prop_assert!((q.distance(o) - p.distance(o)).abs() < 1e-9);
        }
    }
}
