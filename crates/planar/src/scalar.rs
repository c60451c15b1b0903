//! Element types accepted by the rotation routines and the shapes.

use std::fmt::{Debug, Display};

use num_traits::{AsPrimitive, Num};

/// Numeric element type for shape coordinates and sizes.
///
/// Geometry that needs trigonometry converts to `f64`, computes, and converts
/// back with `as` semantics (truncation toward zero for integers, saturation
/// on overflow). Implemented for every primitive integer and float.
pub trait Scalar: Num + Copy + PartialOrd + Debug + Display + Default + AsPrimitive<f64> {
    /// `value as Self`.
    fn from_f64(value: f64) -> Self;

    #[inline]
    fn to_f64(self) -> f64 {
        self.as_()
    }

    /// `value` with whatever `from_f64` would drop removed, kept in `f64`:
    /// truncated toward zero for integers, unchanged for floats. Lets callers
    /// apply integer truncation to a signed offset before re-anchoring it, which
    /// unsigned types cannot represent directly.
    #[inline]
    fn truncate_f64(value: f64) -> f64 {
        if Self::from_f64(0.5) == Self::zero() {
            value.trunc()
        } else {
            value
        }
    }
}

impl<T> Scalar for T
where
    T: Num + Copy + PartialOrd + Debug + Display + Default + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    #[inline]
    fn from_f64(value: f64) -> Self {
        value.as_()
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn integer_conversion_truncates() {
        assert_eq!(<i32 as Scalar>::from_f64(2.9), 2);
        assert_eq!(<i32 as Scalar>::from_f64(-2.9), -2);
        assert_eq!(<u8 as Scalar>::from_f64(300.0), 255);
        assert_eq!(7i64.to_f64(), 7.0);
    }

    #[test]
    fn float_conversion_is_exact_for_f64() {
        let v = 0.1 + 0.2;
        assert_eq!(<f64 as Scalar>::from_f64(v), v);
        assert!((<f32 as Scalar>::from_f64(1.5) - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn truncation_in_f64_follows_the_element_type() {
        assert_eq!(<i32 as Scalar>::truncate_f64(-6.83), -6.0);
        assert_eq!(<u32 as Scalar>::truncate_f64(-1.83), -1.0);
        assert_eq!(<f64 as Scalar>::truncate_f64(-1.83), -1.83);
        assert_eq!(<f32 as Scalar>::truncate_f64(2.5), 2.5);
    }
}
