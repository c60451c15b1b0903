use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::rotation::Angle;
use crate::scalar::Scalar;
use crate::vector::Vector2;

use super::cfg::MIN_POLYGON_VERTICES;
use super::util::radial_vertices;
use super::{Placement, Shape2D, ShapeError};

/// Regular polygon with `sides` vertices on a circle of circumradius `radius`.
///
/// Invariants:
/// - `sides >= 3`, enforced by `new` and by deserialization; the field is
///   private so it cannot be broken afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NGonRepr<T>")]
pub struct NGon<T> {
    sides: usize,
    pub radius: T,
    #[serde(flatten)]
    pub placement: Placement<T>,
}

#[derive(Deserialize)]
struct NGonRepr<T> {
    sides: usize,
    radius: T,
    #[serde(flatten)]
    placement: Placement<T>,
}

impl<T> TryFrom<NGonRepr<T>> for NGon<T> {
    type Error = ShapeError;

    fn try_from(repr: NGonRepr<T>) -> Result<Self, Self::Error> {
        if repr.sides < MIN_POLYGON_VERTICES {
            return Err(ShapeError::too_small(
                "sides",
                repr.sides,
                MIN_POLYGON_VERTICES,
            ));
        }
        Ok(Self {
            sides: repr.sides,
            radius: repr.radius,
            placement: repr.placement,
        })
    }
}

impl<T: Scalar> NGon<T> {
    /// Errors with `ShapeError::InvalidParameter` for `sides < 3`.
    pub fn new(sides: usize, radius: T) -> Result<Self, ShapeError> {
        NGonRepr {
            sides,
            radius,
            placement: Placement::default(),
        }
        .try_into()
    }

    #[inline]
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// `360 / sides` degrees.
    #[inline]
    pub fn central_angle(&self) -> Angle {
        360.0 / self.sides as f64
    }

    /// `180 - central_angle` degrees.
    #[inline]
    pub fn inner_angle(&self) -> Angle {
        180.0 - self.central_angle()
    }

    /// Edge length `2 sin(π/N) r`.
    pub fn edge(&self) -> T {
        T::from_f64(self.edge_f64())
    }

    /// Distance from the center to an edge midpoint, `r cos(π/N)`.
    pub fn inradius(&self) -> T {
        T::from_f64(self.radius.to_f64() * self.half_central().cos())
    }

    #[inline]
    fn half_central(&self) -> f64 {
        PI / self.sides as f64
    }

    #[inline]
    fn edge_f64(&self) -> f64 {
        2.0 * self.half_central().sin() * self.radius.to_f64()
    }
}

impl<T: Scalar> Shape2D<T> for NGon<T> {
    fn placement(&self) -> &Placement<T> {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement<T> {
        &mut self.placement
    }

    /// `N e² / (4 tan(π/N))`.
    fn area(&self) -> T {
        let n = self.sides as f64;
        let e = self.edge_f64();
        T::from_f64((n * e * e) / (4.0 * self.half_central().tan()))
    }

    fn perimeter(&self) -> T {
        T::from_f64(self.edge_f64() * self.sides as f64)
    }

    /// Same walk as `Circle`: start at `position + (0, radius)`, step by
    /// `-central_angle`, then turn by `rotation`.
    fn vertices(&self) -> Vec<Vector2<T>> {
        radial_vertices(&self.placement, self.radius, self.sides)
    }

    fn scale(&mut self, scalar: T) {
        self.radius = self.radius * scalar;
    }

    fn type_name(&self) -> &'static str {
        "NGon"
    }

    fn fields(&self) -> String {
        format!("sides: {}, radius: {}", self.sides, self.radius)
    }

    fn fields_json(&self) -> String {
        format!("\"sides\":{},\"radius\":{}", self.sides, self.radius)
    }
}

impl<T: Scalar> fmt::Display for NGon<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
