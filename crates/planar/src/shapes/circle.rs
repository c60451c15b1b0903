use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::scalar::Scalar;
use crate::vector::Vector2;

use super::cfg::{DEFAULT_CIRCLE_RESOLUTION, MIN_POLYGON_VERTICES};
use super::util::radial_vertices;
use super::{Placement, Shape2D, ShapeError};

/// Circle of `radius` centered at `placement.position`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle<T> {
    pub radius: T,
    #[serde(flatten)]
    pub placement: Placement<T>,
}

impl<T: Scalar> Circle<T> {
    /// Circle at the global origin, unrotated.
    pub fn new(radius: T) -> Self {
        Self {
            radius,
            placement: Placement::default(),
        }
    }

    #[inline]
    pub fn diameter(&self) -> T {
        self.radius + self.radius
    }

    /// `resolution` points on the circle, starting at `position + (0, radius)`
    /// and stepping by `-360/resolution` degrees, then turned by `rotation`.
    ///
    /// Errors with `ShapeError::InvalidParameter` for `resolution < 3`.
    pub fn vertices_with(&self, resolution: usize) -> Result<Vec<Vector2<T>>, ShapeError> {
        if resolution < MIN_POLYGON_VERTICES {
            return Err(ShapeError::too_small(
                "resolution",
                resolution,
                MIN_POLYGON_VERTICES,
            ));
        }
        Ok(radial_vertices(&self.placement, self.radius, resolution))
    }
}

impl<T: Scalar> Shape2D<T> for Circle<T> {
    fn placement(&self) -> &Placement<T> {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement<T> {
        &mut self.placement
    }

    fn area(&self) -> T {
        let r = self.radius.to_f64();
        T::from_f64(PI * r * r)
    }

    fn perimeter(&self) -> T {
        T::from_f64(2.0 * PI * self.radius.to_f64())
    }

    /// `vertices_with(64)`.
    fn vertices(&self) -> Vec<Vector2<T>> {
        radial_vertices(&self.placement, self.radius, DEFAULT_CIRCLE_RESOLUTION)
    }

    fn scale(&mut self, scalar: T) {
        self.radius = self.radius * scalar;
    }

    fn type_name(&self) -> &'static str {
        "Circle"
    }

    fn fields(&self) -> String {
        format!("radius: {}", self.radius)
    }

    fn fields_json(&self) -> String {
        format!("\"radius\":{}", self.radius)
    }
}

impl<T: Scalar> fmt::Display for Circle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
