use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scalar::Scalar;
use crate::vector::Vector2;

use super::util::rotate_all;
use super::{Placement, Shape2D};

/// Rectangle of `size = (width, height)` centered at `placement.position`,
/// axis-aligned before `rotation` is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle<T> {
    pub size: Vector2<T>,
    #[serde(flatten)]
    pub placement: Placement<T>,
}

impl<T: Scalar> Rectangle<T> {
    pub fn new(width: T, height: T) -> Self {
        Self::from_size(Vector2::new(width, height))
    }

    pub fn from_size(size: impl Into<Vector2<T>>) -> Self {
        Self {
            size: size.into(),
            placement: Placement::default(),
        }
    }

    #[inline]
    pub fn width(&self) -> T {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> T {
        self.size.y
    }

    /// Independent factors for width and height.
    pub fn scale_xy(&mut self, sx: T, sy: T) {
        self.size.x = self.size.x * sx;
        self.size.y = self.size.y * sy;
    }

    pub fn scale_by(&mut self, factors: impl Into<Vector2<T>>) {
        let factors: Vector2<T> = factors.into();
        self.size = self.size * factors;
    }
}

impl<T: Scalar> Shape2D<T> for Rectangle<T> {
    fn placement(&self) -> &Placement<T> {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement<T> {
        &mut self.placement
    }

    fn area(&self) -> T {
        self.size.x * self.size.y
    }

    fn perimeter(&self) -> T {
        let half = self.size.x + self.size.y;
        half + half
    }

    /// Corners `position ± size/2` in the order top-left, top-right,
    /// bottom-right, bottom-left (y grows downward), turned about `position`.
    fn vertices(&self) -> Vec<Vector2<T>> {
        let two = T::one() + T::one();
        let half = self.size / two;
        let c = self.placement.position;
        let mut corners = vec![
            Vector2::new(c.x - half.x, c.y - half.y),
            Vector2::new(c.x + half.x, c.y - half.y),
            Vector2::new(c.x + half.x, c.y + half.y),
            Vector2::new(c.x - half.x, c.y + half.y),
        ];
        rotate_all(&mut corners, c, self.placement.rotation);
        corners
    }

    fn scale(&mut self, scalar: T) {
        self.size = self.size * scalar;
    }

    fn type_name(&self) -> &'static str {
        "Rectangle"
    }

    fn fields(&self) -> String {
        format!("size: {}", self.size)
    }

    fn fields_json(&self) -> String {
        format!("\"size\":{}", self.size.json())
    }
}

impl<T: Scalar> fmt::Display for Rectangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
