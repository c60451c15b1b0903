//! Positioned, rotatable 2D shapes.
//!
//! Purpose
//! - `Shape2D` is the per-shape capability set: size formulas, vertex
//!   generation and how the shape's own size field reacts to `scale`.
//! - `Transform2D` holds the compositions every shape shares (`rotate`,
//!   `rotate_from`, `move_by`, `move_to`, `scale_from`) and the
//!   `with_position`/`with_rotation` builders. It is blanket
//!   implemented for all `Shape2D` types, so no shape can re-derive them.
//!
//! Model
//! - A shape is `Placement { position, rotation }` plus its size fields.
//!   Transforms mutate the placement in place; `vertices()` only reads it and
//!   returns a freshly allocated list on every call.
//! - Rotation is unnormalized degrees (`Angle`).
//!
//! Text forms
//! - `describe()` / `Display`: `Circle { radius: 5, position: (0, 0), rotation: 0° }`.
//! - `json()`: `{"radius":5,"position":[0,0],"rotation":0}`; own fields first.
//!
//! Code cross-refs: `rotation::rotate_point`, `vector::Vector2`.

mod any;
pub(crate) mod cfg;
mod circle;
mod error;
mod ngon;
mod rectangle;
mod util;

pub use any::Shape;
pub use circle::Circle;
pub use error::ShapeError;
pub use ngon::NGon;
pub use rectangle::Rectangle;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rotation::{rotate_point, Angle};
use crate::scalar::Scalar;
use crate::vector::Vector2;

/// Global placement shared by every shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement<T> {
    pub position: Vector2<T>,
    /// Degrees, accumulated without reduction.
    pub rotation: Angle,
}

impl<T> Placement<T> {
    #[inline]
    pub fn new(position: Vector2<T>, rotation: Angle) -> Self {
        Self { position, rotation }
    }
}

impl<T: fmt::Display> Placement<T> {
    /// JSON fragment `"position":[x,y],"rotation":deg` (no braces).
    pub fn json(&self) -> String {
        format!(
            "\"position\":{},\"rotation\":{}",
            self.position.json(),
            self.rotation
        )
    }
}

impl<T: fmt::Display> fmt::Display for Placement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position: {}, rotation: {}°", self.position, self.rotation)
    }
}

/// Per-shape capabilities.
///
/// Object safe: `Box<dyn Shape2D<f64>>` works, and `Transform2D` is available
/// on it.
pub trait Shape2D<T: Scalar> {
    fn placement(&self) -> &Placement<T>;
    fn placement_mut(&mut self) -> &mut Placement<T>;

    fn area(&self) -> T;
    fn perimeter(&self) -> T;

    /// Vertices in global space; order is fixed per shape so consecutive
    /// entries share an edge.
    fn vertices(&self) -> Vec<Vector2<T>>;

    /// Resize about the shape's own position. Position is untouched.
    fn scale(&mut self, scalar: T);

    /// Name used in `describe()`.
    fn type_name(&self) -> &'static str;
    /// Own fields for `describe()`, e.g. `radius: 5`.
    fn fields(&self) -> String;
    /// Own fields for `json()`, e.g. `"radius":5`.
    fn fields_json(&self) -> String;

    #[inline]
    fn position(&self) -> Vector2<T> {
        self.placement().position
    }

    #[inline]
    fn rotation(&self) -> Angle {
        self.placement().rotation
    }

    fn describe(&self) -> String {
        format!(
            "{} {{ {}, {} }}",
            self.type_name(),
            self.fields(),
            self.placement()
        )
    }

    fn json(&self) -> String {
        format!("{{{},{}}}", self.fields_json(), self.placement().json())
    }
}

/// Transforms shared by every shape, built on `Shape2D` only.
pub trait Transform2D<T: Scalar>: Shape2D<T> {
    /// Builder form of `move_to`.
    fn with_position(mut self, position: impl Into<Vector2<T>>) -> Self
    where
        Self: Sized,
    {
        self.move_to(position);
        self
    }

    /// Builder form: replaces the rotation outright.
    fn with_rotation(mut self, degrees: Angle) -> Self
    where
        Self: Sized,
    {
        self.placement_mut().rotation = degrees;
        self
    }

    /// Add `degrees` to the rotation; position is untouched.
    #[inline]
    fn rotate(&mut self, degrees: Angle) {
        self.placement_mut().rotation += degrees;
    }

    /// Rotate by `degrees` and swing the position around `origin`.
    fn rotate_from(&mut self, degrees: Angle, origin: impl Into<Vector2<T>>) {
        let origin: Vector2<T> = origin.into();
        self.rotate(degrees);
        let placement = self.placement_mut();
        placement.position = rotate_point(placement.position, origin, degrees);
        tracing::trace!(
            degrees,
            origin = %origin,
            position = %placement.position,
            "rotate_from"
        );
    }

    /// `rotate_from(degrees, position)`: orientation only.
    #[inline]
    fn rotate_about_self(&mut self, degrees: Angle) {
        let here = self.position();
        self.rotate_from(degrees, here);
    }

    #[inline]
    fn move_by(&mut self, offset: impl Into<Vector2<T>>) {
        let offset: Vector2<T> = offset.into();
        let placement = self.placement_mut();
        placement.position = placement.position + offset;
    }

    #[inline]
    fn move_to(&mut self, destination: impl Into<Vector2<T>>) {
        self.placement_mut().position = destination.into();
    }

    /// Scale the size and the distance to `origin` by the same factor.
    fn scale_from(&mut self, scalar: T, origin: impl Into<Vector2<T>>) {
        let origin: Vector2<T> = origin.into();
        self.scale(scalar);
        let placement = self.placement_mut();
        placement.position = (placement.position - origin) * scalar + origin;
        tracing::trace!(
            scalar = %scalar,
            origin = %origin,
            position = %placement.position,
            "scale_from"
        );
    }
}

impl<T: Scalar, S: Shape2D<T> + ?Sized> Transform2D<T> for S {}
