//! Closed sum over the concrete shapes, for heterogeneous scenes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scalar::Scalar;
use crate::vector::Vector2;

use super::{Circle, NGon, Placement, Rectangle, Shape2D};

/// Any concrete shape. Serialized with a `"kind"` tag next to the shape's own
/// fields, e.g. `{"kind":"circle","radius":5.0,...}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape<T> {
    Circle(Circle<T>),
    Rectangle(Rectangle<T>),
    NGon(NGon<T>),
}

macro_rules! dispatch {
    ($self:expr, $shape:ident => $body:expr) => {
        match $self {
            Shape::Circle($shape) => $body,
            Shape::Rectangle($shape) => $body,
            Shape::NGon($shape) => $body,
        }
    };
}

impl<T: Scalar> Shape2D<T> for Shape<T> {
    fn placement(&self) -> &Placement<T> {
        dispatch!(self, s => s.placement())
    }

    fn placement_mut(&mut self) -> &mut Placement<T> {
        dispatch!(self, s => s.placement_mut())
    }

    fn area(&self) -> T {
        dispatch!(self, s => s.area())
    }

    fn perimeter(&self) -> T {
        dispatch!(self, s => s.perimeter())
    }

    fn vertices(&self) -> Vec<Vector2<T>> {
        dispatch!(self, s => s.vertices())
    }

    fn scale(&mut self, scalar: T) {
        dispatch!(self, s => s.scale(scalar))
    }

    fn type_name(&self) -> &'static str {
        dispatch!(self, s => s.type_name())
    }

    fn fields(&self) -> String {
        dispatch!(self, s => s.fields())
    }

    fn fields_json(&self) -> String {
        dispatch!(self, s => s.fields_json())
    }
}

impl<T> From<Circle<T>> for Shape<T> {
    fn from(c: Circle<T>) -> Self {
        Shape::Circle(c)
    }
}

impl<T> From<Rectangle<T>> for Shape<T> {
    fn from(r: Rectangle<T>) -> Self {
        Shape::Rectangle(r)
    }
}

impl<T> From<NGon<T>> for Shape<T> {
    fn from(n: NGon<T>) -> Self {
        Shape::NGon(n)
    }
}

impl<T: Scalar> fmt::Display for Shape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
