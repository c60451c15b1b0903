//! Small 2D geometry toolkit: fixed-dimension vectors and transformable shapes.
//!
//! Layers, leaf-first
//! - `vector`: `Vector2`/`Vector3`/`Vector4` with elementwise and scalar arithmetic.
//! - `rotation`: degree/radian conversion and `rotate_point`.
//! - `shapes`: the `Shape2D` capability set, the shared `Transform2D`
//!   compositions, and `Circle`, `Rectangle`, `NGon`.
//!
//! Conventions
//! - Rotations are `f64` degrees, accumulated additively and never normalized.
//! - Trigonometry runs in `f64`; results are cast back to the element type
//!   with `as` semantics, so integer shapes truncate.

pub mod rotation;
pub mod scalar;
pub mod shapes;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use rotation::{rotate_point, to_degrees, to_radians, Angle};
pub use scalar::Scalar;
pub use shapes::{Circle, NGon, Placement, Rectangle, Shape, Shape2D, ShapeError, Transform2D};
pub use vector::{Vector2, Vector3, Vector4};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rotation::{rotate_point, to_degrees, to_radians, Angle};
    pub use crate::scalar::Scalar;
    pub use crate::shapes::{
        Circle, NGon, Placement, Rectangle, Shape, Shape2D, ShapeError, Transform2D,
    };
    pub use crate::vector::{Vector2, Vector3, Vector4};
}
