//! Fixed-dimension vectors (2, 3 and 4 components).
//!
//! Purpose
//! - Plain value tuples with named components (`x, y`, `x, y, z`, `x, y, z, w`)
//!   for cartesian math without pulling a full linear-algebra layer into
//!   caller code.
//!
//! Model
//! - `define_vector!` is the single source of truth: the component list drives
//!   the struct, constructors, conversions, the operator set and both text
//!   forms. `Vector2`, `Vector3` and `Vector4` are instantiations of it.
//! - Every operator in `+ - * / % & | ^ << >>` exists with a vector and a
//!   scalar right-hand side, each in binary (`a + b`) and compound (`a += b`)
//!   form. An operator is only available when the element type has it.
//! - Division or remainder by zero follows the element type: floats produce
//!   `inf`/`NaN`, integers panic.
//!
//! Text forms
//! - `Display`: `(c0, c1, ...)`.
//! - `json()`: `[c0,c1,...]`. serde uses the same array layout.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::scalar::Scalar;

/// Elementwise operator family for one vector type.
macro_rules! impl_elementwise_op {
    ($name:ident { $($field:ident),+ }, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: ::core::ops::$Op<Output = T>> ::core::ops::$Op for $name<T> {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: Self) -> Self::Output {
                Self {
                    $($field: ::core::ops::$Op::$op(self.$field, rhs.$field)),+
                }
            }
        }

        impl<T: ::core::ops::$Op<Output = T> + Copy> ::core::ops::$Op<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn $op(self, scalar: T) -> Self::Output {
                Self {
                    $($field: ::core::ops::$Op::$op(self.$field, scalar)),+
                }
            }
        }

        impl<T: ::core::ops::$OpAssign> ::core::ops::$OpAssign for $name<T> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                $(::core::ops::$OpAssign::$op_assign(&mut self.$field, rhs.$field);)+
            }
        }

        impl<T: ::core::ops::$OpAssign + Copy> ::core::ops::$OpAssign<T> for $name<T> {
            #[inline]
            fn $op_assign(&mut self, scalar: T) {
                $(::core::ops::$OpAssign::$op_assign(&mut self.$field, scalar);)+
            }
        }
    };
}

macro_rules! as_elem {
    ($_field:ident) => {
        T
    };
}

macro_rules! define_vector {
    ($(#[$meta:meta])* $name:ident, $na:ident, $n:literal { $($field:ident),+ }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name<T> {
            $(pub $field: T,)+
        }

        impl<T> $name<T> {
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Apply `f` to every component.
            #[inline]
            pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> $name<U> {
                $name { $($field: f(self.$field)),+ }
            }
        }

        impl<T: fmt::Display> $name<T> {
            /// JSON array form, e.g. `[1,2]`.
            pub fn json(&self) -> String {
                format!("[{}]", [$(self.$field.to_string()),+].join(","))
            }
        }

        impl<T: fmt::Display> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "({})", [$(self.$field.to_string()),+].join(", "))
            }
        }

        impl<T> From<[T; $n]> for $name<T> {
            #[inline]
            fn from([$($field),+]: [T; $n]) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T> From<$name<T>> for [T; $n] {
            #[inline]
            fn from(v: $name<T>) -> Self {
                [$(v.$field),+]
            }
        }

        impl<T> From<($(as_elem!($field)),+)> for $name<T> {
            #[inline]
            fn from(($($field),+): ($(as_elem!($field)),+)) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T: nalgebra::Scalar> From<$name<T>> for nalgebra::$na<T> {
            #[inline]
            fn from(v: $name<T>) -> Self {
                let components: [T; $n] = v.into();
                nalgebra::$na::from(components)
            }
        }

        impl<T: nalgebra::Scalar> From<nalgebra::$na<T>> for $name<T> {
            #[inline]
            fn from(v: nalgebra::$na<T>) -> Self {
                let components: [T; $n] = v.into();
                Self::from(components)
            }
        }

        impl<T: Serialize> Serialize for $name<T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                [$(&self.$field),+].serialize(serializer)
            }
        }

        impl<'de, T: Deserialize<'de>> Deserialize<'de> for $name<T> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <[T; $n]>::deserialize(deserializer).map(Self::from)
            }
        }

        impl<T: ::core::ops::Neg<Output = T>> ::core::ops::Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }

        impl_elementwise_op!($name { $($field),+ }, Add, add, AddAssign, add_assign);
        impl_elementwise_op!($name { $($field),+ }, Sub, sub, SubAssign, sub_assign);
        impl_elementwise_op!($name { $($field),+ }, Mul, mul, MulAssign, mul_assign);
        impl_elementwise_op!($name { $($field),+ }, Div, div, DivAssign, div_assign);
        impl_elementwise_op!($name { $($field),+ }, Rem, rem, RemAssign, rem_assign);
        impl_elementwise_op!($name { $($field),+ }, BitAnd, bitand, BitAndAssign, bitand_assign);
        impl_elementwise_op!($name { $($field),+ }, BitOr, bitor, BitOrAssign, bitor_assign);
        impl_elementwise_op!($name { $($field),+ }, BitXor, bitxor, BitXorAssign, bitxor_assign);
        impl_elementwise_op!($name { $($field),+ }, Shl, shl, ShlAssign, shl_assign);
        impl_elementwise_op!($name { $($field),+ }, Shr, shr, ShrAssign, shr_assign);
    };
}

define_vector!(
    /// Two-component vector; positions and sizes of shapes.
    Vector2, Vector2, 2 { x, y }
);
define_vector!(
    /// Three-component vector.
    Vector3, Vector3, 3 { x, y, z }
);
define_vector!(
    /// Four-component vector.
    Vector4, Vector4, 4 { x, y, z, w }
);

impl<T: Scalar> Vector2<T> {
    /// Components widened to `f64`.
    #[inline]
    pub fn to_f64(self) -> Vector2<f64> {
        self.map(Scalar::to_f64)
    }

    /// Components narrowed from `f64` with `as` semantics.
    #[inline]
    pub fn from_f64(v: Vector2<f64>) -> Self {
        v.map(T::from_f64)
    }

    /// Euclidean distance, computed in `f64`.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        let d = self.to_f64() - other.to_f64();
        d.x.hypot(d.y)
    }
}
