use std::fmt;

use crate::write_components;

macro_rules! impl_vector {
    ($name:ident, $len:literal, $($field:ident),+) => {
        impl $name {
            /// Creates a new vector from its components.
            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// Returns the components of the vector in order.
            #[inline]
            pub const fn to_array(self) -> [f32; $len] {
                [$(self.$field),+]
            }

            /// Builds a vector from its components in order.
            #[inline]
            pub const fn from_array(a: [f32; $len]) -> Self {
                let [$($field),+] = a;
                Self { $($field),+ }
            }
        }

        impl From<[f32; $len]> for $name {
            #[inline]
            fn from(a: [f32; $len]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$name> for [f32; $len] {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("Vector(")?;
                write_components(f, &self.to_array())?;
                f.write_str(")")
            }
        }
    };
}

/// A two-dimensional vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// The X coordinate.
    pub x: f32,
    /// The Y coordinate.
    pub y: f32,
}

impl_vector!(Vector2, 2, x, y);

/// A three-dimensional vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    /// The X coordinate.
    pub x: f32,
    /// The Y coordinate.
    pub y: f32,
    /// The Z coordinate.
    pub z: f32,
}

impl_vector!(Vector3, 3, x, y, z);

/// A four-dimensional vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector4 {
    /// The X coordinate.
    pub x: f32,
    /// The Y coordinate.
    pub y: f32,
    /// The Z coordinate.
    pub z: f32,
    /// The W coordinate.
    pub w: f32,
}

impl_vector!(Vector4, 4, x, y, z, w);
