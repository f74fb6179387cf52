use std::fmt;

use crate::{write_components, Vector3};

/// A quaternion representing an orientation.
///
/// The default value is the identity rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    /// The vector part.
    pub vector: Vector3,
    /// The scalar part.
    pub scalar: f32,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(Vector3::new(0.0, 0.0, 0.0), 1.0);

    #[inline]
    pub const fn new(vector: Vector3, scalar: f32) -> Self {
        Self { vector, scalar }
    }

    /// Returns the components in `[x, y, z, w]` order.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.vector.x, self.vector.y, self.vector.z, self.scalar]
    }

    /// Builds a quaternion from components in `[x, y, z, w]` order.
    #[inline]
    pub const fn from_array([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(Vector3::new(x, y, z), w)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Quaternion({")?;
        write_components(f, &self.vector.to_array())?;
        write!(f, "}}, {})", self.scalar)
    }
}
