use std::{f32::consts::PI, fmt};

/// An angle in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Rad(pub f32);

impl Rad {
    /// Converts an angle given in degrees.
    #[inline]
    pub fn from_degrees(deg: f32) -> Self {
        Self(deg * PI / 180.0)
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn to_degrees(self) -> f32 {
        self.0 * 180.0 / PI
    }
}

impl From<f32> for Rad {
    #[inline]
    fn from(v: f32) -> Self {
        Self(v)
    }
}

impl From<Rad> for f32 {
    #[inline]
    fn from(v: Rad) -> Self {
        v.0
    }
}

impl fmt::Display for Rad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rad({})", self.0)
    }
}
