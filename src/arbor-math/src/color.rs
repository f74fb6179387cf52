use std::fmt;

use crate::{write_components, Vector3, Vector4};

/// An RGB color with floating-point channels.
///
/// Colors share their storage layout with [`Vector3`] and convert
/// into it losslessly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color3 {
    /// The red channel.
    pub r: f32,
    /// The green channel.
    pub g: f32,
    /// The blue channel.
    pub b: f32,
}

/// An RGBA color with floating-point channels.
///
/// Colors share their storage layout with [`Vector4`] and convert
/// into it losslessly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color4 {
    /// The red channel.
    pub r: f32,
    /// The green channel.
    pub g: f32,
    /// The blue channel.
    pub b: f32,
    /// The alpha channel.
    pub a: f32,
}

impl Color3 {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Color4 {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Vector3> for Color3 {
    #[inline]
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Color3> for Vector3 {
    #[inline]
    fn from(c: Color3) -> Self {
        Vector3::new(c.r, c.g, c.b)
    }
}

impl From<Vector4> for Color4 {
    #[inline]
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Color4> for Vector4 {
    #[inline]
    fn from(c: Color4) -> Self {
        Vector4::new(c.r, c.g, c.b, c.a)
    }
}

impl fmt::Display for Color3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Color(")?;
        write_components(f, &[self.r, self.g, self.b])?;
        f.write_str(")")
    }
}

impl fmt::Display for Color4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Color(")?;
        write_components(f, &[self.r, self.g, self.b, self.a])?;
        f.write_str(")")
    }
}
