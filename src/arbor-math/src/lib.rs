//! Small fixed-size math types used as configuration payloads.
//!
//! These are plain value types: they carry their components, compare
//! element-wise and know how to print themselves. No arithmetic beyond
//! what conversions require is provided.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::fmt;

mod angle;
pub use angle::*;

mod color;
pub use color::*;

mod matrix;
pub use matrix::*;

mod quaternion;
pub use quaternion::*;

mod vector;
pub use vector::*;

/// Writes `components` separated by `", "`.
pub(crate) fn write_components(f: &mut fmt::Formatter<'_>, components: &[f32]) -> fmt::Result {
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}
