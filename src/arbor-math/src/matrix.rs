use std::fmt;

use crate::write_components;

macro_rules! impl_matrix {
    ($name:ident, $n:literal, $len:literal) => {
        impl $name {
            /// The identity matrix.
            pub const IDENTITY: Self = {
                let mut columns = [[0.0; $n]; $n];
                let mut i = 0;
                while i < $n {
                    columns[i][i] = 1.0;
                    i += 1;
                }
                Self { columns }
            };

            #[inline]
            pub const fn from_columns(columns: [[f32; $n]; $n]) -> Self {
                Self { columns }
            }

            /// Returns all elements in column-major order.
            pub fn to_array(&self) -> [f32; $len] {
                let mut out = [0.0; $len];
                for (i, v) in self.columns.iter().flatten().enumerate() {
                    out[i] = *v;
                }
                out
            }

            /// Builds a matrix from elements in column-major order.
            pub fn from_array(a: [f32; $len]) -> Self {
                let mut columns = [[0.0; $n]; $n];
                for (i, v) in a.into_iter().enumerate() {
                    columns[i / $n][i % $n] = v;
                }
                Self { columns }
            }

            /// Returns the element at `row` in `col`.
            #[inline]
            pub fn get(&self, col: usize, row: usize) -> f32 {
                self.columns[col][row]
            }

            /// Returns row `row` of the matrix.
            pub fn row(&self, row: usize) -> [f32; $n] {
                let mut out = [0.0; $n];
                for (col, v) in out.iter_mut().enumerate() {
                    *v = self.columns[col][row];
                }
                out
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("Matrix(")?;
                for row in 0..$n {
                    if row > 0 {
                        f.write_str("; ")?;
                    }
                    write_components(f, &self.row(row))?;
                }
                f.write_str(")")
            }
        }
    };
}

/// A 3x3 matrix stored column by column.
///
/// The default value is the identity matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3 {
    /// The columns of the matrix.
    pub columns: [[f32; 3]; 3],
}

impl_matrix!(Matrix3, 3, 9);

/// A 4x4 matrix stored column by column.
///
/// The default value is the identity matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4 {
    /// The columns of the matrix.
    pub columns: [[f32; 4]; 4],
}

impl_matrix!(Matrix4, 4, 16);
