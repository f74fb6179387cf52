//! Tagged storage for single configuration values.
//!
//! A [`ConfigValue`] holds exactly one value of a registered type along
//! with its [`ConfigValType`] tag. Small, trivially copyable types are
//! stored inline; everything else lives in an owned heap allocation that
//! is deep-copied on clone.

use std::{fmt, mem};

use arbor_math::*;

mod storage;
pub use storage::{ConfigType, CONFIG_VAL_ALIGN, CONFIG_VAL_SIZE};
use storage::Data;

mod tag;
pub use tag::*;

/// A single configuration value tagged with its type.
///
/// The default value holds nothing and is tagged
/// [`ConfigValType::Unknown`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigValue {
    data: Data,
}

/// A borrowed view of the contents of a [`ConfigValue`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueRef<'a> {
    Unknown,
    Boolean(bool),
    Integer(i32),
    Angle(Rad),
    Double(f64),
    Vector2(Vector2),
    Vector3(&'a Vector3),
    Vector4(&'a Vector4),
    Quaternion(&'a Quaternion),
    Matrix3(&'a Matrix3),
    Matrix4(&'a Matrix4),
    String(&'a str),
}

impl ConfigValue {
    /// Creates an empty value.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Data::Unknown,
        }
    }

    /// Whether a value is stored.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !matches!(self.data, Data::Unknown)
    }

    /// Gets the type tag of the stored value.
    #[inline]
    pub fn get_type(&self) -> ConfigValType {
        self.data.tag()
    }

    /// Stores `value`, dropping whatever was held before.
    #[inline]
    pub fn set<T: ConfigType>(&mut self, value: T) {
        self.data = value.into_data();
    }

    /// Gets a copy of the stored value as `T`.
    ///
    /// When the stored type is not `T`, an error is logged and the
    /// default value of `T` is returned instead.
    pub fn get<T: ConfigType>(&self) -> T {
        match self.try_get() {
            Some(v) => v,
            None => {
                log::error!(
                    "Attempting to access ConfigValue of {} with type {}",
                    self.get_type(),
                    T::TYPE
                );
                T::default()
            }
        }
    }

    /// Gets a copy of the stored value as `T`, if that is its type.
    #[inline]
    pub fn try_get<T: ConfigType>(&self) -> Option<T> {
        T::from_data(&self.data)
    }

    /// Moves the stored value out, leaving this value empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Borrows the stored value for inspection.
    pub fn value_ref(&self) -> ValueRef<'_> {
        match &self.data {
            Data::Unknown => ValueRef::Unknown,
            Data::Boolean(v) => ValueRef::Boolean(*v),
            Data::Integer(v) => ValueRef::Integer(*v),
            Data::Angle(v) => ValueRef::Angle(*v),
            Data::Double(v) => ValueRef::Double(*v),
            Data::Vector2(v) => ValueRef::Vector2(*v),
            Data::Vector3(v) => ValueRef::Vector3(v),
            Data::Vector4(v) => ValueRef::Vector4(v),
            Data::Quaternion(v) => ValueRef::Quaternion(v),
            Data::Matrix3(v) => ValueRef::Matrix3(v),
            Data::Matrix4(v) => ValueRef::Matrix4(v),
            Data::String(v) => ValueRef::String(v),
        }
    }

    /// Gets a human-readable representation of the stored value.
    pub fn get_as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value_ref() {
            ValueRef::Unknown => f.write_str("<unknown>"),
            ValueRef::Boolean(v) => write!(f, "{v}"),
            ValueRef::Integer(v) => write!(f, "{v}"),
            ValueRef::Angle(v) => write!(f, "{}", v.0),
            ValueRef::Double(v) => write!(f, "{v}"),
            ValueRef::Vector2(v) => write!(f, "{v}"),
            ValueRef::Vector3(v) => write!(f, "{v}"),
            ValueRef::Vector4(v) => write!(f, "{v}"),
            ValueRef::Quaternion(v) => write!(f, "{v}"),
            ValueRef::Matrix3(v) => write!(f, "{v}"),
            ValueRef::Matrix4(v) => write!(f, "{v}"),
            ValueRef::String(v) => f.write_str(v),
        }
    }
}
