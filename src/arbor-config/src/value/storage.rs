use std::mem::{align_of, needs_drop, size_of};

use arbor_math::*;

use super::{ConfigValType, ConfigValue};

/// The number of payload bytes a [`ConfigValue`] stores inline.
///
/// Registered types larger than this are kept in a heap allocation.
pub const CONFIG_VAL_SIZE: usize = 8;

/// The alignment every inline payload must satisfy.
pub const CONFIG_VAL_ALIGN: usize = 8;

/// The payload of a [`ConfigValue`].
///
/// Variants at or after [`ConfigValType::STORED_AS_POINTER`] own their
/// value through a [`Box`], so that every variant occupies at most
/// [`CONFIG_VAL_SIZE`] bytes next to the discriminant.
#[allow(clippy::box_collection)]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Data {
    #[default]
    Unknown,
    Boolean(bool),
    Integer(i32),
    Angle(Rad),
    Double(f64),
    Vector2(Vector2),

    Vector3(Box<Vector3>),
    Vector4(Box<Vector4>),
    Quaternion(Box<Quaternion>),
    Matrix3(Box<Matrix3>),
    Matrix4(Box<Matrix4>),

    String(Box<String>),
}

const _: () = assert!(
    size_of::<Data>() <= 2 * CONFIG_VAL_SIZE,
    "a ConfigValue payload outgrew its inline storage"
);

impl Data {
    pub const fn tag(&self) -> ConfigValType {
        match self {
            Self::Unknown => ConfigValType::Unknown,
            Self::Boolean(..) => ConfigValType::Boolean,
            Self::Integer(..) => ConfigValType::Integer,
            Self::Angle(..) => ConfigValType::Angle,
            Self::Double(..) => ConfigValType::Double,
            Self::Vector2(..) => ConfigValType::Vector2,
            Self::Vector3(..) => ConfigValType::Vector3,
            Self::Vector4(..) => ConfigValType::Vector4,
            Self::Quaternion(..) => ConfigValType::Quaternion,
            Self::Matrix3(..) => ConfigValType::Matrix3,
            Self::Matrix4(..) => ConfigValType::Matrix4,
            Self::String(..) => ConfigValType::String,
        }
    }
}

/// Conversion between a registered type and its storage.
///
/// Lives in a private module so that the set of storable types stays
/// closed to this crate.
pub trait Stored: Sized {
    fn into_data(self) -> Data;

    fn from_data(data: &Data) -> Option<Self>;
}

/// A Rust type that can be stored in a [`ConfigValue`].
///
/// Only types registered by this crate implement it; using any other
/// type with the typed accessors is a compile error.
pub trait ConfigType: Stored + Clone + Default {
    /// The tag a value of this type is stored under.
    const TYPE: ConfigValType;
}

macro_rules! register {
    (@common $ty:ty => $tag:ident) => {
        impl ConfigType for $ty {
            const TYPE: ConfigValType = ConfigValType::$tag;
        }

        impl From<$ty> for ConfigValue {
            #[inline]
            fn from(value: $ty) -> Self {
                Self {
                    data: value.into_data(),
                }
            }
        }
    };

    // Small, trivially copyable types stored directly in the value.
    ($ty:ty => $tag:ident, inline) => {
        const _: () = {
            assert!(
                !ConfigValType::$tag.is_pointer_based(),
                "inline type registered with a pointer-based tag"
            );
            assert!(
                size_of::<$ty>() <= CONFIG_VAL_SIZE,
                "ConfigValue's internal storage is too small for added type"
            );
            assert!(
                align_of::<$ty>() <= CONFIG_VAL_ALIGN,
                "ConfigValue's internal storage is improperly aligned for added type"
            );
            assert!(
                needs_drop::<$ty>() == ConfigValType::$tag.is_non_trivial(),
                "tag placement does not match the type's triviality"
            );
        };

        impl Stored for $ty {
            #[inline]
            fn into_data(self) -> Data {
                Data::$tag(self)
            }

            #[inline]
            fn from_data(data: &Data) -> Option<Self> {
                match data {
                    Data::$tag(v) => Some(*v),
                    _ => None,
                }
            }
        }

        register!(@common $ty => $tag);
    };

    // Large or non-trivial types kept in a heap allocation.
    ($ty:ty => $tag:ident, boxed) => {
        const _: () = {
            assert!(
                ConfigValType::$tag.is_pointer_based(),
                "boxed type registered with an inline tag"
            );
            assert!(
                size_of::<$ty>() > CONFIG_VAL_SIZE || ConfigValType::$tag.is_non_trivial(),
                "small trivial type does not need to be stored as a pointer"
            );
            assert!(
                needs_drop::<$ty>() == ConfigValType::$tag.is_non_trivial(),
                "tag placement does not match the type's triviality"
            );
        };

        impl Stored for $ty {
            #[inline]
            fn into_data(self) -> Data {
                Data::$tag(Box::new(self))
            }

            #[inline]
            fn from_data(data: &Data) -> Option<Self> {
                match data {
                    Data::$tag(v) => Some((**v).clone()),
                    _ => None,
                }
            }
        }

        register!(@common $ty => $tag);
    };

    // Types that share storage with another registered type.
    ($ty:ty => $tag:ident, via $stored:ty) => {
        impl Stored for $ty {
            #[inline]
            fn into_data(self) -> Data {
                <$stored>::from(self).into_data()
            }

            #[inline]
            fn from_data(data: &Data) -> Option<Self> {
                <$stored>::from_data(data).map(<$ty>::from)
            }
        }

        register!(@common $ty => $tag);
    };
}

register!(bool => Boolean, inline);
register!(i32 => Integer, inline);
register!(Rad => Angle, inline);
register!(f64 => Double, inline);
register!(Vector2 => Vector2, inline);

register!(Vector3 => Vector3, boxed);
register!(Vector4 => Vector4, boxed);
register!(Quaternion => Quaternion, boxed);
register!(Matrix3 => Matrix3, boxed);
register!(Matrix4 => Matrix4, boxed);

register!(String => String, boxed);

register!(Color3 => Vector3, via Vector3);
register!(Color4 => Vector4, via Vector4);

// Single precision floats are widened to doubles.
impl Stored for f32 {
    #[inline]
    fn into_data(self) -> Data {
        Data::Double(f64::from(self))
    }

    #[inline]
    fn from_data(data: &Data) -> Option<Self> {
        match data {
            Data::Double(v) => Some(*v as f32),
            _ => None,
        }
    }
}

register!(@common f32 => Double);

impl From<&str> for ConfigValue {
    #[inline]
    fn from(value: &str) -> Self {
        value.to_owned().into()
    }
}
