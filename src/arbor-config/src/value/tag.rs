use std::fmt;

/// Every type of value that can be stored in a
/// [`ConfigValue`](super::ConfigValue).
///
/// The order of the variants is significant. Types that are too large
/// for inline storage come at or after [`Self::STORED_AS_POINTER`], and
/// types that own resources come at or after [`Self::NON_TRIVIAL`].
/// Small, trivially copyable types must be placed before both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum ConfigValType {
    /// No value is stored.
    #[default]
    Unknown = -1,
    Boolean,
    Integer,
    /// An angle in radians.
    Angle,
    Double,
    Vector2,

    // Stored behind a pointer.
    Vector3,
    Vector4,
    Quaternion,
    Matrix3,
    Matrix4,

    // Not trivially copyable.
    String,
}

impl ConfigValType {
    /// The first type that is stored behind a heap allocation.
    pub const STORED_AS_POINTER: Self = Self::Vector3;

    /// The first type that is not trivially copyable.
    pub const NON_TRIVIAL: Self = Self::String;

    /// All tags that describe an actual value, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Boolean,
        Self::Integer,
        Self::Angle,
        Self::Double,
        Self::Vector2,
        Self::Vector3,
        Self::Vector4,
        Self::Quaternion,
        Self::Matrix3,
        Self::Matrix4,
        Self::String,
    ];

    /// Whether values of this type are stored as a pointer.
    #[inline]
    pub const fn is_pointer_based(self) -> bool {
        self as i32 >= Self::STORED_AS_POINTER as i32
    }

    /// Whether values of this type are not trivially copyable.
    #[inline]
    pub const fn is_non_trivial(self) -> bool {
        self as i32 >= Self::NON_TRIVIAL as i32
    }

    /// Gets a human-readable name for the type.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Angle => "Angle",
            Self::Double => "Double",
            Self::Vector2 => "Vector2",
            Self::Vector3 => "Vector3",
            Self::Vector4 => "Vector4",
            Self::Quaternion => "Quaternion",
            Self::Matrix3 => "Matrix3",
            Self::Matrix4 => "Matrix4",
            Self::String => "String",
        }
    }

    /// Looks up a type by its [`name`](Self::name), ignoring case.
    ///
    /// [`ConfigValType::Unknown`] is never returned.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ConfigValType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
