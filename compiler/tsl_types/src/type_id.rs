//! Type handle.

use std::fmt;

/// A 32-bit index into a [`TypePool`](crate::TypePool).
///
/// Primitive types have fixed indices so lowering can compare against them
/// without a pool lookup.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // === Primitive Types (indices 0-6) ===

    /// `any`: opts out of static typing.
    pub const ANY: Self = Self(0);
    /// `unknown`, also used for nodes the checker has no type for.
    pub const UNKNOWN: Self = Self(1);
    /// `never`.
    pub const NEVER: Self = Self(2);
    /// `undefined` / `void`.
    pub const UNDEFINED: Self = Self(3);
    pub const BOOLEAN: Self = Self(4);
    pub const NUMBER: Self = Self(5);
    pub const STRING: Self = Self(6);

    /// Number of pre-interned primitive types.
    pub const PRIMITIVE_COUNT: u32 = 7;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::PRIMITIVE_COUNT
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ANY => write!(f, "TypeId::ANY"),
            Self::UNKNOWN => write!(f, "TypeId::UNKNOWN"),
            Self::NEVER => write!(f, "TypeId::NEVER"),
            Self::UNDEFINED => write!(f, "TypeId::UNDEFINED"),
            Self::BOOLEAN => write!(f, "TypeId::BOOLEAN"),
            Self::NUMBER => write!(f, "TypeId::NUMBER"),
            Self::STRING => write!(f, "TypeId::STRING"),
            _ => write!(f, "TypeId({})", self.0),
        }
    }
}
