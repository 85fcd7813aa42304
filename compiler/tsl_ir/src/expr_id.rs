//! Expression IDs and child ranges for the flat source AST.
//!
//! Source expressions live in an [`ExprArena`](crate::ExprArena) and refer to
//! each other by `ExprId(u32)`. Child lists are `(start, len)` slices of the
//! arena's side storage.

use std::fmt;

/// Index into the expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Marks an absent child, such as a `let` without initializer.
    pub const INVALID: ExprId = ExprId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.is_valid() {
            true => write!(f, "e{}", self.0),
            false => f.write_str("e<none>"),
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

macro_rules! slice_range {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn is_empty(self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(self) -> usize {
                self.len as usize
            }

            /// Index range into the backing storage.
            #[inline]
            pub const fn to_range(self) -> std::ops::Range<usize> {
                self.start as usize..self.start as usize + self.len as usize
            }
        }
    };
}

slice_range! {
    /// Call arguments or array elements, in source order.
    ExprRange
}

slice_range! {
    /// Object-literal properties.
    PropRange
}

crate::static_assert_size!(ExprId, 4);
crate::static_assert_size!(ExprRange, 8);
