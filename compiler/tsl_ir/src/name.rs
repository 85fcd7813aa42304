use std::fmt;

/// Interned identifier or string literal.
///
/// The high four bits pick an interner shard and the low 28 bits index into
/// it. Resolve the text with
/// [`StringInterner::lookup`](crate::StringInterner::lookup).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    pub const EMPTY: Name = Name(0);

    pub(crate) const SHARDS: usize = 16;
    pub(crate) const LOCAL_MASK: u32 = (1 << 28) - 1;

    pub(crate) const fn from_parts(shard: usize, local: u32) -> Self {
        debug_assert!(shard < Self::SHARDS);
        debug_assert!(local <= Self::LOCAL_MASK);
        #[expect(clippy::cast_possible_truncation, reason = "shard < 16")]
        let shard = shard as u32;
        Name((shard << 28) | local)
    }

    pub(crate) const fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    pub(crate) const fn local(self) -> usize {
        (self.0 & Self::LOCAL_MASK) as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}.{}", self.shard(), self.local())
    }
}

crate::static_assert_size!(Name, 4);
