//! Sharded string interner.
//!
//! Files are lowered in parallel against one shared interner, so every shard
//! sits behind its own `RwLock`. Interned text is leaked to get a `'static`
//! lifetime; the interner lives for the whole compilation session.

use std::hash::{BuildHasher, BuildHasherDefault};

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};

use super::Name;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    #[error("interner shard {shard} is full ({count} strings)")]
    ShardFull { shard: usize, count: usize },
}

#[derive(Default)]
struct Shard {
    ids: FxHashMap<&'static str, u32>,
    texts: Vec<&'static str>,
}

impl Shard {
    fn seeded_with_empty() -> Self {
        let mut shard = Shard::default();
        shard.ids.insert("", 0);
        shard.texts.push("");
        shard
    }
}

pub struct StringInterner {
    shards: [RwLock<Shard>; Name::SHARDS],
}

impl StringInterner {
    pub fn new() -> Self {
        // `Name::EMPTY` is local 0 of shard 0.
        let shards = std::array::from_fn(|i| {
            RwLock::new(if i == 0 { Shard::seeded_with_empty() } else { Shard::default() })
        });
        StringInterner { shards }
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "reduced modulo the shard count first"
    )]
    fn shard_of(text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let hash = BuildHasherDefault::<FxHasher>::default().hash_one(text);
        (hash % Name::SHARDS as u64) as usize
    }

    pub fn try_intern(&self, text: &str) -> Result<Name, InternError> {
        let shard = Self::shard_of(text);
        let lock = &self.shards[shard];

        if let Some(&local) = lock.read().ids.get(text) {
            return Ok(Name::from_parts(shard, local));
        }

        let mut guard = lock.write();
        // Another thread may have won the race between the two locks.
        if let Some(&local) = guard.ids.get(text) {
            return Ok(Name::from_parts(shard, local));
        }
        let count = guard.texts.len();
        let local = u32::try_from(count)
            .ok()
            .filter(|local| *local <= Name::LOCAL_MASK)
            .ok_or(InternError::ShardFull { shard, count })?;
        let text: &'static str = Box::leak(Box::from(text));
        guard.texts.push(text);
        guard.ids.insert(text, local);
        Ok(Name::from_parts(shard, local))
    }

    /// Intern `text`.
    ///
    /// # Panics
    /// If the target shard is full.
    pub fn intern(&self, text: &str) -> Name {
        self.try_intern(text).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Text of a name produced by this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.shards[name.shard()].read().texts[name.local()]
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().texts.len()).sum()
    }

    /// Never true: the empty string is always interned.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
