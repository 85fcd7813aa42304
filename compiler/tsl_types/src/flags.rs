//! Pre-computed type metadata flags.
//!
//! Flags are computed once when a type is interned so every predicate the
//! lowering asks is a single bit test.

use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u16 {
        // === Primitive Flags ===
        const ANY = 1 << 0;
        const UNDEFINED = 1 << 1;
        const BOOLEAN = 1 << 2;
        const NUMBER = 1 << 3;
        const STRING = 1 << 4;

        // === Container Flags ===
        /// Array-shaped (includes tuples).
        const ARRAY = 1 << 5;
        /// Fixed-length tuple.
        const TUPLE = 1 << 6;
        /// Key-value container (`Map`, `ReadonlyMap`, `WeakMap`).
        const MAP = 1 << 7;
        /// Unique-element container (`Set`, `ReadonlySet`, `WeakSet`).
        const SET = 1 << 8;
        /// Sequence-producing generator or iterable iterator.
        const GENERATOR = 1 << 9;

        // === Shape Flags ===
        /// Multi-value return wrapper.
        const TUPLE_RETURN = 1 << 10;
        const UNION = 1 << 11;
        const CALLABLE = 1 << 12;
        const OBJECT = 1 << 13;
    }
}

impl TypeFlags {
    /// Primitive types whose values may be falsy in the source language
    /// but truthy in the target.
    pub const FALSY_PRIMITIVE: Self = Self::NUMBER.union(Self::STRING);
}
