//! Interning type pool.
//!
//! Every distinct [`TypeData`] is stored once; equal types share a
//! [`TypeId`]. Flags are computed at interning time.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tsl_ir::Name;

use crate::{InstanceKind, Primitive, Signature, TypeData, TypeFlags, TypeId};

struct Entry {
    data: TypeData,
    flags: TypeFlags,
}

pub struct TypePool {
    entries: Vec<Entry>,
    map: FxHashMap<TypeData, TypeId>,
}

impl TypePool {
    /// Create a pool with the primitive types pre-interned at their fixed
    /// indices.
    pub fn new() -> Self {
        let mut pool = TypePool {
            entries: Vec::with_capacity(64),
            map: FxHashMap::default(),
        };
        for primitive in [
            Primitive::Any,
            Primitive::Unknown,
            Primitive::Never,
            Primitive::Undefined,
            Primitive::Boolean,
            Primitive::Number,
            Primitive::String,
        ] {
            pool.intern(TypeData::Primitive(primitive));
        }
        debug_assert_eq!(pool.entries.len(), TypeId::PRIMITIVE_COUNT as usize);
        pool
    }

    /// Intern `data`, returning the existing id if it is already present.
    pub fn intern(&mut self, data: TypeData) -> TypeId {
        if let Some(&id) = self.map.get(&data) {
            return id;
        }
        let flags = Self::compute_flags(&data);
        let raw = u32::try_from(self.entries.len())
            .unwrap_or_else(|_| panic!("type pool exceeded {} entries", u32::MAX));
        let id = TypeId::from_raw(raw);
        self.map.insert(data.clone(), id);
        self.entries.push(Entry { data, flags });
        id
    }

    fn compute_flags(data: &TypeData) -> TypeFlags {
        match data {
            TypeData::Primitive(p) => match p {
                Primitive::Any => TypeFlags::ANY,
                Primitive::Undefined => TypeFlags::UNDEFINED,
                Primitive::Boolean => TypeFlags::BOOLEAN,
                Primitive::Number => TypeFlags::NUMBER,
                Primitive::String => TypeFlags::STRING,
                Primitive::Unknown | Primitive::Never => TypeFlags::empty(),
            },
            TypeData::Array(_) => TypeFlags::ARRAY,
            TypeData::Tuple(_) => TypeFlags::ARRAY | TypeFlags::TUPLE,
            TypeData::Instance { kind, .. } => match kind {
                InstanceKind::Map => TypeFlags::MAP,
                InstanceKind::Set => TypeFlags::SET,
                InstanceKind::Generator => TypeFlags::GENERATOR,
                InstanceKind::Plain => TypeFlags::OBJECT,
            },
            TypeData::Object { .. } => TypeFlags::OBJECT,
            TypeData::Function(_) => TypeFlags::CALLABLE,
            TypeData::TupleReturn(_) => TypeFlags::TUPLE_RETURN,
            TypeData::Union(_) => TypeFlags::UNION,
        }
    }

    #[inline]
    pub fn data(&self, id: TypeId) -> &TypeData {
        &self.entries[id.index()].data
    }

    #[inline]
    pub fn flags(&self, id: TypeId) -> TypeFlags {
        self.entries[id.index()].flags
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // === Construction ===

    pub fn array(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeData::Array(elem))
    }

    pub fn tuple(&mut self, elems: &[TypeId]) -> TypeId {
        self.intern(TypeData::Tuple(SmallVec::from_slice(elems)))
    }

    pub fn instance(&mut self, kind: InstanceKind, name: Name, args: &[TypeId]) -> TypeId {
        self.intern(TypeData::Instance {
            name,
            kind,
            args: SmallVec::from_slice(args),
        })
    }

    pub fn object(&mut self, name: Option<Name>, properties: &[(Name, TypeId)]) -> TypeId {
        self.intern(TypeData::Object {
            name,
            properties: properties.to_vec(),
        })
    }

    pub fn function(&mut self, signatures: &[Signature]) -> TypeId {
        self.intern(TypeData::Function(SmallVec::from_slice(signatures)))
    }

    /// Multi-value return wrapping the tuple `[elems...]`.
    pub fn tuple_return(&mut self, elems: &[TypeId]) -> TypeId {
        let tuple = self.tuple(elems);
        self.intern(TypeData::TupleReturn(tuple))
    }

    /// Union of `members`. Nested unions are flattened and duplicates
    /// removed; a single remaining member is returned as-is.
    pub fn union(&mut self, members: &[TypeId]) -> TypeId {
        let mut flat: SmallVec<[TypeId; 4]> = SmallVec::new();
        for &member in members {
            match self.data(member) {
                TypeData::Union(inner) => {
                    for &m in inner {
                        if !flat.contains(&m) {
                            flat.push(m);
                        }
                    }
                }
                _ => {
                    if !flat.contains(&member) {
                        flat.push(member);
                    }
                }
            }
        }
        match flat.len() {
            0 => TypeId::NEVER,
            1 => flat[0],
            _ => self.intern(TypeData::Union(flat)),
        }
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
