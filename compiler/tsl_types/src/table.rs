//! Expression-to-type table backed by a [`TypePool`].

use rustc_hash::FxHashMap;
use smallvec::smallvec;
use tsl_ir::{ExprId, Name};

use crate::{Signature, TypeData, TypeFlags, TypeId, TypeList, TypePool, TypeQuery};

/// Precomputed static types for one source file.
///
/// Expressions without a recorded type report [`TypeId::UNKNOWN`].
#[derive(Default)]
pub struct TypeTable {
    pool: TypePool,
    types: FxHashMap<ExprId, TypeId>,
}

impl TypeTable {
    pub fn new(pool: TypePool) -> Self {
        TypeTable {
            pool,
            types: FxHashMap::default(),
        }
    }

    pub fn pool(&self) -> &TypePool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut TypePool {
        &mut self.pool
    }

    /// Record the static type of `expr`, replacing any earlier entry.
    pub fn record(&mut self, expr: ExprId, ty: TypeId) {
        self.types.insert(expr, ty);
    }

    #[inline]
    fn has(&self, ty: TypeId, flag: TypeFlags) -> bool {
        self.pool.flags(ty).contains(flag)
    }
}

impl TypeQuery for TypeTable {
    fn type_of(&self, expr: ExprId) -> TypeId {
        self.types.get(&expr).copied().unwrap_or(TypeId::UNKNOWN)
    }

    fn union_members(&self, ty: TypeId) -> TypeList {
        match self.pool.data(ty) {
            TypeData::Union(members) => members.clone(),
            _ => smallvec![ty],
        }
    }

    fn is_any_type(&self, ty: TypeId) -> bool {
        self.has(ty, TypeFlags::ANY)
    }

    fn is_undefined_type(&self, ty: TypeId) -> bool {
        self.has(ty, TypeFlags::UNDEFINED)
    }

    fn is_number_type(&self, ty: TypeId) -> bool {
        self.has(ty, TypeFlags::NUMBER)
    }

    fn is_string_type(&self, ty: TypeId) -> bool {
        self.has(ty, TypeFlags::STRING)
    }

    fn is_array_type(&self, ty: TypeId) -> bool {
        self.has(ty, TypeFlags::ARRAY)
    }

    fn is_tuple_type(&self, ty: TypeId) -> bool {
        self.has(ty, TypeFlags::TUPLE)
    }

    fn is_map_type(&self, ty: TypeId) -> bool {
        self.has(ty, TypeFlags::MAP)
    }

    fn is_set_type(&self, ty: TypeId) -> bool {
        self.has(ty, TypeFlags::SET)
    }

    fn is_generator_type(&self, ty: TypeId) -> bool {
        self.has(ty, TypeFlags::GENERATOR)
    }

    fn is_tuple_return_type(&self, ty: TypeId) -> bool {
        self.has(ty, TypeFlags::TUPLE_RETURN)
    }

    fn type_arguments(&self, ty: TypeId) -> TypeList {
        match self.pool.data(ty) {
            TypeData::Instance { args, .. } => args.iter().copied().collect(),
            TypeData::Tuple(elems) => elems.clone(),
            _ => TypeList::new(),
        }
    }

    fn element_type(&self, ty: TypeId) -> Option<TypeId> {
        match self.pool.data(ty) {
            TypeData::Array(elem) => Some(*elem),
            _ => None,
        }
    }

    fn tuple_return_inner(&self, ty: TypeId) -> Option<TypeId> {
        match self.pool.data(ty) {
            TypeData::TupleReturn(inner) => Some(*inner),
            _ => None,
        }
    }

    fn property_type(&self, ty: TypeId, name: Name) -> Option<TypeId> {
        match self.pool.data(ty) {
            TypeData::Object { properties, .. } => properties
                .iter()
                .find(|(prop, _)| *prop == name)
                .map(|&(_, ty)| ty),
            _ => None,
        }
    }

    fn symbol_name(&self, ty: TypeId) -> Option<Name> {
        match self.pool.data(ty) {
            TypeData::Instance { name, .. } => Some(*name),
            TypeData::Object { name, .. } => *name,
            _ => None,
        }
    }

    fn call_signatures(&self, ty: TypeId) -> Vec<Signature> {
        self.union_members(ty)
            .into_iter()
            .flat_map(|member| match self.pool.data(member) {
                TypeData::Function(signatures) => signatures.to_vec(),
                _ => Vec::new(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
