//! The type query capability.

use smallvec::SmallVec;
use tsl_ir::{ExprId, Name};

use crate::{Signature, TypeId};

/// Small list of types: union members, type arguments, tuple elements.
pub type TypeList = SmallVec<[TypeId; 4]>;

/// Questions lowering asks about static types.
///
/// Every predicate answers for a single, already narrowed type. Unions are
/// never "definitely" anything by themselves; use [`is_definitely_type`] and
/// [`is_possibly_type`] to reason over their members.
pub trait TypeQuery {
    /// Static type of a source expression.
    fn type_of(&self, expr: ExprId) -> TypeId;

    /// Union members of `ty`, or `[ty]` for a non-union.
    fn union_members(&self, ty: TypeId) -> TypeList;

    fn is_any_type(&self, ty: TypeId) -> bool;
    fn is_undefined_type(&self, ty: TypeId) -> bool;
    fn is_number_type(&self, ty: TypeId) -> bool;
    fn is_string_type(&self, ty: TypeId) -> bool;
    fn is_array_type(&self, ty: TypeId) -> bool;
    fn is_tuple_type(&self, ty: TypeId) -> bool;
    fn is_map_type(&self, ty: TypeId) -> bool;
    fn is_set_type(&self, ty: TypeId) -> bool;
    fn is_generator_type(&self, ty: TypeId) -> bool;
    fn is_tuple_return_type(&self, ty: TypeId) -> bool;

    /// Type arguments of a generic instance, or the element types of a
    /// tuple. Empty for anything else.
    fn type_arguments(&self, ty: TypeId) -> TypeList;

    /// Element type of a non-tuple array.
    fn element_type(&self, ty: TypeId) -> Option<TypeId>;

    /// The tuple wrapped by a multi-value return type.
    fn tuple_return_inner(&self, ty: TypeId) -> Option<TypeId>;

    /// Declared type of the property `name` on an object-shaped type.
    fn property_type(&self, ty: TypeId, name: Name) -> Option<TypeId>;

    /// Name of the symbol behind a named type (`Promise`, `Vector3`,
    /// `ObjectConstructor`, a class name).
    fn symbol_name(&self, ty: TypeId) -> Option<Name>;

    /// Every call signature declared across the members of `ty`.
    fn call_signatures(&self, ty: TypeId) -> Vec<Signature>;
}

/// Every member of `ty` satisfies `pred`.
pub fn is_definitely_type(
    types: &dyn TypeQuery,
    ty: TypeId,
    pred: impl Fn(TypeId) -> bool,
) -> bool {
    let members = types.union_members(ty);
    !members.is_empty() && members.into_iter().all(pred)
}

/// Some member of `ty` satisfies `pred`, or `ty` is `any`/`unknown` and so
/// could be anything.
pub fn is_possibly_type(types: &dyn TypeQuery, ty: TypeId, pred: impl Fn(TypeId) -> bool) -> bool {
    types
        .union_members(ty)
        .into_iter()
        .any(|t| t == TypeId::UNKNOWN || types.is_any_type(t) || pred(t))
}
