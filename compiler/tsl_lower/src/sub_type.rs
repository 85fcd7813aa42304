//! Sub-type extraction for destructuring positions.
//!
//! Callers only ask for positions prior type checking already accepted, so a
//! position with no matching rule is a contract violation and panics.

use tsl_ir::Name;
use tsl_types::{is_definitely_type, TypeId, TypeList, TypeQuery};

/// A single type, or the ordered element types of a tuple-like position.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SubType {
    Single(TypeId),
    Sequence(TypeList),
}

/// How a destructuring position addresses its parent.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SubIndex {
    /// Object pattern property.
    Name(Name),
    /// Array pattern element (zero-based).
    Position(usize),
}

/// Type addressed by `index` within `ty`.
///
/// # Panics
///
/// Panics when no rule applies: a missing property, a tuple position out of
/// range, or a numeric index into a type that is not definitely indexable.
pub fn get_sub_type(types: &dyn TypeQuery, ty: &SubType, index: SubIndex) -> SubType {
    let ty = match ty {
        SubType::Single(ty) => *ty,
        SubType::Sequence(elems) => {
            return match index {
                SubIndex::Position(i) => match elems.get(i) {
                    Some(&elem) => SubType::Single(elem),
                    None => panic!("position {i} out of range for a {}-element sequence", elems.len()),
                },
                SubIndex::Name(_) => panic!("named sub-type requested from a type sequence"),
            };
        }
    };

    let position = match index {
        SubIndex::Name(name) => {
            return match types.property_type(ty, name) {
                Some(prop) => SubType::Single(prop),
                None => panic!("no declared property {name:?} on {ty:?}"),
            };
        }
        SubIndex::Position(i) => i,
    };

    if let Some(inner) = types.tuple_return_inner(ty) {
        return get_sub_type(types, &SubType::Single(inner), index);
    }

    if is_definitely_type(types, ty, |t| types.is_array_type(t)) {
        if types.is_tuple_type(ty) {
            let elems = types.type_arguments(ty);
            return get_sub_type(types, &SubType::Sequence(elems), index);
        }
        return match types.element_type(ty) {
            // T[] -> T
            Some(elem) => SubType::Single(elem),
            None => panic!("array type {ty:?} has no element type"),
        };
    }

    // string -> string
    if is_definitely_type(types, ty, |t| types.is_string_type(t)) {
        return SubType::Single(ty);
    }

    // Set<T> -> T
    if is_definitely_type(types, ty, |t| types.is_set_type(t)) {
        return first_argument(types, ty);
    }

    // Map<K, V> -> [K, V]
    if is_definitely_type(types, ty, |t| types.is_map_type(t)) {
        return SubType::Sequence(types.type_arguments(ty));
    }

    // Generator<T> -> T
    if is_definitely_type(types, ty, |t| types.is_generator_type(t)) {
        return first_argument(types, ty);
    }

    panic!("no sub-type of {ty:?} at position {position}")
}

fn first_argument(types: &dyn TypeQuery, ty: TypeId) -> SubType {
    match types.type_arguments(ty).first() {
        Some(&arg) => SubType::Single(arg),
        None => panic!("{ty:?} has no type arguments"),
    }
}

#[cfg(test)]
mod tests;
