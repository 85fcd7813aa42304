use pretty_assertions::assert_eq;
use tsl_ir::StringInterner;

use super::*;

#[test]
fn primitives_have_fixed_ids() {
    let pool = TypePool::new();
    assert_eq!(pool.len(), TypeId::PRIMITIVE_COUNT as usize);
    assert_eq!(
        pool.data(TypeId::STRING),
        &TypeData::Primitive(Primitive::String)
    );
    assert_eq!(pool.flags(TypeId::NUMBER), TypeFlags::NUMBER);
    assert_eq!(pool.flags(TypeId::UNKNOWN), TypeFlags::empty());
    assert!(TypeId::STRING.is_primitive());
}

#[test]
fn interning_deduplicates() {
    let mut pool = TypePool::new();
    let a = pool.array(TypeId::NUMBER);
    let b = pool.array(TypeId::NUMBER);
    let c = pool.array(TypeId::STRING);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn tuples_are_array_shaped() {
    let mut pool = TypePool::new();
    let t = pool.tuple(&[TypeId::NUMBER, TypeId::STRING]);
    assert!(pool.flags(t).contains(TypeFlags::ARRAY | TypeFlags::TUPLE));
}

#[test]
fn instance_kind_drives_flags() {
    let interner = StringInterner::new();
    let mut pool = TypePool::new();
    let map = pool.instance(
        InstanceKind::Map,
        interner.intern("Map"),
        &[TypeId::STRING, TypeId::NUMBER],
    );
    let promise = pool.instance(
        InstanceKind::Plain,
        interner.intern("Promise"),
        &[TypeId::NUMBER],
    );
    assert_eq!(pool.flags(map), TypeFlags::MAP);
    assert_eq!(pool.flags(promise), TypeFlags::OBJECT);
}

#[test]
fn union_flattens_and_collapses() {
    let mut pool = TypePool::new();
    let inner = pool.union(&[TypeId::NUMBER, TypeId::STRING]);
    let outer = pool.union(&[inner, TypeId::NUMBER, TypeId::UNDEFINED]);
    match pool.data(outer) {
        TypeData::Union(members) => assert_eq!(
            members.as_slice(),
            &[TypeId::NUMBER, TypeId::STRING, TypeId::UNDEFINED]
        ),
        other => panic!("expected union, got {other:?}"),
    }
    assert_eq!(pool.union(&[TypeId::STRING, TypeId::STRING]), TypeId::STRING);
    assert_eq!(pool.union(&[]), TypeId::NEVER);
}
