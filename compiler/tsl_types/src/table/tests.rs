use pretty_assertions::assert_eq;
use tsl_ir::StringInterner;

use super::*;
use crate::{InstanceKind, ReceiverBinding};

#[test]
fn unrecorded_expressions_are_unknown() {
    let table = TypeTable::default();
    assert_eq!(table.type_of(ExprId::new(3)), TypeId::UNKNOWN);
}

#[test]
fn records_and_answers_predicates() {
    let mut table = TypeTable::default();
    let arr = table.pool_mut().array(TypeId::NUMBER);
    table.record(ExprId::new(0), arr);
    let ty = table.type_of(ExprId::new(0));
    assert!(table.is_array_type(ty));
    assert!(!table.is_tuple_type(ty));
    assert_eq!(table.element_type(ty), Some(TypeId::NUMBER));
}

#[test]
fn type_arguments_of_instances_and_tuples() {
    let interner = StringInterner::new();
    let mut table = TypeTable::default();
    let map = table.pool_mut().instance(
        InstanceKind::Map,
        interner.intern("Map"),
        &[TypeId::STRING, TypeId::BOOLEAN],
    );
    let tuple = table.pool_mut().tuple(&[TypeId::NUMBER, TypeId::STRING]);
    assert_eq!(
        table.type_arguments(map).as_slice(),
        &[TypeId::STRING, TypeId::BOOLEAN]
    );
    assert_eq!(
        table.type_arguments(tuple).as_slice(),
        &[TypeId::NUMBER, TypeId::STRING]
    );
    assert!(table.type_arguments(TypeId::NUMBER).is_empty());
    assert_eq!(table.symbol_name(map), Some(interner.intern("Map")));
}

#[test]
fn call_signatures_collect_across_union_members() {
    let mut table = TypeTable::default();
    let pool = table.pool_mut();
    let method = pool.function(&[Signature::new(ReceiverBinding::MethodDeclaration)]);
    let callback = pool.function(&[Signature::new(ReceiverBinding::FunctionValue)]);
    let both = pool.union(&[method, callback]);
    let receivers: Vec<_> = table
        .call_signatures(both)
        .into_iter()
        .map(|s| s.receiver)
        .collect();
    assert_eq!(
        receivers,
        vec![ReceiverBinding::MethodDeclaration, ReceiverBinding::FunctionValue]
    );
    assert!(table.call_signatures(TypeId::STRING).is_empty());
}

#[test]
fn property_lookup() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut table = TypeTable::default();
    let obj = table.pool_mut().object(None, &[(x, TypeId::NUMBER)]);
    assert_eq!(table.property_type(obj, x), Some(TypeId::NUMBER));
    assert_eq!(table.property_type(obj, interner.intern("y")), None);
    assert_eq!(table.symbol_name(obj), None);
}
