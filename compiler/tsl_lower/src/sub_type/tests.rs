use pretty_assertions::assert_eq;
use smallvec::smallvec;
use tsl_ir::StringInterner;
use tsl_types::{InstanceKind, TypeTable};

use super::*;

fn single(ty: TypeId) -> SubType {
    SubType::Single(ty)
}

#[test]
fn map_position_is_key_value_pair() {
    let interner = StringInterner::new();
    let mut table = TypeTable::default();
    let map = table.pool_mut().instance(
        InstanceKind::Map,
        interner.intern("Map"),
        &[TypeId::STRING, TypeId::NUMBER],
    );
    assert_eq!(
        get_sub_type(&table, &single(map), SubIndex::Position(0)),
        SubType::Sequence(smallvec![TypeId::STRING, TypeId::NUMBER])
    );
}

#[test]
fn array_position_is_element_type() {
    let mut table = TypeTable::default();
    let arr = table.pool_mut().array(TypeId::BOOLEAN);
    assert_eq!(
        get_sub_type(&table, &single(arr), SubIndex::Position(7)),
        single(TypeId::BOOLEAN)
    );
}

#[test]
fn tuple_position_selects_element() {
    let mut table = TypeTable::default();
    let tuple = table.pool_mut().tuple(&[TypeId::NUMBER, TypeId::STRING]);
    assert_eq!(
        get_sub_type(&table, &single(tuple), SubIndex::Position(1)),
        single(TypeId::STRING)
    );
}

#[test]
#[should_panic(expected = "out of range")]
fn tuple_position_out_of_range_panics() {
    let mut table = TypeTable::default();
    let tuple = table.pool_mut().tuple(&[TypeId::NUMBER, TypeId::STRING]);
    let _ = get_sub_type(&table, &single(tuple), SubIndex::Position(2));
}

#[test]
fn tuple_return_recurses_into_wrapped_tuple() {
    let mut table = TypeTable::default();
    let wrapped = table
        .pool_mut()
        .tuple_return(&[TypeId::BOOLEAN, TypeId::NUMBER]);
    assert_eq!(
        get_sub_type(&table, &single(wrapped), SubIndex::Position(1)),
        single(TypeId::NUMBER)
    );
}

#[test]
fn string_set_and_generator_positions() {
    let interner = StringInterner::new();
    let mut table = TypeTable::default();
    let set = table
        .pool_mut()
        .instance(InstanceKind::Set, interner.intern("Set"), &[TypeId::NUMBER]);
    let generator = table.pool_mut().instance(
        InstanceKind::Generator,
        interner.intern("Generator"),
        &[TypeId::STRING],
    );
    assert_eq!(
        get_sub_type(&table, &single(TypeId::STRING), SubIndex::Position(0)),
        single(TypeId::STRING)
    );
    assert_eq!(
        get_sub_type(&table, &single(set), SubIndex::Position(0)),
        single(TypeId::NUMBER)
    );
    assert_eq!(
        get_sub_type(&table, &single(generator), SubIndex::Position(3)),
        single(TypeId::STRING)
    );
}

#[test]
fn named_property_lookup() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut table = TypeTable::default();
    let obj = table.pool_mut().object(None, &[(x, TypeId::NUMBER)]);
    assert_eq!(
        get_sub_type(&table, &single(obj), SubIndex::Name(x)),
        single(TypeId::NUMBER)
    );
}

#[test]
#[should_panic(expected = "no declared property")]
fn missing_property_panics() {
    let interner = StringInterner::new();
    let mut table = TypeTable::default();
    let obj = table.pool_mut().object(None, &[]);
    let _ = get_sub_type(&table, &single(obj), SubIndex::Name(interner.intern("y")));
}

#[test]
fn sequence_position_selects_directly() {
    let table = TypeTable::default();
    let seq = SubType::Sequence(smallvec![TypeId::NUMBER, TypeId::UNDEFINED]);
    assert_eq!(
        get_sub_type(&table, &seq, SubIndex::Position(1)),
        single(TypeId::UNDEFINED)
    );
}

#[test]
#[should_panic(expected = "no sub-type")]
fn non_indexable_type_panics() {
    let table = TypeTable::default();
    let _ = get_sub_type(&table, &single(TypeId::BOOLEAN), SubIndex::Position(0));
}
