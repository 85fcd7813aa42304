//! Receiver classification for macro dispatch.
//!
//! A property call's receiver type is classified once into a closed
//! [`ReceiverFamily`]; the family then decides per member whether a rule
//! applies.

use tsl_ir::target::BinOp;
use tsl_ir::Name;
use tsl_types::{is_definitely_type, TypeId};

use crate::lower::Lowerer;
use crate::HelperFlags;

/// String members with a direct native-library equivalent.
const NATIVE_STRING_MEMBERS: &[&str] = &[
    "byte", "find", "format", "gmatch", "gsub", "len", "lower", "match", "rep", "reverse", "sub",
    "upper",
];

const STRING_HELPER_MEMBERS: &[&str] = &[
    "endsWith", "includes", "indexOf", "padEnd", "padStart", "size", "slice", "split",
    "startsWith", "toLowerCase", "toUpperCase", "trim", "trimEnd", "trimStart",
];

const ARRAY_MEMBERS: &[&str] = &[
    "concat", "copy", "deepCopy", "deepEquals", "entries", "every", "filter", "find",
    "findIndex", "forEach", "includes", "indexOf", "insert", "isEmpty", "join", "lastIndexOf",
    "length", "map", "pop", "push", "reduce", "reduceRight", "remove", "reverse", "shift",
    "size", "slice", "some", "sort", "splice", "unorderedRemove", "unshift",
];

const MAP_MEMBERS: &[&str] = &[
    "clear", "delete", "entries", "forEach", "get", "getOrSet", "has", "isEmpty", "keys", "set",
    "size", "values",
];

const SET_MEMBERS: &[&str] = &[
    "add", "clear", "delete", "difference", "entries", "forEach", "has", "intersect",
    "isDisjointWith", "isEmpty", "isSubsetOf", "size", "union", "values",
];

const OBJECT_MEMBERS: &[&str] = &[
    "assign", "copy", "deepCopy", "deepEquals", "entries", "fromEntries", "isEmpty", "keys",
    "values",
];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum ReceiverFamily {
    Array,
    String,
    Map,
    Set,
    ObjectConstructor,
    Promise,
    SymbolConstructor,
    /// Spatial value class with operator-style members; carries its name.
    Math(Name),
    Other,
}

/// How one property call is rewritten.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum CallRule {
    /// `TS.<namespace>.<member>(receiver, args)`, or without the receiver
    /// for the object constructor.
    Helper {
        namespace: Namespace,
        with_receiver: bool,
    },
    /// `string.<member>(receiver, args)`
    NativeString,
    /// `receiver:<method>(args)`
    RenamedMethod(Name),
    /// `receiver.<field>(args)`
    RenamedField(Name),
    /// `(receiver <op> arg)`
    Math(BinOp),
    /// Signature-driven method or callback dispatch.
    Generic,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Namespace {
    Array,
    String,
    Map,
    Set,
    Object,
}

impl Namespace {
    pub(crate) fn flag(self) -> HelperFlags {
        match self {
            Namespace::Array => HelperFlags::ARRAY,
            Namespace::String => HelperFlags::STRING,
            Namespace::Map => HelperFlags::MAP,
            Namespace::Set => HelperFlags::SET,
            Namespace::Object => HelperFlags::OBJECT,
        }
    }
}

impl Lowerer<'_> {
    pub(crate) fn classify_receiver(&self, ty: TypeId) -> ReceiverFamily {
        let types = self.types;
        if is_definitely_type(types, ty, |t| types.is_array_type(t)) {
            return ReceiverFamily::Array;
        }
        if is_definitely_type(types, ty, |t| types.is_string_type(t)) {
            return ReceiverFamily::String;
        }
        if is_definitely_type(types, ty, |t| types.is_map_type(t)) {
            return ReceiverFamily::Map;
        }
        if is_definitely_type(types, ty, |t| types.is_set_type(t)) {
            return ReceiverFamily::Set;
        }
        let Some(symbol) = types.symbol_name(ty) else {
            return ReceiverFamily::Other;
        };
        if symbol == self.names.object_constructor {
            ReceiverFamily::ObjectConstructor
        } else if symbol == self.names.promise {
            ReceiverFamily::Promise
        } else if symbol == self.names.symbol_constructor {
            ReceiverFamily::SymbolConstructor
        } else if self.names.math_classes.contains(&symbol) {
            ReceiverFamily::Math(symbol)
        } else {
            ReceiverFamily::Other
        }
    }

    /// Rule for calling `member` on a receiver of `family` with `arg_count`
    /// arguments. Members a family does not recognise fall through to
    /// generic dispatch.
    pub(crate) fn call_rule(&self, family: ReceiverFamily, member: Name, arg_count: usize) -> CallRule {
        let text = self.name_str(member);
        let helper = |namespace: Namespace, table: &[&str]| {
            if table.contains(&text) {
                CallRule::Helper {
                    namespace,
                    with_receiver: namespace != Namespace::Object,
                }
            } else {
                CallRule::Generic
            }
        };

        match family {
            ReceiverFamily::Array => helper(Namespace::Array, ARRAY_MEMBERS),
            ReceiverFamily::String => {
                if NATIVE_STRING_MEMBERS.contains(&text) {
                    CallRule::NativeString
                } else {
                    helper(Namespace::String, STRING_HELPER_MEMBERS)
                }
            }
            ReceiverFamily::Map => helper(Namespace::Map, MAP_MEMBERS),
            ReceiverFamily::Set => helper(Namespace::Set, SET_MEMBERS),
            ReceiverFamily::ObjectConstructor => helper(Namespace::Object, OBJECT_MEMBERS),
            ReceiverFamily::Promise if member == self.names.then => {
                CallRule::RenamedMethod(self.names.and_then)
            }
            // `for` is a reserved word in the target. The runtime's
            // `Symbol.getFor` is a plain function, so no `self` is passed.
            ReceiverFamily::SymbolConstructor if member == self.names.for_ => {
                CallRule::RenamedField(self.names.get_for)
            }
            ReceiverFamily::Math(_) if arg_count == 1 => match text {
                "add" => CallRule::Math(BinOp::Add),
                "sub" => CallRule::Math(BinOp::Sub),
                "mul" => CallRule::Math(BinOp::Mul),
                "div" => CallRule::Math(BinOp::Div),
                _ => CallRule::Generic,
            },
            ReceiverFamily::Promise
            | ReceiverFamily::SymbolConstructor
            | ReceiverFamily::Math(_)
            | ReceiverFamily::Other => CallRule::Generic,
        }
    }

    pub(crate) fn namespace_name(&self, namespace: Namespace) -> Name {
        match namespace {
            Namespace::Array => self.names.ns_array,
            Namespace::String => self.names.ns_string,
            Namespace::Map => self.names.ns_map,
            Namespace::Set => self.names.ns_set,
            Namespace::Object => self.names.ns_object,
        }
    }
}
