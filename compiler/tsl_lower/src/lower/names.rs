//! Names pre-interned once per lowerer.

use tsl_ir::{Name, StringInterner};

/// Library types whose arithmetic members lower to operators.
pub(crate) const MATH_CLASSES: [&str; 7] = [
    "CFrame",
    "UDim",
    "UDim2",
    "Vector2",
    "Vector2int16",
    "Vector3",
    "Vector3int16",
];

pub(crate) struct KnownNames {
    // Target identifiers
    pub(crate) self_: Name,
    pub(crate) ts: Name,
    pub(crate) string: Name,
    pub(crate) math: Name,
    pub(crate) fmod: Name,
    pub(crate) bit32: Name,
    pub(crate) tostring: Name,
    pub(crate) tonumber: Name,
    pub(crate) unpack: Name,
    pub(crate) constructor: Name,
    pub(crate) index_meta: Name,
    pub(crate) instanceof: Name,
    pub(crate) from: Name,

    // Helper namespaces
    pub(crate) ns_array: Name,
    pub(crate) ns_string: Name,
    pub(crate) ns_map: Name,
    pub(crate) ns_set: Name,
    pub(crate) ns_object: Name,
    pub(crate) ns_runtime: Name,

    // Interop members
    pub(crate) then: Name,
    pub(crate) and_then: Name,
    pub(crate) for_: Name,
    pub(crate) get_for: Name,

    // Receiver symbol names
    pub(crate) promise: Name,
    pub(crate) symbol_constructor: Name,
    pub(crate) object_constructor: Name,
    pub(crate) math_classes: [Name; MATH_CLASSES.len()],

    // Temporary hints
    pub(crate) hint_exp: Name,
    pub(crate) hint_result: Name,
    pub(crate) hint_value: Name,
    pub(crate) hint_original: Name,
    pub(crate) hint_object: Name,
    pub(crate) hint_index: Name,
}

impl KnownNames {
    pub(crate) fn new(interner: &StringInterner) -> Self {
        KnownNames {
            self_: interner.intern("self"),
            ts: interner.intern("TS"),
            string: interner.intern("string"),
            math: interner.intern("math"),
            fmod: interner.intern("fmod"),
            bit32: interner.intern("bit32"),
            tostring: interner.intern("tostring"),
            tonumber: interner.intern("tonumber"),
            unpack: interner.intern("unpack"),
            constructor: interner.intern("constructor"),
            index_meta: interner.intern("__index"),
            instanceof: interner.intern("instanceof"),
            from: interner.intern("from"),
            ns_array: interner.intern("array"),
            ns_string: interner.intern("string"),
            ns_map: interner.intern("map"),
            ns_set: interner.intern("set"),
            ns_object: interner.intern("Object"),
            ns_runtime: interner.intern("runtime"),
            then: interner.intern("then"),
            and_then: interner.intern("andThen"),
            for_: interner.intern("for"),
            get_for: interner.intern("getFor"),
            promise: interner.intern("Promise"),
            symbol_constructor: interner.intern("SymbolConstructor"),
            object_constructor: interner.intern("ObjectConstructor"),
            math_classes: MATH_CLASSES.map(|class| interner.intern(class)),
            hint_exp: interner.intern("exp"),
            hint_result: interner.intern("result"),
            hint_value: interner.intern("value"),
            hint_original: interner.intern("original"),
            hint_object: interner.intern("object"),
            hint_index: interner.intern("index"),
        }
    }
}
