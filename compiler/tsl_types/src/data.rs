//! Type data stored in the pool.

use smallvec::SmallVec;
use tsl_ir::Name;

use crate::TypeId;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Primitive {
    Any,
    Unknown,
    Never,
    Undefined,
    Boolean,
    Number,
    String,
}

/// Library container families recognised by name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum InstanceKind {
    Map,
    Set,
    Generator,
    /// Any other named generic instance (`Promise<T>`, ...).
    Plain,
}

/// How a declared call signature binds its receiver.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ReceiverBinding {
    /// Explicit `this: void` parameter.
    ExplicitVoid,
    /// Explicit `this: this` parameter.
    ExplicitThis,
    /// Method declaration or method signature.
    MethodDeclaration,
    /// Function type, property signature, function expression, arrow
    /// function, or function declaration.
    FunctionValue,
    /// Any other declaration shape.
    Unknown,
}

impl ReceiverBinding {
    /// The signature binds an implicit receiver.
    pub const fn is_method_style(self) -> bool {
        matches!(self, Self::ExplicitThis | Self::MethodDeclaration)
    }

    /// The signature is a plain function value.
    pub const fn is_callback_style(self) -> bool {
        matches!(self, Self::ExplicitVoid | Self::FunctionValue)
    }
}

/// A declared call signature.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Signature {
    pub receiver: ReceiverBinding,
}

impl Signature {
    pub const fn new(receiver: ReceiverBinding) -> Self {
        Signature { receiver }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    Primitive(Primitive),
    /// `T[]`
    Array(TypeId),
    /// `[A, B, ...]`
    Tuple(SmallVec<[TypeId; 4]>),
    /// Named generic instance such as `Map<K, V>`.
    Instance {
        name: Name,
        kind: InstanceKind,
        args: SmallVec<[TypeId; 2]>,
    },
    /// Object shape, optionally named by its symbol (`Vector3`,
    /// `ObjectConstructor`, a class instance).
    Object {
        name: Option<Name>,
        properties: Vec<(Name, TypeId)>,
    },
    /// Callable value with its declared signatures.
    Function(SmallVec<[Signature; 2]>),
    /// Multi-value return wrapper around a tuple type.
    TupleReturn(TypeId),
    /// Flattened, deduplicated union of at least two members.
    Union(SmallVec<[TypeId; 4]>),
}
