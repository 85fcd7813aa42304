//! Type information consumed by the lowering core.
//!
//! Lowering never inspects types structurally; it asks narrow questions
//! through the [`TypeQuery`] capability. Any type checker that can answer
//! them can drive lowering.
//!
//! [`TypePool`] and [`TypeTable`] are a small in-memory implementation used
//! by hosts that precompute types, and by tests.

mod data;
mod flags;
mod pool;
mod query;
mod table;
mod type_id;

pub use data::{InstanceKind, Primitive, ReceiverBinding, Signature, TypeData};
pub use flags::TypeFlags;
pub use pool::TypePool;
pub use query::{is_definitely_type, is_possibly_type, TypeList, TypeQuery};
pub use table::TypeTable;
pub use type_id::TypeId;
