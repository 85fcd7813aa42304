//! Type-directed lowering from the source AST to the target AST.
//!
//! The entry point is [`Lowerer`], created per file over the file's
//! expression arena, a [`TypeQuery`](tsl_types::TypeQuery) capability, the
//! shared interner, and the file's [`UnitState`].
//!
//! - Binary and assignment expressions keep left-to-right side-effect
//!   order and evaluate assignment targets once.
//! - Expression statements avoid materialising unused values.
//! - Calls are dispatched on the receiver's static type.
//! - [`get_sub_type`] resolves the type at a destructuring position.
//!
//! Recoverable problems are pushed to the unit's diagnostic sink and
//! replaced by an inert placeholder. Hard errors are returned as
//! [`LowerError`] and abort the file.

mod error;
mod lower;
mod state;
mod sub_type;

#[cfg(test)]
mod test_support;

pub use error::{LowerError, LowerResult};
pub use lower::{CallContext, Lowerer, WritableTarget};
pub use state::{HelperFlags, TempArena, TempInfo, UnitState};
pub use sub_type::{get_sub_type, SubIndex, SubType};
