//! tsl IR - syntax trees for the lowering core.
//!
//! This crate holds the data both sides of lowering agree on:
//! - Spans for source locations
//! - Names for interned identifiers
//! - The flat source AST (`ExprArena`, `ExprId`, `ast::*`) produced by the
//!   external front end
//! - The owned target AST (`target::*`) consumed by the external emitter
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → `Name(u32)`
//! - **Flatten the input**: source nodes are `ExprId(u32)` indices
//! - **Own the output**: target fragments move up the call stack by value

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod source_file;
mod span;
pub mod target;

pub use arena::ExprArena;
pub use expr_id::{ExprId, ExprRange, PropRange};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use source_file::SourceFile;
pub use span::Span;
