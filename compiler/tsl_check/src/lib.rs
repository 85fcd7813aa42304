//! Pre-emit checks: whole-file validators run before a file is lowered.
//!
//! Each check is a pure function from a [`SourceFile`](tsl_ir::SourceFile)
//! to the diagnostics it finds. Checks never read each other's output, so
//! the order of a [`PreEmitChecklist`] only affects the order diagnostics
//! are reported in.

mod checklist;
mod file_name;
mod module;

pub use checklist::{PreEmitCheck, PreEmitChecklist};
pub use file_name::{check_file_name, RESERVED_WORDS};
pub use module::file_is_module;
