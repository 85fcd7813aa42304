//! tslc - drives the pre-emit checks and lowering over source files.
//!
//! Each file is compiled independently with its own
//! [`UnitState`](tsl_lower::UnitState): checks first, then lowering of every
//! top-level statement. Files share only the string interner, so a batch can
//! be compiled on a rayon pool.

mod compile;
mod options;
mod output;

pub use compile::{compile_file, compile_files};
pub use options::CompileOptions;
pub use output::FileOutput;
