//! Diagnostics for the tsl lowering core.
//!
//! Every diagnostic carries a [`DiagnosticKind`] with a stable code, a
//! primary span, and a message. Lowering pushes recoverable diagnostics into
//! a per-file [`DiagnosticSink`]; hard errors travel as `Result` values and
//! are converted into diagnostics by the driver.

mod diagnostic;
mod kind;
mod sink;

pub use diagnostic::{Diagnostic, Severity};
pub use kind::DiagnosticKind;
pub use sink::DiagnosticSink;
