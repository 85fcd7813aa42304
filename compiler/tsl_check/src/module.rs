//! Files must be modules.

use tsl_diagnostic::{Diagnostic, DiagnosticKind};
use tsl_ir::{SourceFile, Span};

/// A file without any top-level import or export would run as a plain
/// script in the target runtime, which the compiler does not support.
pub fn file_is_module(file: &SourceFile) -> Vec<Diagnostic> {
    if file.has_module_syntax() {
        return Vec::new();
    }
    let span = file.stmts.first().map_or(Span::DUMMY, |stmt| stmt.span);
    vec![Diagnostic::error(
        DiagnosticKind::NoNonModule,
        span,
        format!(
            "`{}` is not a module: add an import or export, or move it out of the project",
            file.file_name()
        ),
    )]
}
