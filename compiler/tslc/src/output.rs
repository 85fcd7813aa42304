//! Result of compiling one file.

use std::fmt;

use tsl_diagnostic::Diagnostic;
use tsl_ir::target::Stmt;
use tsl_lower::{HelperFlags, TempArena};

pub struct FileOutput {
    pub path: String,
    /// Lowered top-level statements; `None` when checks failed or lowering
    /// was aborted by a hard error.
    pub stmts: Option<Vec<Stmt>>,
    /// Temporaries referenced by `stmts`, for naming at emission.
    pub temps: TempArena,
    pub diagnostics: Vec<Diagnostic>,
    /// Runtime helper namespaces referenced by `stmts`.
    pub helpers: HelperFlags,
}

impl FileOutput {
    /// No error diagnostics were reported for the file.
    pub fn is_success(&self) -> bool {
        !self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }
}

impl fmt::Debug for FileOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileOutput")
            .field("path", &self.path)
            .field("stmts", &self.stmts.as_ref().map(Vec::len))
            .field("temps", &self.temps.len())
            .field("diagnostics", &self.diagnostics.len())
            .field("helpers", &self.helpers)
            .finish()
    }
}
