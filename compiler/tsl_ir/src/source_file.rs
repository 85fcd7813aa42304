//! A parsed source file: path, expression arena, top-level statements.

use crate::ast::Stmt;
use crate::ExprArena;

#[derive(Clone, Debug)]
pub struct SourceFile {
    /// Path as given by the host (forward or back slashes).
    pub path: String,
    pub arena: ExprArena,
    pub stmts: Vec<Stmt>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, arena: ExprArena, stmts: Vec<Stmt>) -> Self {
        SourceFile {
            path: path.into(),
            arena,
            stmts,
        }
    }

    /// Base name of the file (`src/shared/util.ts` → `util.ts`).
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.path.as_str())
    }

    /// Whether any top-level statement is an import or export.
    pub fn has_module_syntax(&self) -> bool {
        self.stmts.iter().any(|stmt| stmt.kind.is_module_syntax())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::StmtKind;
    use crate::{Name, Span};

    #[test]
    fn file_name_strips_directories() {
        let file = SourceFile::new("src/shared/util.ts", ExprArena::new(), Vec::new());
        assert_eq!(file.file_name(), "util.ts");
        let file = SourceFile::new("C:\\game\\main.tsx", ExprArena::new(), Vec::new());
        assert_eq!(file.file_name(), "main.tsx");
    }

    #[test]
    fn module_syntax_detection() {
        let mut file = SourceFile::new("a.ts", ExprArena::new(), Vec::new());
        assert!(!file.has_module_syntax());
        file.stmts.push(Stmt::new(
            StmtKind::Export { name: Name::EMPTY },
            Span::DUMMY,
        ));
        assert!(file.has_module_syntax());
    }
}
