//! Top-level source statements.

use crate::{ExprId, Name, Span};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub const fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Expression used as a statement.
    Expr(ExprId),
    /// `let name = init` (`init` may be `ExprId::INVALID`).
    Let { name: Name, init: ExprId },
    /// `import ... from "module"`.
    Import { module: Name },
    /// `export { name }` / `export const name`.
    Export { name: Name },
}

impl StmtKind {
    /// Import and export statements make a file a module.
    pub const fn is_module_syntax(&self) -> bool {
        matches!(self, StmtKind::Import { .. } | StmtKind::Export { .. })
    }
}
