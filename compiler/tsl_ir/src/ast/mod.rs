//! Source AST handed over by the external front end.
//!
//! Nodes are flat: an [`Expr`] is a `Copy` kind plus a span, children are
//! [`ExprId`]s into the owning [`ExprArena`](crate::ExprArena). The lowering
//! core only borrows the arena for the duration of a file's lowering.

mod operators;
mod stmt;

pub use operators::{BinaryOp, PrefixOp, UpdateOp};
pub use stmt::{Stmt, StmtKind};

use crate::{ExprId, ExprRange, Name, PropRange, Span};

/// A source expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Source expression kinds.
///
/// Number literals store their `f64` bit pattern so the kind stays `Eq`/`Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Ident(Name),
    This,
    Super,
    /// Numeric literal as `f64::to_bits`.
    Number(u64),
    String(Name),
    Bool(bool),
    Undefined,
    Paren(ExprId),
    PropertyAccess {
        object: ExprId,
        name: Name,
    },
    ElementAccess {
        object: ExprId,
        index: ExprId,
    },
    Call {
        callee: ExprId,
        args: ExprRange,
    },
    /// `...expr`, valid only as a call argument.
    Spread(ExprId),
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    PrefixUnary {
        op: PrefixOp,
        operand: ExprId,
    },
    PostfixUnary {
        op: UpdateOp,
        operand: ExprId,
    },
    Array(ExprRange),
    Object(PropRange),
    /// Parse error placeholder.
    Error,
}

impl ExprKind {
    /// Build a numeric literal kind.
    pub fn number(value: f64) -> Self {
        ExprKind::Number(value.to_bits())
    }
}

/// Object literal property (`name: value` or shorthand `name`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Prop {
    pub name: Name,
    pub value: ExprId,
    pub span: Span,
}
