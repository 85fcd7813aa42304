//! Expression statements and top-level statements.

use tsl_ir::ast::{self, ExprKind, PrefixOp, StmtKind};
use tsl_ir::target::{Binding, Expr, Stmt};
use tsl_ir::ExprId;

use super::expr::update_compound;
use super::{CallContext, Lowerer};
use crate::LowerResult;

impl Lowerer<'_> {
    /// Lower a top-level source statement.
    ///
    /// Imports and exports are module plumbing owned by the emitter and
    /// produce nothing here.
    pub fn lower_top_level(&mut self, stmt: &ast::Stmt) -> LowerResult<Vec<Stmt>> {
        match stmt.kind {
            StmtKind::Expr(id) => self.lower_expression_statement(id),
            StmtKind::Let { name, init } => {
                let (value, mut stmts) = if init.is_valid() {
                    let (value, prereqs) = self.capture(|this| this.lower_expr(init))?;
                    (Some(value), prereqs)
                } else {
                    (None, Vec::new())
                };
                stmts.push(Stmt::Local {
                    binding: Binding::Name(name),
                    value,
                });
                Ok(stmts)
            }
            StmtKind::Import { .. } | StmtKind::Export { .. } => Ok(Vec::new()),
        }
    }

    /// Lower an expression evaluated only for its side effects.
    pub fn lower_expression_statement(&mut self, id: ExprId) -> LowerResult<Vec<Stmt>> {
        let (stmt, mut stmts) = self.capture(|this| this.lower_statement_body(id))?;
        stmts.extend(stmt);
        Ok(stmts)
    }

    fn lower_statement_body(&mut self, id: ExprId) -> LowerResult<Option<Stmt>> {
        match *self.src.kind(id) {
            ExprKind::Binary { op, left, right } if op.is_assignment() && !self.is_pattern(left) => {
                if op.is_compound_assignment() {
                    return self
                        .compound_assignment_statement(id, op, left, right)
                        .map(Some);
                }
                let (writable, value) = self.lower_writable_assignment(left, right, false)?;
                Ok(Some(Stmt::Assign {
                    target: writable.write,
                    value,
                }))
            }
            ExprKind::PrefixUnary {
                op: PrefixOp::Update(op),
                operand,
            }
            | ExprKind::PostfixUnary { op, operand } => {
                // Native compound update: the location is evaluated once.
                let writable = self.lower_writable(operand, false)?;
                Ok(Some(Stmt::CompoundAssign {
                    target: writable.write,
                    op: update_compound(op),
                    value: Expr::Number(1.0),
                }))
            }
            ExprKind::Call { .. } => {
                let call = self.lower_call(id, CallContext::STATEMENT)?;
                Ok(discard(call))
            }
            _ => {
                let expr = self.lower_expr(id)?;
                Ok(discard(expr))
            }
        }
    }
}

/// Statement that evaluates `expr` and drops its value.
fn discard(expr: Expr) -> Option<Stmt> {
    if expr.is_call() {
        Some(Stmt::Call(expr))
    } else if expr.is_any_identifier() {
        None
    } else {
        Some(Stmt::Local {
            binding: Binding::Discard,
            value: Some(expr),
        })
    }
}
