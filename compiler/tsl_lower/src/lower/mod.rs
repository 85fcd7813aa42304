//! Source AST → target AST lowering.
//!
//! A [`Lowerer`] borrows one file's expression arena, the type query, and
//! the file's [`UnitState`]. Lowering an expression returns an owned target
//! fragment; statements that must run before that fragment (temporaries,
//! short-circuit blocks, hoisted assignments) are pushed to the current
//! prerequisite buffer.
//!
//! Submodules:
//! - `expr`: the `lower_expr` dispatch
//! - `binary`: operator mapping and the binary entry point
//! - `logical`: truthiness and short-circuit operators
//! - `writable`: assignment targets and assignments
//! - `destructure`: array/object pattern assignment
//! - `statement`: expression statements and top-level statements
//! - `call`: type-directed call dispatch

mod binary;
mod call;
mod destructure;
mod expr;
mod logical;
mod names;
mod statement;
mod writable;

pub use call::CallContext;
pub use writable::WritableTarget;

use std::mem;

use tsl_ir::target::{Expr, Stmt};
use tsl_ir::{ExprArena, ExprId, Name, Span, StringInterner};
use tsl_types::{TypeId, TypeQuery};

use crate::{LowerResult, UnitState};
use names::KnownNames;

pub struct Lowerer<'a> {
    /// Source expression arena (read-only).
    pub(crate) src: &'a ExprArena,
    pub(crate) types: &'a dyn TypeQuery,
    pub(crate) interner: &'a StringInterner,
    pub(crate) state: &'a mut UnitState,
    /// Prerequisite statements for the expression being lowered.
    prereqs: Vec<Stmt>,
    pub(crate) names: KnownNames,
}

impl<'a> Lowerer<'a> {
    pub fn new(
        src: &'a ExprArena,
        types: &'a dyn TypeQuery,
        interner: &'a StringInterner,
        state: &'a mut UnitState,
    ) -> Self {
        Lowerer {
            src,
            types,
            interner,
            state,
            prereqs: Vec::new(),
            names: KnownNames::new(interner),
        }
    }

    /// Lower a value expression, returning its prerequisite statements
    /// alongside it.
    pub fn lower_expression(&mut self, id: ExprId) -> LowerResult<(Expr, Vec<Stmt>)> {
        self.capture(|this| this.lower_expr(id))
    }

    // Prerequisites

    /// Run `f` with a fresh prerequisite buffer and return what it pushed.
    pub(crate) fn capture<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> LowerResult<T>,
    ) -> LowerResult<(T, Vec<Stmt>)> {
        let saved = mem::take(&mut self.prereqs);
        let result = f(self);
        let captured = mem::replace(&mut self.prereqs, saved);
        result.map(|value| (value, captured))
    }

    pub(crate) fn prereq(&mut self, stmt: Stmt) {
        self.prereqs.push(stmt);
    }

    pub(crate) fn prereq_list(&mut self, stmts: Vec<Stmt>) {
        self.prereqs.extend(stmts);
    }

    // Temporaries

    /// Bind `value` to a fresh temporary and return the temporary.
    pub(crate) fn push_to_temp(&mut self, value: Expr, hint: Name, span: Span) -> Expr {
        let temp = self.state.new_temp(hint, span);
        self.prereq(Stmt::local_temp(temp, value));
        Expr::Temp(temp)
    }

    /// Bind `value` to a temporary unless reading it twice is harmless.
    pub(crate) fn push_to_temp_if_complex(&mut self, value: Expr, hint: Name, span: Span) -> Expr {
        if value.is_simple() {
            value
        } else {
            self.push_to_temp(value, hint, span)
        }
    }

    /// Bind `value` to a temporary unless no statement can change what it
    /// reads.
    pub(crate) fn push_to_temp_if_unstable(&mut self, value: Expr, hint: Name, span: Span) -> Expr {
        if value.is_stable() {
            value
        } else {
            self.push_to_temp(value, hint, span)
        }
    }

    // Ordering

    /// Lower `ids` left to right, keeping side effects in source order.
    ///
    /// When a later expression needs prerequisite statements, every earlier
    /// result that is not a literal or temporary is bound to a temporary
    /// first. Identifiers are included: the later prerequisites may assign
    /// to them.
    pub(crate) fn ensure_transform_order(&mut self, ids: &[ExprId]) -> LowerResult<Vec<Expr>> {
        self.ensure_transform_order_with(ids, |this, _, id| this.lower_expr(id))
    }

    pub(crate) fn ensure_transform_order_with(
        &mut self,
        ids: &[ExprId],
        mut lower: impl FnMut(&mut Self, usize, ExprId) -> LowerResult<Expr>,
    ) -> LowerResult<Vec<Expr>> {
        let mut lowered = Vec::with_capacity(ids.len());
        for (position, &id) in ids.iter().enumerate() {
            lowered.push(self.capture(|this| lower(this, position, id))?);
        }
        let last_with_prereqs = lowered.iter().rposition(|(_, prereqs)| !prereqs.is_empty());

        let mut result = Vec::with_capacity(lowered.len());
        for (position, ((expr, prereqs), &id)) in lowered.into_iter().zip(ids).enumerate() {
            self.prereq_list(prereqs);
            let expr = match last_with_prereqs {
                Some(last) if position < last => {
                    let span = self.src.span(id);
                    self.push_to_temp_if_unstable(expr, self.names.hint_exp, span)
                }
                _ => expr,
            };
            result.push(expr);
        }
        Ok(result)
    }

    // Queries

    #[inline]
    pub(crate) fn type_of(&self, id: ExprId) -> TypeId {
        self.types.type_of(id)
    }

    #[inline]
    pub(crate) fn name_str(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    /// `TS.<namespace>.<member>`
    pub(crate) fn helper(&self, namespace: Name, member: Name) -> Expr {
        Expr::property(
            Expr::property(Expr::Ident(self.names.ts), namespace),
            member,
        )
    }

    /// `<library>.<member>` for a global target library table.
    pub(crate) fn library(&self, library: Name, member: Name) -> Expr {
        Expr::property(Expr::Ident(library), member)
    }
}
