//! Assignment targets and assignment lowering.
//!
//! A target is first lowered to a [`Place`] whose addressing parts
//! (object, index) are still separate. When the location must be mentioned
//! twice, the parts with side effects are pinned to temporaries so both
//! mentions share one evaluation. When the assigned value's prerequisites
//! would run between the target's evaluation and the write, identifiers
//! are pinned as well, since those prerequisites may rebind them.

use tsl_ir::ast::{BinaryOp, ExprKind};
use tsl_ir::target::{BinOp, CompoundOp, Expr, Stmt};
use tsl_ir::{ExprId, Name, Span};

use super::binary::Operand;
use super::expr::into_pair;
use super::Lowerer;
use crate::LowerResult;

/// A lowered assignment target before it is turned into an expression.
#[derive(Clone, Debug)]
pub(crate) enum Place {
    /// Identifiers and anything not shaped like a member access.
    Whole(Expr),
    Property { object: Expr, name: Name },
    Index { object: Expr, index: Expr },
}

impl Place {
    pub(crate) fn into_expr(self) -> Expr {
        match self {
            Place::Whole(expr) => expr,
            Place::Property { object, name } => Expr::property(object, name),
            Place::Index { object, index } => Expr::index(object, index),
        }
    }
}

/// How much of a [`Place`] to bind to temporaries.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Pin {
    /// The location is mentioned twice with nothing in between.
    Repeated,
    /// Other statements run between addressing the location and writing it.
    Reordered,
}

/// Write and read descriptors of one runtime location.
///
/// When `read` is present it is structurally identical to `write`: every
/// side-effecting addressing part has been bound to a temporary that both
/// descriptors reference.
#[derive(Clone, PartialEq, Debug)]
pub struct WritableTarget {
    pub write: Expr,
    pub read: Option<Expr>,
}

impl WritableTarget {
    pub(crate) fn new(write: Expr, read_after_write: bool) -> Self {
        let read = read_after_write.then(|| write.clone());
        WritableTarget { write, read }
    }

    /// Descriptor for reading the location.
    pub fn readable(&self) -> Expr {
        self.read.clone().unwrap_or_else(|| self.write.clone())
    }
}

impl Lowerer<'_> {
    /// Lower an assignment target without pinning.
    pub(crate) fn lower_place(&mut self, id: ExprId) -> LowerResult<Place> {
        match *self.src.kind(id) {
            ExprKind::Paren(inner) => self.lower_place(inner),
            ExprKind::PropertyAccess { object, name } => {
                let object = self.lower_expr(object)?;
                Ok(Place::Property { object, name })
            }
            ExprKind::ElementAccess { object, index } => {
                let lowered = self.ensure_transform_order(&[object, index])?;
                let [object_expr, index_expr] = into_pair(lowered);
                let index_expr = self.add_one_if_array(object, index_expr);
                Ok(Place::Index {
                    object: object_expr,
                    index: index_expr,
                })
            }
            _ => self.lower_expr(id).map(Place::Whole),
        }
    }

    /// Bind the addressing parts of `place` to temporaries.
    pub(crate) fn pin_place(&mut self, place: Place, span: Span, pin: Pin) -> Place {
        let (object_hint, index_hint) = (self.names.hint_object, self.names.hint_index);
        let bind = |this: &mut Self, expr: Expr, hint: Name| match pin {
            Pin::Repeated => this.push_to_temp_if_complex(expr, hint, span),
            Pin::Reordered => this.push_to_temp_if_unstable(expr, hint, span),
        };
        match place {
            Place::Whole(expr) => Place::Whole(expr),
            Place::Property { object, name } => Place::Property {
                object: bind(self, object, object_hint),
                name,
            },
            Place::Index { object, index } => {
                let object = bind(self, object, object_hint);
                let index = bind(self, index, index_hint);
                Place::Index { object, index }
            }
        }
    }

    /// Resolve `target` as a writable location, returning the statements
    /// that must run before the location is used.
    pub fn resolve_writable(
        &mut self,
        target: ExprId,
        read_after_write: bool,
    ) -> LowerResult<(WritableTarget, Vec<Stmt>)> {
        self.capture(|this| this.lower_writable(target, read_after_write))
    }

    /// Resolve `target` as a writable location.
    pub(crate) fn lower_writable(
        &mut self,
        target: ExprId,
        read_after_write: bool,
    ) -> LowerResult<WritableTarget> {
        let span = self.src.span(target);
        let place = self.lower_place(target)?;
        let place = if read_after_write {
            self.pin_place(place, span, Pin::Repeated)
        } else {
            place
        };
        Ok(WritableTarget::new(place.into_expr(), read_after_write))
    }

    /// Resolve `target` and lower `value`, target parts first.
    ///
    /// The target is pinned when it is read after the write. When the value
    /// needs prerequisites, those run between the target's addressing
    /// expressions and the write, so every part that could change is pinned.
    pub(crate) fn lower_writable_assignment(
        &mut self,
        target: ExprId,
        value: ExprId,
        read_after_write: bool,
    ) -> LowerResult<(WritableTarget, Expr)> {
        let span = self.src.span(target);
        let place = self.lower_place(target)?;
        let (value_expr, value_prereqs) = self.capture(|this| this.lower_expr(value))?;
        let place = if !value_prereqs.is_empty() {
            self.pin_place(place, span, Pin::Reordered)
        } else if read_after_write {
            self.pin_place(place, span, Pin::Repeated)
        } else {
            place
        };
        self.prereq_list(value_prereqs);
        Ok((
            WritableTarget::new(place.into_expr(), read_after_write),
            value_expr,
        ))
    }

    /// Native compound operator for `base`, if the target has one that
    /// matches the source semantics for these operand types.
    pub(crate) fn native_compound(
        &self,
        base: BinaryOp,
        target_ty: tsl_types::TypeId,
        value_ty: tsl_types::TypeId,
    ) -> Option<CompoundOp> {
        match base {
            BinaryOp::Add if self.is_concat(target_ty, value_ty) => Some(CompoundOp::Concat),
            BinaryOp::Add => BinOp::Add.compound(),
            BinaryOp::Sub => BinOp::Sub.compound(),
            BinaryOp::Mul => BinOp::Mul.compound(),
            BinaryOp::Div => BinOp::Div.compound(),
            BinaryOp::Pow => BinOp::Pow.compound(),
            _ => None,
        }
    }

    /// Compound assignment as a statement: native compound form when one
    /// exists, otherwise `write = read <op> value`.
    pub(crate) fn compound_assignment_statement(
        &mut self,
        id: ExprId,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    ) -> LowerResult<Stmt> {
        let span = self.src.span(id);
        let base = op.compound_base().unwrap_or(op);
        let target_ty = self.type_of(left);
        let value_ty = self.type_of(right);
        let native = self.native_compound(base, target_ty, value_ty);

        let (writable, value) = self.lower_writable_assignment(left, right, native.is_none())?;
        if let Some(compound) = native {
            let value = if compound == CompoundOp::Concat {
                self.concat_operand(Operand {
                    expr: value,
                    ty: value_ty,
                })
            } else {
                value
            };
            return Ok(Stmt::CompoundAssign {
                target: writable.write,
                op: compound,
                value,
            });
        }

        let combined = self.binary_from_operator(
            Operand {
                expr: writable.readable(),
                ty: target_ty,
            },
            base,
            Operand {
                expr: value,
                ty: value_ty,
            },
            span,
        );
        Ok(Stmt::Assign {
            target: writable.write,
            value: combined,
        })
    }

    /// Assignment used for its value: the write is hoisted and the
    /// location's readable descriptor is the result.
    pub(crate) fn lower_assignment_expression(
        &mut self,
        id: ExprId,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    ) -> LowerResult<Expr> {
        if self.is_pattern(left) {
            return self.lower_destructuring_assignment(id, left, right);
        }

        if op.is_compound_assignment() {
            let span = self.src.span(id);
            let base = op.compound_base().unwrap_or(op);
            let target_ty = self.type_of(left);
            let value_ty = self.type_of(right);
            let (writable, value) = self.lower_writable_assignment(left, right, true)?;
            let readable = writable.readable();
            let combined = self.binary_from_operator(
                Operand {
                    expr: readable.clone(),
                    ty: target_ty,
                },
                base,
                Operand {
                    expr: value,
                    ty: value_ty,
                },
                span,
            );
            self.prereq(Stmt::Assign {
                target: writable.write,
                value: combined,
            });
            return Ok(readable);
        }

        let (writable, value) = self.lower_writable_assignment(left, right, true)?;
        let readable = writable.readable();
        self.prereq(Stmt::Assign {
            target: writable.write,
            value,
        });
        Ok(readable)
    }

    /// Array or object literal in assignment-target position.
    pub(crate) fn is_pattern(&self, id: ExprId) -> bool {
        matches!(
            self.src.kind(id),
            ExprKind::Array(_) | ExprKind::Object(_)
        )
    }
}
