//! Expression dispatch: the main `lower_expr` function.

use tsl_ir::ast::{ExprKind, PrefixOp, UpdateOp};
use tsl_ir::target::{BinOp, CompoundOp, Expr, Stmt, TableField, UnOp};
use tsl_ir::{ExprId, Span};
use tsl_types::is_definitely_type;

use super::writable::Pin;
use super::{CallContext, Lowerer};
use crate::{LowerError, LowerResult};

impl Lowerer<'_> {
    /// Lower a value expression.
    ///
    /// The kind is copied out of the arena (`ExprKind` is `Copy`) so no
    /// borrow of the source is held across recursive calls.
    pub(crate) fn lower_expr(&mut self, id: ExprId) -> LowerResult<Expr> {
        let kind = *self.src.kind(id);
        let span = self.src.span(id);
        tracing::trace!(?id, ?kind, "lower_expr");

        match kind {
            ExprKind::Ident(name) => Ok(Expr::Ident(name)),
            ExprKind::This => Ok(Expr::Ident(self.names.self_)),
            ExprKind::Super => self.super_class(id, span).map(Expr::Ident),
            ExprKind::Number(bits) => Ok(Expr::Number(f64::from_bits(bits))),
            ExprKind::String(value) => Ok(Expr::Str(value)),
            ExprKind::Bool(value) => Ok(Expr::Bool(value)),
            ExprKind::Undefined => Ok(Expr::Nil),
            ExprKind::Error => Ok(Expr::Placeholder),
            ExprKind::Paren(inner) => {
                let inner = self.lower_expr(inner)?;
                Ok(Expr::paren(inner))
            }
            ExprKind::PropertyAccess { object, name } => {
                let object = self.lower_expr(object)?;
                Ok(Expr::property(object, name))
            }
            ExprKind::ElementAccess { object, index } => {
                let lowered = self.ensure_transform_order(&[object, index])?;
                let [object_expr, index_expr] = into_pair(lowered);
                let index_expr = self.add_one_if_array(object, index_expr);
                Ok(Expr::index(object_expr, index_expr))
            }
            ExprKind::Call { .. } => self.lower_call(id, CallContext::VALUE),
            ExprKind::Spread(_) => Err(LowerError::UnsupportedSpreadArgument { span }),
            ExprKind::Binary { op, left, right } => self.lower_binary(id, op, left, right),
            ExprKind::PrefixUnary { op, operand } => self.lower_prefix(id, op, operand),
            ExprKind::PostfixUnary { op, operand } => self.lower_update_value(id, op, operand, false),
            ExprKind::Array(range) => {
                let elements = self.src.get_expr_list(range).to_vec();
                let lowered = self.ensure_transform_order(&elements)?;
                Ok(Expr::Table(
                    lowered.into_iter().map(TableField::Positional).collect(),
                ))
            }
            ExprKind::Object(range) => {
                let props = self.src.get_props(range).to_vec();
                let values: Vec<ExprId> = props.iter().map(|prop| prop.value).collect();
                let lowered = self.ensure_transform_order(&values)?;
                Ok(Expr::Table(
                    props
                        .iter()
                        .zip(lowered)
                        .map(|(prop, value)| TableField::Named(prop.name, value))
                        .collect(),
                ))
            }
        }
    }

    fn lower_prefix(&mut self, id: ExprId, op: PrefixOp, operand: ExprId) -> LowerResult<Expr> {
        let span = self.src.span(id);
        match op {
            PrefixOp::Not => {
                let operand_ty = self.type_of(operand);
                let value = self.lower_expr(operand)?;
                let check = self.truthiness(value, operand_ty, span);
                Ok(Expr::unary(UnOp::Not, check))
            }
            PrefixOp::Neg => {
                let value = self.lower_expr(operand)?;
                Ok(match value {
                    Expr::Number(n) => Expr::Number(-n),
                    other => Expr::unary(UnOp::Neg, other),
                })
            }
            PrefixOp::Plus => {
                let value = self.lower_expr(operand)?;
                Ok(Expr::call(Expr::Ident(self.names.tonumber), vec![value]))
            }
            PrefixOp::BitNot => {
                let value = self.lower_expr(operand)?;
                let bnot = self.interner.intern("bnot");
                Ok(Expr::call(self.library(self.names.bit32, bnot), vec![value]))
            }
            PrefixOp::Update(update) => self.lower_update_value(id, update, operand, true),
        }
    }

    /// `++x` / `x++` used for its value.
    ///
    /// The operand location is resolved once. Prefix forms yield the location
    /// after the update; postfix forms copy the old value to a temporary
    /// first and yield that.
    fn lower_update_value(
        &mut self,
        id: ExprId,
        op: UpdateOp,
        operand: ExprId,
        prefix: bool,
    ) -> LowerResult<Expr> {
        let span = self.src.span(id);
        let place = self.lower_place(operand)?;
        let place = self.pin_place(place, span, Pin::Repeated);
        let location = place.into_expr();

        let result = if prefix {
            location.clone()
        } else {
            self.push_to_temp(location.clone(), self.names.hint_original, span)
        };
        self.prereq(Stmt::CompoundAssign {
            target: location,
            op: update_compound(op),
            value: Expr::Number(1.0),
        });
        Ok(result)
    }

    /// Shift a zero-based index to the target's one-based arrays when the
    /// indexed object is definitely an array (or an optional array).
    pub(crate) fn add_one_if_array(&self, object: ExprId, index: Expr) -> Expr {
        let object_ty = self.type_of(object);
        let is_array = is_definitely_type(self.types, object_ty, |t| {
            self.types.is_array_type(t) || self.types.is_undefined_type(t)
        });
        if is_array {
            offset(index, 1.0)
        } else {
            index
        }
    }

    /// Name of the parent class a `super` expression refers to.
    pub(crate) fn super_class(&self, id: ExprId, span: Span) -> LowerResult<tsl_ir::Name> {
        self.types
            .symbol_name(self.type_of(id))
            .ok_or(LowerError::UnresolvedCallee {
                span,
                callee: "super".to_owned(),
            })
    }
}

/// `expr + amount`, folding numeric literals.
pub(crate) fn offset(expr: Expr, amount: f64) -> Expr {
    match expr {
        Expr::Number(n) => Expr::Number(n + amount),
        other => Expr::binary(other, BinOp::Add, Expr::Number(amount)),
    }
}

pub(crate) fn update_compound(op: UpdateOp) -> CompoundOp {
    match op {
        UpdateOp::Increment => CompoundOp::Add,
        UpdateOp::Decrement => CompoundOp::Sub,
    }
}

/// Split a two-element lowering result.
pub(crate) fn into_pair(lowered: Vec<Expr>) -> [Expr; 2] {
    let mut iter = lowered.into_iter();
    match (iter.next(), iter.next()) {
        (Some(first), Some(second)) => [first, second],
        _ => panic!("expected exactly two lowered expressions"),
    }
}
