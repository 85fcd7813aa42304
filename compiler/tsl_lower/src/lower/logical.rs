//! Truthiness and short-circuit operators.
//!
//! The source treats `0`, `NaN` and `""` as falsy; the target only treats
//! `nil` and `false` as falsy. Conditions on values that may be numbers or
//! strings get explicit checks.

use smallvec::SmallVec;
use tsl_ir::ast::BinaryOp;
use tsl_ir::target::{BinOp, Expr, Stmt, UnOp};
use tsl_ir::{ExprId, Name, Span};
use tsl_types::{is_possibly_type, TypeId};

use super::Lowerer;
use crate::LowerResult;

impl Lowerer<'_> {
    fn is_possibly_falsy_primitive(&self, ty: TypeId) -> (bool, bool) {
        let number = is_possibly_type(self.types, ty, |t| self.types.is_number_type(t));
        let string = is_possibly_type(self.types, ty, |t| self.types.is_string_type(t));
        (number, string)
    }

    /// Condition that is truthy in the target exactly when `value` is truthy
    /// in the source.
    pub(crate) fn truthiness(&mut self, value: Expr, ty: TypeId, span: Span) -> Expr {
        let (number, string) = self.is_possibly_falsy_primitive(ty);
        if !number && !string {
            return value;
        }

        let value = self.push_to_temp_if_complex(value, self.names.hint_exp, span);
        let mut checks: SmallVec<[Expr; 4]> = SmallVec::new();
        if number {
            checks.push(Expr::binary(value.clone(), BinOp::Ne, Expr::Number(0.0)));
            // NaN
            checks.push(Expr::binary(value.clone(), BinOp::Eq, value.clone()));
        }
        if string {
            checks.push(Expr::binary(value.clone(), BinOp::Ne, Expr::Str(Name::EMPTY)));
        }
        checks.push(value);

        let mut checks = checks.into_iter();
        let first = checks.next().unwrap_or(Expr::Bool(true));
        checks.fold(first, |acc, check| Expr::binary(acc, BinOp::And, check))
    }

    /// `&&`, `||` and `??`.
    ///
    /// The right operand's prerequisites only run when the left value
    /// requires it, so they are captured and placed inside the `if` block.
    pub(crate) fn lower_logical(
        &mut self,
        id: ExprId,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    ) -> LowerResult<Expr> {
        let span = self.src.span(id);
        let left_ty = self.type_of(left);
        let left_expr = self.lower_expr(left)?;
        let (right_expr, right_prereqs) = self.capture(|this| this.lower_expr(right))?;

        if op == BinaryOp::Coalesce {
            let result = self.push_to_temp(left_expr, self.names.hint_result, span);
            let condition = Expr::binary(result.clone(), BinOp::Eq, Expr::Nil);
            self.assign_in_block(condition, result.clone(), right_expr, right_prereqs);
            return Ok(result);
        }

        let native_op = if op == BinaryOp::And {
            BinOp::And
        } else {
            BinOp::Or
        };
        let (number, string) = self.is_possibly_falsy_primitive(left_ty);
        if !number && !string && right_prereqs.is_empty() {
            return Ok(Expr::binary(left_expr, native_op, right_expr));
        }

        tracing::debug!(op = op.as_symbol(), %span, "short-circuit lowered to block");
        let result = self.push_to_temp(left_expr, self.names.hint_result, span);
        let check = self.truthiness(result.clone(), left_ty, span);
        let condition = if op == BinaryOp::And {
            check
        } else {
            Expr::unary(UnOp::Not, check)
        };
        self.assign_in_block(condition, result.clone(), right_expr, right_prereqs);
        Ok(result)
    }

    /// `if <condition> then <prereqs> <target> = <value> end`
    fn assign_in_block(&mut self, condition: Expr, target: Expr, value: Expr, mut prereqs: Vec<Stmt>) {
        prereqs.push(Stmt::Assign { target, value });
        self.prereq(Stmt::If {
            condition,
            then_branch: prereqs,
        });
    }
}
