//! Binary expressions and the source → target operator mapping.

use tsl_diagnostic::DiagnosticKind;
use tsl_ir::ast::BinaryOp;
use tsl_ir::target::{BinOp, Expr};
use tsl_ir::{ExprId, Span};
use tsl_types::{is_definitely_type, TypeId};

use super::expr::into_pair;
use super::Lowerer;
use crate::{HelperFlags, LowerResult};

/// A lowered operand together with its static type.
#[derive(Clone, Debug)]
pub(crate) struct Operand {
    pub(crate) expr: Expr,
    pub(crate) ty: TypeId,
}

impl Lowerer<'_> {
    /// Lower a binary expression. First matching rule wins:
    /// banned loose equality, logical operators, assignments, then every
    /// other operator with left-to-right operand evaluation.
    pub(crate) fn lower_binary(
        &mut self,
        id: ExprId,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    ) -> LowerResult<Expr> {
        let span = self.src.span(id);

        match op {
            BinaryOp::LooseEq => {
                self.state.push_diagnostic(
                    DiagnosticKind::NoEqualsEquals,
                    span,
                    "operator `==` is not supported, use `===` instead",
                );
                return Ok(Expr::Placeholder);
            }
            BinaryOp::LooseNotEq => {
                self.state.push_diagnostic(
                    DiagnosticKind::NoExclamationEquals,
                    span,
                    "operator `!=` is not supported, use `!==` instead",
                );
                return Ok(Expr::Placeholder);
            }
            _ => {}
        }

        if op.is_logical() {
            return self.lower_logical(id, op, left, right);
        }

        if op.is_assignment() {
            return self.lower_assignment_expression(id, op, left, right);
        }

        let lowered = self.ensure_transform_order(&[left, right])?;
        let [left_expr, right_expr] = into_pair(lowered);
        let left = Operand {
            expr: left_expr,
            ty: self.type_of(left),
        };
        let right = Operand {
            expr: right_expr,
            ty: self.type_of(right),
        };
        Ok(self.binary_from_operator(left, op, right, span))
    }

    pub(crate) fn is_definitely_string(&self, ty: TypeId) -> bool {
        is_definitely_type(self.types, ty, |t| self.types.is_string_type(t))
    }

    fn is_definitely_number(&self, ty: TypeId) -> bool {
        is_definitely_type(self.types, ty, |t| self.types.is_number_type(t))
    }

    /// `+` concatenates when either side is definitely a string.
    pub(crate) fn is_concat(&self, left: TypeId, right: TypeId) -> bool {
        self.is_definitely_string(left) || self.is_definitely_string(right)
    }

    /// Operand of a concatenation: strings and numbers concatenate natively,
    /// anything else goes through `tostring`.
    pub(crate) fn concat_operand(&self, operand: Operand) -> Expr {
        if self.is_definitely_string(operand.ty) || self.is_definitely_number(operand.ty) {
            operand.expr
        } else {
            Expr::call(Expr::Ident(self.names.tostring), vec![operand.expr])
        }
    }

    /// Combine two lowered operands with the target form of `op`.
    ///
    /// `op` is a value operator; logical and assignment operators are
    /// lowered before reaching here.
    pub(crate) fn binary_from_operator(
        &mut self,
        left: Operand,
        op: BinaryOp,
        right: Operand,
        span: Span,
    ) -> Expr {
        let direct = |l: Operand, bin: BinOp, r: Operand| Expr::binary(l.expr, bin, r.expr);
        match op {
            BinaryOp::Add => {
                if self.is_concat(left.ty, right.ty) {
                    let l = self.concat_operand(left);
                    let r = self.concat_operand(right);
                    Expr::binary(l, BinOp::Concat, r)
                } else {
                    direct(left, BinOp::Add, right)
                }
            }
            BinaryOp::Sub => direct(left, BinOp::Sub, right),
            BinaryOp::Mul => direct(left, BinOp::Mul, right),
            BinaryOp::Div => direct(left, BinOp::Div, right),
            BinaryOp::Pow => direct(left, BinOp::Pow, right),
            // Truncating remainder, like the source's `%`.
            BinaryOp::Mod => Expr::call(
                self.library(self.names.math, self.names.fmod),
                vec![left.expr, right.expr],
            ),
            BinaryOp::StrictEq => direct(left, BinOp::Eq, right),
            BinaryOp::StrictNotEq => direct(left, BinOp::Ne, right),
            BinaryOp::Lt => direct(left, BinOp::Lt, right),
            BinaryOp::LtEq => direct(left, BinOp::Le, right),
            BinaryOp::Gt => direct(left, BinOp::Gt, right),
            BinaryOp::GtEq => direct(left, BinOp::Ge, right),
            BinaryOp::BitAnd => self.bit32(left, "band", right),
            BinaryOp::BitOr => self.bit32(left, "bor", right),
            BinaryOp::BitXor => self.bit32(left, "bxor", right),
            BinaryOp::Shl => self.bit32(left, "lshift", right),
            BinaryOp::Shr => self.bit32(left, "arshift", right),
            BinaryOp::UShr => self.bit32(left, "rshift", right),
            BinaryOp::In => self.membership(left, right, span),
            BinaryOp::InstanceOf => {
                self.state.use_helper(HelperFlags::RUNTIME);
                Expr::call(
                    self.helper(self.names.ns_runtime, self.names.instanceof),
                    vec![left.expr, right.expr],
                )
            }
            BinaryOp::LooseEq
            | BinaryOp::LooseNotEq
            | BinaryOp::And
            | BinaryOp::Or
            | BinaryOp::Coalesce
            | BinaryOp::Assign
            | BinaryOp::AddAssign
            | BinaryOp::SubAssign
            | BinaryOp::MulAssign
            | BinaryOp::DivAssign
            | BinaryOp::ModAssign
            | BinaryOp::PowAssign
            | BinaryOp::BitAndAssign
            | BinaryOp::BitOrAssign
            | BinaryOp::BitXorAssign
            | BinaryOp::ShlAssign
            | BinaryOp::ShrAssign
            | BinaryOp::UShrAssign => {
                unreachable!("`{}` at {span} is lowered before operator mapping", op.as_symbol())
            }
        }
    }

    /// `key in object` → `object[key] ~= nil`.
    ///
    /// The target evaluates the indexed object before the key, so the key is
    /// bound to a temporary first whenever swapping the two could be
    /// observed.
    fn membership(&mut self, key: Operand, object: Operand, span: Span) -> Expr {
        let both_pure_reads = key.expr.is_simple() && object.expr.is_simple();
        let key = if !both_pure_reads && !object.expr.is_stable() {
            self.push_to_temp_if_unstable(key.expr, self.names.hint_exp, span)
        } else {
            key.expr
        };
        Expr::binary(Expr::index(object.expr, key), BinOp::Ne, Expr::Nil)
    }

    fn bit32(&self, left: Operand, member: &str, right: Operand) -> Expr {
        let member = self.interner.intern(member);
        Expr::call(
            self.library(self.names.bit32, member),
            vec![left.expr, right.expr],
        )
    }
}
