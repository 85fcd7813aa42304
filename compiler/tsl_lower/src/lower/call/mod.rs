//! Call expressions: type-directed macro and method dispatch.
//!
//! Property calls are resolved in order, first match wins:
//! 1. container and primitive macros (helper namespaces, native string
//!    library)
//! 2. renamed interop members (`Promise.then`, `Symbol.for`)
//! 3. operator-style members on math value classes
//! 4. generic method/callback dispatch from the declared call signatures
//!
//! Finished calls whose type is a multi-value return are packed into one
//! table unless the call site consumes or discards the values itself.

mod family;

use tsl_diagnostic::DiagnosticKind;
use tsl_ir::ast::ExprKind;
use tsl_ir::target::Expr;
use tsl_ir::{ExprId, Name, Span};

use super::Lowerer;
use crate::{LowerError, LowerResult};
use family::{CallRule, ReceiverFamily};

/// Where a call's value goes.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CallContext {
    /// The call is an expression statement; its value is dropped.
    pub discarded: bool,
    /// Pack multi-value returns into a single table.
    pub wrap_tuple_return: bool,
}

impl CallContext {
    pub const VALUE: CallContext = CallContext {
        discarded: false,
        wrap_tuple_return: true,
    };

    pub const STATEMENT: CallContext = CallContext {
        discarded: true,
        wrap_tuple_return: false,
    };
}

impl Lowerer<'_> {
    /// Lower the call expression `id`.
    ///
    /// Property-access callees go through type-directed dispatch; any other
    /// callee, element accesses included, is called as a plain value.
    pub fn lower_call(&mut self, id: ExprId, ctx: CallContext) -> LowerResult<Expr> {
        let span = self.src.span(id);
        let ExprKind::Call { callee, args } = *self.src.kind(id) else {
            return self.lower_expr(id);
        };
        if matches!(self.src.kind(callee), ExprKind::PropertyAccess { .. }) {
            return self.lower_property_call(id, ctx);
        }
        self.check_non_any(callee);
        let args = self.src.get_expr_list(args).to_vec();
        let call = if matches!(self.src.kind(callee), ExprKind::Super) {
            self.lower_super_constructor_call(callee, &args, span)?
        } else {
            let mut lowered = self.lower_call_operands(Some(callee), &args)?;
            let callee_expr = lowered.remove(0);
            Expr::call(callee_expr, lowered)
        };
        Ok(self.wrap_tuple_return(id, call, ctx))
    }

    /// Lower `id` as `object.member(args)`.
    ///
    /// Fails with [`LowerError::ExpectedPropertyAccessExpression`] when `id`
    /// is not a call whose callee is a property access.
    pub fn lower_property_call(&mut self, id: ExprId, ctx: CallContext) -> LowerResult<Expr> {
        let ExprKind::Call { callee, args } = *self.src.kind(id) else {
            return Err(LowerError::ExpectedPropertyAccessExpression {
                span: self.src.span(id),
            });
        };
        let ExprKind::PropertyAccess { object, name } = *self.src.kind(callee) else {
            return Err(LowerError::ExpectedPropertyAccessExpression {
                span: self.src.span(callee),
            });
        };
        self.check_non_any(callee);
        let args = self.src.get_expr_list(args).to_vec();
        let call = self.dispatch_property_call(id, callee, object, name, &args, ctx)?;
        Ok(self.wrap_tuple_return(id, call, ctx))
    }

    fn dispatch_property_call(
        &mut self,
        call_id: ExprId,
        callee: ExprId,
        object: ExprId,
        member: Name,
        args: &[ExprId],
        ctx: CallContext,
    ) -> LowerResult<Expr> {
        let span = self.src.span(call_id);
        let family = self.classify_receiver(self.type_of(object));
        let rule = self.call_rule(family, member, args.len());
        tracing::debug!(?family, ?rule, member = self.name_str(member), "property call");

        if let (CallRule::Math(_), ReceiverFamily::Math(class)) = (rule, family) {
            if ctx.discarded {
                return Err(LowerError::NoMacroMathExpressionStatement {
                    span,
                    class: self.name_str(class).to_owned(),
                    member: self.name_str(member).to_owned(),
                });
            }
        }

        // Generic dispatch decides the calling convention up front so a bad
        // call site fails before any argument is lowered.
        let method_style = match rule {
            CallRule::Generic => Some(self.resolve_call_style(callee, member, span)?),
            _ => None,
        };

        let mut lowered = self.lower_call_operands(Some(object), args)?;
        let receiver = lowered.remove(0);
        let mut call_args = lowered;

        let call = match rule {
            CallRule::Helper {
                namespace,
                with_receiver,
            } => {
                self.state.use_helper(namespace.flag());
                if with_receiver {
                    call_args.insert(0, receiver);
                }
                Expr::call(self.helper(self.namespace_name(namespace), member), call_args)
            }
            CallRule::NativeString => {
                call_args.insert(0, receiver);
                Expr::call(self.library(self.names.string, member), call_args)
            }
            CallRule::RenamedMethod(method) => Expr::method_call(receiver, method, call_args),
            CallRule::RenamedField(field) => Expr::call(Expr::property(receiver, field), call_args),
            CallRule::Math(op) => {
                let arg = call_args.pop().unwrap_or(Expr::Nil);
                let arg = if matches!(arg, Expr::Binary { .. }) {
                    Expr::paren(arg)
                } else {
                    arg
                };
                Expr::paren(Expr::binary(receiver, op, arg))
            }
            CallRule::Generic => match method_style {
                Some(true) if matches!(self.src.kind(object), ExprKind::Super) => {
                    // Parent method tables are not bound to the instance.
                    let class = self.super_class(object, span)?;
                    call_args.insert(0, Expr::Ident(self.names.self_));
                    let table = Expr::property(Expr::Ident(class), self.names.index_meta);
                    Expr::call(Expr::property(table, member), call_args)
                }
                Some(true) => Expr::method_call(receiver, member, call_args),
                _ => Expr::call(Expr::property(receiver, member), call_args),
            },
        };
        Ok(call)
    }

    /// `true` for method style, `false` for callback style.
    fn resolve_call_style(&self, callee: ExprId, member: Name, span: Span) -> LowerResult<bool> {
        let signatures = self.types.call_signatures(self.type_of(callee));
        if signatures.is_empty() {
            return Err(LowerError::UnresolvedCallee {
                span,
                callee: self.name_str(member).to_owned(),
            });
        }
        let all_methods = signatures.iter().all(|s| s.receiver.is_method_style());
        let all_callbacks = signatures.iter().all(|s| s.receiver.is_callback_style());
        match (all_methods, all_callbacks) {
            (true, false) => Ok(true),
            (false, true) => Ok(false),
            _ => Err(LowerError::MixedMethodCall { span }),
        }
    }

    /// `super(args)` → `Parent.constructor(self, args)`
    fn lower_super_constructor_call(
        &mut self,
        callee: ExprId,
        args: &[ExprId],
        span: Span,
    ) -> LowerResult<Expr> {
        let class = self.super_class(callee, span)?;
        let mut call_args = self.lower_call_operands(None, args)?;
        call_args.insert(0, Expr::Ident(self.names.self_));
        Ok(Expr::call(
            Expr::property(Expr::Ident(class), self.names.constructor),
            call_args,
        ))
    }

    /// Lower the receiver (when present) followed by the arguments, in
    /// source order. A spread is only accepted as the last argument and
    /// becomes `unpack(value)`.
    fn lower_call_operands(
        &mut self,
        receiver: Option<ExprId>,
        args: &[ExprId],
    ) -> LowerResult<Vec<Expr>> {
        let mut ids = Vec::with_capacity(args.len() + 1);
        ids.extend(receiver);
        let first_arg = ids.len();
        ids.extend_from_slice(args);
        let last = ids.len().saturating_sub(1);

        self.ensure_transform_order_with(&ids, |this, position, id| {
            if position < first_arg {
                return this.lower_expr(id);
            }
            if let ExprKind::Spread(inner) = *this.src.kind(id) {
                if position != last {
                    return Err(LowerError::UnsupportedSpreadArgument {
                        span: this.src.span(id),
                    });
                }
                let value = this.lower_expr(inner)?;
                return Ok(Expr::call(Expr::Ident(this.names.unpack), vec![value]));
            }
            this.check_non_any(id);
            this.lower_expr(id)
        })
    }

    /// Values of type `any` cannot drive type-directed lowering.
    fn check_non_any(&mut self, id: ExprId) {
        if self.types.is_any_type(self.type_of(id)) {
            self.state.push_diagnostic(
                DiagnosticKind::NoAny,
                self.src.span(id),
                "using values of type `any` is not supported, use `unknown` instead",
            );
        }
    }

    fn wrap_tuple_return(&self, id: ExprId, call: Expr, ctx: CallContext) -> Expr {
        if ctx.wrap_tuple_return && call.is_call() && self.types.is_tuple_return_type(self.type_of(id)) {
            Expr::tuple_pack(call)
        } else {
            call
        }
    }
}
