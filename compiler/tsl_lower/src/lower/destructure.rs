//! Array and object pattern assignment.
//!
//! `[a, b] = value` and `({ x, y } = value)` bind the value to a temporary
//! once and assign each element target from its position. Nested patterns
//! bind the extracted element to another temporary and recurse with the
//! element's sub-type.

use tsl_ir::ast::ExprKind;
use tsl_ir::target::{Expr, Stmt};
use tsl_ir::{ExprId, Span};
use tsl_types::is_definitely_type;

use super::Lowerer;
use crate::sub_type::{get_sub_type, SubIndex, SubType};
use crate::{HelperFlags, LowerResult};

impl Lowerer<'_> {
    /// Lower `pattern = value` used as an expression; the result is the
    /// temporary holding the assigned value.
    pub(crate) fn lower_destructuring_assignment(
        &mut self,
        id: ExprId,
        pattern: ExprId,
        value: ExprId,
    ) -> LowerResult<Expr> {
        let span = self.src.span(id);
        let value_ty = SubType::Single(self.type_of(value));
        let value = self.lower_expr(value)?;
        let source = self.push_to_temp(value, self.names.hint_value, span);
        self.destructure(pattern, source.clone(), &value_ty)?;
        Ok(source)
    }

    fn destructure(&mut self, pattern: ExprId, source: Expr, ty: &SubType) -> LowerResult<()> {
        let span = self.src.span(pattern);
        match *self.src.kind(pattern) {
            ExprKind::Array(range) => {
                let source = self.indexable_source(source, ty, span);
                let elements = self.src.get_expr_list(range).to_vec();
                for (position, element) in elements.into_iter().enumerate() {
                    let access = Expr::index(source.clone(), one_based(position));
                    self.assign_element(element, access, ty, SubIndex::Position(position))?;
                }
                Ok(())
            }
            ExprKind::Object(range) => {
                let props = self.src.get_props(range).to_vec();
                for prop in props {
                    let access = Expr::property(source.clone(), prop.name);
                    self.assign_element(prop.value, access, ty, SubIndex::Name(prop.name))?;
                }
                Ok(())
            }
            _ => {
                let target = self.lower_place(pattern)?.into_expr();
                self.prereq(Stmt::Assign {
                    target,
                    value: source,
                });
                Ok(())
            }
        }
    }

    fn assign_element(
        &mut self,
        target: ExprId,
        access: Expr,
        parent_ty: &SubType,
        index: SubIndex,
    ) -> LowerResult<()> {
        if self.is_pattern(target) {
            let sub_ty = get_sub_type(self.types, parent_ty, index);
            let span = self.src.span(target);
            let element = self.push_to_temp(access, self.names.hint_value, span);
            return self.destructure(target, element, &sub_ty);
        }
        if matches!(self.src.kind(target), ExprKind::Undefined) {
            // Elided element: `[, b] = value`.
            return Ok(());
        }
        let target = self.lower_place(target)?.into_expr();
        self.prereq(Stmt::Assign {
            target,
            value: access,
        });
        Ok(())
    }

    /// Arrays and multi-value returns are indexed directly; other iterables
    /// are first converted with the array helper.
    fn indexable_source(&mut self, source: Expr, ty: &SubType, span: Span) -> Expr {
        let direct = match ty {
            SubType::Sequence(_) => true,
            SubType::Single(ty) => is_definitely_type(self.types, *ty, |t| {
                self.types.is_array_type(t) || self.types.is_tuple_return_type(t)
            }),
        };
        if direct {
            return source;
        }
        tracing::debug!(%span, "destructuring a non-array iterable through the array helper");
        self.state.use_helper(HelperFlags::ARRAY);
        let converted = Expr::call(self.helper(self.names.ns_array, self.names.from), vec![source]);
        self.push_to_temp(converted, self.names.hint_value, span)
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "pattern element lists hold at most u16::MAX entries"
)]
fn one_based(position: usize) -> Expr {
    Expr::Number(position as f64 + 1.0)
}
