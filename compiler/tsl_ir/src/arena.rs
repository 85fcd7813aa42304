//! Source expression arena.
//!
//! Struct-of-arrays storage: parallel `kinds`/`spans` vectors indexed by
//! [`ExprId`], plus flattened child lists for call arguments, array
//! elements, and object-literal properties.

use crate::ast::{Expr, ExprKind, Prop};
use crate::{ExprId, ExprRange, PropRange, Span};

/// Convert a length to `u32`, panicking on arena overflow.
#[inline]
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what} (exceeds u32::MAX)"))
}

#[inline]
fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("{what} too long (exceeds u16::MAX)"))
}

#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    kinds: Vec<ExprKind>,
    spans: Vec<Span>,
    expr_lists: Vec<ExprId>,
    props: Vec<Prop>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its ID.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.kinds.len(), "expressions"));
        self.kinds.push(expr.kind);
        self.spans.push(expr.span);
        id
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.kinds[id.index()]
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.spans[id.index()]
    }

    #[inline]
    pub fn get(&self, id: ExprId) -> Expr {
        Expr::new(self.kinds[id.index()], self.spans[id.index()])
    }

    pub fn alloc_expr_list(&mut self, ids: &[ExprId]) -> ExprRange {
        if ids.is_empty() {
            return ExprRange::EMPTY;
        }
        let start = to_u32(self.expr_lists.len(), "expression lists");
        self.expr_lists.extend_from_slice(ids);
        ExprRange::new(start, to_u16(ids.len(), "expression list"))
    }

    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        if range.is_empty() {
            return &[];
        }
        &self.expr_lists[range.to_range()]
    }

    pub fn alloc_props(&mut self, props: &[Prop]) -> PropRange {
        if props.is_empty() {
            return PropRange::EMPTY;
        }
        let start = to_u32(self.props.len(), "properties");
        self.props.extend_from_slice(props);
        PropRange::new(start, to_u16(props.len(), "property list"))
    }

    pub fn get_props(&self, range: PropRange) -> &[Prop] {
        if range.is_empty() {
            return &[];
        }
        &self.props[range.to_range()]
    }

    /// Number of allocated expressions.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
