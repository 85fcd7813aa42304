//! Fixtures for lowering tests: a small AST builder over one file and a
//! plain-text rendering of the target AST.

use tsl_diagnostic::DiagnosticKind;
use tsl_ir::ast::{BinaryOp, Expr as SrcExpr, ExprKind, PrefixOp, Prop, UpdateOp};
use tsl_ir::target::{BinOp, Binding, Expr, Stmt, TableField};
use tsl_ir::{ExprArena, ExprId, Name, Span, StringInterner};
use tsl_types::{ReceiverBinding, Signature, TypeId, TypePool, TypeTable};

use crate::{CallContext, LowerResult, Lowerer, UnitState};

pub(crate) struct Fixture {
    pub(crate) interner: StringInterner,
    pub(crate) arena: ExprArena,
    pub(crate) types: TypeTable,
    pub(crate) state: UnitState,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
            arena: ExprArena::new(),
            types: TypeTable::default(),
            state: UnitState::new(),
        }
    }

    pub(crate) fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    pub(crate) fn pool(&mut self) -> &mut TypePool {
        self.types.pool_mut()
    }

    // === AST builders ===

    pub(crate) fn expr(&mut self, kind: ExprKind) -> ExprId {
        let start = u32::try_from(self.arena.len()).unwrap_or(u32::MAX - 1);
        self.arena
            .alloc_expr(SrcExpr::new(kind, Span::new(start, start + 1)))
    }

    pub(crate) fn ident(&mut self, text: &str) -> ExprId {
        let name = self.name(text);
        self.expr(ExprKind::Ident(name))
    }

    pub(crate) fn num(&mut self, value: f64) -> ExprId {
        self.expr(ExprKind::number(value))
    }

    pub(crate) fn string(&mut self, text: &str) -> ExprId {
        let name = self.name(text);
        self.expr(ExprKind::String(name))
    }

    pub(crate) fn prop(&mut self, object: ExprId, member: &str) -> ExprId {
        let name = self.name(member);
        self.expr(ExprKind::PropertyAccess { object, name })
    }

    pub(crate) fn elem(&mut self, object: ExprId, index: ExprId) -> ExprId {
        self.expr(ExprKind::ElementAccess { object, index })
    }

    pub(crate) fn call(&mut self, callee: ExprId, args: &[ExprId]) -> ExprId {
        let args = self.arena.alloc_expr_list(args);
        self.expr(ExprKind::Call { callee, args })
    }

    /// `object.member(args)`, returning `(call, callee)`.
    pub(crate) fn member_call(
        &mut self,
        object: ExprId,
        member: &str,
        args: &[ExprId],
    ) -> (ExprId, ExprId) {
        let callee = self.prop(object, member);
        (self.call(callee, args), callee)
    }

    pub(crate) fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.expr(ExprKind::Binary { op, left, right })
    }

    pub(crate) fn prefix(&mut self, op: PrefixOp, operand: ExprId) -> ExprId {
        self.expr(ExprKind::PrefixUnary { op, operand })
    }

    pub(crate) fn postfix(&mut self, op: UpdateOp, operand: ExprId) -> ExprId {
        self.expr(ExprKind::PostfixUnary { op, operand })
    }

    pub(crate) fn array(&mut self, elements: &[ExprId]) -> ExprId {
        let range = self.arena.alloc_expr_list(elements);
        self.expr(ExprKind::Array(range))
    }

    pub(crate) fn object(&mut self, props: &[(&str, ExprId)]) -> ExprId {
        let props: Vec<Prop> = props
            .iter()
            .map(|&(name, value)| Prop {
                name: self.name(name),
                value,
                span: Span::DUMMY,
            })
            .collect();
        let range = self.arena.alloc_props(&props);
        self.expr(ExprKind::Object(range))
    }

    // === Types ===

    /// Record the static type of `id` and return `id`.
    pub(crate) fn typed(&mut self, id: ExprId, ty: TypeId) -> ExprId {
        self.types.record(id, ty);
        id
    }

    pub(crate) fn function_type(&mut self, receivers: &[ReceiverBinding]) -> TypeId {
        let signatures: Vec<Signature> = receivers.iter().copied().map(Signature::new).collect();
        self.pool().function(&signatures)
    }

    pub(crate) fn named_object(&mut self, name: &str) -> TypeId {
        let name = self.name(name);
        self.pool().object(Some(name), &[])
    }

    // === Lowering ===

    pub(crate) fn lower_statement(&mut self, id: ExprId) -> LowerResult<Vec<Stmt>> {
        let mut lowerer = Lowerer::new(&self.arena, &self.types, &self.interner, &mut self.state);
        lowerer.lower_expression_statement(id)
    }

    pub(crate) fn lower_value(&mut self, id: ExprId) -> LowerResult<(Expr, Vec<Stmt>)> {
        let mut lowerer = Lowerer::new(&self.arena, &self.types, &self.interner, &mut self.state);
        lowerer.lower_expression(id)
    }

    pub(crate) fn lower_call(&mut self, id: ExprId, ctx: CallContext) -> LowerResult<Expr> {
        let mut lowerer = Lowerer::new(&self.arena, &self.types, &self.interner, &mut self.state);
        lowerer.lower_call(id, ctx)
    }

    /// Lower `id` as a statement and render the result.
    pub(crate) fn statement_text(&mut self, id: ExprId) -> String {
        match self.lower_statement(id) {
            Ok(stmts) => self.render(&stmts),
            Err(error) => panic!("lowering failed: {error}"),
        }
    }

    /// Lower `id` as a value and render prerequisites, then `=> value`.
    pub(crate) fn value_text(&mut self, id: ExprId) -> String {
        match self.lower_value(id) {
            Ok((expr, prereqs)) => {
                let mut out = self.render(&prereqs);
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str("=> ");
                out.push_str(&self.render_expr(&expr));
                out
            }
            Err(error) => panic!("lowering failed: {error}"),
        }
    }

    pub(crate) fn diagnostic_kinds(&self) -> Vec<DiagnosticKind> {
        self.state.diagnostics.iter().map(|d| d.kind).collect()
    }

    // === Rendering ===

    pub(crate) fn render(&self, stmts: &[Stmt]) -> String {
        let mut lines = Vec::new();
        for stmt in stmts {
            self.render_stmt(stmt, 0, &mut lines);
        }
        lines.join("\n")
    }

    fn render_stmt(&self, stmt: &Stmt, depth: usize, lines: &mut Vec<String>) {
        let indent = "    ".repeat(depth);
        match stmt {
            Stmt::Call(expr) => lines.push(format!("{indent}{}", self.render_expr(expr))),
            Stmt::Assign { target, value } => lines.push(format!(
                "{indent}{} = {}",
                self.render_expr(target),
                self.render_expr(value)
            )),
            Stmt::CompoundAssign { target, op, value } => lines.push(format!(
                "{indent}{} {} {}",
                self.render_expr(target),
                op.as_symbol(),
                self.render_expr(value)
            )),
            Stmt::Local { binding, value } => {
                let binding = match binding {
                    Binding::Name(name) => self.interner.lookup(*name).to_owned(),
                    Binding::Temp(temp) => self.render_expr(&Expr::Temp(*temp)),
                    Binding::Discard => "_".to_owned(),
                };
                match value {
                    Some(value) => lines.push(format!(
                        "{indent}local {binding} = {}",
                        self.render_expr(value)
                    )),
                    None => lines.push(format!("{indent}local {binding}")),
                }
            }
            Stmt::If {
                condition,
                then_branch,
            } => {
                lines.push(format!("{indent}if {} then", self.render_expr(condition)));
                for inner in then_branch {
                    self.render_stmt(inner, depth + 1, lines);
                }
                lines.push(format!("{indent}end"));
            }
        }
    }

    pub(crate) fn render_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Placeholder => "_".to_owned(),
            Expr::Ident(name) => self.interner.lookup(*name).to_owned(),
            Expr::Temp(temp) => {
                let hint = self.state.temps().get(*temp).hint;
                format!("_{}{}", self.interner.lookup(hint), temp.index())
            }
            Expr::Nil => "nil".to_owned(),
            Expr::Bool(value) => value.to_string(),
            Expr::Number(value) => format!("{value}"),
            Expr::Str(name) => format!("\"{}\"", self.interner.lookup(*name)),
            Expr::Binary { left, op, right } => {
                let prec = precedence(*op);
                let right_assoc = matches!(op, BinOp::Concat | BinOp::Pow);
                let left_text = self.render_child(left, |child| {
                    child < prec || (child == prec && right_assoc)
                });
                let right_text = self.render_child(right, |child| {
                    child < prec || (child == prec && !right_assoc)
                });
                format!("{left_text} {} {right_text}", op.as_symbol())
            }
            Expr::Unary { op, operand } => {
                let operand = self.render_child(operand, |child| child < UNARY);
                format!("{}{operand}", op.as_symbol())
            }
            Expr::Paren(inner) => format!("({})", self.render_expr(inner)),
            Expr::Property { object, name } => format!(
                "{}.{}",
                self.render_operand(object),
                self.interner.lookup(*name)
            ),
            Expr::Index { object, index } => format!(
                "{}[{}]",
                self.render_operand(object),
                self.render_expr(index)
            ),
            Expr::Call { callee, args } => {
                format!("{}({})", self.render_operand(callee), self.render_list(args))
            }
            Expr::MethodCall {
                receiver,
                name,
                args,
            } => format!(
                "{}:{}({})",
                self.render_operand(receiver),
                self.interner.lookup(*name),
                self.render_list(args)
            ),
            Expr::Table(fields) if fields.is_empty() => "{}".to_owned(),
            Expr::Table(fields) => {
                let fields: Vec<String> = fields
                    .iter()
                    .map(|field| match field {
                        TableField::Positional(value) => self.render_expr(value),
                        TableField::Named(name, value) => format!(
                            "{} = {}",
                            self.interner.lookup(*name),
                            self.render_expr(value)
                        ),
                    })
                    .collect();
                format!("{{ {} }}", fields.join(", "))
            }
            Expr::TuplePack(call) => format!("{{ {} }}", self.render_expr(call)),
        }
    }

    /// Operand of a postfix form (`.name`, `[index]`, `(args)`).
    fn render_operand(&self, expr: &Expr) -> String {
        self.render_child(expr, |child| child < ATOM)
    }

    fn render_child(&self, expr: &Expr, needs_parens: impl Fn(u8) -> bool) -> String {
        let child = match expr {
            Expr::Binary { op, .. } => precedence(*op),
            Expr::Unary { .. } => UNARY,
            _ => ATOM,
        };
        if needs_parens(child) {
            format!("({})", self.render_expr(expr))
        } else {
            self.render_expr(expr)
        }
    }

    fn render_list(&self, exprs: &[Expr]) -> String {
        exprs
            .iter()
            .map(|expr| self.render_expr(expr))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

const UNARY: u8 = 7;
const ATOM: u8 = 9;

fn precedence(op: BinOp) -> u8 {
    match op {
        BinOp::Or => 1,
        BinOp::And => 2,
        BinOp::Eq | BinOp::Ne | BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => 3,
        BinOp::Concat => 4,
        BinOp::Add | BinOp::Sub => 5,
        BinOp::Mul | BinOp::Div | BinOp::Mod => 6,
        BinOp::Pow => 8,
    }
}
