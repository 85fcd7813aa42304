//! End-to-end tests: checks and lowering over whole files.

use pretty_assertions::assert_eq;
use tsl_diagnostic::DiagnosticKind;
use tsl_ir::ast::{self, BinaryOp, ExprKind, StmtKind};
use tsl_ir::target::{Binding, Expr, Stmt};
use tsl_ir::{ExprArena, ExprId, Name, SourceFile, Span, StringInterner};
use tsl_lower::HelperFlags;
use tsl_types::{TypeId, TypeTable};
use tslc::{compile_file, compile_files, CompileOptions, FileOutput};

/// Builds one source file and its type table.
struct FileBuilder<'a> {
    interner: &'a StringInterner,
    arena: ExprArena,
    stmts: Vec<ast::Stmt>,
    types: TypeTable,
}

impl<'a> FileBuilder<'a> {
    fn new(interner: &'a StringInterner) -> Self {
        FileBuilder {
            interner,
            arena: ExprArena::new(),
            stmts: Vec::new(),
            types: TypeTable::default(),
        }
    }

    fn expr(&mut self, kind: ExprKind) -> ExprId {
        let start = u32::try_from(self.arena.len()).unwrap_or(0);
        self.arena
            .alloc_expr(ast::Expr::new(kind, Span::new(start, start + 1)))
    }

    fn ident(&mut self, text: &str) -> ExprId {
        let name = self.interner.intern(text);
        self.expr(ExprKind::Ident(name))
    }

    fn call(&mut self, callee: ExprId, args: &[ExprId]) -> ExprId {
        let args = self.arena.alloc_expr_list(args);
        self.expr(ExprKind::Call { callee, args })
    }

    fn stmt(&mut self, kind: StmtKind) {
        self.stmts.push(ast::Stmt::new(kind, Span::DUMMY));
    }

    fn export(mut self) -> Self {
        let name = self.interner.intern("default");
        self.stmt(StmtKind::Export { name });
        self
    }

    fn finish(self, path: &str) -> (SourceFile, TypeTable) {
        (SourceFile::new(path, self.arena, self.stmts), self.types)
    }
}

fn compile(file: &(SourceFile, TypeTable), interner: &StringInterner) -> FileOutput {
    compile_file(&file.0, &file.1, interner, &CompileOptions::default())
}

fn kinds(output: &FileOutput) -> Vec<DiagnosticKind> {
    output.diagnostics.iter().map(|d| d.kind).collect()
}

fn name(interner: &StringInterner, text: &str) -> Name {
    interner.intern(text)
}

#[test]
fn module_is_lowered() {
    let interner = StringInterner::new();
    let mut b = FileBuilder::new(&interner);
    let module = interner.intern("shared");
    b.stmt(StmtKind::Import { module });

    let print = b.ident("print");
    let call = b.call(print, &[]);
    b.stmt(StmtKind::Expr(call));

    let list_ty = b.types.pool_mut().array(TypeId::NUMBER);
    let list = b.ident("list");
    b.types.record(list, list_ty);
    let push = b.expr(ExprKind::PropertyAccess {
        object: list,
        name: name(&interner, "push"),
    });
    let item = b.ident("item");
    let push_call = b.call(push, &[item]);
    let count = name(&interner, "count");
    b.stmt(StmtKind::Let {
        name: count,
        init: push_call,
    });

    let file = b.export().finish("src/main.ts");
    let output = compile(&file, &interner);

    let ts = Expr::Ident(name(&interner, "TS"));
    let helper = Expr::property(
        Expr::property(ts, name(&interner, "array")),
        name(&interner, "push"),
    );
    assert_eq!(
        output.stmts,
        Some(vec![
            Stmt::Call(Expr::call(Expr::Ident(name(&interner, "print")), Vec::new())),
            Stmt::Local {
                binding: Binding::Name(count),
                value: Some(Expr::call(
                    helper,
                    vec![
                        Expr::Ident(name(&interner, "list")),
                        Expr::Ident(name(&interner, "item")),
                    ],
                )),
            },
        ])
    );
    assert!(output.is_success());
    assert_eq!(output.helpers, HelperFlags::ARRAY);
    assert!(output.temps.is_empty());
    assert_eq!(output.path, "src/main.ts");
}

#[test]
fn script_is_not_lowered() {
    let interner = StringInterner::new();
    let mut b = FileBuilder::new(&interner);
    let f = b.ident("f");
    let call = b.call(f, &[]);
    b.stmt(StmtKind::Expr(call));

    let output = compile(&b.finish("src/main.ts"), &interner);

    assert_eq!(output.stmts, None);
    assert_eq!(kinds(&output), vec![DiagnosticKind::NoNonModule]);
    assert!(!output.is_success());
}

#[test]
fn all_checks_report_before_skipping() {
    let interner = StringInterner::new();
    let output = compile(&FileBuilder::new(&interner).finish("src/while.lua"), &interner);

    assert_eq!(output.stmts, None);
    assert_eq!(
        kinds(&output),
        vec![DiagnosticKind::NoNonModule, DiagnosticKind::IncorrectFileName]
    );
    assert_eq!(output.error_count(), 2);
}

#[test]
fn recoverable_diagnostics_keep_the_output() {
    let interner = StringInterner::new();
    let mut b = FileBuilder::new(&interner);
    let a = b.ident("a");
    let c = b.ident("c");
    let eq = b.expr(ExprKind::Binary {
        op: BinaryOp::LooseEq,
        left: a,
        right: c,
    });
    let flag = name(&interner, "flag");
    b.stmt(StmtKind::Let { name: flag, init: eq });

    let output = compile(&b.export().finish("src/main.ts"), &interner);

    assert_eq!(
        output.stmts,
        Some(vec![Stmt::Local {
            binding: Binding::Name(flag),
            value: Some(Expr::Placeholder),
        }])
    );
    assert_eq!(kinds(&output), vec![DiagnosticKind::NoEqualsEquals]);
    assert!(!output.is_success());
}

#[test]
fn hard_error_drops_the_output() {
    let interner = StringInterner::new();
    let mut b = FileBuilder::new(&interner);

    let a = b.ident("a");
    let c = b.ident("c");
    let ne = b.expr(ExprKind::Binary {
        op: BinaryOp::LooseNotEq,
        left: a,
        right: c,
    });
    b.stmt(StmtKind::Expr(ne));

    let vector = interner.intern("Vector3");
    let vector_ty = b.types.pool_mut().object(Some(vector), &[]);
    let v = b.ident("v");
    b.types.record(v, vector_ty);
    let add = b.expr(ExprKind::PropertyAccess {
        object: v,
        name: name(&interner, "add"),
    });
    let w = b.ident("w");
    let add_call = b.call(add, &[w]);
    b.stmt(StmtKind::Expr(add_call));

    let after = b.ident("after");
    let after_call = b.call(after, &[]);
    b.stmt(StmtKind::Expr(after_call));

    let output = compile(&b.export().finish("src/main.ts"), &interner);

    assert_eq!(output.stmts, None);
    assert_eq!(
        kinds(&output),
        vec![
            DiagnosticKind::NoExclamationEquals,
            DiagnosticKind::NoMacroMathExpressionStatement,
        ]
    );
    assert!(output.diagnostics[1].message.contains("Vector3.add"));
}

#[test]
fn empty_checklist_lowers_scripts() {
    let interner = StringInterner::new();
    let mut b = FileBuilder::new(&interner);
    let f = b.ident("f");
    let call = b.call(f, &[]);
    b.stmt(StmtKind::Expr(call));
    let file = b.finish("bad name.lua");

    let options = CompileOptions {
        checklist: tsl_check::PreEmitChecklist::empty(),
        ..CompileOptions::default()
    };
    let output = compile_file(&file.0, &file.1, &interner, &options);

    assert!(output.is_success());
    assert_eq!(output.stmts.as_ref().map(Vec::len), Some(1));
}

fn batch(interner: &StringInterner) -> Vec<(SourceFile, TypeTable)> {
    let paths = ["src/a.ts", "src/b.ts", "src/c.lua", "src/d.ts", "src/e.tsx"];
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let mut b = FileBuilder::new(interner);
            for _ in 0..=i {
                let f = b.ident("tick");
                let call = b.call(f, &[]);
                b.stmt(StmtKind::Expr(call));
            }
            b.export().finish(path)
        })
        .collect()
}

#[test]
fn batch_output_keeps_input_order() {
    let interner = StringInterner::new();
    let files = batch(&interner);

    let outputs = compile_files(&files, &interner, &CompileOptions::default());

    let paths: Vec<&str> = outputs.iter().map(|o| o.path.as_str()).collect();
    assert_eq!(paths, vec!["src/a.ts", "src/b.ts", "src/c.lua", "src/d.ts", "src/e.tsx"]);
    let lengths: Vec<Option<usize>> = outputs
        .iter()
        .map(|o| o.stmts.as_ref().map(Vec::len))
        .collect();
    assert_eq!(lengths, vec![Some(1), Some(2), None, Some(4), Some(5)]);
}

#[test]
fn parallel_and_sequential_batches_agree() {
    let interner = StringInterner::new();
    let files = batch(&interner);

    let parallel = compile_files(&files, &interner, &CompileOptions::default());
    let sequential = compile_files(
        &files,
        &interner,
        &CompileOptions {
            parallel: false,
            ..CompileOptions::default()
        },
    );

    for (p, s) in parallel.iter().zip(&sequential) {
        assert_eq!(p.path, s.path);
        assert_eq!(p.stmts, s.stmts);
        assert_eq!(p.diagnostics, s.diagnostics);
    }
}
