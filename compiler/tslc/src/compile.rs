//! Compiling single files and batches.

use rayon::prelude::*;
use tsl_ir::target::Stmt;
use tsl_ir::{SourceFile, StringInterner};
use tsl_lower::{LowerResult, Lowerer, UnitState};
use tsl_types::TypeQuery;

use crate::{CompileOptions, FileOutput};

/// Check and lower one file.
///
/// A file whose checks report an error is not lowered. A hard lowering
/// error becomes an error diagnostic and drops the file's statements; the
/// recoverable diagnostics collected before it are kept.
pub fn compile_file(
    file: &SourceFile,
    types: &dyn TypeQuery,
    interner: &StringInterner,
    options: &CompileOptions,
) -> FileOutput {
    let _span = tracing::info_span!("compile_file", path = %file.path).entered();

    let mut state = UnitState::new();
    state.diagnostics.extend(options.checklist.run(file));

    let stmts = if state.diagnostics.has_errors() {
        tracing::debug!("pre-emit checks failed, skipping lowering");
        None
    } else {
        match lower_file(file, types, interner, &mut state) {
            Ok(stmts) => Some(stmts),
            Err(error) => {
                tracing::warn!(%error, span = %error.span(), "lowering aborted");
                state.diagnostics.push(error.to_diagnostic());
                None
            }
        }
    };

    let (diagnostics, temps, helpers) = state.into_parts();
    tracing::debug!(
        lowered = stmts.is_some(),
        diagnostics = diagnostics.len(),
        temps = temps.len(),
        "file compiled"
    );
    FileOutput {
        path: file.path.clone(),
        stmts,
        temps,
        diagnostics: diagnostics.into_vec(),
        helpers,
    }
}

fn lower_file(
    file: &SourceFile,
    types: &dyn TypeQuery,
    interner: &StringInterner,
    state: &mut UnitState,
) -> LowerResult<Vec<Stmt>> {
    let mut lowerer = Lowerer::new(&file.arena, types, interner, state);
    let mut stmts = Vec::with_capacity(file.stmts.len());
    for stmt in &file.stmts {
        stmts.extend(lowerer.lower_top_level(stmt)?);
    }
    Ok(stmts)
}

/// Compile each file with its type information. Outputs are in input
/// order whether or not the batch runs in parallel.
pub fn compile_files<T: TypeQuery + Sync>(
    files: &[(SourceFile, T)],
    interner: &StringInterner,
    options: &CompileOptions,
) -> Vec<FileOutput> {
    if options.parallel && files.len() > 1 {
        files
            .par_iter()
            .map(|(file, types)| compile_file(file, types, interner, options))
            .collect()
    } else {
        files
            .iter()
            .map(|(file, types)| compile_file(file, types, interner, options))
            .collect()
    }
}
