//! The ordered list of pre-emit checks.

use tsl_diagnostic::Diagnostic;
use tsl_ir::SourceFile;

use crate::{check_file_name, file_is_module};

/// A whole-file validator.
pub type PreEmitCheck = fn(&SourceFile) -> Vec<Diagnostic>;

#[derive(Clone, Debug)]
pub struct PreEmitChecklist {
    checks: Vec<PreEmitCheck>,
}

impl PreEmitChecklist {
    /// A checklist with no checks.
    pub fn empty() -> Self {
        PreEmitChecklist { checks: Vec::new() }
    }

    /// Append `check` after the existing checks.
    #[must_use]
    pub fn with_check(mut self, check: PreEmitCheck) -> Self {
        self.checks.push(check);
        self
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check and concatenate their diagnostics in checklist order.
    pub fn run(&self, file: &SourceFile) -> Vec<Diagnostic> {
        let diagnostics: Vec<Diagnostic> = self.checks.iter().flat_map(|check| check(file)).collect();
        if !diagnostics.is_empty() {
            tracing::debug!(
                path = %file.path,
                count = diagnostics.len(),
                "pre-emit checks reported diagnostics"
            );
        }
        diagnostics
    }
}

impl Default for PreEmitChecklist {
    /// Module check, then file-name check.
    fn default() -> Self {
        PreEmitChecklist::empty()
            .with_check(file_is_module)
            .with_check(check_file_name)
    }
}
