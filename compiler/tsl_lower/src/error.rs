//! Hard lowering errors.
//!
//! A `LowerError` aborts lowering of the current file. Recoverable problems
//! never show up here; they go to the unit's diagnostic sink.

use thiserror::Error;
use tsl_diagnostic::{Diagnostic, DiagnosticKind};
use tsl_ir::Span;

pub type LowerResult<T> = Result<T, LowerError>;

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum LowerError {
    #[error(
        "attempted to call a function with mixed types, all definitions must either be a method or a callback"
    )]
    MixedMethodCall { span: Span },

    #[error("`{class}.{member}()` cannot be an expression statement")]
    NoMacroMathExpressionStatement {
        span: Span,
        class: String,
        member: String,
    },

    #[error("expected a property access expression as the callee")]
    ExpectedPropertyAccessExpression { span: Span },

    #[error("cannot resolve how to call `{callee}`: no lowering rule and no call signatures")]
    UnresolvedCallee { span: Span, callee: String },

    #[error("spread is only supported as the final call argument")]
    UnsupportedSpreadArgument { span: Span },
}

impl LowerError {
    pub fn span(&self) -> Span {
        match self {
            Self::MixedMethodCall { span }
            | Self::NoMacroMathExpressionStatement { span, .. }
            | Self::ExpectedPropertyAccessExpression { span }
            | Self::UnresolvedCallee { span, .. }
            | Self::UnsupportedSpreadArgument { span } => *span,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::MixedMethodCall { .. } => DiagnosticKind::MixedMethodCall,
            Self::NoMacroMathExpressionStatement { .. } => {
                DiagnosticKind::NoMacroMathExpressionStatement
            }
            Self::ExpectedPropertyAccessExpression { .. } => {
                DiagnosticKind::ExpectedPropertyAccessExpression
            }
            Self::UnresolvedCallee { .. } => DiagnosticKind::UnresolvedCallee,
            Self::UnsupportedSpreadArgument { .. } => DiagnosticKind::UnsupportedSpreadArgument,
        }
    }

    /// Error diagnostic reporting this failure.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind(), self.span(), self.to_string())
    }
}
