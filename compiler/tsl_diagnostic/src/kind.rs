//! Diagnostic kinds.
//!
//! Each kind carries a stable code with the first digit naming the stage:
//! - E0xxx: pre-emit checklist
//! - E1xxx: recoverable lowering diagnostics
//! - E2xxx: hard lowering errors (abort the file)

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum DiagnosticKind {
    // Pre-emit (E0xxx)
    /// File has no top-level import or export.
    NoNonModule,
    /// File name violates naming constraints.
    IncorrectFileName,

    // Recoverable lowering (E1xxx)
    /// Loose `==`.
    NoEqualsEquals,
    /// Loose `!=`.
    NoExclamationEquals,
    /// Value of type `any` passed where the lowering needs a static type.
    NoAny,

    // Hard lowering errors (E2xxx)
    /// Call site mixes method-style and callback-style signatures.
    MixedMethodCall,
    /// Math-class operator call used as a discarded statement.
    NoMacroMathExpressionStatement,
    /// Callee is not a property access where one is required.
    ExpectedPropertyAccessExpression,
    /// No lowering rule and no call signatures for a callee.
    UnresolvedCallee,
    /// Spread outside the final call-argument position.
    UnsupportedSpreadArgument,
}

impl DiagnosticKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::NoNonModule => "E0001",
            Self::IncorrectFileName => "E0002",
            Self::NoEqualsEquals => "E1001",
            Self::NoExclamationEquals => "E1002",
            Self::NoAny => "E1003",
            Self::MixedMethodCall => "E2001",
            Self::NoMacroMathExpressionStatement => "E2002",
            Self::ExpectedPropertyAccessExpression => "E2003",
            Self::UnresolvedCallee => "E2004",
            Self::UnsupportedSpreadArgument => "E2005",
        }
    }

    /// Produced by the pre-emit checklist.
    pub const fn is_pre_emit(self) -> bool {
        matches!(self, Self::NoNonModule | Self::IncorrectFileName)
    }

    /// Aborts lowering of the current file.
    pub const fn is_hard(self) -> bool {
        matches!(
            self,
            Self::MixedMethodCall
                | Self::NoMacroMathExpressionStatement
                | Self::ExpectedPropertyAccessExpression
                | Self::UnresolvedCallee
                | Self::UnsupportedSpreadArgument
        )
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
