//! Target-language operators.

/// Target binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Concat,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl BinOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Concat => "..",
            Self::Eq => "==",
            Self::Ne => "~=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// Native compound form of this operator, if the target has one.
    pub const fn compound(self) -> Option<CompoundOp> {
        match self {
            Self::Add => Some(CompoundOp::Add),
            Self::Sub => Some(CompoundOp::Sub),
            Self::Mul => Some(CompoundOp::Mul),
            Self::Div => Some(CompoundOp::Div),
            Self::Mod => Some(CompoundOp::Mod),
            Self::Pow => Some(CompoundOp::Pow),
            Self::Concat => Some(CompoundOp::Concat),
            _ => None,
        }
    }
}

/// Target unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnOp {
    Not,
    Neg,
    Len,
}

impl UnOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "not ",
            Self::Neg => "-",
            Self::Len => "#",
        }
    }
}

/// Target compound assignment operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompoundOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Concat,
}

impl CompoundOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+=",
            Self::Sub => "-=",
            Self::Mul => "*=",
            Self::Div => "/=",
            Self::Mod => "%=",
            Self::Pow => "^=",
            Self::Concat => "..=",
        }
    }
}
