//! Source-language operators.
//!
//! Assignment operators are binary operators in the source grammar, so
//! `BinaryOp` carries both the value-producing operators and every
//! assignment form. Classification helpers mirror the front end's
//! operator-token predicates.

/// Binary operators, including assignment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Equality
    /// Loose `==` (banned).
    LooseEq,
    /// Loose `!=` (banned).
    LooseNotEq,
    /// Strict `===`.
    StrictEq,
    /// Strict `!==`.
    StrictNotEq,

    // Comparison
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    UShr,

    // Logical
    And,
    Or,
    Coalesce,

    // Relational keywords
    In,
    InstanceOf,

    // Assignment
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    PowAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    ShlAssign,
    ShrAssign,
    UShrAssign,
}

impl BinaryOp {
    /// Source-level symbol, used in diagnostics.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::LooseEq => "==",
            Self::LooseNotEq => "!=",
            Self::StrictEq => "===",
            Self::StrictNotEq => "!==",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UShr => ">>>",
            Self::And => "&&",
            Self::Or => "||",
            Self::Coalesce => "??",
            Self::In => "in",
            Self::InstanceOf => "instanceof",
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::PowAssign => "**=",
            Self::BitAndAssign => "&=",
            Self::BitOrAssign => "|=",
            Self::BitXorAssign => "^=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::UShrAssign => ">>>=",
        }
    }

    /// `=` or any compound assignment.
    pub const fn is_assignment(self) -> bool {
        matches!(self, Self::Assign) || self.is_compound_assignment()
    }

    pub const fn is_compound_assignment(self) -> bool {
        self.compound_base().is_some()
    }

    /// The value operator a compound assignment applies (`+=` → `+`).
    pub const fn compound_base(self) -> Option<BinaryOp> {
        match self {
            Self::AddAssign => Some(Self::Add),
            Self::SubAssign => Some(Self::Sub),
            Self::MulAssign => Some(Self::Mul),
            Self::DivAssign => Some(Self::Div),
            Self::ModAssign => Some(Self::Mod),
            Self::PowAssign => Some(Self::Pow),
            Self::BitAndAssign => Some(Self::BitAnd),
            Self::BitOrAssign => Some(Self::BitOr),
            Self::BitXorAssign => Some(Self::BitXor),
            Self::ShlAssign => Some(Self::Shl),
            Self::ShrAssign => Some(Self::Shr),
            Self::UShrAssign => Some(Self::UShr),
            _ => None,
        }
    }

    /// `&&`, `||`, `??`.
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Coalesce)
    }
}

/// Increment or decrement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UpdateOp {
    Increment,
    Decrement,
}

impl UpdateOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }
}

/// Prefix unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrefixOp {
    /// `!`
    Not,
    /// `-`
    Neg,
    /// `+`
    Plus,
    /// `~`
    BitNot,
    /// `++x` / `--x`
    Update(UpdateOp),
}

impl PrefixOp {
    /// The update this operator performs, if it is `++`/`--`.
    pub const fn update(self) -> Option<UpdateOp> {
        match self {
            Self::Update(op) => Some(op),
            _ => None,
        }
    }
}
