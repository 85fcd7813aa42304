//! Target-language syntax tree.
//!
//! Unlike the flat source arena, target nodes form an owned tree: each
//! lowering call builds a fragment and hands ownership to its caller, which
//! splices it into its own fragment. Printing the tree is the emitter's job.

mod ops;

pub use ops::{BinOp, CompoundOp, UnOp};

use crate::Name;

/// Handle to a synthesized temporary in the compile unit's temp arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct TempId(u32);

impl TempId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        TempId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Target expression.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    /// Inert stand-in produced after a recoverable diagnostic.
    Placeholder,
    Ident(Name),
    Temp(TempId),
    Nil,
    Bool(bool),
    Number(f64),
    Str(Name),
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
    Unary {
        op: UnOp,
        operand: Box<Expr>,
    },
    Paren(Box<Expr>),
    /// `object.name`
    Property {
        object: Box<Expr>,
        name: Name,
    },
    /// `object[index]`
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    /// `callee(args)`
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `receiver:name(args)`
    MethodCall {
        receiver: Box<Expr>,
        name: Name,
        args: Vec<Expr>,
    },
    /// `{ ... }` table constructor.
    Table(Vec<TableField>),
    /// `{ call() }`: packs every value of a multi-value call into one table.
    TuplePack(Box<Expr>),
}

impl Expr {
    pub fn binary(left: Expr, op: BinOp, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnOp, operand: Expr) -> Expr {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn paren(inner: Expr) -> Expr {
        Expr::Paren(Box::new(inner))
    }

    pub fn property(object: Expr, name: Name) -> Expr {
        Expr::Property {
            object: Box::new(object),
            name,
        }
    }

    pub fn index(object: Expr, index: Expr) -> Expr {
        Expr::Index {
            object: Box::new(object),
            index: Box::new(index),
        }
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Expr {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn method_call(receiver: Expr, name: Name, args: Vec<Expr>) -> Expr {
        Expr::MethodCall {
            receiver: Box::new(receiver),
            name,
            args,
        }
    }

    pub fn tuple_pack(call: Expr) -> Expr {
        Expr::TuplePack(Box::new(call))
    }

    /// Identifiers, temporaries, and the placeholder: reading them has no
    /// side effect.
    pub fn is_any_identifier(&self) -> bool {
        matches!(self, Expr::Ident(_) | Expr::Temp(_) | Expr::Placeholder)
    }

    /// Identifier-like or a primitive literal.
    pub fn is_simple(&self) -> bool {
        self.is_any_identifier() || self.is_simple_primitive()
    }

    /// `nil`, boolean, number, or string literal.
    pub fn is_simple_primitive(&self) -> bool {
        matches!(
            self,
            Expr::Nil | Expr::Bool(_) | Expr::Number(_) | Expr::Str(_)
        )
    }

    /// Reads the same value whatever statements run before it.
    ///
    /// Identifiers are not stable: an assignment or update hoisted out of a
    /// later operand may rebind them. Temporaries are bound once and only
    /// written by the prerequisites that produced them.
    pub fn is_stable(&self) -> bool {
        match self {
            Expr::Paren(inner) => inner.is_stable(),
            Expr::Temp(_) | Expr::Placeholder => true,
            other => other.is_simple_primitive(),
        }
    }

    /// `Call` or `MethodCall`.
    pub fn is_call(&self) -> bool {
        matches!(self, Expr::Call { .. } | Expr::MethodCall { .. })
    }
}

/// Field of a table constructor.
#[derive(Clone, PartialEq, Debug)]
pub enum TableField {
    Positional(Expr),
    Named(Name, Expr),
}

/// Left side of a `local` declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Binding {
    Name(Name),
    Temp(TempId),
    /// `_`: evaluate and discard.
    Discard,
}

/// Target statement.
#[derive(Clone, PartialEq, Debug)]
pub enum Stmt {
    /// Call evaluated for its side effects.
    Call(Expr),
    Assign {
        target: Expr,
        value: Expr,
    },
    CompoundAssign {
        target: Expr,
        op: CompoundOp,
        value: Expr,
    },
    Local {
        binding: Binding,
        value: Option<Expr>,
    },
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
    },
}

impl Stmt {
    pub fn local_temp(temp: TempId, value: Expr) -> Stmt {
        Stmt::Local {
            binding: Binding::Temp(temp),
            value: Some(value),
        }
    }
}
