//! Expression nodes.

use std::fmt;

use super::operators::{BinaryOp, CmpOp, LogicalOp, UnaryOp};
use crate::Pos;

/// Expression node.
#[derive(Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub pos: Pos,
}

impl Expr {
    pub fn new(kind: ExprKind, pos: Pos) -> Self {
        Expr { kind, pos }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.pos)
    }
}

/// Expression variants.
///
/// Children are boxed and exclusively owned; there is no node aliasing.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// Integer literal: `42`
    Int(i64),

    /// Float literal: `3.14`
    Float(f64),

    /// String literal, escapes already decoded.
    Str(String),

    /// Boolean literal: `true`, `false`
    Bool(bool),

    /// Variable or constant reference.
    Ident(String),

    /// Function call in expression position: `f(a, b)`
    Call { name: String, args: Vec<Expr> },

    /// Binary arithmetic (or string concatenation for `+`).
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Unary prefix `+`/`-`.
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// Comparison: exactly one comparator, no chaining.
    Compare {
        op: CmpOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Short-circuiting `and`/`or`.
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Prefix `not`.
    Not(Box<Expr>),

    /// Arithmetic-as-boolean coercion, inserted by the parser wherever a
    /// non-comparison expression is used in boolean position.
    Truthy(Box<Expr>),
}
