//! Statement nodes and declarations.

use std::fmt;

use super::expr::Expr;
use super::TypeName;
use crate::Pos;

/// A whole source file: one top-level block.
#[derive(Clone, PartialEq, Debug)]
pub struct Program {
    pub block: Block,
}

/// `{` ... `}`: a newline-separated statement list.
#[derive(Clone, PartialEq, Debug)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

/// Statement node.
#[derive(Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub pos: Pos,
}

impl Stmt {
    pub fn new(kind: StmtKind, pos: Pos) -> Self {
        Stmt { kind, pos }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.pos)
    }
}

/// Statement variants.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// `let <type> a, b [= e1, e2]`. `inits` is empty when there is no
    /// initializer list, otherwise it has exactly one entry per name.
    VarDecl {
        ty: TypeName,
        names: Vec<String>,
        inits: Vec<Expr>,
    },

    /// `keep <type> a, b = e1, e2`. Initializers are mandatory.
    ConstDecl {
        ty: TypeName,
        names: Vec<String>,
        inits: Vec<Expr>,
    },

    /// `name = expr`
    Assign { name: String, value: Expr },

    /// `give [expr]`
    Give(Option<Expr>),

    /// `show expr`
    Show(Expr),

    /// `if` with zero or more `elif` arms and an optional `else`.
    If {
        cond: Expr,
        then_block: Block,
        elifs: Vec<ElifArm>,
        else_block: Option<Block>,
    },

    /// `while cond { … }`
    While { cond: Expr, body: Block },

    /// `skip`: next loop iteration.
    Skip,

    /// `stop`: leave the loop.
    Stop,

    Func(FuncDecl),

    Proc(ProcDecl),

    /// Bare function call used as a statement: `f(a)`.
    Call { name: String, args: Vec<Expr> },

    /// `exec p(a)`: procedure call.
    Exec { name: String, args: Vec<Expr> },
}

/// One `elif cond { … }` arm.
#[derive(Clone, PartialEq, Debug)]
pub struct ElifArm {
    pub cond: Expr,
    pub body: Block,
}

/// `func name(params) -> type { … }`
#[derive(Clone, PartialEq, Debug)]
pub struct FuncDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub give_ty: TypeName,
    pub body: Block,
}

/// `proc name(params) { … }`
#[derive(Clone, PartialEq, Debug)]
pub struct ProcDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Block,
}

/// A typed parameter: `int n`.
#[derive(Clone, PartialEq, Debug)]
pub struct Param {
    pub ty: TypeName,
    pub name: String,
}
