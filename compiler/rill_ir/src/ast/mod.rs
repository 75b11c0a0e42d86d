//! AST types.
//!
//! The tree is built once by the parser and never mutated afterwards. Every
//! composite node owns its children outright (`Box`/`Vec`, no sharing, no
//! parent pointers), so the shape is fixed the moment parsing finishes.
//!
//! # Module structure
//!
//! - `expr`: expression nodes ([`Expr`], [`ExprKind`])
//! - `stmt`: statement nodes and declarations
//! - `operators`: the closed operator enums

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, CmpOp, LogicalOp, UnaryOp};
pub use stmt::{Block, ElifArm, FuncDecl, Param, ProcDecl, Program, Stmt, StmtKind};

use std::fmt;

/// One of the four built-in value types a declaration can name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeName {
    Int,
    Float,
    String,
    Bool,
}

impl TypeName {
    /// The source-level keyword for this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeName::Int => "int",
            TypeName::Float => "float",
            TypeName::String => "string",
            TypeName::Bool => "bool",
        }
    }

    /// All built-in type names, in declaration order.
    pub const ALL: [TypeName; 4] = [
        TypeName::Int,
        TypeName::Float,
        TypeName::String,
        TypeName::Bool,
    ];
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
