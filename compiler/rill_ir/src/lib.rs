//! Shared data types for the rill pipeline.
//!
//! Leaf crate with no dependencies on the other stages. Holds everything the
//! scanner produces ([`Token`]), everything the parser produces (the `ast`
//! module), and the source positions both carry ([`Pos`]).
//!
//! Tokens are immutable once produced; AST nodes are built once by the parser
//! and only ever read afterwards, by the semantic analyzer and the
//! interpreter.

pub mod ast;
mod pos;
mod token;

pub use ast::{
    BinaryOp, Block, CmpOp, ElifArm, Expr, ExprKind, FuncDecl, LogicalOp, Param, ProcDecl,
    Program, Stmt, StmtKind, TypeName, UnaryOp,
};
pub use pos::Pos;
pub use token::{Token, TokenKind};
