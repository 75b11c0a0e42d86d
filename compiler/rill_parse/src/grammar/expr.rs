//! Expression grammar: precedence climbing, lowest binding first.
//!
//! or → and → not → comparison → additive → multiplicative → power → unary
//! → primary. Power is right-associative; everything else binary is
//! left-associative, and a comparison takes at most one operator (no
//! chaining).
//!
//! Boolean positions (operands of `or`/`and`/`not` and `if`/`while`
//! conditions) coerce through a [`ExprKind::Truthy`] node unless the operand
//! already has boolean shape. Runtime truthiness passes booleans through
//! unchanged, so the wrap is only ever applied where it can matter.

use rill_ir::{BinaryOp, CmpOp, Expr, ExprKind, LogicalOp, TokenKind, UnaryOp};
use rill_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

/// Wrap `expr` in a truthiness coercion unless it already yields a bool.
fn coerce_bool(expr: Expr) -> Expr {
    match expr.kind {
        ExprKind::Bool(_)
        | ExprKind::Compare { .. }
        | ExprKind::Logical { .. }
        | ExprKind::Not(_)
        | ExprKind::Truthy(_) => expr,
        _ => {
            let pos = expr.pos;
            Expr::new(ExprKind::Truthy(Box::new(expr)), pos)
        }
    }
}

impl Parser<'_> {
    /// Full expression, lowest precedence.
    ///
    /// Recursion depth mirrors source nesting, so each entry grows the stack
    /// if the remaining red zone is thin.
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.or_expr())
    }

    /// An expression in boolean position: `if`/`while` conditions.
    pub(crate) fn condition(&mut self) -> Result<Expr, ParseError> {
        Ok(coerce_bool(self.expression()?))
    }

    fn or_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.and_expr()?;
        while self.cursor.at(&TokenKind::Or) {
            self.cursor.advance();
            let right = self.and_expr()?;
            let pos = left.pos;
            left = Expr::new(
                ExprKind::Logical {
                    op: LogicalOp::Or,
                    left: Box::new(coerce_bool(left)),
                    right: Box::new(coerce_bool(right)),
                },
                pos,
            );
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.not_expr()?;
        while self.cursor.at(&TokenKind::And) {
            self.cursor.advance();
            let right = self.not_expr()?;
            let pos = left.pos;
            left = Expr::new(
                ExprKind::Logical {
                    op: LogicalOp::And,
                    left: Box::new(coerce_bool(left)),
                    right: Box::new(coerce_bool(right)),
                },
                pos,
            );
        }
        Ok(left)
    }

    fn not_expr(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.at(&TokenKind::Not) {
            let pos = self.cursor.pos();
            self.cursor.advance();
            let operand = self.not_expr()?;
            return Ok(Expr::new(
                ExprKind::Not(Box::new(coerce_bool(operand))),
                pos,
            ));
        }
        self.comparison()
    }

    /// additive [cmp-op additive], at most one comparator.
    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let left = self.additive()?;
        let op = match self.cursor.kind() {
            TokenKind::EqEq => CmpOp::Eq,
            TokenKind::NotEq => CmpOp::Ne,
            TokenKind::Less => CmpOp::Lt,
            TokenKind::Greater => CmpOp::Gt,
            TokenKind::LessEq => CmpOp::Le,
            TokenKind::GreaterEq => CmpOp::Ge,
            _ => return Ok(left),
        };
        self.cursor.advance();
        let right = self.additive()?;
        let pos = left.pos;
        Ok(Expr::new(
            ExprKind::Compare {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            pos,
        ))
    }

    fn additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.multiplicative()?;
        loop {
            let op = match self.cursor.kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return Ok(left),
            };
            self.cursor.advance();
            let right = self.multiplicative()?;
            let pos = left.pos;
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                pos,
            );
        }
    }

    fn multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.power()?;
        loop {
            let op = match self.cursor.kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::FloorDiv => BinaryOp::FloorDiv,
                TokenKind::Percent => BinaryOp::Rem,
                _ => return Ok(left),
            };
            self.cursor.advance();
            let right = self.power()?;
            let pos = left.pos;
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                pos,
            );
        }
    }

    /// unary [`**` power], right-associative.
    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.unary()?;
        if !self.cursor.at(&TokenKind::Power) {
            return Ok(base);
        }
        self.cursor.advance();
        let exponent = self.power()?;
        let pos = base.pos;
        Ok(Expr::new(
            ExprKind::Binary {
                op: BinaryOp::Pow,
                left: Box::new(base),
                right: Box::new(exponent),
            },
            pos,
        ))
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.cursor.kind() {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.primary(),
        };
        let pos = self.cursor.pos();
        self.cursor.advance();
        let operand = self.unary()?;
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            pos,
        ))
    }

    /// literal | identifier | call | `(` expression `)`
    fn primary(&mut self) -> Result<Expr, ParseError> {
        let pos = self.cursor.pos();
        let kind = match self.cursor.kind() {
            TokenKind::Int(value) => {
                let value = *value;
                self.cursor.advance();
                ExprKind::Int(value)
            }
            TokenKind::Float(_) => {
                // float_value is Some exactly for Float kinds.
                let value = self.cursor.kind().float_value().unwrap_or_default();
                self.cursor.advance();
                ExprKind::Float(value)
            }
            TokenKind::Str(text) => {
                let text = text.clone();
                self.cursor.advance();
                ExprKind::Str(text)
            }
            TokenKind::Bool(value) => {
                let value = *value;
                self.cursor.advance();
                ExprKind::Bool(value)
            }
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.cursor.advance();
                if self.cursor.at(&TokenKind::LeftParen) {
                    let args = self.arg_list()?;
                    ExprKind::Call { name, args }
                } else {
                    ExprKind::Ident(name)
                }
            }
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.cursor.expect(&TokenKind::RightParen)?;
                return Ok(inner);
            }
            _ => {
                return Err(ParseError::unexpected(
                    "an expression",
                    self.cursor.current(),
                ))
            }
        };
        Ok(Expr::new(kind, pos))
    }
}
