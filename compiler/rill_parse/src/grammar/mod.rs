//! Statement-level grammar.
//!
//! Each method consumes exactly one production. Statement dispatch is a
//! single-token decision except for identifier statements, which peek one
//! token further to tell a call `f(…)` from an assignment `f = …`.

mod expr;

use rill_diagnostic::ErrorCode;
use rill_ir::{
    Block, ElifArm, Expr, FuncDecl, Param, Pos, ProcDecl, Program, Stmt, StmtKind, TokenKind,
    TypeName,
};
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// program = block EOF
    pub(crate) fn program(&mut self) -> Result<Program, ParseError> {
        self.cursor.skip_newlines();
        let block = self.block()?;
        self.cursor.skip_newlines();
        if !self.cursor.at(&TokenKind::Eof) {
            return Err(ParseError::unexpected(
                "end of input",
                self.cursor.current(),
            ));
        }
        Ok(Program { block })
    }

    /// block = `{` statement* `}`
    ///
    /// Newlines between statements are skipped; a statement ends where the
    /// next statement (or the closing brace) begins.
    fn block(&mut self) -> Result<Block, ParseError> {
        self.cursor.expect(&TokenKind::LeftBrace)?;
        let mut statements = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.eat(&TokenKind::RightBrace) {
                return Ok(Block { statements });
            }
            if self.cursor.at(&TokenKind::Eof) {
                return Err(ParseError::unexpected("'}'", self.cursor.current()));
            }
            statements.push(self.statement()?);
        }
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        let pos = self.cursor.pos();
        trace!(at = %pos, kind = self.cursor.kind().describe(), "statement");
        match self.cursor.kind() {
            TokenKind::Let => self.declaration(pos, false),
            TokenKind::Keep => self.declaration(pos, true),
            TokenKind::Func => self.func_decl(pos),
            TokenKind::Proc => self.proc_decl(pos),
            TokenKind::Exec => self.exec_stmt(pos),
            TokenKind::Give => self.give_stmt(pos),
            TokenKind::Show => {
                self.cursor.advance();
                let value = self.expression()?;
                Ok(Stmt::new(StmtKind::Show(value), pos))
            }
            TokenKind::If => self.if_stmt(pos),
            TokenKind::While => self.while_stmt(pos),
            TokenKind::Skip => {
                self.cursor.advance();
                Ok(Stmt::new(StmtKind::Skip, pos))
            }
            TokenKind::Stop => {
                self.cursor.advance();
                Ok(Stmt::new(StmtKind::Stop, pos))
            }
            TokenKind::Ident(_) => self.ident_stmt(pos),
            _ => Err(ParseError::unexpected("a statement", self.cursor.current())),
        }
    }

    /// `let`/`keep` type name (`,` name)* [`=` expr (`,` expr)*]
    ///
    /// A `keep` declaration requires the initializer list. When initializers
    /// are present their count must match the name count.
    fn declaration(&mut self, pos: Pos, constant: bool) -> Result<Stmt, ParseError> {
        self.cursor.advance(); // let / keep
        let ty = self.type_name()?;

        let mut names = vec![self.cursor.expect_ident()?.0];
        while self.cursor.eat(&TokenKind::Comma) {
            names.push(self.cursor.expect_ident()?.0);
        }

        let inits = if constant {
            // Constants always initialize.
            self.cursor.expect(&TokenKind::Assign)?;
            self.expr_list()?
        } else if self.cursor.eat(&TokenKind::Assign) {
            self.expr_list()?
        } else {
            Vec::new()
        };

        if !inits.is_empty() && inits.len() != names.len() {
            return Err(ParseError::new(
                ErrorCode::WrongNumberOfExpressions,
                format!(
                    "declaration names {} identifier(s) but initializes {}",
                    names.len(),
                    inits.len()
                ),
                pos,
            ));
        }

        let kind = if constant {
            StmtKind::ConstDecl { ty, names, inits }
        } else {
            StmtKind::VarDecl { ty, names, inits }
        };
        Ok(Stmt::new(kind, pos))
    }

    /// `func` name `(` params `)` `->` type block
    fn func_decl(&mut self, pos: Pos) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let (name, _) = self.cursor.expect_ident()?;
        let params = self.param_list()?;
        self.cursor.expect(&TokenKind::Arrow)?;
        let give_ty = self.type_name()?;
        let body = self.block()?;
        Ok(Stmt::new(
            StmtKind::Func(FuncDecl {
                name,
                params,
                give_ty,
                body,
            }),
            pos,
        ))
    }

    /// `proc` name `(` params `)` block
    fn proc_decl(&mut self, pos: Pos) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let (name, _) = self.cursor.expect_ident()?;
        let params = self.param_list()?;
        let body = self.block()?;
        Ok(Stmt::new(StmtKind::Proc(ProcDecl { name, params, body }), pos))
    }

    /// `exec` name `(` args `)`
    fn exec_stmt(&mut self, pos: Pos) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let (name, _) = self.cursor.expect_ident()?;
        let args = self.arg_list()?;
        Ok(Stmt::new(StmtKind::Exec { name, args }, pos))
    }

    /// `give` [expr]; a directly following newline or `}` means no value.
    fn give_stmt(&mut self, pos: Pos) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let value = match self.cursor.kind() {
            TokenKind::Newline | TokenKind::RightBrace | TokenKind::Eof => None,
            _ => Some(self.expression()?),
        };
        Ok(Stmt::new(StmtKind::Give(value), pos))
    }

    /// `if` cond block (`elif` cond block)* [`else` block]
    ///
    /// `elif`/`else` may sit on the line after the closing brace, so the
    /// lookahead for them peeks past any newlines before committing.
    fn if_stmt(&mut self, pos: Pos) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let cond = self.condition()?;
        let then_block = self.block()?;

        let mut elifs = Vec::new();
        while *self.cursor.peek_past_newlines() == TokenKind::Elif {
            self.cursor.skip_newlines();
            self.cursor.advance(); // elif
            let cond = self.condition()?;
            let body = self.block()?;
            elifs.push(ElifArm { cond, body });
        }

        let else_block = if *self.cursor.peek_past_newlines() == TokenKind::Else {
            self.cursor.skip_newlines();
            self.cursor.advance(); // else
            Some(self.block()?)
        } else {
            None
        };

        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then_block,
                elifs,
                else_block,
            },
            pos,
        ))
    }

    /// `while` cond block
    fn while_stmt(&mut self, pos: Pos) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let cond = self.condition()?;
        let body = self.block()?;
        Ok(Stmt::new(StmtKind::While { cond, body }, pos))
    }

    /// An identifier statement: `name = expr` or `name(args)`.
    fn ident_stmt(&mut self, pos: Pos) -> Result<Stmt, ParseError> {
        match self.cursor.peek(1) {
            TokenKind::Assign => {
                let (name, _) = self.cursor.expect_ident()?;
                self.cursor.advance(); // =
                let value = self.expression()?;
                Ok(Stmt::new(StmtKind::Assign { name, value }, pos))
            }
            TokenKind::LeftParen => {
                let (name, _) = self.cursor.expect_ident()?;
                let args = self.arg_list()?;
                Ok(Stmt::new(StmtKind::Call { name, args }, pos))
            }
            _ => Err(ParseError::unexpected(
                "'=' or '(' after identifier",
                self.cursor.peek_token(1),
            )),
        }
    }

    /// `(` [type name (`,` type name)*] `)`
    fn param_list(&mut self) -> Result<Vec<Param>, ParseError> {
        self.cursor.expect(&TokenKind::LeftParen)?;
        let mut params = Vec::new();
        if !self.cursor.at(&TokenKind::RightParen) {
            loop {
                let ty = self.type_name()?;
                let (name, _) = self.cursor.expect_ident()?;
                params.push(Param { ty, name });
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(&TokenKind::RightParen)?;
        Ok(params)
    }

    /// `(` [expr (`,` expr)*] `)`
    pub(crate) fn arg_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.cursor.expect(&TokenKind::LeftParen)?;
        let mut args = Vec::new();
        if !self.cursor.at(&TokenKind::RightParen) {
            args = self.expr_list()?;
        }
        self.cursor.expect(&TokenKind::RightParen)?;
        Ok(args)
    }

    fn expr_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![self.expression()?];
        while self.cursor.eat(&TokenKind::Comma) {
            exprs.push(self.expression()?);
        }
        Ok(exprs)
    }

    fn type_name(&mut self) -> Result<TypeName, ParseError> {
        let ty = match self.cursor.kind() {
            TokenKind::IntType => TypeName::Int,
            TokenKind::FloatType => TypeName::Float,
            TokenKind::StringType => TypeName::String,
            TokenKind::BoolType => TypeName::Bool,
            _ => return Err(ParseError::unexpected("a type name", self.cursor.current())),
        };
        self.cursor.advance();
        Ok(ty)
    }
}
