//! The analysis walk.

use rill_diagnostic::ErrorCode;
use rill_ir::{Block, Expr, ExprKind, FuncDecl, Param, ProcDecl, Program, Stmt, StmtKind, TypeName};
use tracing::trace;

use crate::scope::{ScopeArena, ScopeId, ScopeKind, Symbol};
use crate::SemError;

/// Walks the tree with a single current-scope pointer into the arena.
pub struct Analyzer {
    arena: ScopeArena,
    current: ScopeId,
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new()
    }
}

impl Analyzer {
    /// Create an analyzer with a root `Program` scope pre-populated with the
    /// built-in type names.
    pub fn new() -> Self {
        let mut arena = ScopeArena::new();
        let root = arena.push(ScopeKind::Program, None);
        for ty in TypeName::ALL {
            arena.get_mut(root).insert(ty.as_str().to_string(), Symbol::Builtin(ty));
        }
        Analyzer {
            arena,
            current: root,
        }
    }

    /// Validate the whole program.
    pub fn analyze(mut self, program: &Program) -> Result<(), SemError> {
        self.block(&program.block)
    }

    fn enter(&mut self, kind: ScopeKind) {
        self.current = self.arena.push(kind, Some(self.current));
        trace!(?kind, level = self.arena.get(self.current).level, "enter scope");
    }

    fn leave(&mut self) {
        // The root is never popped; every enter() has a matching leave().
        if let Some(parent) = self.arena.pop() {
            self.current = parent;
        }
    }

    fn define(&mut self, name: &str, symbol: Symbol) -> Result<(), SemError> {
        if !self
            .arena
            .get_mut(self.current)
            .insert(name.to_string(), symbol)
        {
            return Err(SemError::new(
                ErrorCode::DuplicateIdentifier,
                format!("duplicate identifier '{name}' in this scope"),
            ));
        }
        Ok(())
    }

    fn resolve(&self, name: &str) -> Result<&Symbol, SemError> {
        self.arena.resolve(self.current, name).ok_or_else(|| {
            SemError::new(
                ErrorCode::UndeclaredIdentifier,
                format!("undeclared identifier '{name}'"),
            )
        })
    }

    fn block(&mut self, block: &Block) -> Result<(), SemError> {
        for stmt in &block.statements {
            self.stmt(stmt)?;
        }
        Ok(())
    }

    /// Enter a scope of `kind`, walk `block`, leave again.
    fn scoped_block(&mut self, kind: ScopeKind, block: &Block) -> Result<(), SemError> {
        self.enter(kind);
        let result = self.block(block);
        self.leave();
        result
    }

    fn stmt(&mut self, stmt: &Stmt) -> Result<(), SemError> {
        match &stmt.kind {
            StmtKind::VarDecl { ty, names, inits } => {
                // Names are defined left to right, each before its own
                // initializer is checked, so an initializer may refer to a
                // name declared earlier in the same list.
                for (index, name) in names.iter().enumerate() {
                    self.define(name, Symbol::Variable { ty: *ty })?;
                    if let Some(init) = inits.get(index) {
                        self.expr(init)?;
                    }
                }
                Ok(())
            }
            StmtKind::ConstDecl { ty, names, inits } => {
                for (index, name) in names.iter().enumerate() {
                    self.define(name, Symbol::Constant { ty: *ty })?;
                    if let Some(init) = inits.get(index) {
                        self.expr(init)?;
                    }
                }
                Ok(())
            }
            StmtKind::Assign { name, value } => {
                self.expr(value)?;
                match self.resolve(name)? {
                    Symbol::Variable { .. } => Ok(()),
                    Symbol::Constant { .. } => Err(SemError::new(
                        ErrorCode::AssignmentToConstant,
                        format!("cannot assign to constant '{name}'"),
                    )),
                    other => Err(SemError::new(
                        ErrorCode::WrongSymbolKind,
                        format!("cannot assign to '{name}': it is {}", other.describe()),
                    )),
                }
            }
            StmtKind::Give(value) => self.give(value.as_ref()),
            StmtKind::Show(value) => self.expr(value),
            StmtKind::If {
                cond,
                then_block,
                elifs,
                else_block,
            } => {
                self.expr(cond)?;
                self.scoped_block(ScopeKind::If, then_block)?;
                for arm in elifs {
                    self.expr(&arm.cond)?;
                    self.scoped_block(ScopeKind::Elif, &arm.body)?;
                }
                if let Some(else_block) = else_block {
                    self.scoped_block(ScopeKind::Else, else_block)?;
                }
                Ok(())
            }
            StmtKind::While { cond, body } => {
                self.expr(cond)?;
                self.scoped_block(ScopeKind::While, body)
            }
            StmtKind::Skip => self.loop_control("skip", ErrorCode::SkipOutsideWhile),
            StmtKind::Stop => self.loop_control("stop", ErrorCode::StopOutsideWhile),
            StmtKind::Func(decl) => self.func_decl(decl),
            StmtKind::Proc(decl) => self.proc_decl(decl),
            StmtKind::Call { name, args } => self.call(name, args),
            StmtKind::Exec { name, args } => self.exec(name, args),
        }
    }

    /// Rule for `give`: the nearest function/procedure scope decides whether
    /// a value is required or forbidden.
    fn give(&mut self, value: Option<&Expr>) -> Result<(), SemError> {
        if let Some(value) = value {
            self.expr(value)?;
        }
        let owner = self.arena.find_kind(self.current, |kind| {
            matches!(kind, ScopeKind::Function | ScopeKind::Procedure)
        });
        match (owner, value) {
            (None, _) => Err(SemError::new(
                ErrorCode::GiveOutsideCallable,
                "give outside a function or procedure",
            )),
            (Some(ScopeKind::Function), None) => Err(SemError::new(
                ErrorCode::FunctionEmptyGive,
                "function must give a value",
            )),
            (Some(ScopeKind::Procedure), Some(_)) => Err(SemError::new(
                ErrorCode::ProcedureGivingValue,
                "procedure cannot give a value",
            )),
            _ => Ok(()),
        }
    }

    /// Rule for `skip`/`stop`: some enclosing scope must be a `while` body,
    /// however many block scopes intervene.
    fn loop_control(&self, what: &str, code: ErrorCode) -> Result<(), SemError> {
        match self
            .arena
            .find_kind(self.current, |kind| kind == ScopeKind::While)
        {
            Some(_) => Ok(()),
            None => Err(SemError::new(
                code,
                format!("{what} outside a while loop"),
            )),
        }
    }

    fn func_decl(&mut self, decl: &FuncDecl) -> Result<(), SemError> {
        // Defined before the body walk, so the function can call itself.
        self.define(
            &decl.name,
            Symbol::Function {
                params: decl.params.clone(),
                give_ty: decl.give_ty,
            },
        )?;
        self.enter(ScopeKind::Function);
        let result = self.params_and_body(&decl.params, &decl.body);
        self.leave();
        result
    }

    fn proc_decl(&mut self, decl: &ProcDecl) -> Result<(), SemError> {
        self.define(
            &decl.name,
            Symbol::Procedure {
                params: decl.params.clone(),
            },
        )?;
        self.enter(ScopeKind::Procedure);
        let result = self.params_and_body(&decl.params, &decl.body);
        self.leave();
        result
    }

    fn params_and_body(&mut self, params: &[Param], body: &Block) -> Result<(), SemError> {
        for param in params {
            self.define(&param.name, Symbol::Variable { ty: param.ty })?;
        }
        self.block(body)
    }

    fn call(&mut self, name: &str, args: &[Expr]) -> Result<(), SemError> {
        for arg in args {
            self.expr(arg)?;
        }
        match self.resolve(name)? {
            Symbol::Function { params, .. } => {
                Analyzer::check_arity("function", name, params.len(), args.len())
            }
            other => Err(SemError::new(
                ErrorCode::WrongSymbolKind,
                format!("'{name}' is {}, not a function", other.describe()),
            )),
        }
    }

    fn exec(&mut self, name: &str, args: &[Expr]) -> Result<(), SemError> {
        for arg in args {
            self.expr(arg)?;
        }
        match self.resolve(name)? {
            Symbol::Procedure { params } => {
                Analyzer::check_arity("procedure", name, params.len(), args.len())
            }
            other => Err(SemError::new(
                ErrorCode::WrongSymbolKind,
                format!("'{name}' is {}, not a procedure", other.describe()),
            )),
        }
    }

    fn check_arity(what: &str, name: &str, declared: usize, given: usize) -> Result<(), SemError> {
        if declared == given {
            Ok(())
        } else {
            Err(SemError::new(
                ErrorCode::WrongNumberOfArguments,
                format!("{what} '{name}' takes {declared} argument(s), got {given}"),
            ))
        }
    }

    fn expr(&mut self, expr: &Expr) -> Result<(), SemError> {
        match &expr.kind {
            ExprKind::Int(_) | ExprKind::Float(_) | ExprKind::Str(_) | ExprKind::Bool(_) => Ok(()),
            ExprKind::Ident(name) => match self.resolve(name)? {
                Symbol::Variable { .. } | Symbol::Constant { .. } => Ok(()),
                other => Err(SemError::new(
                    ErrorCode::WrongSymbolKind,
                    format!("'{name}' is {}, not a value", other.describe()),
                )),
            },
            ExprKind::Call { name, args } => self.call(name, args),
            ExprKind::Binary { left, right, .. }
            | ExprKind::Compare { left, right, .. }
            | ExprKind::Logical { left, right, .. } => {
                self.expr(left)?;
                self.expr(right)
            }
            ExprKind::Unary { operand, .. } => self.expr(operand),
            ExprKind::Not(inner) | ExprKind::Truthy(inner) => self.expr(inner),
        }
    }
}
