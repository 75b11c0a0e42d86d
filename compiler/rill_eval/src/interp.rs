//! The execution walk.

use rill_diagnostic::ErrorCode;
use rill_ir::{
    Block, Expr, ExprKind, FuncDecl, LogicalOp, Param, ProcDecl, Program, Stmt, StmtKind,
};
use rill_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::frame::{ActivationRecord, CallStack, FrameKind};
use crate::output::OutputSink;
use crate::{ops, Flow, RuntimeError, Value};

/// Tree-walking interpreter.
///
/// Owns the call stack and the callable tables; borrows declarations out of
/// the program tree, so the tree must outlive the interpreter.
pub struct Interpreter<'p, 'o> {
    stack: CallStack,
    funcs: FxHashMap<&'p str, &'p FuncDecl>,
    procs: FxHashMap<&'p str, &'p ProcDecl>,
    out: &'o mut dyn OutputSink,
}

impl<'p, 'o> Interpreter<'p, 'o> {
    pub fn new(out: &'o mut dyn OutputSink) -> Self {
        Interpreter {
            stack: CallStack::new(),
            funcs: FxHashMap::default(),
            procs: FxHashMap::default(),
            out,
        }
    }

    /// Execute a whole program.
    pub fn run(&mut self, program: &'p Program) -> Result<(), RuntimeError> {
        self.stack
            .push(ActivationRecord::new("main", FrameKind::Program, 1));
        let result = self.block(&program.block);
        self.stack.pop();
        // Any control signal reaching the program frame has already been
        // rejected by analysis; execution simply ends here.
        result.map(|_| ())
    }

    fn undefined(name: &str) -> RuntimeError {
        RuntimeError::new(
            ErrorCode::UndefinedIdentifier,
            format!("identifier '{name}' is not defined"),
        )
    }

    /// Execute a block, stopping at the first non-normal flow.
    fn block(&mut self, block: &'p Block) -> Result<Flow, RuntimeError> {
        for stmt in &block.statements {
            let flow = self.stmt(stmt)?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    fn stmt(&mut self, stmt: &'p Stmt) -> Result<Flow, RuntimeError> {
        trace!(at = %stmt.pos, depth = self.stack.depth(), "execute");
        match &stmt.kind {
            StmtKind::VarDecl { ty, names, inits }
            | StmtKind::ConstDecl { ty, names, inits } => {
                if inits.is_empty() {
                    for name in names {
                        self.stack
                            .current_mut()
                            .set(name.clone(), Value::default_of(*ty));
                    }
                } else {
                    for (name, init) in names.iter().zip(inits) {
                        let value = self.eval(init)?;
                        self.stack.current_mut().set(name.clone(), value);
                    }
                }
                Ok(Flow::Normal)
            }
            StmtKind::Assign { name, value } => {
                let value = self.eval(value)?;
                self.stack.current_mut().set(name.clone(), value);
                Ok(Flow::Normal)
            }
            StmtKind::Give(value) => {
                let value = match value {
                    Some(expr) => Some(self.eval(expr)?),
                    None => None,
                };
                Ok(Flow::Give(value))
            }
            StmtKind::Show(value) => {
                let value = self.eval(value)?;
                self.out.show(&value.to_string());
                Ok(Flow::Normal)
            }
            StmtKind::If {
                cond,
                then_block,
                elifs,
                else_block,
            } => {
                if self.condition(cond)? {
                    return self.block(then_block);
                }
                for arm in elifs {
                    if self.condition(&arm.cond)? {
                        return self.block(&arm.body);
                    }
                }
                match else_block {
                    Some(block) => self.block(block),
                    None => Ok(Flow::Normal),
                }
            }
            StmtKind::While { cond, body } => {
                while self.condition(cond)? {
                    match self.block(body)? {
                        // skip: straight to the next condition check.
                        Flow::Normal | Flow::Skip => {}
                        Flow::Stop => break,
                        give @ Flow::Give(_) => return Ok(give),
                    }
                }
                Ok(Flow::Normal)
            }
            StmtKind::Skip => Ok(Flow::Skip),
            StmtKind::Stop => Ok(Flow::Stop),
            StmtKind::Func(decl) => {
                self.funcs.insert(decl.name.as_str(), decl);
                Ok(Flow::Normal)
            }
            StmtKind::Proc(decl) => {
                self.procs.insert(decl.name.as_str(), decl);
                Ok(Flow::Normal)
            }
            StmtKind::Call { name, args } => {
                // Bare call statement: the value is discarded.
                self.call_function(name, args)?;
                Ok(Flow::Normal)
            }
            StmtKind::Exec { name, args } => {
                self.call_procedure(name, args)?;
                Ok(Flow::Normal)
            }
        }
    }

    /// Evaluate a condition, which the parser has already coerced to
    /// boolean shape. A non-bool here means the tree skipped analysis.
    fn condition(&mut self, cond: &'p Expr) -> Result<bool, RuntimeError> {
        let value = self.eval(cond)?;
        Interpreter::as_bool(&value)
    }

    fn as_bool(value: &Value) -> Result<bool, RuntimeError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(RuntimeError::new(
                ErrorCode::InvalidOperation,
                format!("expected bool, got {}", other.type_name()),
            )),
        }
    }

    /// Evaluate an expression.
    ///
    /// Recursion depth mirrors tree depth, so each entry grows the stack if
    /// the remaining red zone is thin.
    fn eval(&mut self, expr: &'p Expr) -> Result<Value, RuntimeError> {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &'p Expr) -> Result<Value, RuntimeError> {
        match &expr.kind {
            ExprKind::Int(v) => Ok(Value::Int(*v)),
            ExprKind::Float(v) => Ok(Value::Float(*v)),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Ident(name) => self
                .stack
                .current()
                .get(name)
                .cloned()
                .ok_or_else(|| Interpreter::undefined(name)),
            ExprKind::Call { name, args } => self.call_function(name, args),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                ops::binary(*op, &left, &right)
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                ops::unary(*op, &operand)
            }
            ExprKind::Compare { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                ops::compare(*op, &left, &right)
            }
            ExprKind::Logical { op, left, right } => {
                let left = self.eval(left)?;
                let left = Interpreter::as_bool(&left)?;
                let short_circuit = match op {
                    LogicalOp::And => !left,
                    LogicalOp::Or => left,
                };
                if short_circuit {
                    return Ok(Value::Bool(left));
                }
                let right = self.eval(right)?;
                Ok(Value::Bool(Interpreter::as_bool(&right)?))
            }
            ExprKind::Not(inner) => {
                let value = self.eval(inner)?;
                Ok(Value::Bool(!Interpreter::as_bool(&value)?))
            }
            ExprKind::Truthy(inner) => {
                let value = self.eval(inner)?;
                Ok(Value::Bool(value.truthy()))
            }
        }
    }

    /// Evaluate arguments in the caller's frame, then build the callee frame:
    /// a copy of the caller's members with the parameters bound over them.
    fn enter_frame(
        &mut self,
        name: &str,
        kind: FrameKind,
        params: &'p [Param],
        args: &'p [Expr],
    ) -> Result<(), RuntimeError> {
        if params.len() != args.len() {
            // Analysis catches this; backstop for unanalyzed trees.
            return Err(RuntimeError::new(
                ErrorCode::InvalidOperation,
                format!(
                    "'{name}' takes {} argument(s), got {}",
                    params.len(),
                    args.len()
                ),
            ));
        }
        let mut bound = Vec::with_capacity(args.len());
        for arg in args {
            bound.push(self.eval(arg)?);
        }

        let mut frame = self.stack.current().seeded_child(name, kind);
        for (param, value) in params.iter().zip(bound) {
            frame.set(param.name.clone(), value);
        }
        trace!(callee = name, level = frame.level, "push frame");
        self.stack.push(frame);
        Ok(())
    }

    fn call_function(&mut self, name: &str, args: &'p [Expr]) -> Result<Value, RuntimeError> {
        let Some(decl) = self.funcs.get(name).copied() else {
            return Err(Interpreter::undefined(name));
        };
        self.enter_frame(name, FrameKind::Function, &decl.params, args)?;
        let flow = self.block(&decl.body);
        self.stack.pop();
        trace!(callee = name, "pop frame");

        match flow? {
            Flow::Give(Some(value)) => Ok(value),
            _ => Err(RuntimeError::new(
                ErrorCode::FunctionGaveNothing,
                format!("function '{name}' did not give a value"),
            )),
        }
    }

    fn call_procedure(&mut self, name: &str, args: &'p [Expr]) -> Result<(), RuntimeError> {
        let Some(decl) = self.procs.get(name).copied() else {
            return Err(Interpreter::undefined(name));
        };
        self.enter_frame(name, FrameKind::Procedure, &decl.params, args)?;
        let flow = self.block(&decl.body);
        self.stack.pop();
        trace!(callee = name, "pop frame");

        match flow? {
            Flow::Give(Some(_)) => Err(RuntimeError::new(
                ErrorCode::ProcedureGaveValue,
                format!("procedure '{name}' cannot give a value"),
            )),
            _ => Ok(()),
        }
    }
}

/// Run `program` with `out` receiving everything `show` prints.
pub fn interpret_with(program: &Program, out: &mut dyn OutputSink) -> Result<(), RuntimeError> {
    let mut interpreter = Interpreter::new(out);
    interpreter.run(program)?;
    debug!("program finished");
    Ok(())
}
