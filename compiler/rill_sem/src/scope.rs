//! Scopes, symbols, and the scope arena.

use rill_ir::{Param, TypeName};

/// Index of a scope in the arena.
pub type ScopeId = usize;

/// What kind of lexical region a scope covers.
///
/// The kind drives the chain walks for `give` (nearest function/procedure)
/// and `skip`/`stop` (any enclosing while).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ScopeKind {
    Program,
    Function,
    Procedure,
    If,
    Elif,
    Else,
    While,
}

/// One named entity visible in a scope.
#[derive(Clone, PartialEq, Debug)]
pub enum Symbol {
    /// A built-in type name, pre-defined in the root scope.
    Builtin(TypeName),
    /// A `let` declaration.
    Variable { ty: TypeName },
    /// A `keep` declaration. Never a legal assignment target.
    Constant { ty: TypeName },
    /// A `func` declaration.
    Function {
        params: Vec<Param>,
        give_ty: TypeName,
    },
    /// A `proc` declaration.
    Procedure { params: Vec<Param> },
}

impl Symbol {
    /// Short noun for error messages.
    pub const fn describe(&self) -> &'static str {
        match self {
            Symbol::Builtin(_) => "a built-in type",
            Symbol::Variable { .. } => "a variable",
            Symbol::Constant { .. } => "a constant",
            Symbol::Function { .. } => "a function",
            Symbol::Procedure { .. } => "a procedure",
        }
    }
}

/// One lexical scope: an insertion-ordered name table plus its place in the
/// chain.
#[derive(Debug)]
pub struct Scope {
    pub kind: ScopeKind,
    pub level: u32,
    pub parent: Option<ScopeId>,
    /// Insertion-ordered; scopes are small, so lookup is a linear scan.
    symbols: Vec<(String, Symbol)>,
}

impl Scope {
    fn new(kind: ScopeKind, level: u32, parent: Option<ScopeId>) -> Self {
        Scope {
            kind,
            level,
            parent,
            symbols: Vec::new(),
        }
    }

    /// Look up a name in this scope only.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Insert a name. Returns false when the name is already present.
    pub fn insert(&mut self, name: String, symbol: Symbol) -> bool {
        if self.get(&name).is_some() {
            return false;
        }
        self.symbols.push((name, symbol));
        true
    }
}

/// Index-addressed arena of scopes, used as a stack.
///
/// The analyzer pushes on entering a lexical block and pops on leaving it,
/// so the live scopes always form a chain from the root to the current
/// traversal point.
#[derive(Default, Debug)]
pub struct ScopeArena {
    scopes: Vec<Scope>,
}

impl ScopeArena {
    pub fn new() -> Self {
        ScopeArena::default()
    }

    /// Push a child of `parent` (or the root when `parent` is `None`).
    pub fn push(&mut self, kind: ScopeKind, parent: Option<ScopeId>) -> ScopeId {
        let level = match parent {
            Some(id) => self.scopes[id].level + 1,
            None => 1,
        };
        self.scopes.push(Scope::new(kind, level, parent));
        self.scopes.len() - 1
    }

    /// Pop the innermost scope, returning its parent id.
    pub fn pop(&mut self) -> Option<ScopeId> {
        self.scopes.pop().and_then(|scope| scope.parent)
    }

    pub fn get(&self, id: ScopeId) -> &Scope {
        &self.scopes[id]
    }

    pub fn get_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id]
    }

    /// Resolve `name` by walking the chain from `from` to the root.
    pub fn resolve(&self, from: ScopeId, name: &str) -> Option<&Symbol> {
        let mut id = Some(from);
        while let Some(current) = id {
            let scope = self.get(current);
            if let Some(symbol) = scope.get(name) {
                return Some(symbol);
            }
            id = scope.parent;
        }
        None
    }

    /// Walk the chain from `from` looking for a scope kind accepted by
    /// `pred`; returns that scope's kind.
    pub fn find_kind(&self, from: ScopeId, pred: impl Fn(ScopeKind) -> bool) -> Option<ScopeKind> {
        let mut id = Some(from);
        while let Some(current) = id {
            let scope = self.get(current);
            if pred(scope.kind) {
                return Some(scope.kind);
            }
            id = scope.parent;
        }
        None
    }
}
