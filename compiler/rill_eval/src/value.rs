//! Runtime values.

use std::fmt;

use rill_ir::TypeName;

/// A runtime value: one of the four built-in types.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl Value {
    /// The value's type, as the source-level keyword.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
        }
    }

    /// Truthiness: numeric zero and the empty string are false, everything
    /// else is true, booleans pass through.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Int(v) => *v != 0,
            Value::Float(v) => *v != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Bool(b) => *b,
        }
    }

    /// The default a declared-but-uninitialized name takes.
    pub fn default_of(ty: TypeName) -> Value {
        match ty {
            TypeName::Int => Value::Int(0),
            TypeName::Float => Value::Float(0.0),
            TypeName::String => Value::Str(String::new()),
            TypeName::Bool => Value::Bool(false),
        }
    }
}

/// Canonical text: `true`/`false`, default numeric notation, strings
/// verbatim. This is what `show` prints and what `+` concatenates.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}
