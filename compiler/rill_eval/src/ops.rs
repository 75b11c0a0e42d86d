//! Operator semantics.
//!
//! The numeric rules: `int` and `float` mix by promoting to `float`; `/` is
//! true division (two ints yield a float); `//` and `%` are floor division
//! and floor modulo, where a non-zero result of `%` takes the divisor's
//! sign; `**` with a negative integer exponent yields a float. Integer
//! arithmetic is checked, so overflow is a runtime error rather than a wrap.
//!
//! `+` concatenates canonical text whenever either operand is a string.

use rill_diagnostic::ErrorCode;
use rill_ir::{BinaryOp, CmpOp, UnaryOp};

use crate::{RuntimeError, Value};

/// Both operands of a numeric operator, after promotion.
enum Numeric {
    Ints(i64, i64),
    Floats(f64, f64),
}

fn numeric_pair(op: BinaryOp, left: &Value, right: &Value) -> Result<Numeric, RuntimeError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Numeric::Ints(*a, *b)),
        (Value::Int(a), Value::Float(b)) => Ok(Numeric::Floats(*a as f64, *b)),
        (Value::Float(a), Value::Int(b)) => Ok(Numeric::Floats(*a, *b as f64)),
        (Value::Float(a), Value::Float(b)) => Ok(Numeric::Floats(*a, *b)),
        _ => Err(RuntimeError::new(
            ErrorCode::InvalidOperation,
            format!(
                "unsupported operand types for '{op}': {} and {}",
                left.type_name(),
                right.type_name()
            ),
        )),
    }
}

fn overflow(op: BinaryOp) -> RuntimeError {
    RuntimeError::new(
        ErrorCode::IntegerOverflow,
        format!("integer overflow evaluating '{op}'"),
    )
}

fn zero_division(op: BinaryOp) -> RuntimeError {
    let what = match op {
        BinaryOp::Rem => "modulo",
        _ => "division",
    };
    RuntimeError::new(ErrorCode::DivisionByZero, format!("{what} by zero"))
}

/// Floor division: the quotient rounded toward negative infinity.
fn floor_div_int(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    let r = a % b;
    // Truncation rounded toward zero; step down when the signs disagree.
    if r != 0 && (r < 0) != (b < 0) {
        q.checked_sub(1)
    } else {
        Some(q)
    }
}

/// Floor modulo: a non-zero result takes the divisor's sign.
fn floor_rem_int(a: i64, b: i64) -> Option<i64> {
    let r = a.checked_rem(b)?;
    if r != 0 && (r < 0) != (b < 0) {
        Some(r + b)
    } else {
        Some(r)
    }
}

fn floor_rem_float(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

fn int_pow(op: BinaryOp, base: i64, exp: i64) -> Result<Value, RuntimeError> {
    if exp < 0 {
        if base == 0 {
            return Err(RuntimeError::new(
                ErrorCode::DivisionByZero,
                "zero cannot be raised to a negative power",
            ));
        }
        return Ok(Value::Float((base as f64).powf(exp as f64)));
    }
    let exp = u32::try_from(exp).map_err(|_| overflow(op))?;
    base.checked_pow(exp).map(Value::Int).ok_or_else(|| overflow(op))
}

/// Apply a binary arithmetic operator (or string concatenation for `+`).
pub fn binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    if op == BinaryOp::Add && (matches!(left, Value::Str(_)) || matches!(right, Value::Str(_))) {
        return Ok(Value::Str(format!("{left}{right}")));
    }

    match (op, numeric_pair(op, left, right)?) {
        (BinaryOp::Add, Numeric::Ints(a, b)) => {
            a.checked_add(b).map(Value::Int).ok_or_else(|| overflow(op))
        }
        (BinaryOp::Add, Numeric::Floats(a, b)) => Ok(Value::Float(a + b)),
        (BinaryOp::Sub, Numeric::Ints(a, b)) => {
            a.checked_sub(b).map(Value::Int).ok_or_else(|| overflow(op))
        }
        (BinaryOp::Sub, Numeric::Floats(a, b)) => Ok(Value::Float(a - b)),
        (BinaryOp::Mul, Numeric::Ints(a, b)) => {
            a.checked_mul(b).map(Value::Int).ok_or_else(|| overflow(op))
        }
        (BinaryOp::Mul, Numeric::Floats(a, b)) => Ok(Value::Float(a * b)),
        (BinaryOp::Div, Numeric::Ints(a, b)) => {
            if b == 0 {
                return Err(zero_division(op));
            }
            // True division always yields a float.
            Ok(Value::Float(a as f64 / b as f64))
        }
        (BinaryOp::Div, Numeric::Floats(a, b)) => {
            if b == 0.0 {
                return Err(zero_division(op));
            }
            Ok(Value::Float(a / b))
        }
        (BinaryOp::FloorDiv, Numeric::Ints(a, b)) => {
            if b == 0 {
                return Err(zero_division(op));
            }
            floor_div_int(a, b).map(Value::Int).ok_or_else(|| overflow(op))
        }
        (BinaryOp::FloorDiv, Numeric::Floats(a, b)) => {
            if b == 0.0 {
                return Err(zero_division(op));
            }
            Ok(Value::Float((a / b).floor()))
        }
        (BinaryOp::Rem, Numeric::Ints(a, b)) => {
            if b == 0 {
                return Err(zero_division(op));
            }
            floor_rem_int(a, b).map(Value::Int).ok_or_else(|| overflow(op))
        }
        (BinaryOp::Rem, Numeric::Floats(a, b)) => {
            if b == 0.0 {
                return Err(zero_division(op));
            }
            Ok(Value::Float(floor_rem_float(a, b)))
        }
        (BinaryOp::Pow, Numeric::Ints(a, b)) => int_pow(op, a, b),
        (BinaryOp::Pow, Numeric::Floats(a, b)) => Ok(Value::Float(a.powf(b))),
    }
}

/// Apply a unary prefix operator.
pub fn unary(op: UnaryOp, operand: &Value) -> Result<Value, RuntimeError> {
    match (op, operand) {
        (UnaryOp::Plus, Value::Int(v)) => Ok(Value::Int(*v)),
        (UnaryOp::Plus, Value::Float(v)) => Ok(Value::Float(*v)),
        (UnaryOp::Neg, Value::Int(v)) => v.checked_neg().map(Value::Int).ok_or_else(|| {
            RuntimeError::new(ErrorCode::IntegerOverflow, "integer overflow evaluating '-'")
        }),
        (UnaryOp::Neg, Value::Float(v)) => Ok(Value::Float(-v)),
        _ => Err(RuntimeError::new(
            ErrorCode::InvalidOperation,
            format!(
                "unsupported operand type for unary '{op}': {}",
                operand.type_name()
            ),
        )),
    }
}

/// Apply a comparison operator.
///
/// Numbers compare after promotion, strings lexicographically, booleans
/// support only equality. Values of different kinds are unequal under
/// `==`/`!=`; ordering them is an error.
pub fn compare(op: CmpOp, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    use std::cmp::Ordering;

    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
        (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => match op {
            CmpOp::Eq => return Ok(Value::Bool(a == b)),
            CmpOp::Ne => return Ok(Value::Bool(a != b)),
            _ => None,
        },
        // Distinct kinds: unequal, unordered.
        _ => match op {
            CmpOp::Eq => return Ok(Value::Bool(false)),
            CmpOp::Ne => return Ok(Value::Bool(true)),
            _ => None,
        },
    };

    let Some(ordering) = ordering else {
        return Err(RuntimeError::new(
            ErrorCode::InvalidOperation,
            format!(
                "cannot order {} and {} with '{op}'",
                left.type_name(),
                right.type_name()
            ),
        ));
    };

    let result = match op {
        CmpOp::Eq => ordering == Ordering::Equal,
        CmpOp::Ne => ordering != Ordering::Equal,
        CmpOp::Lt => ordering == Ordering::Less,
        CmpOp::Gt => ordering == Ordering::Greater,
        CmpOp::Le => ordering != Ordering::Greater,
        CmpOp::Ge => ordering != Ordering::Less,
    };
    Ok(Value::Bool(result))
}
