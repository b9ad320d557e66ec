//! `add`, `subtract`, `multiply`, `divide`.
//!
//! Two Ints give an Int, computed with overflow checks. If either operand is
//! a Float both are promoted and the result follows IEEE-754.

use fatlisp_value::{
    arity_mismatch, division_by_zero, integer_overflow, type_mismatch, EvalContext, EvalError,
    EvalResult, TypeSet, Value, ValueKind,
};

#[derive(Clone, Copy)]
enum Operands {
    Int(i64, i64),
    Float(f64, f64),
}

#[allow(clippy::cast_precision_loss, reason = "Int to Float promotion")]
fn operands(name: &str, args: &[Value]) -> Result<Operands, EvalError> {
    let [x, y] = args else {
        return Err(arity_mismatch(name, 2, Some(2), args.len()));
    };
    let as_float = |v: &Value| match v.kind {
        ValueKind::Int(n) => Some(n as f64),
        ValueKind::Float(f) => Some(f),
        _ => None,
    };
    match (&x.kind, &y.kind) {
        (ValueKind::Int(a), ValueKind::Int(b)) => Ok(Operands::Int(*a, *b)),
        _ => match (as_float(x), as_float(y)) {
            (Some(a), Some(b)) => Ok(Operands::Float(a, b)),
            // Signature checks already reject non-numbers.
            (None, _) => Err(type_mismatch(1, name, TypeSet::NUMBER, x.type_of())),
            (_, None) => Err(type_mismatch(2, name, TypeSet::NUMBER, y.type_of())),
        },
    }
}

fn binary(
    name: &'static str,
    args: &[Value],
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> EvalResult {
    match operands(name, args)? {
        Operands::Int(a, b) => int_op(a, b)
            .map(Value::int)
            .ok_or_else(|| integer_overflow(name)),
        Operands::Float(a, b) => Ok(Value::float(float_op(a, b))),
    }
}

pub(super) fn add(args: &[Value], _: &dyn EvalContext) -> EvalResult {
    binary("add", args, i64::checked_add, |a, b| a + b)
}

pub(super) fn subtract(args: &[Value], _: &dyn EvalContext) -> EvalResult {
    binary("subtract", args, i64::checked_sub, |a, b| a - b)
}

pub(super) fn multiply(args: &[Value], _: &dyn EvalContext) -> EvalResult {
    binary("multiply", args, i64::checked_mul, |a, b| a * b)
}

/// Integer division truncates toward zero.
pub(super) fn divide(args: &[Value], _: &dyn EvalContext) -> EvalResult {
    match operands("divide", args)? {
        Operands::Int(_, 0) => Err(division_by_zero()),
        Operands::Int(a, b) => a
            .checked_div(b)
            .map(Value::int)
            .ok_or_else(|| integer_overflow("divide")),
        Operands::Float(a, b) => Ok(Value::float(a / b)),
    }
}
