//! `compare` and `equal`.

use std::cmp::Ordering;

use fatlisp_value::{
    arity_mismatch, incomparable_types, not_comparable, EvalContext, EvalError, EvalResult, Value,
    ValueKind,
};

/// `(compare x y)`: -1, 0 or 1.
///
/// Numbers compare as floats, Int operands included, so integers beyond
/// 2^53 that round to the same float compare equal. Strings compare by byte
/// order. Anything unordered (a NaN operand) yields -1.
pub(super) fn compare(args: &[Value], _: &dyn EvalContext) -> EvalResult {
    let [x, y] = args else {
        return Err(arity_mismatch("compare", 2, Some(2), args.len()));
    };
    let ordering = match (&x.kind, &y.kind) {
        (ValueKind::Str(a), ValueKind::Str(b)) => Some((**a).cmp(&**b)),
        _ => match (as_float(x), as_float(y)) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => return Err(compare_error(x, y)),
        },
    };
    Ok(Value::int(match ordering {
        Some(Ordering::Greater) => 1,
        Some(Ordering::Equal) => 0,
        Some(Ordering::Less) | None => -1,
    }))
}

#[cold]
fn compare_error(x: &Value, y: &Value) -> EvalError {
    let (left, right) = (x.type_of(), y.type_of());
    let error = if left == right {
        not_comparable(left)
    } else {
        incomparable_types(left, right)
    };
    if x.origin.is_dummy() {
        error
    } else {
        error.with_span(x.origin)
    }
}

#[allow(clippy::cast_precision_loss, reason = "Int to Float promotion")]
fn as_float(value: &Value) -> Option<f64> {
    match value.kind {
        ValueKind::Int(n) => Some(n as f64),
        ValueKind::Float(f) => Some(f),
        _ => None,
    }
}

/// `(equal x y)`: structural equality.
///
/// Different types are never equal (`(equal 1 1.0)` is false), lists compare
/// element-wise, and functions by identity.
pub(super) fn equal(args: &[Value], _: &dyn EvalContext) -> EvalResult {
    let [x, y] = args else {
        return Err(arity_mismatch("equal", 2, Some(2), args.len()));
    };
    Ok(Value::bool(x == y))
}
