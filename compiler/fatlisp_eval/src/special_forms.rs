//! `quote`, `fn`, `def` and `if`.
//!
//! Each form receives its argument expressions unevaluated, after the
//! evaluator has checked them against the form's signature.

use fatlisp_ir::Span;
use fatlisp_value::{
    arity_mismatch, invalid_parameter, type_mismatch, EvalError, EvalResult, Environment,
    FunctionValue, Name, SpecialFormKind, TypeSet, Value, ValueKind,
};

use crate::interpreter::site;
use crate::Interpreter;

pub(crate) fn apply(
    interp: &mut Interpreter,
    kind: SpecialFormKind,
    args: &[Value],
    env: &Environment,
    call_site: Span,
) -> EvalResult {
    match (kind, args) {
        (SpecialFormKind::Quote, [value]) => Ok(value.clone()),
        (SpecialFormKind::Fn, [params, body]) => make_closure(params, body, env),
        (SpecialFormKind::Def, [name, value]) => define(interp, name, value, env),
        (SpecialFormKind::If, [cond, then]) => eval_if(interp, cond, then, None, env),
        (SpecialFormKind::If, [cond, then, otherwise]) => {
            eval_if(interp, cond, then, Some(otherwise), env)
        }
        _ => Err(arity_error(kind, args.len()).with_span(call_site)),
    }
}

#[cold]
fn arity_error(kind: SpecialFormKind, got: usize) -> EvalError {
    let sig = kind.signature();
    arity_mismatch(sig.name, sig.min_args, sig.max_args, got)
}

/// `(fn (a b) body)`: capture `env` and the body.
fn make_closure(params: &Value, body: &Value, env: &Environment) -> EvalResult {
    let params = params.as_list().unwrap_or_default();
    let names = params
        .iter()
        .map(|param| match &param.kind {
            ValueKind::Ident(name) => Ok(Name::clone(name)),
            _ => Err(invalid_parameter(param.type_of()).with_span(param.origin)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::function(FunctionValue::closure(
        names,
        body.clone(),
        env.clone(),
    )))
}

/// `(def name expr)`: bind in the current scope and return the identifier.
fn define(interp: &mut Interpreter, name: &Value, value: &Value, env: &Environment) -> EvalResult {
    let Some(ident) = name.as_ident() else {
        return Err(
            type_mismatch(1, "def", TypeSet::IDENTIFIER, name.type_of())
                .with_span(site(name, value.origin)),
        );
    };
    let bound = interp.eval(value, env)?;
    if let ValueKind::Function(func) = &bound.kind {
        func.name_if_anonymous(Name::clone(ident));
    }
    env.set(Name::clone(ident), bound);
    Ok(name.clone())
}

/// `(if cond then [else])`: only `nil` and `false` are falsy. A missing
/// else branch yields `nil`.
fn eval_if(
    interp: &mut Interpreter,
    cond: &Value,
    then: &Value,
    otherwise: Option<&Value>,
    env: &Environment,
) -> EvalResult {
    if interp.eval(cond, env)?.is_truthy() {
        interp.eval(then, env)
    } else {
        match otherwise {
            Some(expr) => interp.eval(expr, env),
            None => Ok(Value::nil()),
        }
    }
}
