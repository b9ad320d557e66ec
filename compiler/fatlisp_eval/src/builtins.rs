//! Built-in functions and the global environment builder.

mod arithmetic;
mod compare;

use fatlisp_value::{
    ArgTypes, EvalContext, EvalResult, Environment, FunctionValue, Name, NativeFn, Signature,
    SpecialForm, SpecialFormKind, TypeSet, Value,
};

const NUMERIC: ArgTypes = ArgTypes::All(TypeSet::NUMBER);

/// Bind every built-in function and special form in `env`.
///
/// Called once per interpreter, so independent interpreters never share
/// bindings. The operator aliases `+ - * /` are bound to the same function
/// values as their named forms, so `(equal + add)` is `true`.
pub fn prelude(env: &Environment) {
    let natives: [(Signature, NativeFn, Option<&str>); 7] = [
        (Signature::exact("add", 2).requiring(NUMERIC), arithmetic::add, Some("+")),
        (Signature::exact("subtract", 2).requiring(NUMERIC), arithmetic::subtract, Some("-")),
        (Signature::exact("multiply", 2).requiring(NUMERIC), arithmetic::multiply, Some("*")),
        (Signature::exact("divide", 2).requiring(NUMERIC), arithmetic::divide, Some("/")),
        (Signature::exact("compare", 2), compare::compare, None),
        (Signature::exact("equal", 2), compare::equal, None),
        (Signature::variadic("puts", 0), puts, None),
    ];
    for (signature, func, alias) in natives {
        let value = Value::function(FunctionValue::native(signature, func));
        if let Some(alias) = alias {
            env.set(Name::from(alias), value.clone());
        }
        env.set(Name::from(signature.name), value);
    }

    for kind in SpecialFormKind::ALL {
        env.set(
            Name::from(kind.name()),
            Value::special_form(SpecialForm::new(kind)),
        );
    }
}

/// `(puts a b ...)`: each value followed by a space, then a newline.
fn puts(args: &[Value], ctx: &dyn EvalContext) -> EvalResult {
    let mut line = String::new();
    for value in args {
        line.push_str(&value.display_value());
        line.push(' ');
    }
    line.push('\n');
    ctx.print(&line);
    Ok(Value::nil())
}
