//! The tree-walking interpreter.

use fatlisp_ir::Span;
use fatlisp_value::{
    not_a_function, recursion_limit, EvalContext, EvalError, EvalResult, Environment,
    FunctionBody, FunctionValue, Name, Value, ValueKind,
};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{ensure_sufficient_stack, prelude, special_forms, EvalConfig};

/// Results of evaluating a program's top-level forms.
///
/// Evaluation halts at the first failing form: `results` holds the values
/// of the forms before it and `error` the failure.
#[derive(Debug, Default)]
pub struct ProgramOutput {
    pub results: Vec<Value>,
    pub error: Option<EvalError>,
}

impl ProgramOutput {
    pub fn into_result(self) -> Result<Vec<Value>, EvalError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.results),
        }
    }
}

/// Evaluator state: the global scope seeded with the built-ins, the
/// configuration and the current call depth.
///
/// Bindings made with `def` at top level persist across
/// [`eval_program`](Self::eval_program) calls on the same interpreter.
pub struct Interpreter {
    global: Environment,
    config: EvalConfig,
    depth: usize,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        let global = Environment::new();
        prelude(&global);
        Interpreter {
            global,
            config,
            depth: 0,
        }
    }

    pub fn global(&self) -> &Environment {
        &self.global
    }

    /// Bind `name` in the global scope.
    pub fn define(&self, name: &str, value: Value) {
        self.global.set(Name::from(name), value);
    }

    /// Evaluate each element of `root` (the parser's root list) in order
    /// in the global scope, stopping at the first error. A non-list root is
    /// evaluated as a single form.
    pub fn eval_program(&mut self, root: &Value) -> ProgramOutput {
        let forms = root.as_list().unwrap_or(std::slice::from_ref(root));
        let global = self.global.clone();
        let mut results = Vec::with_capacity(forms.len());
        for form in forms {
            self.depth = 0;
            match self.eval(form, &global) {
                Ok(value) => {
                    debug!(result = %value, "top-level form");
                    results.push(value);
                }
                Err(error) => {
                    debug!(%error, span = ?error.span, "top-level form failed");
                    return ProgramOutput {
                        results,
                        error: Some(error),
                    };
                }
            }
        }
        ProgramOutput {
            results,
            error: None,
        }
    }

    /// Evaluate one expression in `env`.
    ///
    /// Identifiers resolve through the scope chain, lists are applications,
    /// and every other value evaluates to itself.
    pub fn eval(&mut self, value: &Value, env: &Environment) -> EvalResult {
        match &value.kind {
            ValueKind::Ident(name) => env.resolve(name, value.origin),
            ValueKind::List(items) => {
                ensure_sufficient_stack(|| self.eval_list(items, value.origin, env))
            }
            _ => Ok(value.clone()),
        }
    }

    fn eval_list(&mut self, items: &[Value], origin: Span, env: &Environment) -> EvalResult {
        let Some((head, rest)) = items.split_first() else {
            return Err(not_a_function(&Value::list(Vec::new())).with_span(origin));
        };
        let callee = self.eval(head, env)?;
        let result = match &callee.kind {
            ValueKind::Function(func) => {
                let args = rest
                    .iter()
                    .map(|arg| self.eval(arg, env))
                    .collect::<Result<SmallVec<[Value; 4]>, _>>()?;
                self.apply(func, &args, origin)
            }
            ValueKind::SpecialForm(form) => {
                form.signature().check(form.name(), rest, origin)?;
                trace!(form = form.name(), "special form");
                special_forms::apply(self, form.kind, rest, env, origin)
            }
            _ => Err(not_a_function(&callee).with_span(site(head, origin))),
        }?;
        Ok(result.or_origin(origin))
    }

    /// Call `func` with already evaluated `args`.
    ///
    /// The arguments are checked against the function's signature first.
    /// A closure body runs in a fresh scope whose parent is the scope the
    /// closure was created in. Errors raised without a location are placed
    /// at `call_site`.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %func.name()))]
    pub fn apply(&mut self, func: &FunctionValue, args: &[Value], call_site: Span) -> EvalResult {
        func.signature().check(&func.name(), args, call_site)?;
        if let Some(limit) = self.config.max_call_depth {
            if self.depth >= limit {
                return Err(recursion_limit(limit).with_span(call_site));
            }
        }

        self.depth += 1;
        let result = match func.body() {
            FunctionBody::Native(native) => native(args, &*self),
            FunctionBody::Closure(closure) => {
                let env = Environment::for_call(&closure.env, &closure.params, args);
                self.eval(&closure.body, &env)
            }
        };
        self.depth -= 1;

        result.map_err(|error| error.or_span(call_site))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl EvalContext for Interpreter {
    fn print(&self, text: &str) {
        self.config.print.print(text);
    }
}

impl Drop for Interpreter {
    /// Closures stored in the global scope keep that scope alive; clearing
    /// it breaks the cycle.
    fn drop(&mut self) {
        self.global.clear();
    }
}

/// Span of `value`, or `fallback` for values built outside the parser.
#[inline]
pub(crate) fn site(value: &Value, fallback: Span) -> Span {
    if value.origin.is_dummy() {
        fallback
    } else {
        value.origin
    }
}
