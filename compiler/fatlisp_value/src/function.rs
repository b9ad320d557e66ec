//! Callable values: functions and special forms.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{ArgTypes, Environment, EvalResult, Name, Signature, TypeSet, Value};

/// Interpreter services available to native functions.
pub trait EvalContext {
    /// Write text to the configured output.
    fn print(&self, text: &str);
}

/// Native function pointer. Arguments are already evaluated and checked
/// against the function's [`Signature`].
pub type NativeFn = fn(&[Value], &dyn EvalContext) -> EvalResult;

/// User-defined function created by `fn`.
pub struct Closure {
    pub params: Vec<Name>,
    pub body: Value,
    /// Scope active where `fn` was evaluated.
    pub env: Environment,
}

pub enum FunctionBody {
    Native(NativeFn),
    Closure(Closure),
}

struct FunctionData {
    signature: Signature,
    /// Set by the first `def` that binds an anonymous closure; shown in
    /// errors and rendering.
    display_name: RefCell<Option<Name>>,
    body: FunctionBody,
}

/// A callable function value.
///
/// Clones share one allocation and equality is identity: two functions are
/// equal only if they are the same function.
#[derive(Clone)]
pub struct FunctionValue(Rc<FunctionData>);

impl FunctionValue {
    pub fn native(signature: Signature, func: NativeFn) -> Self {
        FunctionValue(Rc::new(FunctionData {
            signature,
            display_name: RefCell::new(None),
            body: FunctionBody::Native(func),
        }))
    }

    /// Closure whose arity equals its parameter count.
    pub fn closure(params: Vec<Name>, body: Value, env: Environment) -> Self {
        let signature = Signature::exact("fn", params.len());
        FunctionValue(Rc::new(FunctionData {
            signature,
            display_name: RefCell::new(None),
            body: FunctionBody::Closure(Closure { params, body, env }),
        }))
    }

    #[inline]
    pub fn signature(&self) -> &Signature {
        &self.0.signature
    }

    #[inline]
    pub fn body(&self) -> &FunctionBody {
        &self.0.body
    }

    /// Display name if one was assigned, else the signature name.
    pub fn name(&self) -> Name {
        match &*self.0.display_name.borrow() {
            Some(name) => Rc::clone(name),
            None => Rc::from(self.0.signature.name),
        }
    }

    /// Give an anonymous closure its display name. Natives keep their
    /// signature name and an already named closure keeps its first name, so
    /// aliases never rename the function they share. Returns whether the
    /// name was taken.
    pub fn name_if_anonymous(&self, name: Name) -> bool {
        if matches!(self.0.body, FunctionBody::Native(_)) {
            return false;
        }
        let mut slot = self.0.display_name.borrow_mut();
        if slot.is_some() {
            return false;
        }
        *slot = Some(name);
        true
    }

    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Closures capture scopes that may contain this function again.
        write!(f, "<fn {}>", self.name())
    }
}

/// The fixed set of special forms.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SpecialFormKind {
    Quote,
    Fn,
    Def,
    If,
}

const FN_ARGS: &[(usize, TypeSet)] = &[(0, TypeSet::LIST)];
const DEF_ARGS: &[(usize, TypeSet)] = &[(0, TypeSet::IDENTIFIER)];

impl SpecialFormKind {
    pub const ALL: [SpecialFormKind; 4] = [
        SpecialFormKind::Quote,
        SpecialFormKind::Fn,
        SpecialFormKind::Def,
        SpecialFormKind::If,
    ];

    pub fn name(self) -> &'static str {
        self.signature().name
    }

    /// Contract checked against the raw, unevaluated arguments.
    pub fn signature(self) -> Signature {
        match self {
            SpecialFormKind::Quote => Signature::exact("quote", 1),
            SpecialFormKind::Fn => Signature::exact("fn", 2).requiring(ArgTypes::At(FN_ARGS)),
            SpecialFormKind::Def => Signature::exact("def", 2).requiring(ArgTypes::At(DEF_ARGS)),
            SpecialFormKind::If => Signature::range("if", 2, 3),
        }
    }
}

/// A special form value: receives its arguments unevaluated.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SpecialForm {
    pub kind: SpecialFormKind,
}

impl SpecialForm {
    pub fn new(kind: SpecialFormKind) -> Self {
        SpecialForm { kind }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn signature(&self) -> Signature {
        self.kind.signature()
    }
}
