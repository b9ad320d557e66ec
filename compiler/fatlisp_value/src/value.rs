//! Runtime values.
//!
//! [`ValueKind`] is a true sum type: every payload is reached through an
//! exhaustive `match`, so a tag that disagrees with its payload cannot be
//! represented.
//!
//! Strings and lists live behind [`Heap`] and are only built through the
//! factory methods on [`Value`]:
//!
//! ```
//! use fatlisp_value::Value;
//!
//! let list = Value::list(vec![Value::ident("add"), Value::int(1), Value::int(2)]);
//! assert_eq!(list.to_string(), "(add 1 2)");
//! ```

use std::fmt;
use std::rc::Rc;

use fatlisp_ir::Span;

use crate::{FunctionValue, Heap, SpecialForm, Type};

/// Identifier name. Cheap to clone, shared between the tree and scopes.
pub type Name = Rc<str>;

/// A runtime value together with the source span it was produced from.
///
/// `origin` only positions diagnostics. It never takes part in equality.
#[derive(Clone)]
pub struct Value {
    pub kind: ValueKind,
    pub origin: Span,
}

/// Runtime value variants.
#[derive(Clone)]
pub enum ValueKind {
    Int(i64),
    Float(f64),
    /// String contents without the surrounding quotes.
    Str(Heap<str>),
    Ident(Name),
    List(Heap<[Value]>),
    Nil,
    Bool(bool),
    Function(FunctionValue),
    SpecialForm(SpecialForm),
}

impl Value {
    /// Wrap a kind with no source origin.
    #[inline]
    pub fn new(kind: ValueKind) -> Self {
        Value {
            kind,
            origin: Span::DUMMY,
        }
    }

    #[inline]
    pub fn int(n: i64) -> Self {
        Value::new(ValueKind::Int(n))
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::new(ValueKind::Float(f))
    }

    pub fn string(s: &str) -> Self {
        Value::new(ValueKind::Str(Heap::from_rc(Rc::from(s))))
    }

    pub fn ident(name: impl Into<Name>) -> Self {
        Value::new(ValueKind::Ident(name.into()))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::new(ValueKind::List(Heap::from_rc(Rc::from(items))))
    }

    #[inline]
    pub fn nil() -> Self {
        Value::new(ValueKind::Nil)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::new(ValueKind::Bool(b))
    }

    pub fn function(f: FunctionValue) -> Self {
        Value::new(ValueKind::Function(f))
    }

    pub fn special_form(form: SpecialForm) -> Self {
        Value::new(ValueKind::SpecialForm(form))
    }

    /// Replace the origin span.
    #[inline]
    #[must_use]
    pub fn with_origin(mut self, origin: Span) -> Self {
        self.origin = origin;
        self
    }

    /// Set the origin only if the value has none yet.
    #[inline]
    #[must_use]
    pub fn or_origin(mut self, origin: Span) -> Self {
        if self.origin.is_dummy() {
            self.origin = origin;
        }
        self
    }

    pub fn type_of(&self) -> Type {
        match self.kind {
            ValueKind::Int(_) => Type::Int,
            ValueKind::Float(_) => Type::Float,
            ValueKind::Str(_) => Type::String,
            ValueKind::Ident(_) => Type::Identifier,
            ValueKind::List(_) => Type::List,
            ValueKind::Nil => Type::Nil,
            ValueKind::Bool(_) => Type::Bool,
            ValueKind::Function(_) => Type::Fn,
            ValueKind::SpecialForm(_) => Type::SpecialForm,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match &self.kind {
            ValueKind::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_ident(&self) -> Option<&Name> {
        match &self.kind {
            ValueKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match &self.kind {
            ValueKind::Function(f) => Some(f),
            _ => None,
        }
    }

    /// False only for `nil` and `false`. Zero, `""` and `()` are truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self.kind, ValueKind::Nil | ValueKind::Bool(false))
    }

    /// Rendering used by `puts`: like `Display`, but a top-level string
    /// prints without quotes.
    pub fn display_value(&self) -> String {
        match &self.kind {
            ValueKind::Str(s) => s.to_string(),
            _ => self.to_string(),
        }
    }
}

impl PartialEq for ValueKind {
    /// Structural equality. Functions compare by identity, floats by IEEE
    /// `==` (so `NaN != NaN`), and different variants are never equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ValueKind::Int(a), ValueKind::Int(b)) => a == b,
            (ValueKind::Float(a), ValueKind::Float(b)) => a == b,
            (ValueKind::Str(a), ValueKind::Str(b)) => a == b,
            (ValueKind::Ident(a), ValueKind::Ident(b)) => a == b,
            (ValueKind::List(a), ValueKind::List(b)) => a == b,
            (ValueKind::Nil, ValueKind::Nil) => true,
            (ValueKind::Bool(a), ValueKind::Bool(b)) => a == b,
            (ValueKind::Function(a), ValueKind::Function(b)) => FunctionValue::ptr_eq(a, b),
            (ValueKind::SpecialForm(a), ValueKind::SpecialForm(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Int(n) => write!(f, "{n}"),
            ValueKind::Float(x) => write_float(f, *x),
            ValueKind::Str(s) => write!(f, "\"{}\"", &**s),
            ValueKind::Ident(name) => f.write_str(name),
            ValueKind::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            ValueKind::Nil => f.write_str("nil"),
            ValueKind::Bool(b) => write!(f, "{b}"),
            ValueKind::Function(func) => write!(f, "<fn {}>", func.name()),
            ValueKind::SpecialForm(form) => write!(f, "<special form {}>", form.name()),
        }
    }
}

/// Plain decimal, never exponent form, and always with a fractional part so
/// the text lexes back as the same Float. `NaN`, `inf` and `-inf` have no
/// literal syntax and render as those words.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let text = x.to_string();
    if x.is_finite() && !text.contains('.') {
        write!(f, "{text}.0")
    } else {
        f.write_str(&text)
    }
}

impl fmt::Debug for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Int(n) => write!(f, "Int({n})"),
            ValueKind::Float(x) => write!(f, "Float({x:?})"),
            ValueKind::Str(s) => write!(f, "Str({:?})", &**s),
            ValueKind::Ident(name) => write!(f, "Ident({name})"),
            ValueKind::List(items) => f.debug_list().entries(items.iter()).finish(),
            ValueKind::Nil => f.write_str("Nil"),
            ValueKind::Bool(b) => write!(f, "Bool({b})"),
            ValueKind::Function(func) => write!(f, "{func:?}"),
            ValueKind::SpecialForm(form) => write!(f, "{form:?}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.kind, f)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::bool(b)
    }
}
