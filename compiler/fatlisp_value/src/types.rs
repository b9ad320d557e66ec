//! Runtime types and callable signatures.

use std::fmt;

use bitflags::bitflags;
use fatlisp_ir::Span;

use crate::{arity_mismatch, type_mismatch, EvalError, Value};

/// Type tag of a [`Value`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Type {
    Int,
    Float,
    String,
    Identifier,
    List,
    Nil,
    Bool,
    Fn,
    SpecialForm,
}

impl Type {
    pub const ALL: [Type; 9] = [
        Type::Int,
        Type::Float,
        Type::String,
        Type::Identifier,
        Type::List,
        Type::Nil,
        Type::Bool,
        Type::Fn,
        Type::SpecialForm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Type::Int => "Int",
            Type::Float => "Float",
            Type::String => "String",
            Type::Identifier => "Identifier",
            Type::List => "List",
            Type::Nil => "Nil",
            Type::Bool => "Bool",
            Type::Fn => "Fn",
            Type::SpecialForm => "SpecialForm",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Set of accepted types for an argument position.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub struct TypeSet: u16 {
        const INT = 1 << 0;
        const FLOAT = 1 << 1;
        const STRING = 1 << 2;
        const IDENTIFIER = 1 << 3;
        const LIST = 1 << 4;
        const NIL = 1 << 5;
        const BOOL = 1 << 6;
        const FN = 1 << 7;
        const SPECIAL_FORM = 1 << 8;

        const NUMBER = Self::INT.bits() | Self::FLOAT.bits();
    }
}

impl From<Type> for TypeSet {
    fn from(ty: Type) -> Self {
        match ty {
            Type::Int => TypeSet::INT,
            Type::Float => TypeSet::FLOAT,
            Type::String => TypeSet::STRING,
            Type::Identifier => TypeSet::IDENTIFIER,
            Type::List => TypeSet::LIST,
            Type::Nil => TypeSet::NIL,
            Type::Bool => TypeSet::BOOL,
            Type::Fn => TypeSet::FN,
            Type::SpecialForm => TypeSet::SPECIAL_FORM,
        }
    }
}

impl TypeSet {
    #[inline]
    pub fn accepts(self, ty: Type) -> bool {
        self.contains(TypeSet::from(ty))
    }
}

/// Renders as `Int or Float`.
impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for ty in Type::ALL.into_iter().filter(|ty| self.accepts(*ty)) {
            if !first {
                f.write_str(" or ")?;
            }
            first = false;
            f.write_str(ty.name())?;
        }
        Ok(())
    }
}

/// Which argument types a callable requires.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgTypes {
    /// No constraint.
    Any,
    /// Every argument must be in the set.
    All(TypeSet),
    /// Listed (0-based) positions must be in their set; others are free.
    At(&'static [(usize, TypeSet)]),
}

/// Arity and type contract shared by functions and special forms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Signature {
    pub name: &'static str,
    pub min_args: usize,
    /// `None` means unbounded.
    pub max_args: Option<usize>,
    pub required: ArgTypes,
}

impl Signature {
    /// Exactly `n` arguments of any type.
    pub const fn exact(name: &'static str, n: usize) -> Self {
        Signature {
            name,
            min_args: n,
            max_args: Some(n),
            required: ArgTypes::Any,
        }
    }

    pub const fn range(name: &'static str, min_args: usize, max_args: usize) -> Self {
        Signature {
            name,
            min_args,
            max_args: Some(max_args),
            required: ArgTypes::Any,
        }
    }

    /// At least `min_args` arguments, no upper bound.
    pub const fn variadic(name: &'static str, min_args: usize) -> Self {
        Signature {
            name,
            min_args,
            max_args: None,
            required: ArgTypes::Any,
        }
    }

    #[must_use]
    pub const fn requiring(mut self, required: ArgTypes) -> Self {
        self.required = required;
        self
    }

    pub fn accepts_count(&self, count: usize) -> bool {
        count >= self.min_args
            && match self.max_args {
                Some(max) => count <= max,
                None => true,
            }
    }

    /// Validate `args` against this signature, reporting under `name`.
    ///
    /// Arity errors point at `call_site`. Type errors point at the offending
    /// argument, falling back to `call_site` when it has no origin.
    pub fn check(&self, name: &str, args: &[Value], call_site: Span) -> Result<(), EvalError> {
        if !self.accepts_count(args.len()) {
            return Err(
                arity_mismatch(name, self.min_args, self.max_args, args.len()).with_span(call_site),
            );
        }
        let mismatch = |index: usize, arg: &Value, expected: TypeSet| {
            let span = if arg.origin.is_dummy() {
                call_site
            } else {
                arg.origin
            };
            type_mismatch(index + 1, name, expected, arg.type_of()).with_span(span)
        };
        match self.required {
            ArgTypes::Any => Ok(()),
            ArgTypes::All(expected) => {
                match args.iter().enumerate().find(|(_, arg)| !expected.accepts(arg.type_of())) {
                    Some((index, arg)) => Err(mismatch(index, arg, expected)),
                    None => Ok(()),
                }
            }
            ArgTypes::At(positions) => {
                for &(index, expected) in positions {
                    if let Some(arg) = args.get(index) {
                        if !expected.accepts(arg.type_of()) {
                            return Err(mismatch(index, arg, expected));
                        }
                    }
                }
                Ok(())
            }
        }
    }
}
