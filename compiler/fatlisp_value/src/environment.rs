//! Lexical scope chain.
//!
//! Each [`Environment`] is a handle to one scope; scopes point at their
//! parent, never at their children, so the chain itself is acyclic. Cycles
//! can only form through closures stored in a scope they captured, which is
//! why the interpreter clears its global scope on drop.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use fatlisp_ir::Span;

use crate::{unresolved_identifier, EvalResult, Name, Value};

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// Wraps `Rc<RefCell<T>>` so all scope allocations go through
/// [`LocalScope::new`].
#[repr(transparent)]
pub(crate) struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope containing bindings.
#[derive(Default)]
pub(crate) struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<Environment>,
}

/// Handle to a scope in the chain. Clones share the scope.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A root scope with no parent.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::default()))
    }

    /// A fresh empty scope whose parent is `self`.
    pub fn child(&self) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            parent: Some(self.clone()),
        }))
    }

    /// Scope for one function call: parent is the function's defining
    /// scope, and each parameter is bound to the argument at the same
    /// position. Callers check the arity first; extra names or values are
    /// ignored.
    pub fn for_call(parent: &Environment, params: &[Name], args: &[Value]) -> Self {
        let env = parent.child();
        {
            let mut scope = env.0.borrow_mut();
            for (param, arg) in params.iter().zip(args) {
                scope.bindings.insert(Rc::clone(param), arg.clone());
            }
        }
        env
    }

    /// Nearest binding of `name`, walking outward through the parents.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.0.borrow();
                if let Some(value) = scope.bindings.get(name) {
                    return Some(value.clone());
                }
                scope.parent.clone()
            };
            current = parent?;
        }
    }

    /// Like [`get`](Self::get), but fails with an unresolved-identifier
    /// error at `origin`. The returned value takes `origin` as its own so
    /// later errors about it point at this use site.
    pub fn resolve(&self, name: &str, origin: Span) -> EvalResult {
        match self.get(name) {
            Some(value) => Ok(value.with_origin(origin)),
            None => Err(unresolved_identifier(name).with_span(origin)),
        }
    }

    /// Bind `name` in this scope only, replacing any existing binding here.
    /// Parent scopes are never written.
    pub fn set(&self, name: Name, value: Value) {
        self.0.borrow_mut().bindings.insert(name, value);
    }

    /// Whether `name` is bound in this scope itself.
    pub fn contains_local(&self, name: &str) -> bool {
        self.0.borrow().bindings.contains_key(name)
    }

    pub fn parent(&self) -> Option<Environment> {
        self.0.borrow().parent.clone()
    }

    /// Number of scopes from here to the root, counting this one.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.parent();
        while let Some(env) = current {
            depth += 1;
            current = env.parent();
        }
        depth
    }

    /// Drop all bindings of this scope.
    pub fn clear(&self) {
        // Take the map out first: dropping values can drop closures whose
        // captured scope is this one.
        let bindings = std::mem::take(&mut self.0.borrow_mut().bindings);
        drop(bindings);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.0.borrow().bindings.len())
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests;
