use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::FnDef,
    interpreter::{evaluator::builtin::BuiltinDef, value::Value},
};

/// What a name can resolve to.
#[derive(Debug, Clone)]
pub enum Binding {
    /// A plain runtime value, such as a bound parameter.
    Value(Value),
    /// A user-defined function. Shared so that recursive calls do not clone
    /// the body.
    Function(Rc<FnDef>),
    /// A native built-in function.
    Builtin(&'static BuiltinDef),
}

/// A chain of binding tables used for name resolution.
///
/// The chain is rooted at a global scope that lives for the lifetime of the
/// evaluator and holds the built-ins plus all top-level function
/// definitions. Every function call pushes an activation frame and pops it
/// on exit. The language has no closures and no nested blocks with their
/// own bindings, so every frame's parent is the root itself: a name either
/// lives in the current activation or at top level, never in some caller's
/// frame.
///
/// # Examples
/// ```
/// use minic::interpreter::{
///     scope::{Binding, ScopeChain},
///     value::Value,
/// };
///
/// let mut scopes = ScopeChain::new();
/// scopes.define("x".to_string(), Binding::Value(Value::Int(1)));
/// scopes.push_child();
/// scopes.define("x".to_string(), Binding::Value(Value::Int(2)));
///
/// // The activation shadows the root binding.
/// assert!(matches!(scopes.lookup("x"), Some(Binding::Value(Value::Int(2)))));
///
/// // A nested activation sees the root, not the frame in between.
/// scopes.push_child();
/// assert!(matches!(scopes.lookup("x"), Some(Binding::Value(Value::Int(1)))));
///
/// scopes.pop();
/// scopes.pop();
/// assert!(matches!(scopes.lookup("x"), Some(Binding::Value(Value::Int(1)))));
/// ```
#[derive(Debug)]
pub struct ScopeChain {
    scopes: Vec<HashMap<String, Binding>>,
}

#[allow(clippy::new_without_default)]
impl ScopeChain {
    /// Creates a chain consisting of just the root scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }

    /// Pushes a fresh scope whose parent is the current one and makes it
    /// current.
    pub fn push_child(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Restores the parent of the current scope as current.
    ///
    /// Callers must never pop the root; doing so is a programmer error.
    pub fn pop(&mut self) {
        debug_assert!(self.scopes.len() > 1, "popped the root scope");
        self.scopes.pop();
    }

    /// Searches the current scope and then the root scope, returning the
    /// first binding with the given name.
    ///
    /// Frames in between belong to other active calls and are never
    /// consulted; a callee cannot see its caller's parameter.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.scopes
            .last()
            .and_then(|scope| scope.get(name))
            .or_else(|| self.scopes.first().and_then(|scope| scope.get(name)))
    }

    /// Inserts or overwrites a binding in the current scope only; ancestor
    /// bindings are shadowed, never written through.
    pub fn define(&mut self, name: String, binding: Binding) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, binding);
        }
    }
}
