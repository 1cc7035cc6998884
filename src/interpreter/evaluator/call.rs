use std::rc::Rc;

use crate::{
    ast::{FnCall, FnDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            builtin::BuiltinDef,
            core::{Context, EvalResult, MAX_CALL_DEPTH},
            statement::Flow,
        },
        scope::Binding,
        value::Value,
    },
};

/// The two callable binding kinds, resolved before the call proper begins.
enum Callee {
    User(Rc<FnDef>),
    Builtin(&'static BuiltinDef),
}

impl Context<'_> {
    /// Evaluates a function call.
    ///
    /// The callee name is resolved through the scope chain; the argument,
    /// if any, is evaluated in the caller's scope and checked against the
    /// callee's declared parameter (presence and exact type). A child scope
    /// is pushed for the activation, the parameter bound into it, and the
    /// body executed; a `return` exiting the body becomes the call's
    /// result, falling through yields none. Built-ins invoke their native
    /// callback instead.
    ///
    /// The scope is popped on every exit path, errors included.
    ///
    /// # Parameters
    /// - `call`: The call node to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` when the callee returned a value, `None` for a void
    /// completion.
    pub fn call(&mut self, call: &FnCall) -> EvalResult<Option<Value>> {
        let callee = match self.scopes.lookup(&call.name) {
            Some(Binding::Function(def)) => Callee::User(Rc::clone(def)),
            Some(Binding::Builtin(def)) => Callee::Builtin(*def),
            Some(Binding::Value(_)) => {
                return Err(RuntimeError::NotCallable { name:     call.name.clone(),
                                                       position: call.position, });
            },
            None => {
                return Err(RuntimeError::UnboundName { name:     call.name.clone(),
                                                       position: call.position, });
            },
        };

        // The argument is evaluated in the caller's scope, before the
        // callee's scope exists.
        let arg = match &call.arg {
            Some(expr) => Some(self.eval_value(expr)?),
            None => None,
        };

        let declared = match &callee {
            Callee::User(def) => def.param.as_ref().map(|p| p.type_name),
            Callee::Builtin(def) => def.param,
        };
        let compatible = match (declared, arg) {
            (None, None) => true,
            (Some(ty), Some(value)) => value.matches(ty),
            _ => false,
        };
        if !compatible {
            return Err(RuntimeError::ArgumentMismatch { function: call.name.clone(),
                                                        expected: declared,
                                                        actual: arg.map(|v| v.type_name()),
                                                        position: call.position, });
        }

        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { limit:    MAX_CALL_DEPTH,
                                                      position: call.position, });
        }

        self.depth += 1;
        self.scopes.push_child();

        let result = match &callee {
            Callee::User(def) => {
                if let (Some(param), Some(value)) = (&def.param, arg) {
                    self.scopes
                        .define(param.name.clone(), Binding::Value(value));
                }
                self.exec_block(&def.body).map(|flow| match flow {
                                              Flow::Return(value) => Some(value),
                                              Flow::Normal => None,
                                          })
            },
            Callee::Builtin(def) => def.invoke(self, arg, call.position),
        };

        self.scopes.pop();
        self.depth -= 1;
        result
    }
}
