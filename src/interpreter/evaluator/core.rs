use std::{
    io::{self, Write},
    rc::Rc,
};

use crate::{
    ast::{Expr, FnCall, Program},
    error::RuntimeError,
    interpreter::{
        evaluator::builtin::BUILTINS,
        lexer::Position,
        scope::{Binding, ScopeChain},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Maximum number of simultaneously active language-level calls.
///
/// The language has no loops, so only unbounded recursion can run away;
/// it is reported as a [`RuntimeError::RecursionLimit`] instead of
/// exhausting the native stack.
pub const MAX_CALL_DEPTH: usize = 1024;

/// Stores the runtime evaluation context.
///
/// This struct holds all interpreter state: the scope chain rooted at the
/// global scope, the output sink written by `print`, and the current call
/// depth. Nothing lives outside the context, so independent executions never
/// share state.
///
/// ## Usage
///
/// A context is created once per program run. [`Context::new`] writes to
/// standard output; [`Context::with_output`] accepts any sink, which is how
/// tests capture what a program prints.
pub struct Context<'out> {
    /// The scope chain; the root scope holds built-ins and top-level
    /// function definitions.
    pub(crate) scopes: ScopeChain,
    /// Number of language-level call activations currently on the stack.
    pub(crate) depth:  usize,
    output:            Box<dyn Write + 'out>,
}

#[allow(clippy::new_without_default)]
impl Context<'static> {
    /// Creates an evaluation context that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }
}

impl<'out> Context<'out> {
    /// Creates an evaluation context writing to the given sink.
    ///
    /// The root scope is pre-populated with the built-in functions.
    #[must_use]
    pub fn with_output(output: Box<dyn Write + 'out>) -> Self {
        let mut scopes = ScopeChain::new();
        for builtin in BUILTINS {
            scopes.define(builtin.name.to_string(), Binding::Builtin(builtin));
        }

        Self { scopes,
               depth: 0,
               output }
    }

    /// Executes a parsed program.
    ///
    /// Every top-level function definition is registered into the root
    /// scope (later definitions overwrite earlier ones), then a synthesized
    /// zero-argument call to `main` runs the program.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnboundName`] when no `main` is defined, and
    /// otherwise whatever error the program's execution raises.
    pub fn run_program(&mut self, program: &Program) -> EvalResult<()> {
        for def in &program.functions {
            self.scopes
                .define(def.name.clone(), Binding::Function(Rc::new(def.clone())));
        }

        // The entry call is synthesized, so point its diagnostics at the
        // start of the source.
        let entry = FnCall { name:     "main".to_string(),
                             arg:      None,
                             position: Position::new(1, 1), };
        self.call(&entry)?;
        Ok(())
    }

    /// Evaluates an expression that must produce a value.
    ///
    /// Calls to functions that fall through without `return` produce
    /// nothing; using such a call for its value is a
    /// [`RuntimeError::MissingValue`].
    pub(crate) fn eval_value(&mut self, expr: &Expr) -> EvalResult<Value> {
        self.eval_expr(expr)?
            .ok_or(RuntimeError::MissingValue { position: expr.position() })
    }

    /// Writes one line of program output containing a decimal integer.
    pub(crate) fn write_line(&mut self, value: i64) -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|e| RuntimeError::Output { message: e.to_string() })
    }
}
