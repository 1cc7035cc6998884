use crate::{
    ast::Stmt,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

/// How a statement finished.
///
/// `return` is normal control flow, not a failure, so it travels in this
/// dedicated carrier rather than the error channel. It unwinds nested `if`
/// bodies but is consumed at the function-call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `return` was executed; the enclosing call yields this value.
    Return(Value),
}

impl Context<'_> {
    /// Executes a single statement.
    ///
    /// - `if` evaluates its condition, which must be a boolean, and runs
    ///   its body when true. There is no else branch.
    /// - `return` evaluates its value and starts a non-local exit.
    /// - A call statement runs the callee for its side effects and discards
    ///   any result.
    ///
    /// # Returns
    /// The resulting control [`Flow`].
    pub fn exec_stmt(&mut self, statement: &Stmt) -> EvalResult<Flow> {
        match statement {
            Stmt::If { condition, body, .. } => match self.eval_value(condition)? {
                Value::Bool(true) => self.exec_block(body),
                Value::Bool(false) => Ok(Flow::Normal),
                other => Err(RuntimeError::TypeMismatch { context:  "if condition",
                                                          expected: "bool",
                                                          actual:   other.kind(),
                                                          position: condition.position(), }),
            },
            Stmt::Return { value, .. } => Ok(Flow::Return(self.eval_value(value)?)),
            Stmt::Call(call) => {
                self.call(call)?;
                Ok(Flow::Normal)
            },
        }
    }

    /// Executes the statements of a block in order.
    ///
    /// A `return` short-circuits the remaining statements and propagates
    /// upward.
    pub fn exec_block(&mut self, statements: &[Stmt]) -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.exec_stmt(statement)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }
}
