use crate::{
    ast::{Atom, BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Position,
        scope::Binding,
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates an expression.
    ///
    /// Number literals and binary operations always produce a value;
    /// variable references produce the bound value; calls produce whatever
    /// the callee returns, which is `None` for a function that falls
    /// through without `return`.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for a
    /// void call.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Number { value, .. } => Ok(Some(Value::Int(*value))),
            Expr::Variable { name, position } => self.eval_variable(name, *position).map(Some),
            Expr::Call(call) => self.call(call),
            Expr::Binary { left,
                           op,
                           right,
                           position, } => {
                self.eval_binary(left, *op, right, *position).map(Some)
            },
        }
    }

    /// Looks up a variable by name.
    ///
    /// The binding must be a plain value; a name bound to a function cannot
    /// be used in value position.
    fn eval_variable(&self, name: &str, position: Position) -> EvalResult<Value> {
        match self.scopes.lookup(name) {
            Some(Binding::Value(value)) => Ok(*value),
            Some(Binding::Function(_) | Binding::Builtin(_)) => {
                Err(RuntimeError::TypeMismatch { context: "expression",
                                                 expected: "a value",
                                                 actual: "a function",
                                                 position })
            },
            None => Err(RuntimeError::UnboundName { name: name.to_string(),
                                                    position }),
        }
    }

    /// Evaluates the atomic left operand of a binary expression.
    ///
    /// Both operand positions of `*`, `-` and `<` require integers; a
    /// boolean can never be an operand.
    fn eval_atom(&self, atom: &Atom, position: Position) -> EvalResult<i64> {
        match atom {
            Atom::Number(value) => Ok(*value),
            Atom::Variable(name) => match self.eval_variable(name, position)? {
                Value::Int(n) => Ok(n),
                other => Err(RuntimeError::TypeMismatch { context: "binary expression",
                                                          expected: "int",
                                                          actual: other.kind(),
                                                          position }),
            },
        }
    }

    /// Evaluates a binary operation.
    ///
    /// The left atom is evaluated first, then the right expression.
    /// Arithmetic is checked: `i64` overflow is an error, not a wrap.
    fn eval_binary(&mut self,
                   left: &Atom,
                   op: BinaryOperator,
                   right: &Expr,
                   position: Position)
                   -> EvalResult<Value> {
        let lhs = self.eval_atom(left, position)?;
        let rhs = match self.eval_value(right)? {
            Value::Int(n) => n,
            other => {
                return Err(RuntimeError::TypeMismatch { context:  "binary expression",
                                                        expected: "int",
                                                        actual:   other.kind(),
                                                        position: right.position(), });
            },
        };

        match op {
            BinaryOperator::Less => Ok(Value::Bool(lhs < rhs)),
            BinaryOperator::Mul => lhs.checked_mul(rhs)
                                      .map(Value::Int)
                                      .ok_or(RuntimeError::Overflow { position }),
            BinaryOperator::Sub => lhs.checked_sub(rhs)
                                      .map(Value::Int)
                                      .ok_or(RuntimeError::Overflow { position }),
        }
    }
}
