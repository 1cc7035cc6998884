use crate::{
    ast::TypeName,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Position,
        value::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluation context, the already type-checked
/// argument value, and the call-site position. It returns an optional
/// result wrapped in `EvalResult`.
type BuiltinCallback = fn(&mut Context<'_>, Option<Value>, Position) -> EvalResult<Option<Value>>;

/// Metadata for one native built-in function.
#[derive(Debug)]
pub struct BuiltinDef {
    /// The name the builtin is bound to in the root scope.
    pub name:  &'static str,
    /// The required parameter type, or `None` for a zero-argument builtin.
    pub param: Option<TypeName>,
    callback:  BuiltinCallback,
}

impl BuiltinDef {
    /// Invokes the native callback.
    ///
    /// The call machinery has already checked the argument against
    /// [`BuiltinDef::param`] when this runs.
    pub(crate) fn invoke(&self,
                         context: &mut Context<'_>,
                         arg: Option<Value>,
                         position: Position)
                         -> EvalResult<Option<Value>> {
        (self.callback)(context, arg, position)
    }
}

/// The built-in functions registered into every root scope.
pub static BUILTINS: &[BuiltinDef] = &[BuiltinDef { name:     "print",
                                                    param:    Some(TypeName::Int),
                                                    callback: print, }];

/// Prints an integer as one line of program output.
///
/// This is the language's entire observable effect: each invocation writes
/// the decimal value of its argument followed by a newline to the context's
/// output sink. Returns no value.
fn print(context: &mut Context<'_>,
         arg: Option<Value>,
         position: Position)
         -> EvalResult<Option<Value>> {
    match arg {
        Some(Value::Int(n)) => {
            context.write_line(n)?;
            Ok(None)
        },
        other => Err(RuntimeError::TypeMismatch { context:  "print",
                                                  expected: "int",
                                                  actual:   other.map_or("no argument", |v| v.kind()),
                                                  position, }),
    }
}
