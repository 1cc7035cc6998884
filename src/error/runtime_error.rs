use crate::{ast::TypeName, interpreter::lexer::Position};

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A name is not bound in any enclosing scope. Also raised when the
    /// entry function `main` is missing.
    UnboundName {
        /// The name that failed to resolve.
        name:     String,
        /// The source position of the reference.
        position: Position,
    },
    /// A call resolved to a plain value instead of a function.
    NotCallable {
        /// The name that was called.
        name:     String,
        /// The source position of the call.
        position: Position,
    },
    /// Argument presence or declared type does not match the call site.
    ArgumentMismatch {
        /// The callee name.
        function: String,
        /// The declared parameter type, or `None` for no parameter.
        expected: Option<TypeName>,
        /// The type of the supplied argument, or `None` when none was given.
        actual:   Option<TypeName>,
        /// The source position of the call.
        position: Position,
    },
    /// An operand has the wrong value kind.
    TypeMismatch {
        /// Where the mismatch happened (e.g. "if condition").
        context:  &'static str,
        /// The kind that was required.
        expected: &'static str,
        /// The kind actually found.
        actual:   &'static str,
        /// The source position of the offending expression.
        position: Position,
    },
    /// An expression was used for its value but produced none, such as a
    /// call to a function that falls through without `return`.
    MissingValue {
        /// The source position of the expression.
        position: Position,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source position of the operation.
        position: Position,
    },
    /// The call depth limit was exceeded; almost always unbounded recursion.
    RecursionLimit {
        /// The configured depth limit.
        limit:    usize,
        /// The source position of the call that exceeded it.
        position: Position,
    },
    /// Writing interpreter output failed.
    Output {
        /// Description of the underlying I/O failure.
        message: String,
    },
}

/// Renders an optional declared type the way call diagnostics phrase it.
fn describe(ty: Option<TypeName>) -> String {
    ty.map_or_else(|| "no argument".to_string(), |t| format!("an argument of type '{t}'"))
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundName { name, position } => {
                write!(f, "Error at {position}: Unbound name '{name}'.")
            },
            Self::NotCallable { name, position } => {
                write!(f, "Error at {position}: '{name}' is not callable.")
            },
            Self::ArgumentMismatch { function,
                                     expected,
                                     actual,
                                     position, } => {
                write!(f,
                       "Error at {position}: Call to '{function}' expected {}, but got {}.",
                       describe(*expected),
                       describe(*actual))
            },
            Self::TypeMismatch { context,
                                 expected,
                                 actual,
                                 position, } => {
                write!(f, "Error at {position}: In {context}: expected {expected}, found {actual}.")
            },
            Self::MissingValue { position } => {
                write!(f, "Error at {position}: Expression produced no value.")
            },
            Self::Overflow { position } => {
                write!(f,
                       "Error at {position}: Integer overflow while trying to compute result.")
            },
            Self::RecursionLimit { limit, position } => {
                write!(f, "Error at {position}: Recursion limit of {limit} calls exceeded.")
            },
            Self::Output { message } => {
                write!(f, "Error: Failed to write program output: {message}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
