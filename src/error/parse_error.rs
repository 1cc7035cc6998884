use crate::interpreter::lexer::Position;

#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token the current production does not allow.
    UnexpectedToken {
        /// The production being parsed (e.g. "function definition").
        context:  &'static str,
        /// What the production expected at this point.
        expected: &'static str,
        /// The token actually found.
        found:    String,
        /// The source position of the found token.
        position: Position,
    },
    /// Reached the end of input while a production still needed tokens.
    UnexpectedEndOfInput {
        /// The production being parsed.
        context:  &'static str,
        /// What the production expected next.
        expected: &'static str,
    },
    /// An expression nests more deeply than the parser accepts.
    ExpressionTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// The source position where the limit was exceeded.
        position: Position,
    },
    /// A declared type is not one of `int`, `bool` or `void`.
    UnknownTypeName {
        /// The identifier used as a type.
        name:     String,
        /// The source position of the identifier.
        position: Position,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { context,
                                    expected,
                                    found,
                                    position, } => {
                write!(f, "Error at {position}: In {context}: expected {expected}, found {found}.")
            },
            Self::UnexpectedEndOfInput { context, expected } => {
                write!(f, "Error: In {context}: expected {expected}, but the input ended.")
            },
            Self::ExpressionTooDeep { limit, position } => {
                write!(f,
                       "Error at {position}: Expression nesting exceeds the limit of {limit}.")
            },
            Self::UnknownTypeName { name, position } => {
                write!(f, "Error at {position}: Unknown type name '{name}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
