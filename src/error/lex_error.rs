use crate::interpreter::lexer::Position;

#[derive(Debug)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Encountered a character that starts no token.
    UnexpectedCharacter {
        /// The offending input slice.
        found:    String,
        /// Where the character appears in the source.
        position: Position,
    },
    /// A numeric literal does not fit a 64-bit integer.
    NumberOutOfRange {
        /// The digit run as written.
        literal:  String,
        /// Where the literal appears in the source.
        position: Position,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, position } => {
                write!(f, "Error at {position}: Unexpected character '{found}'.")
            },
            Self::NumberOutOfRange { literal, position } => {
                write!(f, "Error at {position}: Numeric literal '{literal}' is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
