/// Lexing errors.
///
/// Defines the errors that can occur while converting source text into
/// tokens, such as characters that start no token or numeric literals that
/// do not fit the native integer type.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the errors that can occur while building the syntax tree from the
/// token stream: unexpected tokens, premature end of input, and unknown type
/// names.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unbound names, argument mismatches, type errors and arithmetic overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
