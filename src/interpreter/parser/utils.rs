use std::iter::Peekable;

use crate::{
    ast::TypeName,
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::core::ParseResult,
    },
};

/// Consumes the next token and checks that it equals `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the token to check.
/// - `expected`: The exact token the production requires here.
/// - `context`: Name of the production, for diagnostics.
/// - `description`: How the expected token reads in an error message.
///
/// # Errors
/// Returns a `ParseError` naming the production if the next token differs
/// or the input ends.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          context: &'static str,
                                                          description: &'static str)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((tok, _)) if tok == expected => Ok(()),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { context,
                                                                   expected: description,
                                                                   found: tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput { context,
                                                       expected: description, }),
    }
}

/// Parses a plain identifier and returns its name together with its
/// position.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              context: &'static str)
                                                              -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Identifier(name), position)) => Ok((name.clone(), *position)),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { context,
                                                                   expected: "an identifier",
                                                                   found: tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput { context,
                                                       expected: "an identifier", }),
    }
}

/// Parses an identifier and resolves it to one of the known type names.
///
/// # Errors
/// Returns `ParseError::UnknownTypeName` for an identifier that is not
/// `int`, `bool` or `void`, and the usual errors for a non-identifier.
pub(in crate::interpreter::parser) fn parse_type_name<'a, I>(tokens: &mut Peekable<I>,
                                                             context: &'static str)
                                                             -> ParseResult<TypeName>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let (name, position) = parse_identifier(tokens, context)?;
    TypeName::from_ident(&name).ok_or(ParseError::UnknownTypeName { name, position })
}
