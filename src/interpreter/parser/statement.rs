use std::iter::Peekable;

use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            core::ParseResult,
            expr::{parse_call_tail, parse_expression},
            utils::expect_token,
        },
    },
};

/// Parses a single statement.
///
/// Grammar: `stmt := if_st | return_st | fn_call ';'`
///
/// One token of lookahead picks the production: `if` and `return` are
/// keywords, and an identifier can only begin a call statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.peek() {
        Some((Token::If, position)) => {
            let position = *position;
            tokens.next();
            parse_if(tokens, position)
        },
        Some((Token::Return, position)) => {
            let position = *position;
            tokens.next();

            let value = parse_expression(tokens)?;
            expect_token(tokens, &Token::Semicolon, "return statement", "';'")?;
            Ok(Stmt::Return { value, position })
        },
        Some((Token::Identifier(name), position)) => {
            let (name, position) = (name.clone(), *position);
            tokens.next();

            let call = parse_call_tail(tokens, name, position)?;
            expect_token(tokens, &Token::Semicolon, "call statement", "';'")?;
            Ok(Stmt::Call(call))
        },
        Some((tok, position)) => {
            Err(ParseError::UnexpectedToken { context:  "statement",
                                              expected: "'if', 'return' or a function call",
                                              found:    tok.to_string(),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { context:  "statement",
                                                       expected:
                                                           "'if', 'return' or a function call", }),
    }
}

/// Parses a brace-delimited statement block, the opening `{` having already
/// been consumed.
///
/// Grammar: `block := stmt* '}'`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first statement or `}`.
/// - `context`: Name of the enclosing production, for diagnostics.
///
/// # Returns
/// The statements of the block, in order.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          context: &'static str)
                          -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                return Ok(statements);
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => {
                return Err(ParseError::UnexpectedEndOfInput { context,
                                                              expected: "a statement or '}'", });
            },
        }
    }
}

/// Parses an `if` statement, the `if` keyword having already been consumed.
///
/// Grammar: `if_st := 'if' '(' expr ')' '{' stmt* '}'`
///
/// There is no `else` branch in the grammar.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Position)>
{
    expect_token(tokens, &Token::LParen, "if statement", "'('")?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "if statement", "')'")?;
    expect_token(tokens, &Token::LBrace, "if statement", "'{'")?;

    let body = parse_block(tokens, "if statement")?;
    Ok(Stmt::If { condition,
                  body,
                  position })
}
