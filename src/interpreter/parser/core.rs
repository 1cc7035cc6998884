use std::iter::Peekable;

use crate::{
    ast::{FnDef, Param, Program},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            statement::parse_block,
            utils::{expect_token, parse_identifier, parse_type_name},
        },
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// Grammar: `program := fn_def+`
///
/// Parsing is total over well-formed inputs and fails fast on the first
/// malformed token; the grammar needs no backtracking, since one token of
/// lookahead determines every production.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Examples
/// ```
/// use minic::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("void main() { print(1); }").unwrap();
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(program.functions.len(), 1);
/// assert_eq!(program.functions[0].name, "main");
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut functions = Vec::new();
    while tokens.peek().is_some() {
        functions.push(parse_fn_def(tokens)?);
    }

    if functions.is_empty() {
        return Err(ParseError::UnexpectedEndOfInput { context:  "program",
                                                      expected: "a function definition", });
    }

    Ok(Program { functions })
}

/// Parses a single function definition.
///
/// Grammar: `fn_def := type ident '(' (type ident)? ')' '{' stmt* '}'`
///
/// The parameter type and name always appear together; a bare `()` declares
/// a function of no parameters. Type names are resolved to the closed
/// [`crate::ast::TypeName`] set here, so the evaluator never sees a free
/// type string.
fn parse_fn_def<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FnDef>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let return_type = parse_type_name(tokens, "function definition")?;
    let (name, position) = parse_identifier(tokens, "function definition")?;
    expect_token(tokens, &Token::LParen, "function definition", "'('")?;

    let param = match tokens.peek() {
        Some((Token::RParen, _)) => None,
        _ => {
            let type_name = parse_type_name(tokens, "parameter")?;
            let (param_name, _) = parse_identifier(tokens, "parameter")?;
            Some(Param { type_name,
                         name: param_name, })
        },
    };

    expect_token(tokens, &Token::RParen, "function definition", "')'")?;
    expect_token(tokens, &Token::LBrace, "function definition", "'{'")?;

    let body = parse_block(tokens, "function definition")?;
    Ok(FnDef { return_type,
               name,
               param,
               body,
               position })
}
