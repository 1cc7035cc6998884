use std::iter::Peekable;

use crate::{
    ast::{Atom, BinaryOperator, Expr, FnCall},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{core::ParseResult, utils::expect_token},
    },
};

/// Maximum depth of nested expressions the parser accepts.
///
/// Binary tails and call arguments recurse on the native stack, both here
/// and later in the evaluator; a cap at parse time bounds both, the same
/// way [`MAX_CALL_DEPTH`] bounds language-level calls.
///
/// [`MAX_CALL_DEPTH`]: crate::interpreter::evaluator::core::MAX_CALL_DEPTH
pub const MAX_EXPR_DEPTH: usize = 64;

/// Parses a full expression.
///
/// Grammar:
/// ```text
/// expr        := (number | ident) [ fn_call_tail | bin_op_tail ]
/// bin_op_tail := ('*' | '-' | '<') expr
/// ```
///
/// After consuming the leading atom, one token of lookahead decides what
/// follows: `(` starts a call tail (only legal after an identifier), an
/// operator starts a binary tail with the atom as the left operand, and
/// anything else ends the expression. Tokens carry no whitespace, so the
/// lookahead cannot be fooled by spacing.
///
/// The left operand of a binary expression is always atomic; only the right
/// side may nest, so `a - b - c` groups as `a - (b - c)`. Nesting deeper
/// than [`MAX_EXPR_DEPTH`] is rejected.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_expression_at(tokens, 0)
}

fn parse_expression_at<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let (atom, position) = match tokens.next() {
        Some((Token::Number(value), position)) => (Atom::Number(*value), *position),
        Some((Token::Identifier(name), position)) => (Atom::Variable(name.clone()), *position),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { context:  "expression",
                                                     expected: "a number or an identifier",
                                                     found:    tok.to_string(),
                                                     position: *position, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { context:  "expression",
                                                          expected: "a number or an identifier", });
        },
    };

    if depth >= MAX_EXPR_DEPTH {
        return Err(ParseError::ExpressionTooDeep { limit: MAX_EXPR_DEPTH,
                                                   position });
    }

    match tokens.peek() {
        Some((Token::LParen, _)) => match atom {
            Atom::Variable(name) => {
                Ok(Expr::Call(parse_call_tail_at(tokens, name, position, depth)?))
            },
            // A call tail is only legal after an identifier; the number
            // stands alone and the enclosing production rejects the '('.
            Atom::Number(value) => Ok(Expr::Number { value, position }),
        },
        Some((Token::Star, _)) => {
            parse_binary_tail(tokens, atom, BinaryOperator::Mul, position, depth)
        },
        Some((Token::Minus, _)) => {
            parse_binary_tail(tokens, atom, BinaryOperator::Sub, position, depth)
        },
        Some((Token::Less, _)) => {
            parse_binary_tail(tokens, atom, BinaryOperator::Less, position, depth)
        },
        _ => Ok(match atom {
            Atom::Number(value) => Expr::Number { value, position },
            Atom::Variable(name) => Expr::Variable { name, position },
        }),
    }
}

/// Parses the parenthesized tail of a function call, the callee name having
/// already been consumed.
///
/// Grammar: `fn_call := ident '(' expr? ')'`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `name`: The callee name.
/// - `position`: Position of the callee name.
///
/// # Returns
/// The parsed call node.
pub fn parse_call_tail<'a, I>(tokens: &mut Peekable<I>,
                              name: String,
                              position: Position)
                              -> ParseResult<FnCall>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_call_tail_at(tokens, name, position, 0)
}

fn parse_call_tail_at<'a, I>(tokens: &mut Peekable<I>,
                             name: String,
                             position: Position,
                             depth: usize)
                             -> ParseResult<FnCall>
    where I: Iterator<Item = &'a (Token, Position)>
{
    expect_token(tokens, &Token::LParen, "function call", "'('")?;

    let arg = match tokens.peek() {
        Some((Token::RParen, _)) => None,
        _ => Some(Box::new(parse_expression_at(tokens, depth + 1)?)),
    };

    expect_token(tokens, &Token::RParen, "function call", "')'")?;

    Ok(FnCall { name,
                arg,
                position })
}

/// Parses the operator tail of a binary expression with the already
/// consumed atom as the left operand.
fn parse_binary_tail<'a, I>(tokens: &mut Peekable<I>,
                            left: Atom,
                            op: BinaryOperator,
                            position: Position,
                            depth: usize)
                            -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    tokens.next();

    let right = parse_expression_at(tokens, depth + 1)?;
    Ok(Expr::Binary { left,
                      op,
                      right: Box::new(right),
                      position })
}
