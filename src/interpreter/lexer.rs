use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// A location in the source text. Lines and columns start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// The line number.
    pub line:   usize,
    /// The column number within the line.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and column pair.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `if`
    #[token("if")]
    If,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens: a maximal run of ASCII letters, such as `main` or
    /// `fact`. The reserved words `if` and `return` take precedence.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`: a maximal run of ASCII digits.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `<`
    #[token("<")]
    Less,
    /// `*`
    #[token("*")]
    Star,
    /// `-`
    #[token("-")]
    Minus,

    /// Newlines advance the position bookkeeping and are then skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::If => write!(f, "'if'"),
            Self::Return => write!(f, "'return'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Number(value) => write!(f, "number '{value}'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Semicolon => write!(f, "';'"),
            Self::Less => write!(f, "'<'"),
            Self::Star => write!(f, "'*'"),
            Self::Minus => write!(f, "'-'"),
            Self::NewLine | Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset of the start of that
/// line, from which token columns are computed.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset at which the current line begins.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digit run does not fit an `i64`, which surfaces
/// as a lexer error for that span.
fn parse_integer(lex: &mut logos::Lexer<'_, Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Converts a source buffer into a sequence of positioned tokens.
///
/// Whitespace is skipped before each token. The token vector ends at end of
/// input; exhaustion of the vector is the eof signal consumed by the parser.
///
/// # Errors
/// Returns a [`LexError`] for the first character that starts no token, or
/// for a numeric literal that does not fit a 64-bit integer.
///
/// # Examples
/// ```
/// use minic::interpreter::lexer::{tokenize, Token};
///
/// let tokens = tokenize("return 1;").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds, vec![Token::Return, Token::Number(1), Token::Semicolon]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = Position::new(lexer.extras.line,
                                     lexer.span().start - lexer.extras.line_start + 1);
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let slice = lexer.slice();
                if slice.starts_with(|c: char| c.is_ascii_digit()) {
                    return Err(LexError::NumberOutOfRange { literal: slice.to_string(),
                                                            position });
                }
                return Err(LexError::UnexpectedCharacter { found: slice.to_string(),
                                                           position });
            },
        }
    }

    Ok(tokens)
}
