//! # minic
//!
//! minic is a tree-walking interpreter for a miniature C-style language
//! supporting typed function definitions, a single optional `int` parameter,
//! `if` statements, `return`, function calls, and the binary operators `*`,
//! `-` and `<`. A program is a sequence of function definitions; execution
//! starts with an implicit call to the zero-argument function `main`, and the
//! built-in `print` is its only observable effect.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_program};

/// Defines the structure of parsed code.
///
/// This module declares the node types that represent the syntactic structure
/// of source code as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines function, statement and expression types for all language
///   constructs.
/// - Attaches source positions to AST nodes for error reporting.
/// - Pretty-prints every node back to parseable source text.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting a
/// program. Every error is terminal: the pipeline stops at the first failure
/// and reports a single diagnostic identifying the phase and location.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Implements the standard error traits for uniform reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and scope management to provide a complete runtime for
/// minic programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, scope chain, evaluator.
/// - Provides the types backing the public `run`/`run_with` entry points.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a minic program, printing to standard output.
///
/// The source is lexed, parsed and executed in a fresh [`Context`]; execution
/// consists of an implicit call to the zero-argument function `main`.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails, including when no
/// function named `main` is defined.
///
/// # Examples
/// ```
/// use minic::run;
///
/// let source = "void main() { print(7); }";
/// assert!(run(source).is_ok());
///
/// // 'missing' is never defined, so the call fails.
/// let source = "void main() { missing(); }";
/// assert!(run(source).is_err());
/// ```
pub fn run(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = Context::new();
    run_with(source, &mut context)
}

/// Runs a minic program inside an existing evaluation context.
///
/// This is the testable entry point: a [`Context`] built with
/// [`Context::with_output`] captures everything the program prints.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use minic::{interpreter::evaluator::core::Context, run_with};
///
/// let mut output = Vec::new();
/// let mut context = Context::with_output(Box::new(&mut output));
/// run_with("void main() { print(2 * 3); }", &mut context).unwrap();
/// drop(context);
///
/// assert_eq!(output, b"6\n");
/// ```
pub fn run_with(source: &str, context: &mut Context<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;

    context.run_program(&program)?;
    Ok(())
}
