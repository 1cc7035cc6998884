/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// dispatches user-defined and built-in function calls, and manages the
/// scope chain. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Implements `return` as a non-local exit to the call boundary.
/// - Reports runtime errors such as unbound names or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to meaningful language elements such as numbers,
/// identifiers, symbols, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Handles numeric literals, identifiers and the fixed symbol set.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the program.
/// It is a recursive-descent parser with one token of lookahead and no
/// backtracking.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (functions, statements,
///   expressions).
/// - Validates correct grammar, reporting errors with the production name
///   and source position.
pub mod parser;
/// The scope module implements name resolution.
///
/// Scopes form a chain rooted at a global scope holding the built-ins and
/// all top-level function definitions; every function call pushes a child
/// scope for its parameter binding and pops it on exit. Each child is
/// parented to the root, so lookups never see another call's bindings.
///
/// # Responsibilities
/// - Defines the `Binding` kinds a name can resolve to.
/// - Implements shadowing lookup from the current scope to the root.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution. Values are
/// small and copied freely; the language has exactly integers and booleans.
///
/// # Responsibilities
/// - Defines the `Value` enum and its conversions.
/// - Checks values against declared type names at call boundaries.
pub mod value;
