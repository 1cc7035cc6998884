/// Core parsing logic for programs and function definitions.
///
/// Contains the parser entry point and the `ParseResult` alias shared by the
/// other parser modules.
pub mod core;

/// Expression parsing.
///
/// Handles atoms, function-call tails and binary operator tails, using one
/// token of lookahead to pick between them.
pub mod expr;

/// Statement parsing.
///
/// Implements `if` statements, `return` statements, call statements, and
/// brace-delimited statement blocks.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides the shared expect/identifier/type-name helpers used by every
/// production.
pub mod utils;
