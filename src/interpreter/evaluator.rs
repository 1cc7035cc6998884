/// Built-in native functions.
///
/// Defines the static table of built-ins registered into the root scope,
/// currently just `print`.
pub mod builtin;

/// Function-call evaluation.
///
/// Handles user-defined and built-in calls, argument checking, scope
/// push/pop, and the recursion-depth guard.
pub mod call;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the program driver that registers
/// top-level definitions and invokes `main`, and shared evaluation helpers.
pub mod core;

/// Expression evaluation.
///
/// Evaluates literals, variable references and binary operations, and
/// forwards calls to the call machinery.
pub mod expr;

/// Statement execution.
///
/// Executes `if`, `return` and call statements, carrying the non-local exit
/// of `return` up to the enclosing call boundary.
pub mod statement;
