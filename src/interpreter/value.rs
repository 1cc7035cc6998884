use std::fmt;

use crate::ast::TypeName;

/// Represents a runtime value in the interpreter.
///
/// Values are produced by literals, the `<` comparison and function calls.
/// They are small and copyable; nothing is shared mutably.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A boolean, produced by the `<` comparison. Used as the condition of
    /// `if` statements.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// The name of this value's kind, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
        }
    }

    /// The declared type this value satisfies.
    #[must_use]
    pub const fn type_name(&self) -> TypeName {
        match self {
            Self::Int(_) => TypeName::Int,
            Self::Bool(_) => TypeName::Bool,
        }
    }

    /// Tests whether this value matches a declared parameter type.
    ///
    /// No value matches `void`; there is no coercion between `int` and
    /// `bool`.
    #[must_use]
    pub const fn matches(&self, ty: TypeName) -> bool {
        matches!((self, ty),
                 (Self::Int(_), TypeName::Int) | (Self::Bool(_), TypeName::Bool))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
