use std::fmt;

use crate::interpreter::lexer::Position;

/// A complete parsed program: an ordered sequence of function definitions.
///
/// Definition order is significant only for name registration; later
/// definitions of the same name overwrite earlier ones. Execution always
/// starts at the function named `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The top-level function definitions, in source order.
    pub functions: Vec<FnDef>,
}

/// A user-defined function.
///
/// Functions declare a return type, take at most one typed parameter and
/// contain an ordered list of body statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnDef {
    /// The declared return type.
    pub return_type: TypeName,
    /// The function name.
    pub name:        String,
    /// The declared parameter, if any. Parameter type and name always travel
    /// together.
    pub param:       Option<Param>,
    /// The body statements, executed in order.
    pub body:        Vec<Stmt>,
    /// Position of the function name in the source.
    pub position:    Position,
}

/// A declared function parameter: a type name and a binding name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// The declared parameter type.
    pub type_name: TypeName,
    /// The name the argument is bound to inside the body.
    pub name:      String,
}

/// A statement inside a function or `if` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// An `if` statement. There is no `else` branch in the grammar.
    If {
        /// The condition; must evaluate to a boolean.
        condition: Expr,
        /// Statements executed when the condition is true.
        body:      Vec<Stmt>,
        /// Position of the `if` keyword.
        position:  Position,
    },
    /// A `return` statement carrying its result value.
    Return {
        /// The expression whose value the enclosing call yields.
        value:    Expr,
        /// Position of the `return` keyword.
        position: Position,
    },
    /// A function call executed for its side effects; any result is
    /// discarded.
    Call(FnCall),
}

/// A function call: a callee name and at most one argument expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnCall {
    /// The name of the callee.
    pub name:     String,
    /// The argument expression, if one was supplied.
    pub arg:      Option<Box<Expr>>,
    /// Position of the callee name.
    pub position: Position,
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value:    i64,
        /// Position of the literal.
        position: Position,
    },
    /// A reference to a name bound in some enclosing scope.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Position of the name.
        position: Position,
    },
    /// A function call used for its result.
    Call(FnCall),
    /// A binary operation.
    ///
    /// The left operand is always an [`Atom`]: the grammar only allows a
    /// number or an identifier there, while the right side may nest
    /// arbitrarily. The type makes a compound left side unrepresentable.
    Binary {
        /// Left operand (always atomic).
        left:     Atom,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Expr>,
        /// Position of the left operand.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position of `self`.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Number { position, .. }
            | Self::Variable { position, .. }
            | Self::Binary { position, .. } => *position,
            Self::Call(call) => call.position,
        }
    }
}

/// An atomic expression: the only forms allowed on the left of a binary
/// operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    /// An integer literal.
    Number(i64),
    /// A variable reference.
    Variable(String),
}

/// A binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Multiplication (`*`), yielding an integer.
    Mul,
    /// Subtraction (`-`), yielding an integer.
    Sub,
    /// Less than (`<`), yielding a boolean.
    Less,
}

/// A declared type name.
///
/// The language has exactly three: `int`, `bool` and `void`. Unknown names
/// are rejected at parse time, so the evaluator matches exhaustively.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TypeName {
    /// A 64-bit signed integer.
    Int,
    /// A boolean, produced only by the `<` operator.
    Bool,
    /// No value; valid only as a return type in practice.
    Void,
}

impl TypeName {
    /// Resolves an identifier to a type name, or `None` if it is not one of
    /// the three known types.
    #[must_use]
    pub fn from_ident(name: &str) -> Option<Self> {
        match name {
            "int" => Some(Self::Int),
            "bool" => Some(Self::Bool),
            "void" => Some(Self::Void),
            _ => None,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Void => "void",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Mul => "*",
            Self::Sub => "-",
            Self::Less => "<",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Call(call) => write!(f, "{call}"),
            Self::Binary { left, op, right, .. } => write!(f, "{left} {op} {right}"),
        }
    }
}

impl fmt::Display for FnCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arg {
            Some(arg) => write!(f, "{}({arg})", self.name),
            None => write!(f, "{}()", self.name),
        }
    }
}

impl Stmt {
    /// Writes `self` at the given indentation depth (four spaces per level).
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "    ".repeat(depth);
        match self {
            Self::If { condition, body, .. } => {
                writeln!(f, "{pad}if ({condition}) {{")?;
                for stmt in body {
                    stmt.fmt_indented(f, depth + 1)?;
                }
                writeln!(f, "{pad}}}")
            },
            Self::Return { value, .. } => writeln!(f, "{pad}return {value};"),
            Self::Call(call) => writeln!(f, "{pad}{call};"),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl fmt::Display for FnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => {
                writeln!(f, "{} {}({} {}) {{", self.return_type, self.name, param.type_name,
                         param.name)?;
            },
            None => writeln!(f, "{} {}() {{", self.return_type, self.name)?,
        }
        for stmt in &self.body {
            stmt.fmt_indented(f, 1)?;
        }
        writeln!(f, "}}")
    }
}

impl fmt::Display for Program {
    /// Pretty-prints the program as parseable source: feeding the rendering
    /// back through the parser yields a structurally identical program.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, function) in self.functions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{function}")?;
        }
        Ok(())
    }
}
