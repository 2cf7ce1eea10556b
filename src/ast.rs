use crate::{
    interpreter::{
        lexer::{Token, TokenKind},
        value::core::Value,
    },
    util::num::format_number,
};

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// The tree is strict: every node exclusively owns its children. Operator
/// nodes keep both the typed operator and the token it was parsed from, so
/// runtime errors can name the exact operator and its line.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or nil).
    Literal {
        /// The constant value.
        value: Value,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
    },
    /// A prefix operation (`!x` or `-x`).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operator token from the source.
        token:   Token,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation (arithmetic, comparison or equality).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// The operator token from the source.
        token: Token,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Creates a literal node.
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// Creates a grouping node around `expr`.
    #[must_use]
    pub fn grouping(expr: Self) -> Self {
        Self::Grouping { expr: Box::new(expr) }
    }

    /// Creates a unary node whose operator token sits on `line`.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self, line: usize) -> Self {
        Self::Unary { op,
                      token: op.token(line),
                      operand: Box::new(operand) }
    }

    /// Creates a binary node whose operator token sits on `line`.
    ///
    /// ## Example
    /// ```
    /// use treelox::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::literal(1.0),
    ///                         BinaryOperator::Add,
    ///                         Expr::binary(Expr::literal(2.0),
    ///                                      BinaryOperator::Mul,
    ///                                      Expr::literal(3.0),
    ///                                      1),
    ///                         1);
    ///
    /// assert_eq!(expr.to_string(), "(+ 1 (* 2 3))");
    /// assert_eq!(expr.to_source(), "(1 + (2 * 3))");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, line: usize) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       token: op.token(line),
                       right: Box::new(right) }
    }

    /// Renders the expression as source text that parses back to an
    /// equivalent tree.
    ///
    /// Every operator node is wrapped in parentheses, so the output does not
    /// depend on precedence. Negative number literals print as a negation.
    /// Strings containing `"` and non-finite numbers have no source form and
    /// render as text the parser rejects.
    #[must_use]
    pub fn to_source(&self) -> String {
        Source(self).to_string()
    }
}

/// Formats the expression in fully parenthesized prefix form, e.g.
/// `(* (- 123) (group 45.67))`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Grouping { expr } => write!(f, "(group {expr})"),
            Self::Unary { op, operand, .. } => write!(f, "({op} {operand})"),
            Self::Binary { left, op, right, .. } => write!(f, "({op} {left} {right})"),
        }
    }
}

/// Display adapter behind [`Expr::to_source`].
struct Source<'a>(&'a Expr);

impl std::fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Expr::Literal { value } => match value {
                Value::Number(n) if n.is_sign_negative() => write!(f, "(-{})", format_number(-n)),
                Value::String(s) => write!(f, "\"{s}\""),
                _ => write!(f, "{value}"),
            },
            Expr::Grouping { expr } => write!(f, "({})", Source(expr)),
            Expr::Unary { op, operand, .. } => write!(f, "({op}{})", Source(operand)),
            Expr::Binary { left, op, right, .. } => {
                write!(f, "({} {op} {})", Source(left), Source(right))
            },
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns the token kind this operator is written with.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Equal => TokenKind::EqualEqual,
            Self::NotEqual => TokenKind::BangEqual,
            Self::Greater => TokenKind::Greater,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::Less => TokenKind::Less,
            Self::LessEqual => TokenKind::LessEqual,
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Star,
            Self::Div => TokenKind::Slash,
        }
    }

    /// Synthesizes the operator's token on `line`.
    #[must_use]
    pub fn token(self, line: usize) -> Token {
        Token::new(self.token_kind(), self.to_string(), None, line)
    }
}

/// Represents a unary operator.
///
/// Unary operators include negation and logical NOT.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl UnaryOperator {
    /// Returns the token kind this operator is written with.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Negate => TokenKind::Minus,
            Self::Not => TokenKind::Bang,
        }
    }

    /// Synthesizes the operator's token on `line`.
    #[must_use]
    pub fn token(self, line: usize) -> Token {
        Token::new(self.token_kind(), self.to_string(), None, line)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Equal => "==",
            NotEqual => "!=",
            Greater => ">",
            GreaterEqual => ">=",
            Less => "<",
            LessEqual => "<=",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
