use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
///
/// Each variant names the operator token that was applied to operands of the
/// wrong type, so the error can be reported at the operator's line.
pub enum RuntimeError {
    /// A unary operator required a number.
    OperandMustBeNumber {
        /// The offending operator.
        operator: Token,
    },
    /// A binary operator required two numbers.
    OperandsMustBeNumbers {
        /// The offending operator.
        operator: Token,
    },
    /// `+` was applied to anything other than two numbers or two strings.
    OperandsMustBeNumbersOrStrings {
        /// The offending operator.
        operator: Token,
    },
}

impl RuntimeError {
    /// Returns the human readable message, without position information.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::OperandMustBeNumber { .. } => "Operand must be a number.",
            Self::OperandsMustBeNumbers { .. } => "Operands must be numbers.",
            Self::OperandsMustBeNumbersOrStrings { .. } => {
                "Operands must be two numbers or two strings."
            },
        }
    }

    /// Returns the operator token the error is attributed to.
    #[must_use]
    pub const fn operator(&self) -> &Token {
        match self {
            Self::OperandMustBeNumber { operator }
            | Self::OperandsMustBeNumbers { operator }
            | Self::OperandsMustBeNumbersOrStrings { operator } => operator,
        }
    }

    /// Returns the source line of the offending operator.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.operator().line
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n[line {}]", self.message(), self.line())
    }
}

impl std::error::Error for RuntimeError {}
