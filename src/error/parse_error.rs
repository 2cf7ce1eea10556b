use crate::interpreter::lexer::{Token, TokenKind};

/// Where in the token stream a parse error was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The parser ran out of tokens.
    End,
    /// The parser stopped at a token with the given lexeme.
    At(String),
}

impl Location {
    /// Returns the location of `token`; the EOF token maps to [`Location::End`].
    #[must_use]
    pub fn of(token: &Token) -> Self {
        match token.kind {
            TokenKind::Eof => Self::End,
            _ => Self::At(token.lexeme.clone()),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::End => write!(f, " at end"),
            Self::At(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A token that cannot start an expression was found where one was
    /// required.
    ExpectedExpression {
        /// Where the parser stopped.
        location: Location,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Where the parser stopped.
        location: Location,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        location: Location,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The expression nests deeper than the parser allows.
    NestingTooDeep {
        /// The token at which the nesting budget ran out.
        location: Location,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl ParseError {
    /// Returns the human readable message, without position information.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ExpectedExpression { .. } => "Expect expression.",
            Self::ExpectedClosingParen { .. } => "Expect ')' after expression.",
            Self::UnexpectedTrailingTokens { .. } => "Expect end of expression.",
            Self::NestingTooDeep { .. } => "Expression nesting is too deep.",
        }
    }

    /// Returns where the error was detected.
    #[must_use]
    pub const fn location(&self) -> &Location {
        match self {
            Self::ExpectedExpression { location, .. }
            | Self::ExpectedClosingParen { location, .. }
            | Self::UnexpectedTrailingTokens { location, .. }
            | Self::NestingTooDeep { location, .. } => location,
        }
    }

    /// Returns the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedExpression { line, .. }
            | Self::ExpectedClosingParen { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "[line {}] Error{}: {}",
               self.line(),
               self.location(),
               self.message())
    }
}

impl std::error::Error for ParseError {}
